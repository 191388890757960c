//! Catalog API client
//!
//! Fetches product vendor data for a single line item from a store's
//! catalog endpoint.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::tenancy::STORE_DOMAIN_SUFFIX;

/// Catalog API version the gateway speaks
const CATALOG_API_VERSION: &str = "v2.6.1";

/// Error type for catalog lookups.
///
/// Only transport-level failures (unreachable host, timeout, connection
/// reset) surface here; a non-success HTTP status is a valid negative
/// response, not an error.
#[derive(Debug, thiserror::Error)]
pub enum VendorClientError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ProductResponse {
    #[serde(default)]
    vendors: Vec<VendorEntry>,
}

#[derive(Debug, Deserialize)]
struct VendorEntry {
    #[serde(default)]
    name: String,
}

/// Client for per-store catalog endpoints
#[derive(Clone)]
pub struct VendorClient {
    http: Client,
    /// Overrides the per-tenant catalog base URL; tests point this at a
    /// local server.
    catalog_base: Option<String>,
}

impl VendorClient {
    /// Create a new catalog client
    #[allow(clippy::expect_used)] // HTTP client creation failure is a fatal system error
    pub fn new(timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            catalog_base: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_catalog_base(timeout: Duration, base: impl Into<String>) -> Self {
        let mut client = Self::new(timeout);
        client.catalog_base = Some(base.into());
        client
    }

    fn product_url(&self, line_item_id: &str, tenant_id: &str, api_key: &str) -> String {
        let base = match &self.catalog_base {
            Some(base) => base.clone(),
            None => format!("https://{}{}", tenant_id, STORE_DOMAIN_SUFFIX),
        };
        format!(
            "{}/api/{}/products/{}?token={}",
            base, CATALOG_API_VERSION, line_item_id, api_key
        )
    }

    /// Fetch the vendor names for one line item.
    ///
    /// A non-success status or an unparsable body yields an empty list;
    /// transport failures return an error for the caller to absorb.
    pub async fn fetch_vendor_data(
        &self,
        line_item_id: &str,
        tenant_id: &str,
        api_key: &str,
    ) -> Result<Vec<String>, VendorClientError> {
        let url = self.product_url(line_item_id, tenant_id, api_key);

        let response = self
            .http
            .get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, line_item_id, tenant_id, "catalog returned non-success status");
            return Ok(Vec::new());
        }

        let body = response.text().await?;
        let product: ProductResponse = match serde_json::from_str(&body) {
            Ok(product) => product,
            Err(e) => {
                tracing::debug!(line_item_id, tenant_id, "unparsable catalog response: {e}");
                return Ok(Vec::new());
            }
        };

        Ok(product.vendors.into_iter().map(|vendor| vendor.name).collect())
    }
}
