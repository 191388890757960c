//! Order classification
//!
//! Fans out one catalog lookup per line item and aggregates the returned
//! vendor names into a dropship-or-not verdict.

use dropcheck_shared::{is_dropship_vendor, LineItem, OrderClassification, ResolvedCredential};
use futures::future::join_all;

use super::VendorClient;

/// Orchestrates concurrent per-line-item vendor lookups
#[derive(Clone)]
pub struct OrderClassifier {
    client: VendorClient,
}

impl OrderClassifier {
    pub fn new(client: VendorClient) -> Self {
        Self { client }
    }

    /// Classify an order.
    ///
    /// Every line item is looked up concurrently; a failed lookup
    /// contributes an empty vendor list and never affects its siblings.
    /// Vendor names aggregate in line-item order, then per-item response
    /// order. An order whose lookups all fail still classifies (to "no
    /// dropship vendors") rather than erroring.
    pub async fn classify(
        &self,
        line_items: &[LineItem],
        credential: &ResolvedCredential,
    ) -> OrderClassification {
        let lookups = line_items
            .iter()
            .map(|item| self.lookup_item(item, credential));
        let per_item_vendors = join_all(lookups).await;

        let vendor_names: Vec<String> = per_item_vendors.into_iter().flatten().collect();
        let contains_dropship_vendors = vendor_names.iter().any(|name| is_dropship_vendor(name));

        OrderClassification {
            vendor_names,
            contains_dropship_vendors,
        }
    }

    /// Single-item lookup with every failure absorbed to an empty list
    async fn lookup_item(&self, item: &LineItem, credential: &ResolvedCredential) -> Vec<String> {
        let Some(item_id) = item.item_id() else {
            tracing::warn!(tenant = %credential.tenant_id, "line item has no id; skipping vendor lookup");
            return Vec::new();
        };

        match self
            .client
            .fetch_vendor_data(&item_id, &credential.tenant_id, &credential.api_key)
            .await
        {
            Ok(vendor_names) => vendor_names,
            Err(e) => {
                tracing::warn!(
                    tenant = %credential.tenant_id,
                    item = %item_id,
                    "vendor lookup failed: {e}"
                );
                Vec::new()
            }
        }
    }
}
