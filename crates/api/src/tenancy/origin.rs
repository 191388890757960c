//! Cross-origin allow-list
//!
//! Storefront pages call the gateway from the browser, so every known
//! store origin must be allowed explicitly. The allow-list is built once
//! from the tenant directory; no wildcard or suffix matching.

use std::collections::HashSet;

use axum::http::HeaderValue;
use tower_http::cors::AllowOrigin;

use super::{TenantDirectory, STORE_DOMAIN_SUFFIX};

/// Exact-match origin allow-list derived from the store roster
#[derive(Debug, Clone, Default)]
pub struct OriginGuard {
    allowed: HashSet<String>,
}

impl OriginGuard {
    /// Build the allow-list: one synthesized platform origin per store
    /// subdomain, plus every custom hostname verbatim.
    pub fn from_directory(directory: &TenantDirectory) -> Self {
        let mut allowed = HashSet::new();
        for record in directory.records() {
            if let Some(subdomain) = record.subdomain.as_deref() {
                allowed.insert(format!("https://{}{}", subdomain, STORE_DOMAIN_SUFFIX));
            }
            if let Some(hostname) = record.custom_hostname.as_deref() {
                allowed.insert(hostname.to_string());
            }
        }
        Self { allowed }
    }

    /// Whether a request origin may make cross-origin calls.
    ///
    /// Requests without an Origin value (non-browser callers) always pass.
    pub fn is_allowed(&self, origin: Option<&str>) -> bool {
        match origin {
            None => true,
            Some(origin) => self.allowed.contains(origin),
        }
    }

    /// Adapt the guard into a `CorsLayer` origin predicate
    pub fn into_allow_origin(self) -> AllowOrigin {
        AllowOrigin::predicate(move |origin: &HeaderValue, _request_parts| {
            origin
                .to_str()
                .map(|origin| self.is_allowed(Some(origin)))
                .unwrap_or(false)
        })
    }
}
