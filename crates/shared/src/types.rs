//! Common types used across Dropcheck

use serde::{Deserialize, Serialize};

// =============================================================================
// Dropship vendor roster
// =============================================================================

/// Vendors whose products ship directly from a third party rather than the
/// store's own warehouse. Matching is exact and case-sensitive. The source
/// roster carries both `Larlu` and `LarLu` spellings; keep both.
pub const DROPSHIP_VENDORS: &[&str] = &[
    "Cawley",
    "Visions",
    "Moslow",
    "Larlu",
    "LarLu",
    "Edwards Garment",
    "Cannon Hill",
    "Power Sales",
    "Winning Edge",
];

/// Check whether a vendor name is on the dropship roster
pub fn is_dropship_vendor(name: &str) -> bool {
    DROPSHIP_VENDORS.contains(&name)
}

// =============================================================================
// Tenant records
// =============================================================================

/// Raw tenant table row as exported from the store roster.
/// Field names follow the upstream export format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTenantRecord {
    #[serde(rename = "Subdomain", default)]
    pub subdomain: Option<String>,
    #[serde(rename = "Custom URL", default)]
    pub custom_hostname: Option<String>,
}

/// Tenant record with its derived API credential.
///
/// Invariant: a record with a subdomain always has an API key (the
/// directory derives a placeholder when none is configured).
#[derive(Debug, Clone)]
pub struct TenantRecord {
    pub subdomain: Option<String>,
    pub custom_hostname: Option<String>,
    pub api_key: Option<String>,
}

/// Tenant identity plus API credential, resolved per request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCredential {
    pub tenant_id: String,
    pub api_key: String,
}

// =============================================================================
// Order payloads
// =============================================================================

/// Line-item identifier. Storefront callers send these as JSON strings or
/// numbers depending on integration vintage; accept both.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Text(String),
    Number(i64),
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One product entry within an inbound order.
///
/// Callers identify the product as `id` or `origin_product_id` depending on
/// which storefront integration sends the order; `id` wins when both are
/// present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde(default)]
    pub origin_product_id: Option<ItemId>,
}

impl LineItem {
    /// The identifier used to query the catalog API, if the item has one
    pub fn item_id(&self) -> Option<String> {
        self.id
            .as_ref()
            .or(self.origin_product_id.as_ref())
            .map(ToString::to_string)
    }
}

/// Inbound order payload for the dropship check
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderPayload {
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

/// Final classification returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderClassification {
    #[serde(rename = "vendorNames")]
    pub vendor_names: Vec<String>,
    #[serde(rename = "orderContainsDropshipVendors")]
    pub contains_dropship_vendors: bool,
}

// =============================================================================
// Tests
// =============================================================================
