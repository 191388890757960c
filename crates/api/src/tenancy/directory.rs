//! Tenant directory
//!
//! In-memory, read-only roster of known stores, built once at startup from
//! the static tenant table plus an environment-style credential lookup.

use dropcheck_shared::{RawTenantRecord, TenantRecord};

/// Embedded store roster, used when no table path is configured
pub const DEFAULT_TENANT_TABLE: &str = include_str!("../../tenants.json");

/// Parse a raw tenant table (a JSON array of `{"Subdomain", "Custom URL"}`
/// rows, as exported from the store roster)
pub fn parse_tenant_table(json: &str) -> Result<Vec<RawTenantRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Read-only collection of tenant records, queryable by subdomain or by
/// custom hostname. First match wins; no duplicate detection is performed.
#[derive(Debug, Clone, Default)]
pub struct TenantDirectory {
    records: Vec<TenantRecord>,
}

impl TenantDirectory {
    /// Build the directory from raw roster records.
    ///
    /// Every record with a subdomain gets a credential: the value from
    /// `credential_lookup(subdomain)` when present and non-empty, otherwise
    /// the `default-{subdomain}` placeholder. A missing credential is a
    /// misconfiguration that degrades to an obviously-wrong key rather than
    /// failing the build. Records without a subdomain pass through with no
    /// credential attached.
    pub fn load<F>(raw_records: &[RawTenantRecord], credential_lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let records = raw_records
            .iter()
            .map(|raw| {
                let subdomain = raw.subdomain.clone().filter(|s| !s.is_empty());
                let api_key = subdomain.as_deref().map(|sub| {
                    credential_lookup(sub)
                        .filter(|key| !key.is_empty())
                        .unwrap_or_else(|| format!("default-{}", sub))
                });
                TenantRecord {
                    subdomain,
                    custom_hostname: raw.custom_hostname.clone().filter(|s| !s.is_empty()),
                    api_key,
                }
            })
            .collect();

        Self { records }
    }

    /// Number of roster records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All roster records, in table order
    pub fn records(&self) -> &[TenantRecord] {
        &self.records
    }

    /// Find a record by exact subdomain match
    pub fn find_by_subdomain(&self, subdomain: &str) -> Option<&TenantRecord> {
        self.records
            .iter()
            .find(|record| record.subdomain.as_deref() == Some(subdomain))
    }

    /// Find a record by exact custom-hostname match.
    ///
    /// A custom-hostname match is only a valid tenant when the record also
    /// carries a subdomain; hostname-only rows are skipped.
    pub fn find_by_custom_hostname(&self, hostname: &str) -> Option<&TenantRecord> {
        self.records.iter().find(|record| {
            record.custom_hostname.as_deref() == Some(hostname) && record.subdomain.is_some()
        })
    }
}
