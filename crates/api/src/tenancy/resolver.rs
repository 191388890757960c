//! Hostname-to-tenant resolution
//!
//! Resolves incoming Host headers to a store subdomain and API credential.
//! Custom-hostname mappings take priority over platform-subdomain
//! extraction: a store may have remapped its public hostname to something
//! that would never match the `.mybrightsites.com` pattern.

use dropcheck_shared::ResolvedCredential;

use super::TenantDirectory;

/// Base domain suffix for platform-hosted storefronts
pub const STORE_DOMAIN_SUFFIX: &str = ".mybrightsites.com";

/// Fallback tenant used when a hostname matches nothing in the roster
pub const DEFAULT_TENANT: &str = "centricity-test-store";

/// Credential used for local development when none is configured
const LOCAL_FALLBACK_API_KEY: &str = "default-api-key";

/// Normalize a host header value
pub fn normalize_host(host: &str) -> String {
    // Remove port if present
    let host = host.split(':').next().unwrap_or(host);
    // Lowercase
    host.to_lowercase()
}

/// Resolve a hostname to a store subdomain.
///
/// Priority order:
/// 1. Exact custom-hostname match in the directory (the record must carry
///    a subdomain).
/// 2. `{subdomain}.mybrightsites.com` pattern: the prefix before the
///    first occurrence of the platform suffix.
/// 3. The default test store.
pub fn resolve_subdomain(directory: &TenantDirectory, hostname: &str) -> String {
    if let Some(subdomain) = directory
        .find_by_custom_hostname(hostname)
        .and_then(|record| record.subdomain.clone())
    {
        return subdomain;
    }

    if hostname.ends_with(STORE_DOMAIN_SUFFIX) {
        if let Some((prefix, _)) = hostname.split_once(STORE_DOMAIN_SUFFIX) {
            return prefix.to_string();
        }
    }

    DEFAULT_TENANT.to_string()
}

/// Resolve a hostname to a tenant identity plus API credential.
///
/// Never fails: a hostname that matches no roster entry still resolves to
/// a placeholder credential so downstream lookups degrade instead of
/// crashing.
pub fn resolve_credentials<F>(
    directory: &TenantDirectory,
    hostname: &str,
    credential_lookup: F,
) -> ResolvedCredential
where
    F: Fn(&str) -> Option<String>,
{
    // Local-development escape hatch; never consults the directory.
    if hostname == "localhost" {
        let api_key = credential_lookup(DEFAULT_TENANT)
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| LOCAL_FALLBACK_API_KEY.to_string());
        return ResolvedCredential {
            tenant_id: DEFAULT_TENANT.to_string(),
            api_key,
        };
    }

    let tenant_id = resolve_subdomain(directory, hostname);
    let api_key = match directory
        .find_by_subdomain(&tenant_id)
        .and_then(|record| record.api_key.clone())
    {
        Some(key) => key,
        None => credential_lookup(&tenant_id)
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| format!("default-{}", tenant_id)),
    };

    ResolvedCredential { tenant_id, api_key }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dropcheck_shared::RawTenantRecord;

    fn directory(rows: &[(&str, Option<&str>)]) -> TenantDirectory {
        let raw: Vec<RawTenantRecord> = rows
            .iter()
            .map(|(subdomain, custom)| RawTenantRecord {
                subdomain: Some(subdomain.to_string()),
                custom_hostname: custom.map(String::from),
            })
            .collect();
        TenantDirectory::load(&raw, |_| None)
    }

    #[test]
    fn test_normalize_host() {
        assert_eq!(normalize_host("Example.COM"), "example.com");
        assert_eq!(normalize_host("example.com:8080"), "example.com");
        assert_eq!(normalize_host("ACME.mybrightsites.com:443"), "acme.mybrightsites.com");
    }

    #[test]
    fn test_custom_hostname_beats_pattern_extraction() {
        // The remapped hostname itself matches the platform pattern; the
        // roster mapping must still win.
        let dir = directory(&[("real-store", Some("other.mybrightsites.com"))]);
        assert_eq!(resolve_subdomain(&dir, "other.mybrightsites.com"), "real-store");
    }

    #[test]
    fn test_custom_hostname_match_is_exact_and_case_sensitive() {
        let dir = directory(&[("acme", Some("shop.acme.com"))]);
        assert_eq!(resolve_subdomain(&dir, "shop.acme.com"), "acme");
        assert_eq!(
            resolve_subdomain(&dir, "Shop.acme.com"),
            DEFAULT_TENANT,
            "case-mismatched hostname must not match the roster"
        );
    }

    #[test]
    fn test_pattern_extraction() {
        let dir = directory(&[]);
        assert_eq!(resolve_subdomain(&dir, "acme.mybrightsites.com"), "acme");
        assert_eq!(
            resolve_subdomain(&dir, "blue-ridge-gear.mybrightsites.com"),
            "blue-ridge-gear"
        );
    }

    #[test]
    fn test_pattern_extraction_splits_on_first_occurrence() {
        let dir = directory(&[]);
        assert_eq!(
            resolve_subdomain(&dir, "acme.mybrightsites.com.mybrightsites.com"),
            "acme"
        );
    }

    #[test]
    fn test_unmatched_hostname_falls_back_to_default() {
        let dir = directory(&[("acme", Some("shop.acme.com"))]);
        assert_eq!(resolve_subdomain(&dir, "unknown.example.com"), DEFAULT_TENANT);
    }

    #[test]
    fn test_localhost_never_consults_the_directory() {
        // A roster row that maps the literal hostname "localhost" must be
        // ignored by the local-development path.
        let dir = directory(&[("sneaky-store", Some("localhost"))]);
        let credential = resolve_credentials(&dir, "localhost", |_| None);
        assert_eq!(credential.tenant_id, DEFAULT_TENANT);
        assert_eq!(credential.api_key, "default-api-key");
    }

    #[test]
    fn test_localhost_uses_configured_default_credential() {
        let dir = directory(&[]);
        let credential = resolve_credentials(&dir, "localhost", |key| {
            (key == DEFAULT_TENANT).then(|| "local-secret".to_string())
        });
        assert_eq!(credential.api_key, "local-secret");
        assert!(!credential.api_key.is_empty());
    }

    #[test]
    fn test_known_tenant_uses_directory_credential() {
        let raw = vec![RawTenantRecord {
            subdomain: Some("acme".to_string()),
            custom_hostname: None,
        }];
        let dir = TenantDirectory::load(&raw, |sub| {
            (sub == "acme").then(|| "roster-key".to_string())
        });

        let credential = resolve_credentials(&dir, "acme.mybrightsites.com", |_| {
            Some("request-time-key".to_string())
        });
        assert_eq!(credential.tenant_id, "acme");
        assert_eq!(credential.api_key, "roster-key");
    }

    #[test]
    fn test_unknown_pattern_tenant_still_resolves() {
        let dir = directory(&[]);

        let credential = resolve_credentials(&dir, "ghost.mybrightsites.com", |key| {
            (key == "ghost").then(|| "env-key".to_string())
        });
        assert_eq!(credential.tenant_id, "ghost");
        assert_eq!(credential.api_key, "env-key");

        let credential = resolve_credentials(&dir, "ghost.mybrightsites.com", |_| None);
        assert_eq!(credential.api_key, "default-ghost");
    }
}
