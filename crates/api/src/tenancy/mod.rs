//! Tenant identity for inbound requests
//!
//! This module maps request hostnames to store tenants and their API
//! credentials:
//! - Platform subdomains: acme.mybrightsites.com -> "acme"
//! - Custom hostnames: shop.company.com -> roster lookup
//! - Everything else -> the default test store

mod directory;
mod origin;
mod resolver;

pub use directory::{parse_tenant_table, TenantDirectory, DEFAULT_TENANT_TABLE};
pub use origin::OriginGuard;
pub use resolver::{
    normalize_host, resolve_credentials, resolve_subdomain, DEFAULT_TENANT, STORE_DOMAIN_SUFFIX,
};
