//! Tenant product catalog access
//!
//! Outbound lookups against the per-store catalog API, and the concurrent
//! per-line-item order classification built on top of them.

mod classifier;
mod client;

pub use classifier::OrderClassifier;
pub use client::{VendorClient, VendorClientError};
