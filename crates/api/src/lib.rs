//! Dropcheck API Library
//!
//! This crate contains the API server components for Dropcheck.

pub mod catalog;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod tenancy;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
pub use tenancy::{OriginGuard, TenantDirectory};
