//! Shared application state

use std::sync::Arc;
use std::time::Duration;

use crate::catalog::{OrderClassifier, VendorClient};
use crate::config::Config;
use crate::tenancy::TenantDirectory;

/// State shared by all request handlers.
///
/// The tenant directory is loaded once at startup and immutable for the
/// life of the process; resolvers receive it as an explicit dependency.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub directory: Arc<TenantDirectory>,
    pub classifier: Arc<OrderClassifier>,
}

impl AppState {
    pub fn new(config: Config, directory: TenantDirectory) -> Self {
        let client = VendorClient::new(Duration::from_millis(config.vendor_request_timeout_ms));

        Self {
            config,
            directory: Arc::new(directory),
            classifier: Arc::new(OrderClassifier::new(client)),
        }
    }
}
