//! Application configuration

use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,
    pub public_url: String,

    // Tenant table (defaults to the embedded roster when unset)
    pub tenant_table_path: Option<String>,

    // Catalog API
    pub vendor_request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Server
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            public_url: env::var("PUBLIC_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),

            // Tenant table
            tenant_table_path: env::var("TENANT_TABLE_PATH").ok(),

            // Catalog API
            vendor_request_timeout_ms: match env::var("VENDOR_REQUEST_TIMEOUT_MS") {
                Ok(raw) => raw
                    .parse()
                    .map_err(|_| ConfigError::Invalid("VENDOR_REQUEST_TIMEOUT_MS"))?,
                Err(_) => 10_000,
            },
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure config tests run serially (they modify shared env vars)
    static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_config_defaults() {
        let _lock = CONFIG_TEST_MUTEX.lock().unwrap();
        env::remove_var("BIND_ADDRESS");
        env::remove_var("TENANT_TABLE_PATH");
        env::remove_var("VENDOR_REQUEST_TIMEOUT_MS");

        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:3000");
        assert!(config.tenant_table_path.is_none());
        assert_eq!(config.vendor_request_timeout_ms, 10_000);
    }

    #[test]
    fn test_config_overrides() {
        let _lock = CONFIG_TEST_MUTEX.lock().unwrap();
        env::set_var("BIND_ADDRESS", "127.0.0.1:8080");
        env::set_var("VENDOR_REQUEST_TIMEOUT_MS", "2500");

        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.vendor_request_timeout_ms, 2_500);

        env::remove_var("BIND_ADDRESS");
        env::remove_var("VENDOR_REQUEST_TIMEOUT_MS");
    }

    #[test]
    fn test_config_rejects_unparsable_timeout() {
        let _lock = CONFIG_TEST_MUTEX.lock().unwrap();
        env::set_var("VENDOR_REQUEST_TIMEOUT_MS", "not-a-number");

        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::Invalid("VENDOR_REQUEST_TIMEOUT_MS"))
        ));

        env::remove_var("VENDOR_REQUEST_TIMEOUT_MS");
    }
}
