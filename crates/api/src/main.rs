//! Dropcheck API server
//!
//! Binary entrypoint: loads configuration and the store roster, then
//! serves the gateway until shutdown.

use anyhow::Context;
use tracing::info;

use dropcheck_api::routes;
use dropcheck_api::tenancy::{parse_tenant_table, TenantDirectory, DEFAULT_TENANT_TABLE};
use dropcheck_api::{AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dropcheck_api=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env().context("invalid configuration")?;

    let table_json = match &config.tenant_table_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read tenant table at {}", path))?,
        None => DEFAULT_TENANT_TABLE.to_string(),
    };
    let raw_records = parse_tenant_table(&table_json).context("invalid tenant table")?;
    let directory = TenantDirectory::load(&raw_records, |subdomain| std::env::var(subdomain).ok());
    info!(tenants = directory.len(), "tenant directory loaded");

    let state = AppState::new(config.clone(), directory);
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address))?;
    info!(
        address = %config.bind_address,
        timeout_ms = config.vendor_request_timeout_ms,
        "dropcheck gateway listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves on ctrl-c or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
