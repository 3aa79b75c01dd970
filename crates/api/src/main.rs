use std::sync::Arc;

use anyhow::Context;

use arbor_api::app::{self, services};
use arbor_infra::AppConfig;
use arbor_observability::LogConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;

    arbor_observability::init(&LogConfig::new(config.log_format));

    let stores = services::InMemoryStores::new();
    let services = services::build_services(&config, &stores)?;
    let app = app::build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
