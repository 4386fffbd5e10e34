use std::sync::Arc;

use anyhow::Context;
use minibank_api::config::ApiConfig;
use minibank_ledger::Ledger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    minibank_observability::init();

    let config = ApiConfig::from_env()?;
    let app = minibank_api::app::build_app(Arc::new(Ledger::new()));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to install ctrl-c handler: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
