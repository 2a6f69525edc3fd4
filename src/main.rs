use bandar_guide::api::{self, AppState};
use bandar_guide::config::AppConfig;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load();

    if config.inference.token.is_none() {
        warn!("HF_TOKEN is not set; every answer will use the fallback reply");
    }
    info!(
        data_dir = %config.data_dir.display(),
        reload_per_request = config.reload_per_request,
        "loading listings"
    );

    let state = AppState::from_config(&config)?;
    let app = api::router(state, Some(config.static_dir.as_path()));

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("BandarAbbas AI listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
