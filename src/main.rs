use anyhow::Context;
use clap::Parser;
use tracing::info;

use cloud_catalog::config::{Cli, ServerConfig};
use cloud_catalog::infrastructure::logger;
use cloud_catalog::router::{cors_layer, create_router};
use cloud_catalog::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ServerConfig::resolve(cli).context("failed to load configuration")?;

    logger::init_logger(config.verbose, config.log_json);
    tracing::debug!("server config: {:?}", config);

    let catalog = config.load_catalog().with_context(|| match &config.catalog_file {
        Some(path) => format!("failed to load catalog from {}", path.display()),
        None => "failed to load built-in catalog".to_string(),
    })?;
    info!("catalog loaded with {} services", catalog.len());

    let cors = cors_layer(&config.cors_origins).context("invalid CORS origin")?;
    let app = create_router(AppState::new(catalog), cors);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    info!("service starting on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl-C: {}", e);
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
                tracing::warn!("failed to listen for SIGTERM: {}", e);
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
