/**
 * LinkCrawler Server Entry Point
 *
 * Loads `.env`, installs tracing, reads `ServerConfig` from the environment
 * and serves the REST API until Ctrl-C.
 */

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use linkcrawler::backend::server::{create_app, ServerConfig};
    use tracing_subscriber::EnvFilter;

    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,linkcrawler=debug"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    std::panic::set_hook(Box::new(|info| {
        tracing::error!("Panic: {}", info);
    }));

    let config = ServerConfig::from_env()?;
    let (app, db) = create_app(&config).await?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("LinkCrawler API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down");
    db.close().await;

    Ok(())
}

#[cfg(feature = "server")]
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

#[cfg(not(feature = "server"))]
fn main() {
    eprintln!("Server requires the 'server' feature to be enabled.");
    eprintln!("Run with: cargo run --bin linkcrawler-server --features server");
    std::process::exit(1);
}
