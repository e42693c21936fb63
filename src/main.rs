use cirrhosis_dashboard::adapters::health_handler::HealthHandler;
use cirrhosis_dashboard::cli::Cli;
use cirrhosis_dashboard::config::Settings;
use clap::Parser;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = Settings::new_with_cli(&cli)?;
    let addr = settings.bind_address();

    info!("Starting Cirrhosis Risk Dashboard on {}", addr);

    let settings = Arc::new(RwLock::new(settings));
    let health_handler = Arc::new(HealthHandler::new(settings));
    let app = cirrhosis_dashboard::create_app(health_handler);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
