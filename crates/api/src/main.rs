//! Climate Observations API - Main Entry Point

use api::{init_logging, run_server, AppConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = AppConfig::load()?;

    info!("=== Climate Observations API v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Dataset: {}", config.database.url);

    run_server(config).await?;

    Ok(())
}
