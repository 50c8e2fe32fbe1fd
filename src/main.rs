use std::error::Error;

use clt_calc::api::{AppState, create_router};
use clt_calc::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const BIND_ADDRESS: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        experiments = config.config().experiments().len(),
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(BIND_ADDRESS).await?;
    info!(address = BIND_ADDRESS, "Listening");

    axum::serve(listener, app).await?;
    Ok(())
}
