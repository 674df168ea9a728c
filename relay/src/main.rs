use reamaze_relay::{AppState, RelayConfig, RelayError};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), RelayError> {
    init_tracing();

    let config = RelayConfig::load()?;
    let state = AppState::from_config(&config)?;
    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(addr = %config.listen_addr, brand = %config.brand, "Relay listening.");

    reamaze_relay::run(listener, state).await?;
    Ok(())
}
