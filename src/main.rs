//! Roomkey: access token vending and demo hosting for a real-time media platform.
//! Used by: binary entrypoint.

pub mod config;
pub mod credentials;
pub mod error;
pub mod handlers;
pub mod issuer;
pub mod provider;
pub mod server;
pub mod state;
pub mod telemetry;
pub mod token;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env();
    let state = state::build_state(&config);
    tracing::info!("starting roomkey on port {}", config.port);

    server::run(state, &config).await?;
    Ok(())
}
