mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod server;
mod state;
mod store;
#[cfg(test)]
mod test_support;

use config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("pg-items-service starting");

    let config = Config::from_env()?;
    config.log_startup();

    server::run(config).await
}
