use company_api::api::routes::create_router;
use company_api::config::AppConfig;
use company_api::{open_store, run_server};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging with explicit filter to suppress sqlx debug logs
    use env_logger::Builder;
    use log::LevelFilter;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("sqlx", LevelFilter::Warn)
        .parse_default_env()
        .init();

    log::info!("company-api: entity graph serialization demo");

    let config = AppConfig::load()?;
    log::info!(
        "Configuration loaded: server={}:{}",
        config.server.host,
        config.server.port
    );

    let store = Arc::new(open_store(&config).await?);
    log::info!("Database ready");

    run_server(create_router().with_state(store), &config).await?;

    Ok(())
}
