pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod seed;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export logic types
pub use logic::{GraphError, GraphLoader, GraphSerializer, ResponseShaper};

// Export all model types
pub use model::*;

// Export seed module
pub use seed::*;

// Export store types
pub use store::{SqliteStore, Store};

/// Open the configured store, create the schema and apply the seed rows
pub async fn open_store(config: &crate::config::AppConfig) -> anyhow::Result<SqliteStore> {
    let database_url = config.database_url();
    log::info!("Opening SQLite database at {}", database_url);
    let store = SqliteStore::new(&database_url, config.max_connections()).await?;

    store.migrate().await?;

    if config.database.seed {
        seed::load_seed_data(&store).await?;
    }

    Ok(store)
}

/// Serve the application on an already bound listener
pub async fn serve_app(listener: tokio::net::TcpListener, app: axum::Router) -> anyhow::Result<()> {
    axum::serve(listener, app).await?;
    Ok(())
}

/// Bind the configured address and serve until the process stops
pub async fn run_server(app: axum::Router, config: &crate::config::AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log::info!("Server running on http://{}", bind_address);
    log::info!(
        "Try http://{0}/oops and http://{0}/projection-type-wrapper",
        bind_address
    );

    serve_app(listener, app).await
}
