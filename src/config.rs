use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub connection_string: Option<String>,
    pub max_connections: Option<u32>,
    /// Insert the demonstration rows at startup
    pub seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            connection_string: None,
            max_connections: Some(5),
            seed: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Add default configuration
        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        // Add config file if it exists
        config = config.add_source(config::File::with_name("config").required(false));

        // Add environment variables, e.g. APP_SERVER__PORT or APP_DATABASE__CONNECTION_STRING
        config = config.add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .prefix_separator("_"),
        );

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// Get the database URL from config or environment
    pub fn database_url(&self) -> String {
        if let Some(connection_string) = &self.database.connection_string {
            return connection_string.clone();
        }

        // Fall back to environment variable
        if let Ok(url) = std::env::var("DATABASE_URL") {
            return url;
        }

        // Local file next to the binary's working directory
        "sqlite://app.db?mode=rwc".to_string()
    }

    pub fn max_connections(&self) -> u32 {
        self.database.max_connections.unwrap_or(5)
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
