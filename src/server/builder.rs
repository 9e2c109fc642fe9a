//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{AccademiaError, Result};
use std::path::Path;
use tracing::info;

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "config/accademia.yaml";

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| AccademiaError::config("Configuration is required"))?;

        HttpServer::new(&config).await
    }
}

/// Load configuration from `config_path` (or the environment) and serve until stopped
pub async fn run_server<P: AsRef<Path>>(config_path: P) -> Result<()> {
    info!("Starting Accademia access-control service");

    let config = Config::load(config_path).await?;
    let server = ServerBuilder::new().with_config(config).build().await?;

    info!("Server starting at: http://{}", server.config().address());
    info!("Endpoints:");
    info!("   GET  /health");
    info!("   POST /auth/signup | /auth/signin | /auth/signout | /auth/change-password");
    info!("   GET  /auth/me");
    info!("   GET  /admin/roles | /admin/audit");
    info!("   PUT  /admin/roles/{{role}}/permissions | /admin/roles/{{role}}/sections");
    info!("   POST /admin/roles/refresh");

    server.start().await
}
