//! Environment overrides for configuration

use super::Config;
use crate::utils::error::{AccademiaError, Result};
use std::env;
use tracing::debug;

impl Config {
    /// Apply `ACCADEMIA_*`, `DATABASE_URL` and `TOKEN_*` environment variables on top of
    /// the current values. A `.env` file in the working directory is honoured.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        let _ = dotenvy::dotenv();

        if let Ok(host) = env::var("ACCADEMIA_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("ACCADEMIA_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| AccademiaError::Config(format!("Invalid port: {}", e)))?;
        }

        if let Ok(db_url) = env::var("DATABASE_URL") {
            self.storage.database.url = db_url;
            self.storage.database.enabled = true;
        }

        if let Ok(secret) = env::var("TOKEN_SECRET") {
            self.auth.token_secret = secret;
        }
        if let Ok(ttl) = env::var("TOKEN_TTL") {
            self.auth.token_ttl = ttl
                .parse()
                .map_err(|e| AccademiaError::Config(format!("Invalid token TTL: {}", e)))?;
        }

        debug!("Environment overrides applied");
        Ok(())
    }
}
