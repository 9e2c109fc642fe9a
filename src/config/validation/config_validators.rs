//! Server and audit configuration validators

use super::trait_def::Validate;
use crate::config::models::*;

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Worker count must be greater than 0".to_string());
            }
        }

        Ok(())
    }
}

impl Validate for AuditConfig {
    fn validate(&self) -> Result<(), String> {
        if self.recent_limit == 0 {
            return Err("Recent audit limit must be greater than 0".to_string());
        }
        Ok(())
    }
}
