//! Configuration is read from a single JSON document, either embedded in the
//! binary or named by `APP_CONFIG_PATH`.

use app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

mod config_loader;
pub use config_loader::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub port: u16,
    pub address: String,
}

impl Server {
    // Validate server configuration
    pub fn validate(&self) -> AppResult<()> {
        if self.port == 0 {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "Invalid server port: '0' is not a valid port number"
            )));
        }

        if self.address.trim().is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "Server address cannot be empty"
            )));
        }

        Ok(())
    }

    /// `host:port` form accepted by `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

impl From<&AppConfig> for Server {
    fn from(config: &AppConfig) -> Self {
        Self {
            port: config.server.port,
            address: config.server.host.clone(),
        }
    }
}
