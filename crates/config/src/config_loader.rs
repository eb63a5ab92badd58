use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::{debug, info, warn};

use app_error::{AppError, AppErrorExt, AppResult};

/// Environment variable naming a JSON file that replaces the embedded configuration.
pub const CONFIG_PATH_ENV: &str = "APP_CONFIG_PATH";

/// Complete application configuration loaded from JSON
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub server: ServerConfig,
    pub security: SecurityConfig,
    pub graphql: GraphqlConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub body_limit: usize,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SecurityConfig {
    pub cors: CorsConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GraphqlConfig {
    /// Serve GraphiQL on `GET /` and `GET /graphql`
    pub playground: bool,
    pub depth_limit: usize,
    pub complexity_limit: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MonitoringConfig {
    pub sentry: SentryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SentryConfig {
    pub dsn: String,
    pub sample_rate: f32,
    pub traces_sample_rate: f32,
    pub environment: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// One of `pretty`, `compact` or `json`
    pub format: String,
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(&fs::read_to_string(path)?)?;
        debug!("Configuration loaded from file");
        Ok(config)
    }

    /// Load configuration from `APP_CONFIG_PATH` if set, otherwise from the embedded defaults.
    pub fn load() -> AppResult<Self> {
        dotenv::dotenv().ok();

        let config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => {
                info!("Loading configuration from {}", path);
                Self::from_file(&path).config_err()?
            }
            Err(_) => Self::embedded(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit file when given, otherwise behave like [`AppConfig::load`].
    pub fn resolve(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                let config = Self::from_file(path).config_err()?;
                config.validate()?;
                Ok(config)
            }
            None => Self::load(),
        }
    }

    /// The configuration compiled into the binary, falling back to `Default` if it fails to parse.
    pub fn embedded() -> Self {
        let config_content = include_str!("../res/app-config.json");

        match serde_json::from_str::<AppConfig>(config_content) {
            Ok(conf) => {
                info!("Loaded configuration from: {:?}", conf.environment);
                conf
            }
            Err(e) => {
                warn!(
                    "Failed to load config file: {}. Using default configuration.",
                    e
                );
                Self::default()
            }
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Validate the configuration
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = Vec::new();

        if self.server.host.trim().is_empty() {
            errors.push("Server host cannot be empty".to_string());
        }

        if self.server.port == 0 {
            errors.push("Server port cannot be 0".to_string());
        }

        if self.server.body_limit == 0 {
            errors.push("Server body limit must be greater than 0".to_string());
        }

        if self.server.request_timeout_secs == 0 {
            errors.push("Server request timeout must be greater than 0".to_string());
        }

        if self.graphql.depth_limit == 0 || self.graphql.complexity_limit == 0 {
            errors.push("GraphQL depth and complexity limits must be greater than 0".to_string());
        }

        if self.is_production() && self.graphql.playground {
            errors.push("GraphQL playground should be disabled in production".to_string());
        }

        if !matches!(
            self.monitoring.logging.format.as_str(),
            "pretty" | "compact" | "json"
        ) {
            errors.push(format!(
                "Unknown logging format '{}'",
                self.monitoring.logging.format
            ));
        }

        if self.is_production() && self.security.cors.allows_any_origin() {
            warn!("CORS allows any origin in production");
        }

        if !errors.is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "Invalid configuration: {}",
                errors.join(", ")
            )));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 4000,
                body_limit: 1048576, // 1MB
                request_timeout_secs: 30,
            },
            security: SecurityConfig {
                cors: CorsConfig {
                    allowed_origins: vec!["*".to_string()],
                    allowed_methods: vec![
                        "GET".to_string(),
                        "POST".to_string(),
                        "OPTIONS".to_string(),
                    ],
                    allowed_headers: vec!["Content-Type".to_string(), "Authorization".to_string()],
                },
            },
            graphql: GraphqlConfig {
                playground: true,
                depth_limit: 16,
                complexity_limit: 512,
            },
            monitoring: MonitoringConfig {
                sentry: SentryConfig {
                    dsn: "".to_string(),
                    sample_rate: 1.0,
                    traces_sample_rate: 0.2,
                    environment: "development".to_string(),
                },
                logging: LoggingConfig {
                    level: "info".to_string(),
                    format: "pretty".to_string(),
                },
            },
        }
    }
}
