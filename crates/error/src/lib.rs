pub mod middleware_handling;

use async_graphql::{ErrorExtensions, FieldError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
    #[error("Server error: {0}")]
    ServerError(anyhow::Error),
}

impl AppError {
    /// A service that the schema expects in its context data was never registered.
    pub fn missing_service(service: &str) -> Self {
        Self::ServerError(anyhow::anyhow!(
            "Internal configuration error: {} not available",
            service
        ))
    }

    /// Stable machine-readable code, shared by HTTP and GraphQL error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::ServerError(_) => "SERVER_ERROR",
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::ServerError(error)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let error_message = match &self {
            Self::ConfigError(_) => "System configuration error",
            Self::ServerError(_) => "Internal server error",
        };
        let error_code = self.code();

        tracing::error!(
            error_code = error_code,
            status_code = %status.as_u16(),
            %error_message,
            "[{}] {}: {}",
            error_code,
            status,
            self
        );

        let body = Json(ErrorResponse {
            status: status.to_string(),
            message: error_message.to_string(),
            code: error_code.to_string(),
            // Internal details stay in the logs
            details: None,
            help: None,
        });

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

// Extension trait to wrap foreign errors into a specific AppError variant
pub trait AppErrorExt<T> {
    fn config_err(self) -> AppResult<T>;
    fn server_err(self) -> AppResult<T>;
}

impl<T, E> AppErrorExt<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn config_err(self) -> AppResult<T> {
        self.map_err(|e| AppError::ConfigError(e.into()))
    }

    fn server_err(self) -> AppResult<T> {
        self.map_err(|e| AppError::ServerError(e.into()))
    }
}

impl AppError {
    // Convert AppError to a GraphQL FieldError carrying a `code` extension
    pub fn to_field_error(&self) -> FieldError {
        let code = self.code();
        let details = match self {
            Self::ConfigError(_) => "A configuration error occurred",
            Self::ServerError(_) => "An internal server error occurred",
        };

        let error = FieldError::new(self.to_string()).extend_with(|_, e| {
            e.set("code", code);
            e.set("details", details);
        });

        tracing::error!(error = %self, "GraphQL resolver error");

        error
    }
}
