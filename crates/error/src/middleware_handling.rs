use axum::{
    Json,
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::ErrorResponse;

/// Rewrites oversized-body and server-error responses into `ErrorResponse` JSON.
///
/// GraphQL errors travel inside a 200 response and are left untouched.
pub async fn error_handling_middleware(req: Request<Body>, next: Next) -> Response {
    let response = next.run(req).await;
    let status = response.status();

    if status == StatusCode::PAYLOAD_TOO_LARGE {
        error!("Request body too large: {}", status);

        let error_response = ErrorResponse {
            status: status.to_string(),
            message: "The request body exceeds the maximum allowed size".to_string(),
            code: "PAYLOAD_TOO_LARGE".to_string(),
            details: Some("Please reduce the size of your request and try again".to_string()),
            help: None,
        };

        return (status, Json(error_response)).into_response();
    }

    if status.is_server_error() {
        error!("Server error occurred: {}", status);

        let error_response = ErrorResponse {
            status: status.to_string(),
            message: "An internal server error occurred".to_string(),
            code: "SERVER_ERROR".to_string(),
            details: None,
            help: Some(
                "Please try again later or contact support if the issue persists".to_string(),
            ),
        };

        return (status, Json(error_response)).into_response();
    }

    response
}
