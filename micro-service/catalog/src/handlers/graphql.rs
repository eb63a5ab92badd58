use app_error::AppResult;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use serde::Serialize;
use std::sync::Arc;

use crate::schema::ApiSchema;
use crate::service::{CatalogService, CatalogServiceTrait, CatalogStats};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub stats: CatalogStats,
}

// Handler for GraphQL POST requests
pub async fn graphql_handler(
    schema: Extension<ApiSchema>,
    req: GraphQLRequest,
) -> AppResult<GraphQLResponse> {
    let response = schema.execute(req.into_inner()).await;

    if response.is_err() {
        tracing::debug!(errors = response.errors.len(), "GraphQL request returned errors");
    }

    Ok(response.into())
}

// Handler for GraphiQL playground UI
pub async fn graphql_playground() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

// Liveness probe with current catalog size
pub async fn health_check(catalog: Extension<Arc<CatalogService>>) -> impl IntoResponse {
    let body = HealthResponse {
        status: "ok",
        stats: catalog.stats(),
    };

    (StatusCode::OK, Json(body))
}
