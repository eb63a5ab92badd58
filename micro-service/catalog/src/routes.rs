use crate::{
    handlers::graphql::{graphql_handler, graphql_playground, health_check},
    schema::ApiSchema,
    service::CatalogService,
};
use std::{sync::Arc, time::Duration};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};

use app_config::{AppConfig, CorsConfig};
use app_error::middleware_handling::error_handling_middleware;
use app_middleware::{logging_middleware, security_headers_middleware};

fn cors_layer(cors_config: &CorsConfig) -> CorsLayer {
    CorsLayer::new()
        // "*" anywhere in the list opens the API to every origin
        .allow_origin(if cors_config.allows_any_origin() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(
                cors_config
                    .allowed_origins
                    .iter()
                    .filter_map(|origin| origin.parse().ok())
                    .collect::<Vec<_>>(),
            )
        })
        .allow_methods(
            cors_config
                .allowed_methods
                .iter()
                .filter_map(|method| method.parse().ok())
                .collect::<Vec<_>>(),
        )
        .allow_headers(
            cors_config
                .allowed_headers
                .iter()
                .filter_map(|header| header.parse().ok())
                .collect::<Vec<_>>(),
        )
}

pub fn create_routes(
    schema: ApiSchema,
    catalog: Arc<CatalogService>,
    config: &AppConfig,
) -> Router {
    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.security.cors));

    let app = if config.graphql.playground {
        Router::new()
            .route("/", get(graphql_playground))
            .route("/graphql", get(graphql_playground).post(graphql_handler))
    } else {
        Router::new().route("/graphql", post(graphql_handler))
    };

    let app = app
        .route("/health", get(health_check))
        .layer(Extension(schema))
        .layer(Extension(catalog));

    let app = app
        .layer(axum::middleware::from_fn(error_handling_middleware))
        .layer(RequestBodyLimitLayer::new(config.server.body_limit));

    let app = app
        .layer(axum::middleware::from_fn(logging_middleware))
        .layer(axum::middleware::from_fn(security_headers_middleware));

    app.layer(middleware_stack)
}
