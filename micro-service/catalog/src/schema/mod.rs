pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{Context, EmptySubscription, FieldError, Schema, extensions::Tracing};
use std::sync::Arc;

use app_config::GraphqlConfig;
use app_error::AppError;

use crate::service::CatalogService;
use mutation::{Mutation, create_mutation};
use query::{Query, create_query};

pub type ApiSchema = Schema<Query, Mutation, EmptySubscription>;

/// Build the schema with the catalog service registered as context data.
pub fn create_schema(catalog: Arc<CatalogService>, limits: &GraphqlConfig) -> ApiSchema {
    Schema::build(create_query(), create_mutation(), EmptySubscription)
        .data(catalog)
        .limit_depth(limits.depth_limit)
        .limit_complexity(limits.complexity_limit)
        .extension(Tracing)
        .finish()
}

/// Schema definition language for the API, independent of any running store
pub fn schema_sdl() -> String {
    Schema::build(create_query(), create_mutation(), EmptySubscription)
        .finish()
        .sdl()
}

// Shared by every resolver; the service is registered once in `create_schema`
pub(crate) fn catalog<'a>(ctx: &Context<'a>) -> Result<&'a Arc<CatalogService>, FieldError> {
    ctx.data::<Arc<CatalogService>>()
        .map_err(|_| AppError::missing_service("Catalog service").to_field_error())
}
