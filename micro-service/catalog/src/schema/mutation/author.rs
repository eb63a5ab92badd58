use async_graphql::{Context, Object, Result};

use crate::schema::{catalog, types::Author};
use crate::service::CatalogServiceTrait;

#[derive(Default)]
pub struct AuthorMutation;

#[Object]
impl AuthorMutation {
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> Result<Option<Author>> {
        let catalog = catalog(ctx)?;
        Ok(Some(catalog.add_author(name).into()))
    }
}
