use async_graphql::{Context, Object, Result};

use app_models::EntityId;

use crate::schema::{catalog, types::Author};
use crate::service::CatalogServiceTrait;

#[derive(Default)]
pub struct AuthorQuery;

#[Object]
impl AuthorQuery {
    async fn authors(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Author>>>> {
        let catalog = catalog(ctx)?;
        Ok(Some(
            catalog
                .list_authors()
                .into_iter()
                .map(|author| Some(Author::from(author)))
                .collect(),
        ))
    }

    async fn author(&self, ctx: &Context<'_>, id: EntityId) -> Result<Option<Author>> {
        let catalog = catalog(ctx)?;
        Ok(catalog.get_author_by_id(id).map(Author::from))
    }
}
