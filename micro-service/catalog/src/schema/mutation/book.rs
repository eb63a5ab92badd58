use async_graphql::{Context, Object, Result};

use app_models::EntityId;

use crate::schema::{catalog, types::Book};
use crate::service::CatalogServiceTrait;

#[derive(Default)]
pub struct BookMutation;

#[Object]
impl BookMutation {
    /// Append a book with the next book id. `authorId` is stored as given.
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: EntityId,
    ) -> Result<Option<Book>> {
        let catalog = catalog(ctx)?;
        Ok(Some(catalog.add_book(name, author_id).into()))
    }
}
