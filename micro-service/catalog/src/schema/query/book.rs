use async_graphql::{Context, Object, Result};

use app_models::EntityId;

use crate::schema::{catalog, types::Book};
use crate::service::CatalogServiceTrait;

#[derive(Default)]
pub struct BookQuery;

#[Object]
impl BookQuery {
    /// Look up a single book; null when no book has this id
    async fn book(&self, ctx: &Context<'_>, id: EntityId) -> Result<Option<Book>> {
        let catalog = catalog(ctx)?;
        Ok(catalog.get_book_by_id(id).map(Book::from))
    }

    /// Every book in insertion order
    async fn books(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Book>>>> {
        let catalog = catalog(ctx)?;
        Ok(Some(
            catalog
                .list_books()
                .into_iter()
                .map(|book| Some(Book::from(book)))
                .collect(),
        ))
    }
}
