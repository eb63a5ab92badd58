use async_graphql::{Context, Object, Result};

use app_models::EntityId;

use super::catalog;
use crate::service::CatalogServiceTrait;

/// A book in the catalog
pub struct Book(pub app_models::Book);

/// An author in the catalog
pub struct Author(pub app_models::Author);

impl From<app_models::Book> for Book {
    fn from(book: app_models::Book) -> Self {
        Self(book)
    }
}

impl From<app_models::Author> for Author {
    fn from(author: app_models::Author) -> Self {
        Self(author)
    }
}

#[Object]
impl Book {
    async fn id(&self) -> EntityId {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn author_id(&self) -> EntityId {
        self.0.author_id
    }

    /// The referenced author, or null when `authorId` matches no author
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        let catalog = catalog(ctx)?;
        Ok(catalog.resolve_author_of(&self.0).map(Author::from))
    }
}

#[Object]
impl Author {
    async fn id(&self) -> EntityId {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Books by this author in insertion order; empty when there are none
    async fn books(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Book>>>> {
        let catalog = catalog(ctx)?;
        let books = catalog.resolve_books_of(&self.0);
        Ok(Some(books.into_iter().map(|book| Some(Book::from(book))).collect()))
    }
}
