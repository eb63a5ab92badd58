use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use app_models::{Author, Book, EntityId};
use app_store::EntityStore;

/// Trait defining the catalog service interface.
///
/// Every operation is synchronous and infallible: a miss is `None` or an
/// empty list, never an error.
pub trait CatalogServiceTrait: Send + Sync {
    fn get_book_by_id(&self, id: EntityId) -> Option<Book>;

    fn get_author_by_id(&self, id: EntityId) -> Option<Author>;

    fn list_books(&self) -> Vec<Book>;

    fn list_authors(&self) -> Vec<Author>;

    /// The author `book.author_id` points at, if one exists
    fn resolve_author_of(&self, book: &Book) -> Option<Author>;

    /// Every book written by `author`, in insertion order
    fn resolve_books_of(&self, author: &Author) -> Vec<Book>;

    /// Create a book; the author reference is not checked
    fn add_book(&self, name: String, author_id: EntityId) -> Book;

    fn add_author(&self, name: String) -> Author;

    fn stats(&self) -> CatalogStats;
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub authors: usize,
    pub books: usize,
    pub started_at: DateTime<Utc>,
}

pub struct CatalogService {
    store: Arc<EntityStore>,
    started_at: DateTime<Utc>,
}

impl CatalogService {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self {
            store,
            started_at: Utc::now(),
        }
    }

    /// A service over a freshly seeded store
    pub fn seeded() -> Self {
        Self::new(Arc::new(EntityStore::seeded()))
    }
}

impl CatalogServiceTrait for CatalogService {
    fn get_book_by_id(&self, id: EntityId) -> Option<Book> {
        self.store.get_book_by_id(id)
    }

    fn get_author_by_id(&self, id: EntityId) -> Option<Author> {
        self.store.get_author_by_id(id)
    }

    fn list_books(&self) -> Vec<Book> {
        self.store.list_books()
    }

    fn list_authors(&self) -> Vec<Author> {
        self.store.list_authors()
    }

    fn resolve_author_of(&self, book: &Book) -> Option<Author> {
        let author = self.store.get_author_by_id(book.author_id);
        if author.is_none() {
            debug!(
                book_id = book.id,
                author_id = book.author_id,
                "Book references a missing author"
            );
        }
        author
    }

    fn resolve_books_of(&self, author: &Author) -> Vec<Book> {
        self.store.books_by_author(author.id)
    }

    fn add_book(&self, name: String, author_id: EntityId) -> Book {
        let book = self.store.append_book(name, author_id);
        info!(id = book.id, author_id, "Book added");
        book
    }

    fn add_author(&self, name: String) -> Author {
        let author = self.store.append_author(name);
        info!(id = author.id, "Author added");
        author
    }

    fn stats(&self) -> CatalogStats {
        CatalogStats {
            authors: self.store.author_count(),
            books: self.store.book_count(),
            started_at: self.started_at,
        }
    }
}
