//! In-memory entity store for authors and books.
//!
//! Both collections are append-only and keep insertion order. Lookups that
//! miss return `None`; nothing here can fail.

pub mod collection;
pub mod seed;

use app_models::{Author, Book, EntityId};
use tracing::info;

pub use collection::Collection;

pub struct EntityStore {
    authors: Collection<Author>,
    books: Collection<Book>,
}

impl EntityStore {
    /// A store with no rows; both id sequences start at 1.
    pub fn empty() -> Self {
        Self {
            authors: Collection::new("authors"),
            books: Collection::new("books"),
        }
    }

    /// A store holding the fixed seed catalog.
    pub fn seeded() -> Self {
        let store = Self {
            authors: Collection::with_rows("authors", seed::authors()),
            books: Collection::with_rows("books", seed::books()),
        };
        info!(
            authors = store.author_count(),
            books = store.book_count(),
            "Seeded entity store"
        );
        store
    }

    pub fn get_book_by_id(&self, id: EntityId) -> Option<Book> {
        self.books.get_by_id(id)
    }

    pub fn get_author_by_id(&self, id: EntityId) -> Option<Author> {
        self.authors.get_by_id(id)
    }

    pub fn list_books(&self) -> Vec<Book> {
        self.books.all()
    }

    pub fn list_authors(&self) -> Vec<Author> {
        self.authors.all()
    }

    /// Books whose `author_id` matches, in insertion order
    pub fn books_by_author(&self, author_id: EntityId) -> Vec<Book> {
        self.books.filter(|book| book.is_by(author_id))
    }

    /// Append a book; `author_id` is stored as given, existing author or not.
    pub fn append_book(&self, name: impl Into<String>, author_id: EntityId) -> Book {
        let name = name.into();
        self.books.insert_with(|id| Book::new(id, name, author_id))
    }

    pub fn append_author(&self, name: impl Into<String>) -> Author {
        let name = name.into();
        self.authors.insert_with(|id| Author::new(id, name))
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::seeded()
    }
}
