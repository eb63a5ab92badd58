pub mod author;
pub mod book;

pub use author::Author;
pub use book::Book;

/// Identifier shared by every entity; matches GraphQL `Int`.
pub type EntityId = i32;

/// Anything stored in an append-only collection keyed by a sequential id.
pub trait Entity: Clone {
    fn id(&self) -> EntityId;
}
