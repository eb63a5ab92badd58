//! GraphQL service exposing the in-memory book catalog.
//!
//! - **Queries**: `book`, `books`, `author`, `authors`
//! - **Mutations**: `addBook`, `addAuthor`

pub mod handlers;
pub mod routes;
pub mod schema;
pub mod service;
pub mod telemetry;

#[cfg(test)]
mod tests;
