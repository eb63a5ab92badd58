pub mod author;
pub mod book;

use async_graphql::MergedObject;

#[derive(MergedObject, Default)]
pub struct Query(book::BookQuery, author::AuthorQuery);

pub fn create_query() -> Query {
    Query(book::BookQuery, author::AuthorQuery)
}
