pub mod author;
pub mod book;

use async_graphql::MergedObject;

#[derive(MergedObject, Default)]
pub struct Mutation(book::BookMutation, author::AuthorMutation);

pub fn create_mutation() -> Mutation {
    Mutation(book::BookMutation, author::AuthorMutation)
}
