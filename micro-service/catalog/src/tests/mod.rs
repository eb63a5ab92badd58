use async_graphql::{EmptySubscription, Request, Schema, Variables};
use serde_json::{Value, json};
use std::sync::Arc;

use app_config::AppConfig;
use app_models::{Author, Book};

use crate::schema::{
    ApiSchema, create_schema, mutation::create_mutation, query::create_query, schema_sdl,
};
use crate::service::{CatalogService, CatalogServiceTrait};

fn setup_schema() -> (ApiSchema, Arc<CatalogService>) {
    let catalog = Arc::new(CatalogService::seeded());
    let schema = create_schema(Arc::clone(&catalog), &AppConfig::default().graphql);
    (schema, catalog)
}

async fn execute(schema: &ApiSchema, query: &str, variables: Option<Value>) -> Value {
    let mut request = Request::new(query);
    if let Some(vars) = variables {
        request = request.variables(Variables::from_json(vars));
    }

    let response = schema.execute(request).await;
    assert!(response.errors.is_empty(), "unexpected errors: {:?}", response.errors);
    response.data.into_json().unwrap()
}

#[test]
fn lookups_by_id_match_seed_or_are_absent() {
    let catalog = CatalogService::seeded();

    assert_eq!(
        catalog.get_book_by_id(4),
        Some(Book::new(4, "The Fellowship of the Ring", 2))
    );
    assert_eq!(
        catalog.get_author_by_id(3),
        Some(Author::new(3, "Brent Weeks"))
    );
    assert_eq!(catalog.get_book_by_id(9999), None);
    assert_eq!(catalog.get_author_by_id(9999), None);
}

#[test]
fn books_of_author_keep_insertion_order() {
    let catalog = CatalogService::seeded();
    let rowling = catalog.get_author_by_id(1).unwrap();

    let names: Vec<String> = catalog
        .resolve_books_of(&rowling)
        .into_iter()
        .map(|book| book.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "Harry Potter and the Chamber of Secrets",
            "Harry Potter and the Prisoner of Azkaban",
            "Harry Potter and the Goblet of Fire",
        ]
    );

    let newcomer = catalog.add_author("Terry Pratchett".to_string());
    assert!(catalog.resolve_books_of(&newcomer).is_empty());
}

#[test]
fn author_of_book_resolves_or_is_absent() {
    let catalog = CatalogService::seeded();

    let book = catalog.get_book_by_id(7).unwrap();
    assert_eq!(
        catalog.resolve_author_of(&book).map(|a| a.name),
        Some("Brent Weeks".to_string())
    );

    let orphan = catalog.add_book("Unattributed".to_string(), 404);
    assert_eq!(catalog.resolve_author_of(&orphan), None);
}

#[test]
fn mutations_assign_next_ids() {
    let catalog = CatalogService::seeded();

    let author = catalog.add_author("Terry Pratchett".to_string());
    assert_eq!(author, Author::new(4, "Terry Pratchett"));
    assert_eq!(catalog.list_authors()[3], author);

    let mort = catalog.add_book("Mort".to_string(), 4);
    assert_eq!(mort, Book::new(9, "Mort", 4));

    let next = catalog.add_book("Eric".to_string(), 4);
    assert_eq!(next.id, 10);
    assert_eq!(catalog.stats().books, 10);
}

#[test]
fn one_to_many_and_many_to_one_agree() {
    let catalog = CatalogService::seeded();

    for author in catalog.list_authors() {
        let books = catalog.resolve_books_of(&author);
        let first = books.first().expect("every seeded author has books");
        assert_eq!(catalog.resolve_author_of(first), Some(author));
    }
}

#[tokio::test]
async fn query_book_with_author() {
    let (schema, _) = setup_schema();

    let data = execute(
        &schema,
        "query Book($id: Int!) { book(id: $id) { id name authorId author { name } } }",
        Some(json!({ "id": 7 })),
    )
    .await;

    assert_eq!(
        data,
        json!({
            "book": {
                "id": 7,
                "name": "The Way of Shadows",
                "authorId": 3,
                "author": { "name": "Brent Weeks" }
            }
        })
    );
}

#[tokio::test]
async fn query_missing_entities_returns_null() {
    let (schema, _) = setup_schema();

    let data = execute(
        &schema,
        "{ book(id: 9999) { id } author(id: 9999) { id } }",
        None,
    )
    .await;

    assert_eq!(data, json!({ "book": null, "author": null }));
}

#[tokio::test]
async fn query_lists_in_insertion_order() {
    let (schema, _) = setup_schema();

    let data = execute(&schema, "{ books { id } authors { name } }", None).await;

    let ids: Vec<i64> = data["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    assert_eq!(
        data["authors"],
        json!([
            { "name": "J. K. Rowling" },
            { "name": "J. R. R. Tolkien" },
            { "name": "Brent Weeks" }
        ])
    );
}

#[tokio::test]
async fn author_books_is_empty_list_not_null() {
    let (schema, _) = setup_schema();

    let data = execute(
        &schema,
        r#"mutation { addAuthor(name: "Terry Pratchett") { id books { id } } }"#,
        None,
    )
    .await;

    assert_eq!(data, json!({ "addAuthor": { "id": 4, "books": [] } }));
}

#[tokio::test]
async fn mutations_are_visible_to_later_queries() {
    let (schema, catalog) = setup_schema();

    let data = execute(
        &schema,
        r#"mutation { addAuthor(name: "Terry Pratchett") { id name } }"#,
        None,
    )
    .await;
    assert_eq!(
        data,
        json!({ "addAuthor": { "id": 4, "name": "Terry Pratchett" } })
    );

    let data = execute(
        &schema,
        "mutation AddBook($name: String!, $authorId: Int!) { addBook(name: $name, authorId: $authorId) { id name authorId } }",
        Some(json!({ "name": "Mort", "authorId": 4 })),
    )
    .await;
    assert_eq!(
        data,
        json!({ "addBook": { "id": 9, "name": "Mort", "authorId": 4 } })
    );

    let data = execute(&schema, "{ author(id: 4) { books { name author { id } } } }", None).await;
    assert_eq!(
        data,
        json!({ "author": { "books": [ { "name": "Mort", "author": { "id": 4 } } ] } })
    );

    assert_eq!(catalog.stats().authors, 4);
}

#[tokio::test]
async fn orphaned_book_has_null_author() {
    let (schema, _) = setup_schema();

    let data = execute(
        &schema,
        r#"mutation { addBook(name: "Lost Manuscript", authorId: 77) { id author { id } } }"#,
        None,
    )
    .await;

    assert_eq!(data, json!({ "addBook": { "id": 9, "author": null } }));
}

#[tokio::test]
async fn missing_required_argument_is_rejected_before_resolvers() {
    let (schema, catalog) = setup_schema();

    let response = schema
        .execute(r#"mutation { addBook(name: "No Author") { id } }"#)
        .await;

    assert!(!response.errors.is_empty());
    assert_eq!(catalog.stats().books, 8);
}

#[tokio::test]
async fn missing_catalog_surfaces_server_error_code() {
    let schema = Schema::build(create_query(), create_mutation(), EmptySubscription).finish();

    let response = schema.execute("{ books { id } }").await;

    assert_eq!(response.errors.len(), 1);
    let extensions = response.errors[0].extensions.as_ref().unwrap();
    assert_eq!(
        extensions.get("code"),
        Some(&async_graphql::Value::from("SERVER_ERROR"))
    );
    // A root resolver error nulls the whole payload
    assert_eq!(response.data, async_graphql::Value::Null);
}

#[test]
fn sdl_describes_public_contract() {
    let sdl = schema_sdl();

    assert!(sdl.contains("type Book"));
    assert!(sdl.contains("type Author"));
    assert!(sdl.contains("authorId: Int!"));
    assert!(sdl.contains("book(id: Int!): Book"));
    assert!(sdl.contains("author(id: Int!): Author"));
    assert!(sdl.contains("books: [Book]\n"));
    assert!(sdl.contains("authors: [Author]\n"));
    assert!(!sdl.contains("[Book!]"));
    assert!(!sdl.contains("[Author!]"));
    assert!(sdl.contains("addBook(name: String!, authorId: Int!): Book"));
    assert!(sdl.contains("addAuthor(name: String!): Author"));
}
