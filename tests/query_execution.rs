//! Query execution tests against the executable schema
//!
//! These run the real executor in-process, without the HTTP layer.

use std::sync::Arc;

use serde_json::{json, Value};

use bookshelf_server::graphql::{build_schema, AppSchema};
use bookshelf_server::store::FixtureStore;

fn schema() -> AppSchema {
    build_schema(Arc::new(FixtureStore::new()))
}

#[tokio::test]
async fn books_return_fixture_ids_and_titles_in_order() {
    let resp = schema().execute("{ books { id title } }").await;
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);

    assert_eq!(
        resp.data.into_json().unwrap(),
        json!({
            "books": [
                { "id": "1", "title": "The Great Gatsby" },
                { "id": "2", "title": "To Kill a Mockingbird" },
                { "id": "3", "title": "The Lean Startup" }
            ]
        })
    );
}

#[tokio::test]
async fn authors_return_name_and_verified_pairs_in_order() {
    let resp = schema().execute("{ authors { name verified } }").await;
    assert!(resp.errors.is_empty());

    assert_eq!(
        resp.data.into_json().unwrap(),
        json!({
            "authors": [
                { "name": "F. Scott Fitzgerald", "verified": true },
                { "name": "Harper Lee", "verified": true },
                { "name": "Eric Ries", "verified": false }
            ]
        })
    );
}

#[tokio::test]
async fn reviews_return_ratings_in_order() {
    let resp = schema().execute("{ reviews { rating } }").await;
    assert!(resp.errors.is_empty());

    assert_eq!(
        resp.data.into_json().unwrap(),
        json!({
            "reviews": [
                { "rating": 5 },
                { "rating": 3 },
                { "rating": 4 }
            ]
        })
    );
}

#[tokio::test]
async fn full_book_selection_includes_category_lists() {
    let resp = schema().execute("{ books { id title category } }").await;
    assert!(resp.errors.is_empty());

    let data = resp.data.into_json().unwrap();
    let books = data["books"].as_array().unwrap();
    assert_eq!(books.len(), 3);
    assert_eq!(books[0]["category"], json!(["Fiction", "Classic"]));
    assert_eq!(books[2]["category"], json!(["Business", "Entrepreneurship"]));
}

#[tokio::test]
async fn field_selection_returns_only_requested_fields() {
    let resp = schema().execute("{ books { title } }").await;
    assert!(resp.errors.is_empty());

    let data = resp.data.into_json().unwrap();
    for book in data["books"].as_array().unwrap() {
        let obj = book.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert!(obj.contains_key("title"));
    }
}

#[tokio::test]
async fn unknown_field_is_a_validation_error() {
    let resp = schema().execute("{ books { id publisher } }").await;

    assert!(!resp.errors.is_empty());
    assert!(resp.errors[0].message.contains("publisher"));
    assert_eq!(resp.data.into_json().unwrap(), Value::Null);
}

#[tokio::test]
async fn identical_queries_yield_identical_responses() {
    let schema = schema();
    let query = "{ books { id title category } reviews { id rating content } }";

    let first = schema.execute(query).await;
    let second = schema.execute(query).await;

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn concurrent_queries_match_sequential_responses() {
    let schema = schema();
    let books_q = "{ books { id title } }";
    let authors_q = "{ authors { name verified } }";
    let reviews_q = "{ reviews { rating } }";

    let sequential = (
        schema.execute(books_q).await,
        schema.execute(authors_q).await,
        schema.execute(reviews_q).await,
    );

    let concurrent = tokio::join!(
        schema.execute(books_q),
        schema.execute(authors_q),
        schema.execute(reviews_q),
    );

    assert_eq!(
        serde_json::to_string(&sequential.0).unwrap(),
        serde_json::to_string(&concurrent.0).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&sequential.1).unwrap(),
        serde_json::to_string(&concurrent.1).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&sequential.2).unwrap(),
        serde_json::to_string(&concurrent.2).unwrap()
    );
}

#[tokio::test]
async fn schema_exposes_nullable_root_lists() {
    let sdl = schema().sdl();

    // Roots stay [Book] / [Review] / [Author], not [Book!]!
    assert!(sdl.contains("books: [Book]"));
    assert!(sdl.contains("reviews: [Review]"));
    assert!(sdl.contains("authors: [Author]"));

    // Entity fields are non-null
    assert!(sdl.contains("title: String!"));
    assert!(sdl.contains("rating: Int!"));
    assert!(sdl.contains("verified: Boolean!"));
}
