//! Query root resolvers

use std::sync::Arc;

use async_graphql::Object;

use crate::models::{Author, Book, Review};
use crate::store::FixtureStore;

/// Root query type: one resolver per fixture collection
///
/// The root fields are declared `[Book]`, `[Review]` and `[Author]` — list
/// and elements both nullable — even though the store always produces fully
/// populated lists. Clients code against the nullable contract, so the
/// looser shape stays.
pub struct QueryRoot {
    store: Arc<FixtureStore>,
}

impl QueryRoot {
    pub fn new(store: Arc<FixtureStore>) -> Self {
        Self { store }
    }
}

#[Object]
impl QueryRoot {
    /// All books, in fixture order
    async fn books(&self) -> Option<Vec<Option<Book>>> {
        Some(self.store.books().iter().cloned().map(Some).collect())
    }

    /// All reviews, in fixture order
    async fn reviews(&self) -> Option<Vec<Option<Review>>> {
        Some(self.store.reviews().iter().cloned().map(Some).collect())
    }

    /// All authors, in fixture order
    async fn authors(&self) -> Option<Vec<Option<Author>>> {
        Some(self.store.authors().iter().cloned().map(Some).collect())
    }
}
