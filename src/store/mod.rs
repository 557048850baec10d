//! In-memory fixture store
//!
//! The store is built once at startup and never mutated afterwards, so any
//! number of requests may read it concurrently without coordination.

mod fixtures;

use crate::models::{Author, Book, Review};

/// Read-only holder of the three fixture collections
///
/// Accessors return slices in fixture insertion order; resolvers clone the
/// records they hand out, so callers cannot reach the backing collections
/// mutably.
#[derive(Debug)]
pub struct FixtureStore {
    books: Vec<Book>,
    reviews: Vec<Review>,
    authors: Vec<Author>,
}

impl FixtureStore {
    /// Build the store from the fixture literals
    pub fn new() -> Self {
        Self {
            books: fixtures::books(),
            reviews: fixtures::reviews(),
            authors: fixtures::authors(),
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new()
    }
}
