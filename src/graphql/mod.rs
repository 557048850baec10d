//! GraphQL schema assembly
//!
//! `async-graphql` acts as the query executor: it parses and validates
//! incoming documents against the typed schema, dispatches validated root
//! fields to the resolvers on [`QueryRoot`], and assembles the `data`/`errors`
//! response envelope. Invalid documents come back as structured errors in
//! that envelope, never as a process failure.

mod query;

use std::sync::Arc;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};

pub use query::QueryRoot;

use crate::store::FixtureStore;

/// Executable schema type for the Bookshelf API
pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the executable schema around a shared store handle
pub fn build_schema(store: Arc<FixtureStore>) -> AppSchema {
    Schema::build(QueryRoot::new(store), EmptyMutation, EmptySubscription).finish()
}
