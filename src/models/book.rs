//! Book model

use async_graphql::{SimpleObject, ID};
use serde::Serialize;

/// A catalog book entry
///
/// `category` is an ordered list with non-null elements; the order is part of
/// the fixture and must be preserved in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
pub struct Book {
    pub id: ID,
    pub title: String,
    pub category: Vec<String>,
}
