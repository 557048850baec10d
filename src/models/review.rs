//! Review model

use async_graphql::{SimpleObject, ID};
use serde::Serialize;

/// A reader review
///
/// `rating` carries no declared bound. Reviews are not linked to a book; the
/// source data never modeled that relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
pub struct Review {
    pub id: ID,
    pub rating: i32,
    pub content: String,
}
