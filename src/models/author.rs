//! Author model

use async_graphql::{SimpleObject, ID};
use serde::Serialize;

/// An author profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
pub struct Author {
    pub id: ID,
    pub name: String,
    pub verified: bool,
}
