//! Entity models exposed through the GraphQL schema

pub mod author;
pub mod book;
pub mod review;

pub use author::Author;
pub use book::Book;
pub use review::Review;
