//! HTTP API handlers

pub mod graphql;
pub mod health;
