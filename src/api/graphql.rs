//! GraphQL endpoint handlers

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use crate::AppState;

/// Execute a GraphQL request
///
/// The request carries the query document plus optional variables; the
/// response is the executor's `data`/`errors` envelope. Validation failures
/// are reported inside the envelope with a 200 status.
pub async fn execute(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// Serve the GraphiQL IDE on the same endpoint
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}
