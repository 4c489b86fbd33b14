use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::ApiState;

async fn graphql_handler(State(state): State<Arc<ApiState>>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

async fn graphql_playground(State(state): State<Arc<ApiState>>) -> Response {
    if !state.graphql_playground {
        return StatusCode::NOT_FOUND.into_response();
    }

    Html(GraphiQLSource::build().endpoint("/graphql").finish()).into_response()
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route("/graphql", get(graphql_playground).post(graphql_handler))
}
