use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tower_http::trace::TraceLayer;

mod schema;
mod store;

use schema::BooksSchema;
pub use schema::make_schema;
pub use store::BookStore;

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

#[axum::debug_handler]
async fn graphql_handler(State(schema): State<BooksSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub fn make_app(store: BookStore) -> Router {
    let schema = make_schema(store);

    Router::new()
        .route("/", get(graphiql).post(graphql_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}
