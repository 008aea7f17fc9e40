//! Route registration: the five fixed todo routes plus operational routes.

pub mod common;
pub mod todo;

pub use common::common_routes;
pub use todo::todo_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Full application router: operational routes and todo CRUD at the root.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(todo_routes(state))
        .layer(TraceLayer::new_for_http())
}
