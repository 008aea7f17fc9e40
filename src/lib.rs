//! Todo REST backend: five CRUD endpoints over one PostgreSQL table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::AppError;
pub use migration::apply_migrations;
pub use response::{created, failed, ok, Envelope, MESSAGE_FAILED, MESSAGE_SUCCESS};
pub use routes::{app_router, common_routes, todo_routes};
pub use state::AppState;
