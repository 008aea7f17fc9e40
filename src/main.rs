//! Process entry point: config → pool → migrations → routes → serve.
//!
//! Every startup failure propagates here as an error value and aborts the
//! process before any traffic is served.

use sqlx::postgres::PgPoolOptions;
use todo_service::{app_router, apply_migrations, AppError, AppState, Config};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("todo_service=info,tower_http=info")),
        )
        .init();

    let config = Config::load()?;
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_with(config.connect_options())
        .await?;
    apply_migrations(&pool).await?;

    let app = app_router(AppState { pool });

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
