//! Todo CRUD handlers: list, read, create, update, delete.
//!
//! Bodies are decoded leniently (see `TodoForm::from_body`); a body that does
//! not parse proceeds with zero-valued fields instead of a client error.

use crate::error::AppError;
use crate::model::TodoForm;
use crate::response::{created, ok};
use crate::state::AppState;
use crate::store;
use axum::{
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
};

fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse().map_err(|_| AppError::InvalidId(raw.to_string()))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let todos = store::list_todos(&state.pool).await?;
    Ok(ok(todos))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let todo = store::get_todo(&state.pool, id).await?;
    Ok(ok(todo))
}

pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let todo = TodoForm::from_body(&body);
    store::insert_todo(&state.pool, &todo).await?;
    Ok(created(todo))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let todo = TodoForm::from_body(&body);
    store::update_todo(&state.pool, id, &todo).await?;
    Ok(ok(todo))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let deleted = store::delete_todo(&state.pool, id).await?;
    Ok(ok(deleted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn parse_id_rejects_non_integers() {
        assert!(parse_id("abc").is_err());
        assert!(parse_id("").is_err());
        assert!(parse_id("1.5").is_err());
    }
}
