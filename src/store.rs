//! SQL access for the todo table.
//!
//! Each operation issues the statements of the HTTP contract and nothing
//! more; every statement commits independently under autocommit. Update and
//! delete check existence with a separate SELECT before writing. The pair is
//! not transactional, so a concurrent delete between the two statements is
//! unguarded.

use crate::error::AppError;
use crate::model::{DeletedTodo, TodoDetail, TodoForm, TodoSummary};
use sqlx::PgPool;

pub async fn list_todos(pool: &PgPool) -> Result<Vec<TodoSummary>, AppError> {
    let rows = sqlx::query_as::<_, TodoSummary>("SELECT id, title, is_done FROM todo ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Fetch one row by id. A missing row surfaces as `sqlx::Error::RowNotFound`.
pub async fn get_todo(pool: &PgPool, id: i32) -> Result<TodoDetail, AppError> {
    let row = sqlx::query_as::<_, TodoDetail>(
        "SELECT title, description, is_done FROM todo WHERE id = $1",
    )
    .bind(id)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Insert a new row; the id is generated by the database and not read back.
pub async fn insert_todo(pool: &PgPool, todo: &TodoForm) -> Result<(), AppError> {
    sqlx::query("INSERT INTO todo (title, description) VALUES ($1, $2)")
        .bind(&todo.title)
        .bind(&todo.description)
        .execute(pool)
        .await?;
    Ok(())
}

/// Existence check, then wholesale replacement of all three mutable fields.
pub async fn update_todo(pool: &PgPool, id: i32, todo: &TodoForm) -> Result<(), AppError> {
    sqlx::query_scalar::<_, i32>("SELECT id FROM todo WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await?;

    sqlx::query("UPDATE todo SET title = $2, description = $3, is_done = $4 WHERE id = $1")
        .bind(id)
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.is_done)
        .execute(pool)
        .await?;
    Ok(())
}

/// Fetch the row for the response payload, then remove it permanently.
pub async fn delete_todo(pool: &PgPool, id: i32) -> Result<DeletedTodo, AppError> {
    let row = sqlx::query_as::<_, DeletedTodo>(
        "SELECT title, description FROM todo WHERE id = $1",
    )
    .bind(id)
    .fetch_one(pool)
    .await?;

    sqlx::query("DELETE FROM todo WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(row)
}
