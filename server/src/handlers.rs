//! Route handlers. Each one calls exactly one `TodoStore` operation.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::ApiError;
use crate::model::{Todo, TodoId, TodoPayload};
use crate::store::{StoreError, TodoStore};

/// Ids that do not parse can never have been issued, so they are unknown.
fn parse_id(raw: &str) -> Result<TodoId, StoreError> {
    raw.parse().map_err(|_| StoreError::NotFound)
}

/// Decodes the body as JSON whatever the `Content-Type` header says.
fn payload(body: &Bytes) -> Result<TodoPayload, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "rejected request body");
        ApiError::InvalidPayload
    })
}

pub async fn list_todos(State(store): State<TodoStore>) -> Json<Vec<Todo>> {
    Json(store.list())
}

pub async fn get_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let todo = store.get(parse_id(&id)?)?;
    Ok(Json(todo))
}

pub async fn create_todo(
    State(store): State<TodoStore>,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let input = payload(&body)?;
    if input.title.is_empty() {
        return Err(ApiError::MissingTitle);
    }

    let todo = store.create(input.title);
    tracing::info!(id = %todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Todo>, ApiError> {
    let input = payload(&body)?;
    let todo = store.update(parse_id(&id)?, input.title, input.completed)?;
    tracing::info!(id = %todo.id, completed = todo.completed, "todo updated");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    parse_id(&id)
        .and_then(|id| store.soft_delete(id))
        .map_err(|_| ApiError::NotFoundOrDeleted)?;
    tracing::info!(%id, "todo soft-deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn restore_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let todo = store.restore(parse_id(&id)?)?;
    tracing::info!(id = %todo.id, "todo restored");
    Ok(Json(todo))
}

pub async fn hard_delete_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    store.hard_delete(parse_id(&id)?)?;
    tracing::info!(%id, "todo purged");
    Ok(StatusCode::NO_CONTENT)
}
