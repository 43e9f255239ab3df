//! Stateless request builder and response parser for the todo API.
//!
//! Every route has a `build_*` method producing an `HttpRequest` and a
//! `parse_*` method consuming the matching `HttpResponse`. The client never
//! performs I/O itself.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, ErrorBody, Todo, UpdateTodo};

#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}/todos{suffix}", self.base_url)
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.url(""))
    }

    pub fn build_get_todo(&self, id: &str) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.url(&format!("/{id}")))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest::new(HttpMethod::Post, self.url("")).with_json(to_json(input)?))
    }

    pub fn build_update_todo(&self, id: &str, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest::new(HttpMethod::Put, self.url(&format!("/{id}"))).with_json(to_json(input)?))
    }

    /// Soft delete; the todo can be brought back with `build_restore_todo`.
    pub fn build_delete_todo(&self, id: &str) -> HttpRequest {
        HttpRequest::new(HttpMethod::Delete, self.url(&format!("/{id}")))
    }

    pub fn build_restore_todo(&self, id: &str) -> HttpRequest {
        HttpRequest::new(HttpMethod::Post, self.url(&format!("/{id}/restore")))
    }

    /// Permanent removal, allowed for active and soft-deleted todos alike.
    pub fn build_hard_delete_todo(&self, id: &str) -> HttpRequest {
        HttpRequest::new(HttpMethod::Delete, self.url(&format!("/{id}/hard")))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 201)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    pub fn parse_restore_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_hard_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }
}

fn to_json<T: Serialize>(input: &T) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse, expected: u16) -> Result<T, ApiError> {
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success statuses to `ApiError`, keeping the server's message.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    let message = || {
        serde_json::from_str::<ErrorBody>(&response.body)
            .map(|body| body.error)
            .unwrap_or_else(|_| response.body.clone())
    };
    match response.status {
        404 => Err(ApiError::NotFound { message: message() }),
        400 => Err(ApiError::BadRequest { message: message() }),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TODO_JSON: &str = r#"{"id":"1","title":"Test","completed":false,"created_at":"2024-05-01T10:00:00Z","updated_at":"2024-05-01T10:00:00Z","deleted_at":null}"#;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:8080")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_todo_produces_correct_request() {
        let req = client().build_get_todo("3");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/todos/3");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_todo_produces_correct_request() {
        let input = CreateTodo {
            title: "Buy milk".to_string(),
            completed: false,
        };
        let req = client().build_create_todo(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8080/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Buy milk");
        assert_eq!(body["completed"], false);
    }

    #[test]
    fn build_update_todo_sends_both_fields() {
        let input = UpdateTodo {
            title: "Updated".to_string(),
            completed: true,
        };
        let req = client().build_update_todo("2", &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:8080/todos/2");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Updated");
        assert_eq!(body["completed"], true);
    }

    #[test]
    fn build_delete_variants() {
        let c = client();
        let soft = c.build_delete_todo("4");
        assert_eq!(soft.method, HttpMethod::Delete);
        assert_eq!(soft.path, "http://localhost:8080/todos/4");

        let hard = c.build_hard_delete_todo("4");
        assert_eq!(hard.method, HttpMethod::Delete);
        assert_eq!(hard.path, "http://localhost:8080/todos/4/hard");
        assert!(hard.body.is_none());
    }

    #[test]
    fn build_restore_todo_produces_correct_request() {
        let req = client().build_restore_todo("4");
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8080/todos/4/restore");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_todos_success() {
        let todos = client()
            .parse_list_todos(response(200, &format!("[{TODO_JSON}]")))
            .unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, "1");
        assert_eq!(todos[0].title, "Test");
        assert!(todos[0].deleted_at.is_none());
    }

    #[test]
    fn parse_get_todo_not_found_keeps_message() {
        let err = client()
            .parse_get_todo(response(404, r#"{"error":"Todo not found"}"#))
            .unwrap_err();
        match err {
            ApiError::NotFound { message } => assert_eq!(message, "Todo not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn parse_create_todo_success() {
        let todo = client().parse_create_todo(response(201, TODO_JSON)).unwrap();
        assert_eq!(todo.title, "Test");
        assert!(!todo.completed);
    }

    #[test]
    fn parse_create_todo_bad_request() {
        let err = client()
            .parse_create_todo(response(400, r#"{"error":"Title is required"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest { ref message } if message == "Title is required"));
    }

    #[test]
    fn parse_create_todo_wrong_status() {
        let err = client()
            .parse_create_todo(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_restore_todo_not_deleted() {
        let err = client()
            .parse_restore_todo(response(404, r#"{"error":"Todo is not deleted"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound { ref message } if message == "Todo is not deleted"));
    }

    #[test]
    fn parse_delete_variants() {
        let c = client();
        assert!(c.parse_delete_todo(response(204, "")).is_ok());
        assert!(c.parse_hard_delete_todo(response(204, "")).is_ok());
        let err = c.parse_hard_delete_todo(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound { ref message } if message.is_empty()));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:8080/");
        let req = client.build_list_todos();
        assert_eq!(req.path, "http://localhost:8080/todos");
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = client()
            .parse_list_todos(response(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
