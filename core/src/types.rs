//! DTOs for the todo API.
//!
//! Defined independently of the server crate; the integration test catches
//! schema drift between the two.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A todo as returned by the API. `id` is a decimal string such as `"3"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Request payload for creating a todo. The server always starts new todos
/// as incomplete; `completed` is sent for wire compatibility only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for `PUT`. Both fields replace the stored values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub title: String,
    pub completed: bool,
}

/// Body of every 4xx response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
