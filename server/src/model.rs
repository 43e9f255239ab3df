//! Wire and storage types for the todo service.
//!
//! `Todo` is both the stored entity and the JSON response body. Field names
//! are part of the HTTP contract.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The string is not an id the store could have issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid todo id {0:?}")]
pub struct InvalidTodoId(String);

/// Sequential identifier, rendered as a decimal string on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TodoId(u64);

impl TodoId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Only the canonical decimal form is accepted: `"01"` and `"+1"` are not `"1"`.
impl FromStr for TodoId {
    type Err = InvalidTodoId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && (s == "0" || !s.starts_with('0'));
        if !canonical {
            return Err(InvalidTodoId(s.to_string()));
        }
        s.parse().map(Self).map_err(|_| InvalidTodoId(s.to_string()))
    }
}

impl From<TodoId> for String {
    fn from(id: TodoId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for TodoId {
    type Error = InvalidTodoId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// `None` while the todo is active.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Todo {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Body accepted by `POST /todos` and `PUT /todos/{id}`.
///
/// Missing fields fall back to their zero values, so `{}` decodes to an
/// empty title and `completed: false`.
#[derive(Debug, Default, Deserialize)]
pub struct TodoPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}
