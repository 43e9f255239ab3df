//! In-memory todo store.
//!
//! A single `parking_lot::Mutex` guards both the map and the id counter.
//! Every public method holds the lock for its entire body, so each
//! read-modify-write sequence is atomic with respect to other callers. The
//! lock is never held across an `.await`.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use thiserror::Error;

use crate::model::{Todo, TodoId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Unknown id, or an id hidden by soft deletion on paths that skip it.
    #[error("todo not found")]
    NotFound,

    /// Restore was requested for a todo that is still active.
    #[error("todo is not deleted")]
    NotDeleted,
}

#[derive(Debug)]
struct Inner {
    todos: BTreeMap<TodoId, Todo>,
    next_id: TodoId,
}

impl Inner {
    fn active_mut(&mut self, id: TodoId) -> Result<&mut Todo, StoreError> {
        match self.todos.get_mut(&id) {
            Some(todo) if !todo.is_deleted() => Ok(todo),
            _ => Err(StoreError::NotFound),
        }
    }
}

/// Shared handle to the todo collection. Clones refer to the same data.
#[derive(Debug, Clone)]
pub struct TodoStore {
    inner: Arc<Mutex<Inner>>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                todos: BTreeMap::new(),
                next_id: TodoId::new(1),
            })),
        }
    }

    /// Store seeded with a single sample todo; the next created id is `"2"`.
    pub fn with_demo_data() -> Self {
        let store = Self::new();
        store.create("Go to the gym");
        store
    }

    /// Number of entries, soft-deleted ones included.
    pub fn len(&self) -> usize {
        self.inner.lock().todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Active todos in id order.
    pub fn list(&self) -> Vec<Todo> {
        let inner = self.inner.lock();
        inner
            .todos
            .values()
            .filter(|todo| !todo.is_deleted())
            .cloned()
            .collect()
    }

    pub fn get(&self, id: TodoId) -> Result<Todo, StoreError> {
        let inner = self.inner.lock();
        match inner.todos.get(&id) {
            Some(todo) if !todo.is_deleted() => Ok(todo.clone()),
            _ => Err(StoreError::NotFound),
        }
    }

    pub fn create(&self, title: impl Into<String>) -> Todo {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id = id.next();

        let now = Utc::now();
        let todo = Todo {
            id,
            title: title.into(),
            completed: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        inner.todos.insert(id, todo.clone());
        todo
    }

    pub fn update(
        &self,
        id: TodoId,
        title: impl Into<String>,
        completed: bool,
    ) -> Result<Todo, StoreError> {
        let mut inner = self.inner.lock();
        let todo = inner.active_mut(id)?;
        todo.title = title.into();
        todo.completed = completed;
        todo.updated_at = advance(todo.updated_at);
        Ok(todo.clone())
    }

    pub fn soft_delete(&self, id: TodoId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock();
        let todo = inner.active_mut(id)?;
        todo.deleted_at = Some(Utc::now());
        Ok(())
    }

    pub fn restore(&self, id: TodoId) -> Result<Todo, StoreError> {
        let mut inner = self.inner.lock();
        let todo = inner.todos.get_mut(&id).ok_or(StoreError::NotFound)?;
        if todo.deleted_at.take().is_none() {
            return Err(StoreError::NotDeleted);
        }
        todo.updated_at = advance(todo.updated_at);
        Ok(todo.clone())
    }

    /// Removes the entry whether or not it was soft-deleted.
    pub fn hard_delete(&self, id: TodoId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock();
        inner
            .todos
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

/// Current time, bumped past `previous` when the clock has not moved.
fn advance(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::nanoseconds(1)
    }
}
