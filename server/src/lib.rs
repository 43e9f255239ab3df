//! HTTP todo service over an in-memory store with soft delete.
//!
//! `TodoStore` owns all data behind one mutex; the handlers in [`handlers`]
//! are thin glue that map each route onto a single store call.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod store;
pub mod telemetry;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::{Config, ConfigError, LogFormat};
pub use error::ApiError;
pub use model::{InvalidTodoId, Todo, TodoId, TodoPayload};
pub use store::{StoreError, TodoStore};

/// Router over a fresh, empty store.
pub fn app() -> Router {
    app_with_store(TodoStore::new())
}

pub fn app_with_store(store: TodoStore) -> Router {
    Router::new()
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .route("/todos/{id}/restore", post(handlers::restore_todo))
        .route("/todos/{id}/hard", delete(handlers::hard_delete_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, TodoStore::new()).await
}

/// Serves `store` until Ctrl-C is received.
pub async fn serve(listener: TcpListener, store: TodoStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_store(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down gracefully");
}
