use anyhow::Context;
use tokio::net::TcpListener;
use todo_server::{telemetry, Config, TodoStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing(config.log_format)?;

    let store = if config.seed {
        TodoStore::with_demo_data()
    } else {
        TodoStore::new()
    };

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(addr = %listener.local_addr()?, todos = store.len(), "listening");

    todo_server::serve(listener, store).await?;
    Ok(())
}
