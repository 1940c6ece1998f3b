use axum::{Router, routing::get};

use std::sync::Arc;

use crate::{ServerError, expenses, statistics};
use engine::{Engine, EngineError};

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

impl ServerState {
    /// Run `f` against the engine on the blocking pool.
    ///
    /// Engine calls hold a lock across file I/O and must not stall the
    /// async workers.
    pub(crate) async fn with_engine<T, F>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&Engine) -> Result<T, EngineError> + Send + 'static,
        T: Send + 'static,
    {
        let engine = Arc::clone(&self.engine);
        tokio::task::spawn_blocking(move || f(&engine))
            .await
            .map_err(|err| ServerError::Internal(format!("engine task failed: {err}")))?
            .map_err(ServerError::from)
    }
}

pub fn router(engine: Arc<Engine>) -> Router {
    let state = ServerState { engine };

    Router::new()
        .route("/expenses", get(expenses::list).post(expenses::create))
        .route(
            "/expenses/{id}",
            get(expenses::get).delete(expenses::delete),
        )
        .route("/summary", get(statistics::get_summary))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(Arc::new(engine))).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
