use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use api_types::ErrorBody;
pub use server::{ServerState, router, run_with_listener, spawn_with_listener};

mod expenses;
mod server;
mod statistics;

pub mod types {
    pub mod expense {
        pub use api_types::expense::{ExpenseNew, ExpenseView};
    }

    pub mod stats {
        pub use api_types::stats::Summary;
    }
}

#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
    /// Rejected request, answered with `400 Bad Request`.
    Generic(String),
    /// Failure outside the engine, answered with `500` and logged.
    Internal(String),
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::NotFound(_) => StatusCode::NOT_FOUND,
        EngineError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        EngineError::Io(_) | EngineError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Io(io_err) => {
            tracing::error!("storage error: {io_err}");
            "internal server error".to_string()
        }
        EngineError::Serialization(json_err) => {
            tracing::error!("serialization error: {json_err}");
            "internal server error".to_string()
        }
        EngineError::NotFound(_) => "expense not found".to_string(),
        EngineError::InvalidInput(msg) => msg,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
            ServerError::Generic(err) => {
                tracing::warn!("rejected request: {err}");
                (StatusCode::BAD_REQUEST, err)
            }
            ServerError::Internal(err) => {
                tracing::error!("{err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
