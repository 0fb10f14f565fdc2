use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use query_engine_execution::error::Error as ExecutionError;
use query_engine_translation::translation::error::Error as TranslationError;

/// Errors a handler can answer with.
#[derive(Debug)]
pub enum ServerError {
    UnsupportedQuery,
    InvalidRequest(String),
    MissingApiKey,
    InvalidApiKey,
    DatabaseError(String),
    Internal(String),
}

#[derive(Serialize)]
struct JsonErrorResponse {
    message: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::UnsupportedQuery => {
                (StatusCode::BAD_REQUEST, "Unsupported query".to_string())
            }
            ServerError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::MissingApiKey => (StatusCode::FORBIDDEN, "Not authenticated".to_string()),
            ServerError::InvalidApiKey => (StatusCode::FORBIDDEN, "Invalid API Key".to_string()),
            ServerError::DatabaseError(msg) | ServerError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        if status.is_server_error() {
            tracing::error!(%status, error = %message, "returning error");
        } else {
            tracing::info!(%status, error = %message, "returning error");
        }
        (status, Json(JsonErrorResponse { message })).into_response()
    }
}

impl From<TranslationError> for ServerError {
    fn from(value: TranslationError) -> Self {
        match value {
            TranslationError::UnsupportedQuery(_) => ServerError::UnsupportedQuery,
        }
    }
}

impl From<ExecutionError> for ServerError {
    fn from(value: ExecutionError) -> Self {
        ServerError::DatabaseError(value.to_string())
    }
}

impl From<prometheus::Error> for ServerError {
    fn from(value: prometheus::Error) -> Self {
        ServerError::Internal(value.to_string())
    }
}
