//! Errors for query execution.

use thiserror::Error;

/// Query execution error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    DB(#[from] sqlx::Error),
    #[error("column {column} holds an unsupported value of type {type_name}")]
    UnsupportedColumnType { column: String, type_name: String },
}
