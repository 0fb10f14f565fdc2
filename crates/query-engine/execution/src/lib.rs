//! Query execution against a SQLite database.

pub mod database;
pub mod error;
pub mod execution;
pub mod metrics;
