//! Translate a natural language phrase to an ExecutionPlan (SQL) to be run against the database.

pub mod error;
pub mod helpers;
pub mod intent;
pub mod literal;
pub mod pattern;
pub mod query;
