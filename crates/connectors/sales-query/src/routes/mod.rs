mod get_explain;
mod get_health;
mod get_metrics;
mod get_query;
mod get_root;
mod get_validate;

pub use get_explain::get_explain;
pub use get_health::get_health;
pub use get_metrics::get_metrics;
pub use get_query::get_query;
pub use get_root::get_root;
pub use get_validate::get_validate;

use axum::{routing::get, Router};
use query_engine_translation::translation::{self, query::ExecutionPlan};

use crate::state::ServerState;

pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(get_root))
        .route("/health", get(get_health))
        .route("/metrics", get(get_metrics))
        .route("/query", get(get_query))
        .route("/explain", get(get_explain))
        .route("/validate", get(get_validate))
        .with_state(state)
}

/// Translate a phrase with the configured metadata, counting misses.
fn translate(
    state: &ServerState,
    natural_query: &str,
) -> Result<ExecutionPlan, translation::error::Error> {
    translation::query::translate(&state.configuration.metadata, natural_query)
        .inspect_err(|_| state.metrics.unsupported_query_total.inc())
}
