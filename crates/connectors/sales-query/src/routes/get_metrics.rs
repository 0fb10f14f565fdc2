use axum::extract::State;

use crate::{error::ServerError, state::ServerState};

/// Render every registered metric in the Prometheus text format.
pub async fn get_metrics(State(state): State<ServerState>) -> Result<String, ServerError> {
    let encoder = prometheus::TextEncoder::new();
    Ok(encoder.encode_to_string(&state.metrics_registry.gather())?)
}
