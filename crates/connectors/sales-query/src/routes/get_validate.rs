use axum::{extract::State, Json};

use crate::{
    extract::{Authorized, NaturalQuery},
    state::ServerState,
    types::output::ValidateResponse,
};

/// Report whether a phrase translates. An untranslatable phrase is a
/// successful response with `valid: false`, not an error.
pub async fn get_validate(
    _: Authorized,
    State(state): State<ServerState>,
    NaturalQuery(params): NaturalQuery,
) -> Json<ValidateResponse> {
    state.metrics.validate_total.inc();

    Json(match super::translate(&state, &params.natural_query) {
        Ok(plan) => ValidateResponse::valid(plan.query_sql().sql),
        Err(_) => ValidateResponse::invalid("Unsupported Query".to_string()),
    })
}
