use axum::{extract::State, Json};

use crate::{
    error::ServerError,
    extract::{Authorized, NaturalQuery},
    state::ServerState,
    types::output::ExplainResponse,
};

/// Return the SQL a phrase translates to without running it.
pub async fn get_explain(
    _: Authorized,
    State(state): State<ServerState>,
    NaturalQuery(params): NaturalQuery,
) -> Result<Json<ExplainResponse>, ServerError> {
    let plan = super::translate(&state, &params.natural_query)?;

    state.metrics.explain_total.inc();

    Ok(Json(ExplainResponse {
        query: params.natural_query,
        sql: plan.query_sql().sql,
    }))
}
