use axum::{extract::State, Json};
use query_engine_execution::execution;
use tracing::{info_span, Instrument};

use crate::{
    error::ServerError,
    extract::{Authorized, NaturalQuery},
    state::ServerState,
    types::output::QueryResponse,
};

/// Translate a phrase, run it, and return the rows.
pub async fn get_query(
    _: Authorized,
    State(state): State<ServerState>,
    NaturalQuery(params): NaturalQuery,
) -> Result<Json<QueryResponse>, ServerError> {
    let plan = super::translate(&state, &params.natural_query)?;
    let sql = plan.query_sql();

    let results = execution::execute(&state.pool, &state.metrics, &sql)
        .instrument(info_span!("Execute query", intent = %plan.intent))
        .await?;

    state.metrics.query_total.inc();

    Ok(Json(QueryResponse {
        query: params.natural_query,
        sql: sql.sql,
        results,
    }))
}
