//! Execute generated SQL against the database.

use query_engine_sql::sql;
use serde_json::Value;
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, SqlitePool, TypeInfo, ValueRef};
use tracing::{info_span, Instrument};

use crate::error::Error;
use crate::metrics::Metrics;

/// A result row: one JSON value per selected column, in column order.
pub type ResultRow = Vec<Value>;

/// Run a query and collect every row it returns.
pub async fn execute(
    pool: &SqlitePool,
    metrics: &Metrics,
    query: &sql::string::SQL,
) -> Result<Vec<ResultRow>, Error> {
    tracing::info!(generated_sql = %query, "executing query");

    let rows = sqlx::query(&query.sql)
        .fetch_all(pool)
        .instrument(info_span!("Database request"))
        .await
        .map_err(|err| {
            metrics.database_error_total.inc();
            tracing::error!(error = %err, generated_sql = %query, "query failed");
            Error::DB(err)
        })?;

    rows.iter().map(row_to_values).collect()
}

/// Convert a row to JSON values based on the storage class of each value.
fn row_to_values(row: &SqliteRow) -> Result<ResultRow, Error> {
    row.columns()
        .iter()
        .map(|column| -> Result<Value, Error> {
            let index = column.ordinal();
            let raw = row.try_get_raw(index)?;
            if raw.is_null() {
                return Ok(Value::Null);
            }
            let type_name = raw.type_info().name().to_string();
            match type_name.as_str() {
                "INTEGER" => Ok(Value::from(row.try_get_unchecked::<i64, _>(index)?)),
                "REAL" => {
                    let real = row.try_get_unchecked::<f64, _>(index)?;
                    Ok(serde_json::Number::from_f64(real).map_or(Value::Null, Value::Number))
                }
                "TEXT" => Ok(Value::String(row.try_get_unchecked::<String, _>(index)?)),
                _ => Err(Error::UnsupportedColumnType {
                    column: column.name().to_string(),
                    type_name,
                }),
            }
        })
        .collect()
}
