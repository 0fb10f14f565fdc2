//! Translate an incoming natural language phrase to an execution plan.

use query_engine_metadata::metadata;
use query_engine_sql::sql;

use super::error::Error;
use super::helpers::normalize;
use super::intent::QueryIntent;
use super::{literal, pattern};

/// Definition of an execution plan to be run against the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionPlan {
    /// The phrase after normalization.
    pub natural_query: String,
    pub intent: QueryIntent,
    pub statement: sql::ast::Statement,
}

impl ExecutionPlan {
    /// Extract the query component as SQL.
    pub fn query_sql(&self) -> sql::string::SQL {
        sql::helpers::statement_to_sql(&self.statement)
    }
}

/// Translate a phrase to an execution plan.
///
/// The template grammar is tried first and the literal phrase table second.
/// Their languages do not overlap, since the template needs a keyword
/// between the verb and "orders".
pub fn translate(metadata: &metadata::Metadata, raw_query: &str) -> Result<ExecutionPlan, Error> {
    let natural_query = normalize(raw_query);

    let intent = pattern::translate(&natural_query)
        .or_else(|| literal::lookup(&natural_query))
        .ok_or_else(|| {
            tracing::debug!(natural_query = %natural_query, "phrase not recognized");
            Error::UnsupportedQuery(raw_query.to_string())
        })?;

    let plan = ExecutionPlan {
        statement: intent.to_statement(&metadata.table),
        natural_query,
        intent,
    };

    tracing::debug!(
        natural_query = %plan.natural_query,
        intent = %plan.intent,
        generated_sql = %plan.query_sql(),
        "translated phrase"
    );

    Ok(plan)
}
