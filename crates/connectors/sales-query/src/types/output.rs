use query_engine_execution::execution::ResultRow;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Response of `/query`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub query: String,
    pub sql: String,
    pub results: Vec<ResultRow>,
}

/// Response of `/explain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub query: String,
    pub sql: String,
}

/// Response of `/validate`. Exactly one of `sql_translation` and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidateResponse {
    pub fn valid(sql: String) -> Self {
        ValidateResponse {
            valid: true,
            sql_translation: Some(sql),
            error: None,
        }
    }

    pub fn invalid(error: String) -> Self {
        ValidateResponse {
            valid: false,
            sql_translation: None,
            error: Some(error),
        }
    }
}
