use serde::{Deserialize, Serialize};

/// The query string every translating endpoint takes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NaturalQueryParams {
    pub natural_query: String,
}
