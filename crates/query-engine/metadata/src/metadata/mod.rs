//! Metadata information regarding the database and tracked information.

pub mod database;
pub mod vocabulary;

// re-export without modules
pub use database::*;
pub use vocabulary::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metadata information.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub table: TableInfo,
}

impl Metadata {
    /// Metadata describing the stock `sales_table`.
    pub fn sales_table() -> Self {
        Metadata {
            table: TableInfo::default(),
        }
    }
}
