//! Metadata information regarding the orders table.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TABLE_NAME: &str = "sales_table";
pub const DEFAULT_CATEGORY_COLUMN: &str = "category";
pub const DEFAULT_STATUS_COLUMN: &str = "status";

/// Information about the table holding the orders.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableInfo {
    pub table_name: String,
    pub columns: ColumnsInfo,
}

impl Default for TableInfo {
    fn default() -> Self {
        TableInfo {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            columns: ColumnsInfo::default(),
        }
    }
}

/// The columns a phrase can filter on.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnsInfo {
    /// Column holding a `Category`.
    pub category: String,
    /// Column holding an `OrderStatus`.
    pub status: String,
}

impl Default for ColumnsInfo {
    fn default() -> Self {
        ColumnsInfo {
            category: DEFAULT_CATEGORY_COLUMN.to_string(),
            status: DEFAULT_STATUS_COLUMN.to_string(),
        }
    }
}

impl TableInfo {
    /// All identifiers this table contributes to generated SQL.
    pub fn identifiers(&self) -> [&str; 3] {
        [
            self.table_name.as_str(),
            self.columns.category.as_str(),
            self.columns.status.as_str(),
        ]
    }
}
