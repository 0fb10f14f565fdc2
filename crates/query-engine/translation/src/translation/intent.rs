//! What a recognized phrase asks for, independent of how it was phrased.

use std::fmt;

use query_engine_metadata::metadata::{Category, OrderStatus, TableInfo};
use query_engine_sql::sql::{ast, helpers};

/// The operation requested by the verb of a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// "show all"
    ListAll,
    /// "count all"
    CountAll,
}

impl Operation {
    /// Parse the verb of a normalized phrase.
    pub fn from_verb(verb: &str) -> Option<Operation> {
        match verb {
            "show all" => Some(Operation::ListAll),
            "count all" => Some(Operation::CountAll),
            _ => None,
        }
    }
}

/// The optional filter dimension of a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    NoFilter,
    ByCategory(Category),
    ByStatus(OrderStatus),
}

/// The operation and filter a phrase translates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryIntent {
    pub operation: Operation,
    pub filter: Filter,
}

impl QueryIntent {
    pub fn new(operation: Operation, filter: Filter) -> QueryIntent {
        QueryIntent { operation, filter }
    }

    /// Build the statement answering this intent against the given table.
    pub fn to_statement(&self, table: &TableInfo) -> ast::Statement {
        let table_name = ast::TableName(table.table_name.clone());
        let mut select = match self.operation {
            Operation::ListAll => helpers::star_select(table_name),
            Operation::CountAll => helpers::count_select(table_name),
        };

        select.where_ = match self.filter {
            Filter::NoFilter => None,
            Filter::ByCategory(category) => Some(helpers::column_equals(
                ast::ColumnName(table.columns.category.clone()),
                category.as_str(),
            )),
            Filter::ByStatus(status) => Some(helpers::column_equals(
                ast::ColumnName(table.columns.status.clone()),
                status.as_str(),
            )),
        };

        ast::Statement::Select(select)
    }
}

impl fmt::Display for QueryIntent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let operation = match self.operation {
            Operation::ListAll => "list",
            Operation::CountAll => "count",
        };
        match self.filter {
            Filter::NoFilter => write!(f, "{operation} all orders"),
            Filter::ByCategory(category) => write!(f, "{operation} orders in category {category}"),
            Filter::ByStatus(status) => write!(f, "{operation} orders with status {status}"),
        }
    }
}
