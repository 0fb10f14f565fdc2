//! Helpers for building sql::ast types in certain shapes and patterns.

use super::ast::*;
use super::string::SQL;

/// Build `SELECT * FROM <table>`.
pub fn star_select(table: TableName) -> Select {
    Select {
        select_list: SelectList::SelectStar,
        from: From::Table { name: table },
        where_: None,
    }
}

/// Build `SELECT COUNT(*) FROM <table>`.
pub fn count_select(table: TableName) -> Select {
    Select {
        select_list: SelectList::CountStar,
        from: From::Table { name: table },
        where_: None,
    }
}

/// `<column> = '<value>'`
pub fn column_equals(column: ColumnName, value: &str) -> Where {
    Where(Expression::BinaryOperation {
        left: Box::new(Expression::ColumnReference(column)),
        operator: BinaryOperator::Equals,
        right: Box::new(Expression::Value(Value::String(value.to_string()))),
    })
}

/// Render a statement to SQL text.
pub fn statement_to_sql(statement: &Statement) -> SQL {
    let mut sql = SQL::new();
    statement.to_sql(&mut sql);
    sql
}
