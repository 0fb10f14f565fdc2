//! Type definitions of a SQL AST representation.
//!
//! Only the shapes the translator can produce are representable: a
//! `SELECT *` or `SELECT COUNT(*)` over a single table with at most one
//! equality predicate.

/// A complete statement, rendered with a trailing `;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Select(Select),
}

/// A SELECT clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    pub select_list: SelectList,
    pub from: From,
    pub where_: Option<Where>,
}

/// The projection of a SELECT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectList {
    /// `*`
    SelectStar,
    /// `COUNT(*)`
    CountStar,
}

/// A FROM clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum From {
    Table { name: TableName },
}

/// A WHERE clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Where(pub Expression);

/// A scalar expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    BinaryOperation {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },
    ColumnReference(ColumnName),
    Value(Value),
}

/// An infix operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Equals,
}

/// A literal value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
}

/// A table name, rendered as a bare identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName(pub String);

/// A column name, rendered as a bare identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnName(pub String);
