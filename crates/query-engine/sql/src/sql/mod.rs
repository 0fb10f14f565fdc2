//! The SQL AST we emit and its conversion to SQL text.

pub mod ast;
pub mod convert;
pub mod helpers;
pub mod string;
