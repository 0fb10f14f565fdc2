//! Type definitions of a low-level SQL string representation.

use std::fmt;

/// SQL text under construction.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SQL {
    pub sql: String,
}

impl SQL {
    pub fn new() -> SQL {
        SQL {
            sql: String::new(),
        }
    }

    pub fn append_syntax(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Identifiers are written bare. They are validated when the
    /// configuration is loaded, not here.
    pub fn append_identifier(&mut self, identifier: &str) {
        self.sql.push_str(identifier);
    }

    /// Append a single-quoted string literal, doubling embedded quotes.
    pub fn append_string_literal(&mut self, value: &str) {
        self.sql.push('\'');
        for c in value.chars() {
            if c == '\'' {
                self.sql.push('\'');
            }
            self.sql.push(c);
        }
        self.sql.push('\'');
    }
}

impl fmt::Display for SQL {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.sql)
    }
}
