//! Errors for phrase translation.

use thiserror::Error;

/// A type for translation errors.
///
/// A phrase that fails the template grammar, names an unknown vocabulary
/// term, and is not one of the literal phrases all end up here alike.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Unsupported query: '{0}'.")]
    UnsupportedQuery(String),
}
