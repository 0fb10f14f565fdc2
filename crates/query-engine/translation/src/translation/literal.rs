//! The fixed phrases that translate without the template grammar.

use super::intent::{Filter, Operation, QueryIntent};

/// Every literal phrase, in normalized form.
pub const LITERAL_PHRASES: [(&str, QueryIntent); 2] = [
    (
        "show all orders",
        QueryIntent {
            operation: Operation::ListAll,
            filter: Filter::NoFilter,
        },
    ),
    (
        "count all orders",
        QueryIntent {
            operation: Operation::CountAll,
            filter: Filter::NoFilter,
        },
    ),
];

/// Look up a normalized phrase. Matching is exact; prefixes and partial
/// phrases are not found.
pub fn lookup(normalized_phrase: &str) -> Option<QueryIntent> {
    LITERAL_PHRASES
        .iter()
        .find(|(phrase, _)| *phrase == normalized_phrase)
        .map(|(_, intent)| *intent)
}
