//! The template grammar: `<show all|count all> <keyword> orders`.

use std::sync::OnceLock;

use query_engine_metadata::metadata::{classify, Classification};
use regex::Regex;

use super::intent::{Filter, Operation, QueryIntent};

/// The keyword is everything between the verb and the trailing " orders".
const TEMPLATE: &str = r"^(show all|count all) ([\w\s-]+) orders$";

fn template() -> &'static Regex {
    static COMPILED: OnceLock<Regex> = OnceLock::new();
    COMPILED.get_or_init(|| Regex::new(TEMPLATE).expect("the phrase template is a valid regex"))
}

/// Recognize a normalized phrase against the template grammar.
///
/// Returns `None` if the phrase does not have the template's shape, if the
/// keyword is blank, or if the keyword is in neither vocabulary.
pub fn translate(normalized_phrase: &str) -> Option<QueryIntent> {
    let captures = template().captures(normalized_phrase)?;
    let operation = Operation::from_verb(captures.get(1)?.as_str())?;
    let keyword = captures.get(2)?.as_str().trim();
    if keyword.is_empty() {
        return None;
    }

    let filter = match classify(keyword) {
        Classification::Category(category) => Filter::ByCategory(category),
        Classification::Status(status) => Filter::ByStatus(status),
        Classification::Unknown => {
            tracing::debug!(keyword, "keyword is not a known category or status");
            return None;
        }
    };

    Some(QueryIntent::new(operation, filter))
}
