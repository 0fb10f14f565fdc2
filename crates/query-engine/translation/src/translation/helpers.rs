//! Helpers shared by the phrase matchers.

/// Trim surrounding whitespace and fold to lowercase.
///
/// Both the literal phrase table and the template grammar expect their input
/// in this form.
pub fn normalize(raw_query: &str) -> String {
    raw_query.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Show ALL Orders\n"), "show all orders");
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        assert_eq!(normalize("show  all orders"), "show  all orders");
    }
}
