//! The closed vocabularies a phrase keyword is validated against.
//!
//! Categories and order statuses are fixed at compile time. Keywords are
//! compared against their canonical names after [`canonicalize`].

use std::fmt;

use enum_iterator::Sequence;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A product category stored in the category column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence, Serialize, Deserialize, JsonSchema,
)]
pub enum Category {
    #[serde(rename = "T-Shirts")]
    TShirts,
    Shoes,
    Hats,
}

impl Category {
    /// The canonical name, exactly as stored in the table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::TShirts => "T-Shirts",
            Category::Shoes => "Shoes",
            Category::Hats => "Hats",
        }
    }

    pub fn all() -> impl Iterator<Item = Category> {
        enum_iterator::all::<Category>()
    }
}

/// The lifecycle state of an order stored in the status column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence, Serialize, Deserialize, JsonSchema,
)]
pub enum OrderStatus {
    Shipped,
    Pending,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// The canonical name, exactly as stored in the table.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Pending => "Pending",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn all() -> impl Iterator<Item = OrderStatus> {
        enum_iterator::all::<OrderStatus>()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The vocabulary a keyword belongs to, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Category(Category),
    Status(OrderStatus),
    Unknown,
}

/// Fold a keyword into the canonical form used by the vocabularies.
///
/// Surrounding whitespace is trimmed. Every cased character that follows an
/// uncased one (start of input, space, hyphen, digit) is uppercased and the
/// rest are lowercased, so `"t-shirts"` becomes `"T-Shirts"` and
/// `"t shirts"` becomes `"T Shirts"`.
pub fn canonicalize(keyword: &str) -> String {
    let mut canonical = String::with_capacity(keyword.len());
    let mut previous_is_cased = false;
    for c in keyword.trim().chars() {
        if previous_is_cased {
            canonical.extend(c.to_lowercase());
        } else {
            canonical.extend(c.to_uppercase());
        }
        previous_is_cased = c.is_lowercase() || c.is_uppercase();
    }
    canonical
}

/// Classify a keyword against the category and status vocabularies.
///
/// Matching is exact on the canonical form; there is no partial or fuzzy
/// matching.
pub fn classify(keyword: &str) -> Classification {
    let canonical = canonicalize(keyword);
    if let Some(category) = Category::all().find(|c| c.as_str() == canonical) {
        return Classification::Category(category);
    }
    if let Some(status) = OrderStatus::all().find(|s| s.as_str() == canonical) {
        return Classification::Status(status);
    }
    Classification::Unknown
}
