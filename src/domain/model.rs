use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog product as returned by the listing service. Read-only here;
/// nothing in this crate mutates or stores products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub permalink: String,
}

/// Which neighbor of the current product a link points at.
///
/// `Next` resolves to the item one position earlier in the fetched
/// listing, `Previous` to the item one position later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Relation marker carried on the rendered anchor (`rel="..."`),
    /// also used as the style-class suffix.
    pub fn rel(self) -> &'static str {
        match self {
            Direction::Next => "next",
            Direction::Previous => "prev",
        }
    }

    /// Slug used when naming the emission filter hook.
    pub fn hook_slug(self) -> &'static str {
        match self {
            Direction::Next => "next",
            Direction::Previous => "previous",
        }
    }

    /// Anchor text used when the resolved product has an empty title.
    pub fn fallback_title(self) -> &'static str {
        match self {
            Direction::Next => "Next Product",
            Direction::Previous => "Previous Product",
        }
    }
}
