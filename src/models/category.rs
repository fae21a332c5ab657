//! Expense categories
//!
//! The set is closed: every expense belongs to exactly one of these four.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed classification applied to every expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Miscellaneous,
}

impl Category {
    /// All categories in display and summary order
    pub const ALL: [Category; 4] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Miscellaneous,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    /// Position of this category in [`Category::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::Food => 0,
            Self::Transport => 1,
            Self::Entertainment => 2,
            Self::Miscellaneous => 3,
        }
    }

    /// Whether expenses in this category carry a description
    pub fn takes_description(&self) -> bool {
        matches!(self, Self::Miscellaneous)
    }

    /// Next category, wrapping around (for selectors)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous category, wrapping around (for selectors)
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category '{0}' (expected Food, Transport, Entertainment or Miscellaneous)")]
pub struct CategoryParseError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("TRANSPORT".parse::<Category>().unwrap(), Category::Transport);
        assert_eq!(
            " Miscellaneous ".parse::<Category>().unwrap(),
            Category::Miscellaneous
        );
        assert!("Rent".parse::<Category>().is_err());
    }

    #[test]
    fn test_display_matches_stored_name() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }

    #[test]
    fn test_cycle() {
        assert_eq!(Category::Food.next(), Category::Transport);
        assert_eq!(Category::Miscellaneous.next(), Category::Food);
        assert_eq!(Category::Food.prev(), Category::Miscellaneous);
    }

    #[test]
    fn test_only_miscellaneous_takes_description() {
        let with_description: Vec<_> = Category::ALL
            .into_iter()
            .filter(Category::takes_description)
            .collect();
        assert_eq!(with_description, vec![Category::Miscellaneous]);
    }
}
