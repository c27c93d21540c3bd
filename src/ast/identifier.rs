//! Fragment and paragraph identifiers
//!
//!     The source language has three ways of addressing a fragment, plus the ids of fragments and
//!     paragraphs nobody can address. They are kept apart as variants and only flattened to
//!     strings when printed, so that e.g. an author naming a fragment `nothing` can never collide
//!     with the sentinel of unreferenced fragments.
//!
//!     Printed forms (the values of `data-opened-by` / `data-opens`):
//!
//!         Named("why")                  _why
//!         Scoped { depth: 2, number: 1 } 2-1
//!         Auto(7)                       7
//!         Unreferenced(_)               nothing
//!         Anonymous                     (empty, the attribute is omitted)

use crate::inlines::escape_html;
use serde::{Serialize, Serializer};
use std::fmt;

/// Prefix of explicitly named ids
pub const NAMED_PREFIX: &str = "_";

/// Printed form of fragments no link can reach
pub const UNREFERENCED: &str = "nothing";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Identifier {
    /// An author-chosen name, stored as written.
    Named(String),
    /// An all-digit name, disambiguated by the scope depth counter at the point of use.
    Scoped { depth: usize, number: u64 },
    /// Pairs an anonymous link with the next anonymous fragment of the same scope.
    Auto(u64),
    /// An anonymous fragment with no pending link. The ordinal only keeps distinct fragments
    /// apart during closure computation; all of them print the same.
    Unreferenced(usize),
    /// The root paragraph and every paragraph opened by a bare `>`.
    Anonymous,
}

impl Identifier {
    /// Resolve an explicit name: all-digit names are scoped to `depth`, anything else is named.
    ///
    /// Only a name made entirely of digits counts as a number, so `12b` stays named rather than
    /// reading as `12`, and `007` is the same id as `7`.
    pub fn from_name(name: &str, depth: usize) -> Self {
        if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(number) = name.parse::<u64>() {
                return Identifier::Scoped { depth, number };
            }
        }
        Identifier::Named(name.to_string())
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Identifier::Anonymous)
    }

    /// Whether an explicit link can address this id.
    pub fn is_addressable(&self) -> bool {
        matches!(self, Identifier::Named(_) | Identifier::Scoped { .. })
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Named(name) => write!(f, "{}{}", NAMED_PREFIX, escape_html(name)),
            Identifier::Scoped { depth, number } => write!(f, "{}-{}", depth, number),
            Identifier::Auto(n) => write!(f, "{}", n),
            Identifier::Unreferenced(_) => f.write_str(UNREFERENCED),
            Identifier::Anonymous => Ok(()),
        }
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(
            Identifier::from_name("12", 3),
            Identifier::Scoped {
                depth: 3,
                number: 12
            }
        );
        assert_eq!(
            Identifier::from_name("why", 3),
            Identifier::Named("why".to_string())
        );
        assert_eq!(
            Identifier::from_name("12b", 0),
            Identifier::Named("12b".to_string())
        );
        assert_eq!(
            Identifier::from_name("-1", 0),
            Identifier::Named("-1".to_string())
        );
        assert_eq!(Identifier::from_name("007", 1), Identifier::from_name("7", 1));
    }

    #[test]
    fn test_overflowing_digits_fall_back_to_named() {
        let digits = "99999999999999999999999";
        assert_eq!(
            Identifier::from_name(digits, 0),
            Identifier::Named(digits.to_string())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Identifier::Named("why".into()).to_string(), "_why");
        assert_eq!(Identifier::Named("it's".into()).to_string(), "_it&#39;s");
        assert_eq!(
            Identifier::Scoped {
                depth: 2,
                number: 1
            }
            .to_string(),
            "2-1"
        );
        assert_eq!(Identifier::Auto(7).to_string(), "7");
        assert_eq!(Identifier::Unreferenced(4).to_string(), "nothing");
        assert_eq!(Identifier::Anonymous.to_string(), "");
    }

    #[test]
    fn test_sentinel_does_not_collide_with_names() {
        assert_ne!(
            Identifier::Named("nothing".into()).to_string(),
            Identifier::Unreferenced(0).to_string()
        );
    }

    #[test]
    fn test_serializes_as_printed_form() {
        let json = serde_json::to_string(&Identifier::Named("a".into())).unwrap();
        assert_eq!(json, r#""_a""#);
    }
}
