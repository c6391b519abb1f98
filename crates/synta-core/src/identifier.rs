//! Identifier names for definitions and filename segments.
//!
//! An [`Identifier`] is one or more lowercase ASCII letters. It is used
//! both as the key of a definition and as a segment reference inside the
//! filename template. Equality is exact string equality; no case folding
//! is performed.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// The shape of a valid identifier. Anchored: partial matches are rejected.
static IDENTIFIER_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-z]+$").expect("identifier shape is a valid pattern"));

/// Error returned when a string does not form a valid identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid identifier: {0}")]
pub struct InvalidIdentifier(pub String);

/// A name made of one or more lowercase ASCII letters.
///
/// Identifiers name definitions and reference them from the filename
/// template. Construction validates the full string against `[a-z]+`,
/// so a held `Identifier` is always well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Identifier(String);

impl Identifier {
    /// Create an identifier, validating the complete string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdentifier`] if the string is empty or contains
    /// anything other than lowercase ASCII letters.
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidIdentifier> {
        let name = name.into();
        if IDENTIFIER_SHAPE.is_match(&name) {
            Ok(Self(name))
        } else {
            Err(InvalidIdentifier(name))
        }
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Identifier {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert_eq!(Identifier::new("a").unwrap().as_str(), "a");
        assert_eq!(Identifier::new("coursecode").unwrap().as_str(), "coursecode");
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            Identifier::new(""),
            Err(InvalidIdentifier(String::new()))
        );
    }

    #[test]
    fn test_rejects_partial_matches() {
        // A lowercase run embedded in a larger string must not be accepted.
        assert!(Identifier::new("a1b").is_err());
        assert!(Identifier::new("abc ").is_err());
        assert!(Identifier::new(" abc").is_err());
        assert!(Identifier::new("Abc").is_err());
        assert!(Identifier::new("a-b").is_err());
    }

    #[test]
    fn test_from_str_round_trip() {
        let id: Identifier = "section".parse().unwrap();
        assert_eq!(id.to_string(), "section");
    }
}
