//! Named, documented regular expression definitions.

use regex::Regex;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// A compiled regular expression together with its documentation.
///
/// The comments are the `;` lines that immediately preceded the definition
/// in the source, marker stripped and trimmed, in source order. The pattern
/// is compiled at parse time; a `Definition` never holds an invalid regexp.
#[derive(Debug, Clone)]
pub struct Definition {
    comments: Vec<String>,
    pattern: Regex,
}

impl Definition {
    /// Create a definition from its documentation lines and compiled pattern.
    pub fn new(comments: Vec<String>, pattern: Regex) -> Self {
        Self { comments, pattern }
    }

    /// The documentation lines attached to this definition.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// The compiled pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

// `Regex` implements neither `PartialEq` nor `Serialize`; both are defined
// here over the pattern source text.
impl PartialEq for Definition {
    fn eq(&self, other: &Self) -> bool {
        self.comments == other.comments && self.pattern.as_str() == other.pattern.as_str()
    }
}

impl Eq for Definition {}

impl Serialize for Definition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Definition", 2)?;
        state.serialize_field("comments", &self.comments)?;
        state.serialize_field("pattern", self.pattern.as_str())?;
        state.end()
    }
}
