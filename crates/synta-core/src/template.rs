//! The filename template: segments and the template itself.
//!
//! A filename template is an ordered sequence of [`Segment`]s followed by a
//! dot-separated extension. Segments form a strict tree: an optional group
//! owns its children outright, with no sharing and no cycles, so every
//! traversal here is a plain recursive walk.

use std::fmt;

use serde::Serialize;

use crate::identifier::Identifier;

/// One unit of a filename template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Segment {
    /// A reference to a named definition.
    Identifier(Identifier),
    /// A group of segments that may be entirely absent from a filename.
    ///
    /// When the group is present, a single literal dash precedes its
    /// content; that dash belongs to the grouping syntax and is not a
    /// segment of its own. The child list is never empty: the grammar
    /// cannot produce an empty group.
    Optional(Vec<Segment>),
}

impl Segment {
    /// Append every identifier referenced by this segment, in order.
    ///
    /// Identifier segments contribute themselves; optional groups
    /// contribute all of their children recursively. Being inside an
    /// optional group does not exempt an identifier from resolution.
    pub fn collect_identifiers<'a>(&'a self, out: &mut Vec<&'a Identifier>) {
        match self {
            Segment::Identifier(id) => out.push(id),
            Segment::Optional(children) => {
                for child in children {
                    child.collect_identifiers(out);
                }
            }
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Identifier(id) => write!(f, "{id}"),
            Segment::Optional(children) => {
                write!(f, "(-")?;
                write_segments(f, children)?;
                write!(f, ")?")
            }
        }
    }
}

/// Render a segment sequence with its separators: a dash before every
/// segment except the first, omitted before optional groups, whose own
/// `(` already delimits them.
fn write_segments(f: &mut fmt::Formatter<'_>, segments: &[Segment]) -> fmt::Result {
    for (index, segment) in segments.iter().enumerate() {
        if index > 0 && !matches!(segment, Segment::Optional(_)) {
            write!(f, "-")?;
        }
        write!(f, "{segment}")?;
    }
    Ok(())
}

/// The filename shape declared by a document: ordered segments plus a
/// single extension identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Filename {
    segments: Vec<Segment>,
    extension: Identifier,
}

impl Filename {
    /// Create a filename template from its segments and extension.
    pub fn new(segments: Vec<Segment>, extension: Identifier) -> Self {
        Self {
            segments,
            extension,
        }
    }

    /// The top-level segment sequence.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The extension identifier.
    pub fn extension(&self) -> &Identifier {
        &self.extension
    }

    /// Every identifier this template requires a definition for: all
    /// segment references, recursively through optional groups, with the
    /// extension appended last.
    pub fn required_identifiers(&self) -> Vec<&Identifier> {
        let mut required = Vec::new();
        for segment in &self.segments {
            segment.collect_identifiers(&mut required);
        }
        required.push(&self.extension);
        required
    }
}

impl fmt::Display for Filename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_segments(f, &self.segments)?;
        write!(f, ".{}", self.extension)
    }
}
