//! The parsed document: statements, lookup structures, and pruning.

use std::collections::HashSet;
use std::fmt;

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::definition::Definition;
use crate::identifier::Identifier;
use crate::template::Filename;

/// Error raised when a document's parts do not form a valid whole.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The filename template references an identifier with no definition.
    #[error("missing definition for `{0}`")]
    MissingDefinition(Identifier),
}

/// One top-level statement, in source order.
///
/// The node list is the lossless view of a document; the definitions map
/// and the filename on [`Document`] are derived lookup structures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Node {
    /// A named definition statement.
    Definition {
        id: Identifier,
        definition: Definition,
    },
    /// The filename template statement.
    Filename(Filename),
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Definition { id, definition } => {
                for comment in definition.comments() {
                    writeln!(f, "; {comment}")?;
                }
                writeln!(f, "{id} = {}", definition.pattern().as_str())
            }
            Node::Filename(filename) => writeln!(f, "> {filename}"),
        }
    }
}

/// A fully parsed and validated Synta file.
///
/// Built once, bottom-up, during parsing and immutable afterwards. The
/// construction invariants hold for every `Document` in existence:
///
/// - every identifier referenced by the filename template (including
///   inside optional groups, plus the extension) has a definition,
/// - no identifier is defined twice (the map cannot hold duplicates, and
///   the parser rejects a second definition before insertion),
/// - exactly one filename template is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    nodes: Vec<Node>,
    definitions: IndexMap<Identifier, Definition>,
    filename: Filename,
}

impl Document {
    /// Assemble a document, checking that the filename template only
    /// references defined identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::MissingDefinition`] naming the first
    /// referenced identifier that has no entry in `definitions`.
    pub fn new(
        nodes: Vec<Node>,
        definitions: IndexMap<Identifier, Definition>,
        filename: Filename,
    ) -> Result<Self, DocumentError> {
        for id in filename.required_identifiers() {
            if !definitions.contains_key(id) {
                return Err(DocumentError::MissingDefinition(id.clone()));
            }
        }
        Ok(Self {
            nodes,
            definitions,
            filename,
        })
    }

    /// The statements of the document, in source order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The definitions, keyed by identifier, in source order.
    pub fn definitions(&self) -> &IndexMap<Identifier, Definition> {
        &self.definitions
    }

    /// The filename template.
    pub fn filename(&self) -> &Filename {
        &self.filename
    }

    /// Produce a document containing only the definitions reachable from
    /// the filename template (segment references, recursively through
    /// optional groups, plus the extension).
    ///
    /// The input is left untouched. Pruning an already pruned document is
    /// a no-op on the definition set. The pruned node list holds the kept
    /// definitions in source order followed by the filename statement.
    pub fn prune(&self) -> Document {
        let required: HashSet<&Identifier> =
            self.filename.required_identifiers().into_iter().collect();

        let definitions: IndexMap<Identifier, Definition> = self
            .definitions
            .iter()
            .filter(|(id, _)| required.contains(id))
            .map(|(id, definition)| (id.clone(), definition.clone()))
            .collect();

        let mut nodes: Vec<Node> = definitions
            .iter()
            .map(|(id, definition)| Node::Definition {
                id: id.clone(),
                definition: definition.clone(),
            })
            .collect();
        nodes.push(Node::Filename(self.filename.clone()));

        debug!(
            kept = definitions.len(),
            dropped = self.definitions.len() - definitions.len();
            "pruned unreferenced definitions"
        );

        Document {
            nodes,
            definitions,
            filename: self.filename.clone(),
        }
    }
}

impl fmt::Display for Document {
    /// Render the document back to Synta source text, one statement per
    /// node, in node order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            write!(f, "{node}")?;
        }
        Ok(())
    }
}
