//! Non-fatal findings and run statistics collected while building the IR.

use frameforge_core::NodeKind;
use thiserror::Error;

/// A non-fatal condition found while building the IR.
///
/// The `Display` form doubles as the session-log warning text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("node {node_id} ({node_name}, {kind}) has no bounding box; position omitted")]
    MissingNodeBox {
        node_id: String,
        node_name: String,
        kind: NodeKind,
    },

    #[error("parent {parent_id} ({parent_name}) of absolute node {node_id} ({node_name}) has no bounding box; using origin (0, 0)")]
    MissingParentBox {
        node_id: String,
        node_name: String,
        parent_id: String,
        parent_name: String,
    },

    #[error("node {node_id} ({node_name}) has an unsupported type")]
    UnsupportedNodeType { node_id: String, node_name: String },
}

impl Diagnostic {
    /// Id of the node the finding is about.
    pub fn node_id(&self) -> &str {
        match self {
            Self::MissingNodeBox { node_id, .. }
            | Self::MissingParentBox { node_id, .. }
            | Self::UnsupportedNodeType { node_id, .. } => node_id,
        }
    }

    pub(crate) fn log(&self) {
        tracing::warn!(node_id = self.node_id(), "{}", self);
    }
}

/// Diagnostics of one IR build, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and log it.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        diagnostic.log();
        self.entries.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Warning strings for the session log.
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Counters of one IR build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IrStats {
    /// Nodes emitted into the IR.
    pub node_count: usize,
    /// Hidden nodes encountered. Their descendants are not visited and not
    /// counted.
    pub skipped_count: usize,
    /// Emitted nodes whose type fell back to `UNKNOWN`.
    pub unsupported_count: usize,
    /// Deepest emitted level, the root being level 1.
    pub max_depth: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_follow_push_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::UnsupportedNodeType {
            node_id: "1".into(),
            node_name: "Slice".into(),
        });
        diagnostics.push(Diagnostic::MissingNodeBox {
            node_id: "2".into(),
            node_name: "Ghost".into(),
            kind: NodeKind::Frame,
        });

        let messages = diagnostics.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], "node 1 (Slice) has an unsupported type");
        assert!(messages[1].starts_with("node 2 (Ghost, FRAME) has no bounding box"));
    }

    #[test]
    fn test_node_id() {
        let diagnostic = Diagnostic::MissingParentBox {
            node_id: "c".into(),
            node_name: "Child".into(),
            parent_id: "p".into(),
            parent_name: "Parent".into(),
        };
        assert_eq!(diagnostic.node_id(), "c");
    }
}
