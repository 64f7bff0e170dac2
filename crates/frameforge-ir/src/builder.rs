//! Recursive raw-to-IR transformation.

use frameforge_core::{DesignNode, RawNode};
use frameforge_style::{facts, image_placeholder, records};

use crate::diagnostics::{Diagnostic, Diagnostics, IrStats};
use crate::position;

/// Result of one IR build.
#[derive(Debug, Clone, PartialEq)]
pub struct IrOutput {
    /// `None` when the root itself is hidden.
    pub root: Option<DesignNode>,
    pub diagnostics: Diagnostics,
    pub stats: IrStats,
}

/// Builds the IR while collecting diagnostics and statistics.
///
/// A builder is consumed by [`IrBuilder::build`], so state never leaks from
/// one document into the next.
#[derive(Debug, Default)]
pub struct IrBuilder {
    diagnostics: Diagnostics,
    stats: IrStats,
}

impl IrBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the IR for `raw`, positioned relative to `parent` when given.
    pub fn build(mut self, raw: &RawNode, parent: Option<&RawNode>) -> IrOutput {
        let root = self.visit(raw, parent, 1);
        tracing::debug!(
            nodes = self.stats.node_count,
            skipped = self.stats.skipped_count,
            unsupported = self.stats.unsupported_count,
            depth = self.stats.max_depth,
            "built IR"
        );
        IrOutput {
            root,
            diagnostics: self.diagnostics,
            stats: self.stats,
        }
    }

    fn visit(&mut self, raw: &RawNode, parent: Option<&RawNode>, depth: usize) -> Option<DesignNode> {
        if raw.is_hidden() {
            self.stats.skipped_count += 1;
            return None;
        }

        self.stats.node_count += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if raw.kind.is_unknown() {
            self.stats.unsupported_count += 1;
            self.diagnostics.push(Diagnostic::UnsupportedNodeType {
                node_id: raw.id.clone(),
                node_name: raw.name.clone(),
            });
        }

        let (position, diagnostic) = position::resolve(raw, parent);
        if let Some(diagnostic) = diagnostic {
            self.diagnostics.push(diagnostic);
        }

        let (width, height) = facts::size(raw).unzip();

        // Children see this node as their parent, so parent boxes are read
        // directly instead of re-walking ancestors.
        let children = raw
            .children
            .iter()
            .filter_map(|child| self.visit(child, Some(raw), depth + 1))
            .collect();

        Some(DesignNode {
            id: raw.id.clone(),
            name: raw.name.clone(),
            kind: raw.kind,
            width,
            height,
            opacity: facts::own_opacity(raw),
            position,
            layout: records::layout(raw),
            visual: Some(records::visual(raw)),
            effects: records::effects(raw),
            text: records::text(raw),
            placeholder: image_placeholder(raw),
            children,
        })
    }
}

/// Build the IR for `raw`. Returns `None` when `raw` is hidden.
///
/// Diagnostics are logged and otherwise discarded; use [`IrBuilder`] to keep
/// them.
pub fn build_ir(raw: &RawNode, parent: Option<&RawNode>) -> Option<DesignNode> {
    IrBuilder::new().build(raw, parent).root
}
