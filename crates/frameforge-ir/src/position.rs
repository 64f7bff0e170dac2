//! Positioning class of a node relative to its parent.

use frameforge_core::{PositionInfo, RawNode};

use crate::diagnostics::Diagnostic;

/// Classify how `node` is placed inside `parent`.
///
/// - no bounding box on the node: no position at all
/// - no parent: root
/// - auto-layout parent: flex item
/// - otherwise: absolute offset from the parent's box origin
///
/// A parent without a box counts as sitting at (0, 0). Both geometry gaps
/// come back as a diagnostic next to the result.
pub(crate) fn resolve(
    node: &RawNode,
    parent: Option<&RawNode>,
) -> (Option<PositionInfo>, Option<Diagnostic>) {
    let Some(node_box) = node.absolute_bounding_box else {
        return (
            None,
            Some(Diagnostic::MissingNodeBox {
                node_id: node.id.clone(),
                node_name: node.name.clone(),
                kind: node.kind,
            }),
        );
    };

    let Some(parent) = parent else {
        return (Some(PositionInfo::Root), None);
    };

    if parent.is_auto_layout() {
        return (Some(PositionInfo::FlexItem), None);
    }

    let (origin, diagnostic) = match parent.absolute_bounding_box {
        Some(parent_box) => (parent_box.origin(), None),
        None => (
            glam::DVec2::ZERO,
            Some(Diagnostic::MissingParentBox {
                node_id: node.id.clone(),
                node_name: node.name.clone(),
                parent_id: parent.id.clone(),
                parent_name: parent.name.clone(),
            }),
        ),
    };
    let offset = node_box.origin() - origin;

    (
        Some(PositionInfo::Absolute {
            x: offset.x,
            y: offset.y,
        }),
        diagnostic,
    )
}

/// Position of `node` relative to `parent`, logging any geometry gap.
pub fn build_position(node: &RawNode, parent: Option<&RawNode>) -> Option<PositionInfo> {
    let (position, diagnostic) = resolve(node, parent);
    if let Some(diagnostic) = diagnostic {
        diagnostic.log();
    }
    position
}

#[cfg(test)]
mod tests {
    use super::*;
    use frameforge_core::{LayoutMode, NodeKind, Rect};

    fn framed(id: &str, x: f64, y: f64) -> RawNode {
        let mut node = RawNode::new(id, id, NodeKind::Frame);
        node.absolute_bounding_box = Some(Rect::new(x, y, 100.0, 100.0));
        node
    }

    #[test]
    fn test_root() {
        assert_eq!(
            build_position(&framed("r", 40.0, 40.0), None),
            Some(PositionInfo::Root)
        );
    }

    #[test]
    fn test_flex_item_for_auto_layout_parents() {
        for mode in [LayoutMode::Horizontal, LayoutMode::Vertical] {
            let mut parent = framed("p", 0.0, 0.0);
            parent.layout_mode = Some(mode);
            assert_eq!(
                build_position(&framed("c", 10.0, 10.0), Some(&parent)),
                Some(PositionInfo::FlexItem)
            );
        }
    }

    #[test]
    fn test_absolute_offset() {
        let parent = framed("p", 100.0, 200.0);
        let child = framed("c", 150.0, 225.0);
        assert_eq!(
            build_position(&child, Some(&parent)),
            Some(PositionInfo::Absolute { x: 50.0, y: 25.0 })
        );
    }

    #[test]
    fn test_negative_offset() {
        let parent = framed("p", 100.0, 100.0);
        let child = framed("c", 90.0, 60.0);
        assert_eq!(
            build_position(&child, Some(&parent)),
            Some(PositionInfo::Absolute { x: -10.0, y: -40.0 })
        );
    }

    #[test]
    fn test_large_coordinates() {
        let parent = framed("p", 1.0e7, -1.0e7);
        let child = framed("c", 1.0e7 + 12.0, -1.0e7 + 34.0);
        assert_eq!(
            build_position(&child, Some(&parent)),
            Some(PositionInfo::Absolute { x: 12.0, y: 34.0 })
        );
    }

    #[test]
    fn test_layout_none_parent_is_absolute() {
        let mut parent = framed("p", 0.0, 0.0);
        parent.layout_mode = Some(LayoutMode::None);
        let child = framed("c", 5.0, 6.0);
        assert_eq!(
            build_position(&child, Some(&parent)),
            Some(PositionInfo::Absolute { x: 5.0, y: 6.0 })
        );
    }

    // Parent box missing: origin fallback. Node box missing: no position.

    #[test]
    fn test_missing_parent_box_uses_origin() {
        let parent = RawNode::new("p", "Group", NodeKind::Group);
        let child = framed("c", 30.0, 40.0);
        let (position, diagnostic) = resolve(&child, Some(&parent));
        assert_eq!(position, Some(PositionInfo::Absolute { x: 30.0, y: 40.0 }));
        assert!(matches!(
            diagnostic,
            Some(Diagnostic::MissingParentBox { ref parent_id, .. }) if parent_id == "p"
        ));
    }

    #[test]
    fn test_missing_node_box_has_no_position() {
        let parent = framed("p", 0.0, 0.0);
        let child = RawNode::new("c", "Ghost", NodeKind::Frame);
        let (position, diagnostic) = resolve(&child, Some(&parent));
        assert_eq!(position, None);
        assert!(matches!(diagnostic, Some(Diagnostic::MissingNodeBox { .. })));

        // Even a root without a box has no position.
        assert_eq!(build_position(&child, None), None);
    }

    #[test]
    fn test_inputs_not_mutated() {
        let parent = framed("p", 10.0, 10.0);
        let child = framed("c", 20.0, 20.0);
        let (parent_before, child_before) = (parent.clone(), child.clone());
        build_position(&child, Some(&parent));
        assert_eq!(parent, parent_before);
        assert_eq!(child, child_before);
    }
}
