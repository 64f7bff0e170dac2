//! Intermediate representation built from the raw document graph.
//!
//! One [`DesignNode`] exists per visible raw node. The IR carries resolved
//! facts only (rounded sizes, formatted colors, positioning class) so that
//! emitters never look at raw nodes again.

use serde::{Deserialize, Serialize};

use crate::types::NodeKind;

/// A node of the intermediate representation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// The node's own opacity, present only when below 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual: Option<Visual>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<Effects>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<Placeholder>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DesignNode>,
}

impl DesignNode {
    pub fn is_absolute(&self) -> bool {
        matches!(self.position, Some(PositionInfo::Absolute { .. }))
    }

    pub fn has_absolute_child(&self) -> bool {
        self.children.iter().any(DesignNode::is_absolute)
    }

    pub fn is_text(&self) -> bool {
        self.text.is_some()
    }

    /// Number of nodes in this subtree, this node included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(DesignNode::node_count).sum::<usize>()
    }

    /// Visit the subtree in pre-order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a DesignNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

/// How a node is placed relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PositionInfo {
    /// Top-level node.
    Root,
    /// Child of an auto-layout parent; the flex box handles placement.
    FlexItem,
    /// Offset from the parent's box origin.
    Absolute { x: f64, y: f64 },
}

/// Flex container facts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub direction: FlexDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
    /// top, right, bottom, left
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<[f64; 4]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify: Option<MainAxisAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<CrossAxisAlign>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    Row,
    Column,
}

impl FlexDirection {
    pub fn as_css(&self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
        }
    }
}

/// CSS `justify-content` values reachable from the primary axis alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MainAxisAlign {
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
}

impl MainAxisAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            Self::FlexStart => "flex-start",
            Self::Center => "center",
            Self::FlexEnd => "flex-end",
            Self::SpaceBetween => "space-between",
        }
    }
}

/// CSS `align-items` values reachable from the counter axis alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrossAxisAlign {
    FlexStart,
    Center,
    FlexEnd,
    Baseline,
}

impl CrossAxisAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            Self::FlexStart => "flex-start",
            Self::Center => "center",
            Self::FlexEnd => "flex-end",
            Self::Baseline => "baseline",
        }
    }
}

/// Fill, border and corner facts.
///
/// `border` and `radius` always serialize, as `null` when absent, so that
/// consumers can tell "no border" from "not computed".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visual {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default)]
    pub border: Option<Border>,
    /// top-left, top-right, bottom-right, bottom-left
    #[serde(default)]
    pub radius: Option<[f64; 4]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub weight: f64,
    pub color: String,
}

/// Shadow and blur facts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effects {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shadows: Vec<Shadow>,
    /// Radius of the last visible layer blur.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_blur: Option<f64>,
}

impl Effects {
    pub fn is_empty(&self) -> bool {
        self.shadows.is_empty() && self.blur.is_none() && self.backdrop_blur.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    pub color: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub inset: bool,
}

/// Text content and resolved typography.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInfo {
    pub characters: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f64>,
    /// Explicit color from the node's own fills; `None` means inherit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
}

/// Accessibility metadata for nodes filled with an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placeholder {
    pub role: String,
    pub aria_label: String,
}
