//! Raw document model as served by the design tool's REST API.
//!
//! Field names follow the wire format (camelCase). Every open-ended tag is
//! modelled as a closed enum with a catch-all arm so unknown values never fail
//! deserialization.

use serde::{Deserialize, Serialize};

use crate::types::{Color, NodeKind, Point, Rect};

/// A node in the raw document graph.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_bounding_box: Option<Rect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clips_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<LayoutMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_axis_align_items: Option<PrimaryAxisAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_align_items: Option<CounterAxisAlign>,
    /// Absent and empty are different: an empty list suppresses the legacy
    /// `backgroundColor` fallback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<Paint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Vec<Paint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rectangle_corner_radii: Option<[f64; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<Effect>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TypeStyle>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RawNode>,
}

impl RawNode {
    /// Create a node with an id, a name and a kind; everything else unset.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            ..Default::default()
        }
    }

    /// Hidden only when the flag is explicitly false.
    pub fn is_hidden(&self) -> bool {
        self.visible == Some(false)
    }

    /// Whether the node arranges its children with auto-layout.
    pub fn is_auto_layout(&self) -> bool {
        matches!(
            self.layout_mode,
            Some(LayoutMode::Horizontal) | Some(LayoutMode::Vertical)
        )
    }

    /// First fill whose visibility is not explicitly false.
    pub fn first_visible_fill(&self) -> Option<&Paint> {
        self.fills.as_deref()?.iter().find(|paint| paint.is_visible())
    }

    /// Whether any fill references an image.
    pub fn has_image_fill(&self) -> bool {
        self.fills
            .as_deref()
            .is_some_and(|fills| fills.iter().any(|paint| paint.kind == PaintKind::Image))
    }

    /// Whether the node carries text content.
    pub fn has_characters(&self) -> bool {
        self.characters.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// Count this node and all of its descendants, hidden ones included.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(RawNode::subtree_len).sum::<usize>()
    }
}

/// Auto-layout mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    Horizontal,
    Vertical,
    #[default]
    #[serde(other)]
    None,
}

/// Distribution along the auto-layout primary axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryAxisAlign {
    Min,
    Max,
    SpaceBetween,
    #[default]
    #[serde(other)]
    Center,
}

/// Alignment along the auto-layout counter axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAxisAlign {
    Min,
    Max,
    Baseline,
    #[default]
    #[serde(other)]
    Center,
}

/// Paint type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    #[default]
    #[serde(other)]
    Unsupported,
}

/// A gradient color stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: Color,
}

/// A fill or stroke paint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: PaintKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gradient_stops: Vec<ColorStop>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gradient_handle_positions: Vec<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Self {
            kind: PaintKind::Solid,
            color: Some(color),
            ..Default::default()
        }
    }

    pub fn linear_gradient(stops: Vec<ColorStop>, handles: Vec<Point>) -> Self {
        Self {
            kind: PaintKind::GradientLinear,
            gradient_stops: stops,
            gradient_handle_positions: handles,
            ..Default::default()
        }
    }

    pub fn image(image_ref: impl Into<String>) -> Self {
        Self {
            kind: PaintKind::Image,
            image_ref: Some(image_ref.into()),
            ..Default::default()
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = Some(false);
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }
}

/// Effect type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectKind {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
    #[default]
    #[serde(other)]
    Unsupported,
}

/// A shadow or blur effect.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Effect {
    #[serde(rename = "type")]
    pub kind: EffectKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Point>,
}

impl Effect {
    pub fn drop_shadow(offset: Point, radius: f64, color: Color) -> Self {
        Self {
            kind: EffectKind::DropShadow,
            radius: Some(radius),
            color: Some(color),
            offset: Some(offset),
            ..Default::default()
        }
    }

    pub fn inner_shadow(offset: Point, radius: f64, color: Color) -> Self {
        Self {
            kind: EffectKind::InnerShadow,
            ..Self::drop_shadow(offset, radius, color)
        }
    }

    pub fn layer_blur(radius: f64) -> Self {
        Self {
            kind: EffectKind::LayerBlur,
            radius: Some(radius),
            ..Default::default()
        }
    }

    pub fn background_blur(radius: f64) -> Self {
        Self {
            kind: EffectKind::BackgroundBlur,
            radius: Some(radius),
            ..Default::default()
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }
}

/// Letter case transform of a text layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextCase {
    Upper,
    Lower,
    Title,
    #[default]
    #[serde(other)]
    Original,
}

/// Typography of a text layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height_px: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_horizontal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_case: Option<TextCase>,
}
