//! Core value types shared by the raw document model and the IR.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A color with channels in the 0..=1 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Color {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to 8-bit RGB channels, rounding to nearest.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (channel(self.r), channel(self.g), channel(self.b))
    }
}

fn channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// A point in gradient handle space or an effect offset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_vec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// An axis-aligned box in the document's global coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// Normalized node type.
///
/// Anything the design tool reports that is not listed here deserializes
/// as [`NodeKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Frame,
    Group,
    Component,
    Instance,
    Rectangle,
    Text,
    Vector,
    BooleanOperation,
    Star,
    Line,
    Ellipse,
    RegularPolygon,
    #[default]
    #[serde(other)]
    Unknown,
}

impl NodeKind {
    /// The tag as it appears in documents and serialized IR.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frame => "FRAME",
            Self::Group => "GROUP",
            Self::Component => "COMPONENT",
            Self::Instance => "INSTANCE",
            Self::Rectangle => "RECTANGLE",
            Self::Text => "TEXT",
            Self::Vector => "VECTOR",
            Self::BooleanOperation => "BOOLEAN_OPERATION",
            Self::Star => "STAR",
            Self::Line => "LINE",
            Self::Ellipse => "ELLIPSE",
            Self::RegularPolygon => "REGULAR_POLYGON",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }

    /// Whether nodes of this kind are drawn as vector shapes and can be
    /// exported as icons.
    pub fn is_vector_like(&self) -> bool {
        matches!(
            self,
            Self::Vector
                | Self::BooleanOperation
                | Self::Star
                | Self::Line
                | Self::Ellipse
                | Self::RegularPolygon
        )
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kind_from_tag() {
        let kind: NodeKind = serde_json::from_str("\"BOOLEAN_OPERATION\"").unwrap();
        assert_eq!(kind, NodeKind::BooleanOperation);

        let kind: NodeKind = serde_json::from_str("\"SOMETHING_ODD\"").unwrap();
        assert_eq!(kind, NodeKind::Unknown);
    }

    #[test]
    fn test_color_alpha_defaults_to_opaque() {
        let color: Color = serde_json::from_str(r#"{"r":1,"g":0,"b":0}"#).unwrap();
        assert_eq!(color.a, 1.0);
        assert_eq!(color.to_rgb8(), (255, 0, 0));
    }

    #[test]
    fn test_channel_rounding() {
        let color = Color::rgb(0.2, 0.4, 0.6);
        assert_eq!(color.to_rgb8(), (51, 102, 153));
    }
}
