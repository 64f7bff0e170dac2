//! Accessibility metadata and styling for image-filled nodes.
//!
//! Image assets are never extracted; nodes that reference one are rendered
//! as a labelled gray box instead.

use frameforge_core::{Placeholder, RawNode};
use serde::Serialize;

use crate::css::StyleMap;

pub const PLACEHOLDER_ROLE: &str = "img";
pub const PLACEHOLDER_BACKGROUND: &str = "#ccc";

/// Full placeholder description, including a standalone style.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePlaceholder {
    pub role: String,
    pub aria_label: String,
    pub style: StyleMap,
}

fn base_label(node: &RawNode) -> String {
    let name = if node.name.is_empty() {
        "image"
    } else {
        node.name.as_str()
    };
    format!("{} placeholder", name)
}

fn sized_label(node: &RawNode) -> String {
    match node.absolute_bounding_box {
        Some(rect) => format!(
            "{} {}x{}",
            base_label(node),
            rect.width.round(),
            rect.height.round()
        ),
        None => base_label(node),
    }
}

/// Placeholder record for the IR: present when any fill is an image.
pub fn image_placeholder(node: &RawNode) -> Option<Placeholder> {
    node.has_image_fill().then(|| Placeholder {
        role: PLACEHOLDER_ROLE.to_string(),
        aria_label: base_label(node),
    })
}

/// Role and a label carrying the rendered size, e.g. `Hero placeholder 320x200`.
pub fn placeholder_a11y(node: &RawNode) -> Placeholder {
    Placeholder {
        role: PLACEHOLDER_ROLE.to_string(),
        aria_label: sized_label(node),
    }
}

/// Placeholder with a centered, mid-gray style for standalone rendering.
pub fn build_image_placeholder(node: &RawNode) -> ImagePlaceholder {
    let style = [
        ("background", PLACEHOLDER_BACKGROUND),
        ("display", "flex"),
        ("align-items", "center"),
        ("justify-content", "center"),
        ("color", "#666"),
        ("font-size", "12px"),
        ("font-family", "sans-serif"),
    ]
    .into_iter()
    .collect::<StyleMap>()
    .sorted();

    let a11y = placeholder_a11y(node);
    ImagePlaceholder {
        role: a11y.role,
        aria_label: a11y.aria_label,
        style,
    }
}
