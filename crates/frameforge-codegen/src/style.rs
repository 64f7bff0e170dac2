//! Style computation shared by both emitters.
//!
//! Everything an emitter knows about a node's appearance comes from
//! [`style_for`]; the emitters only differ in how they serialize the map.

use frameforge_core::format::{format_number, px, round3};
use frameforge_core::{DesignNode, PositionInfo, TextInfo};
use frameforge_style::css::{insert_layout, radius_shorthand};
use frameforge_style::facts::{blur_filter, shadow_fragment};
use frameforge_style::placeholder::PLACEHOLDER_BACKGROUND;
use frameforge_style::StyleMap;

use crate::escape::{js_string, object_key};
use crate::options::BrandPalette;

/// What a node inherits from its ancestors.
#[derive(Debug, Clone, Copy)]
pub struct StyleContext<'a> {
    inherited_color: Option<&'a str>,
    /// Product of the ancestors' own opacities.
    opacity: f64,
    palette: &'a BrandPalette,
}

impl<'a> StyleContext<'a> {
    pub fn root(palette: &'a BrandPalette) -> Self {
        Self {
            inherited_color: None,
            opacity: 1.0,
            palette,
        }
    }

    /// Context for the children of `node`.
    pub fn child(&self, node: &'a DesignNode) -> Self {
        Self {
            inherited_color: node
                .text
                .as_ref()
                .and_then(|t| t.color.as_deref())
                .or(self.inherited_color),
            opacity: self.effective_opacity(node),
            palette: self.palette,
        }
    }

    /// Ancestor opacity times the node's own, unrounded.
    pub fn effective_opacity(&self, node: &DesignNode) -> f64 {
        self.opacity * node.opacity.unwrap_or(1.0)
    }

    /// Own color, then inherited, then the palette chain.
    pub fn text_color(&self, text: &TextInfo) -> String {
        text.color
            .as_deref()
            .or(self.inherited_color)
            .unwrap_or_else(|| self.palette.fallback_text_color())
            .to_string()
    }

    pub fn palette(&self) -> &'a BrandPalette {
        self.palette
    }
}

/// The full style map of one IR node, alphabetically ordered.
pub fn style_for(node: &DesignNode, ctx: &StyleContext<'_>) -> StyleMap {
    let mut css = StyleMap::new();

    if let Some(width) = node.width {
        css.insert("width", px(width));
    }
    if let Some(height) = node.height {
        css.insert("height", px(height));
    }

    match node.position {
        Some(PositionInfo::Absolute { x, y }) => {
            css.insert("position", "absolute");
            css.insert("left", px(x));
            css.insert("top", px(y));
        }
        _ if node.has_absolute_child() => css.insert("position", "relative"),
        _ => {}
    }

    if let Some(layout) = &node.layout {
        insert_layout(layout, &mut css);
    }

    if let Some(visual) = &node.visual {
        // A text node's fill is its glyph color.
        if let Some(background) = visual.background.as_ref().filter(|_| !node.is_text()) {
            css.insert("background", background.as_str());
        }
        if let Some(border) = &visual.border {
            css.insert(
                "border",
                format!("{} solid {}", px(border.weight), border.color),
            );
        }
        if let Some(radius) = &visual.radius {
            css.insert("border-radius", radius_shorthand(radius));
        }
    }
    if node.placeholder.is_some() && !css.contains_key("background") {
        css.insert("background", PLACEHOLDER_BACKGROUND);
    }

    if let Some(effects) = &node.effects {
        if !effects.shadows.is_empty() {
            let fragments = effects
                .shadows
                .iter()
                .map(shadow_fragment)
                .collect::<Vec<_>>();
            css.insert("box-shadow", fragments.join(", "));
        }
        if let Some(filter) = blur_filter(&effects.blur) {
            css.insert("filter", filter);
        }
        if let Some(filter) = blur_filter(&effects.backdrop_blur) {
            css.insert("backdrop-filter", filter);
        }
    }

    if let Some(text) = &node.text {
        insert_text(text, &ctx.text_color(text), &mut css);
    }

    let opacity = round3(ctx.effective_opacity(node));
    if opacity < 1.0 {
        css.insert("opacity", opacity);
    }

    css.sorted()
}

fn insert_text(text: &TextInfo, color: &str, css: &mut StyleMap) {
    css.insert("color", color);
    if let Some(family) = &text.font_family {
        css.insert("font-family", family.as_str());
    }
    if let Some(size) = text.font_size {
        css.insert("font-size", px(size));
    }
    if let Some(weight) = text.font_weight {
        css.insert("font-weight", format_number(weight));
    }
    if let Some(spacing) = text.letter_spacing {
        css.insert("letter-spacing", px(spacing));
    }
    if let Some(line_height) = text.line_height {
        css.insert("line-height", px(line_height));
    }
    if let Some(align) = &text.text_align {
        css.insert("text-align", align.as_str());
    }
    if let Some(decoration) = &text.text_decoration {
        css.insert("text-decoration", decoration.as_str());
    }
    if let Some(transform) = &text.text_transform {
        css.insert("text-transform", transform.as_str());
    }
    css.insert("white-space", "pre-wrap");
    css.insert("word-break", "break-word");
}

/// Object literal for a style map: `{ key: value, 'kebab-key': 'text' }`.
///
/// Numeric-looking values are bare, everything else is a single-quoted
/// string. Keys keep the map's order.
pub fn render_style_object(css: &StyleMap) -> String {
    if css.is_empty() {
        return "{}".to_string();
    }
    let entries = css
        .iter()
        .map(|(key, value)| {
            let rendered = if value.is_numeric() {
                value.to_string()
            } else {
                js_string(&value.to_string())
            };
            format!("{}: {}", object_key(key), rendered)
        })
        .collect::<Vec<_>>();
    format!("{{ {} }}", entries.join(", "))
}
