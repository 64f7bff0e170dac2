//! Flat CSS projection of the style facts.

use std::fmt;

use frameforge_core::format::{format_number, format_opacity, px};
use frameforge_core::{Layout, RawNode};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::facts::{self, CornerRadius};

/// A CSS property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl StyleValue {
    /// Whether the value prints as a bare number (e.g. `0.753`, `-10`).
    pub fn is_numeric(&self) -> bool {
        match self {
            Self::Number(_) => true,
            Self::Text(text) => looks_numeric(text),
        }
    }
}

fn looks_numeric(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.chars().filter(|c| *c == '.').count() <= 1
        && !digits.starts_with('.')
        && !digits.ends_with('.')
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// CSS property map with kebab-case keys.
///
/// Properties are accumulated in rule order; [`StyleMap::sorted`] produces
/// the alphabetical order every consumer serializes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    entries: IndexMap<String, StyleValue>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in strict alphabetical order.
    pub fn sorted(mut self) -> Self {
        self.entries.sort_keys();
        self
    }

    /// Display string of a property, for assertions and logs.
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).map(ToString::to_string)
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = StyleMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// `display`, `flex-direction`, alignment, `gap` and `padding` for
/// auto-layout nodes.
pub fn extract_layout(node: &RawNode, css: &mut StyleMap) {
    if let Some(layout) = facts::flex(node) {
        insert_layout(&layout, css);
    }
}

/// Flex container properties of an IR layout record.
pub fn insert_layout(layout: &Layout, css: &mut StyleMap) {
    css.insert("display", "flex");
    css.insert("flex-direction", layout.direction.as_css());
    if let Some(justify) = layout.justify {
        css.insert("justify-content", justify.as_css());
    }
    if let Some(align) = layout.align {
        css.insert("align-items", align.as_css());
    }
    if let Some(gap) = layout.gap.filter(|g| *g > 0.0) {
        css.insert("gap", px(gap));
    }
    if let Some(padding) = layout.padding {
        css.insert("padding", padding_shorthand(&padding));
    }
}

/// `width`, `height`, `overflow` and the node's own opacity.
pub fn extract_box(node: &RawNode, css: &mut StyleMap) {
    if let Some((width, height)) = facts::size(node) {
        css.insert("width", px(width));
        css.insert("height", px(height));
    }
    if node.clips_content == Some(true) {
        css.insert("overflow", "hidden");
    }
    if let Some(opacity) = node.opacity.filter(|o| *o < 1.0) {
        css.insert("opacity", format_opacity(opacity));
    }
}

pub fn extract_fill(node: &RawNode, css: &mut StyleMap) {
    if let Some(background) = facts::background(node) {
        css.insert("background", background);
    }
}

/// `border` from strokes and `border-radius` from the corner radii.
pub fn extract_stroke(node: &RawNode, css: &mut StyleMap) {
    if let Some(border) = facts::border(node) {
        css.insert(
            "border",
            format!("{} solid {}", px(border.weight), border.color),
        );
    }
    match facts::corner_radius(node) {
        Some(CornerRadius::Uniform(radius)) => css.insert("border-radius", px(radius)),
        Some(CornerRadius::PerCorner(quad)) => css.insert("border-radius", quad_px(&quad)),
        None => {}
    }
}

pub fn extract_text(node: &RawNode, css: &mut StyleMap) {
    let Some(typo) = facts::typography(node) else {
        return;
    };
    if let Some(family) = typo.font_family {
        css.insert("font-family", family);
    }
    if let Some(size) = typo.font_size {
        css.insert("font-size", px(size));
    }
    if let Some(weight) = typo.font_weight {
        css.insert("font-weight", format_number(weight));
    }
    if let Some(spacing) = typo.letter_spacing {
        css.insert("letter-spacing", px(spacing));
    }
    if let Some(line_height) = typo.line_height {
        css.insert("line-height", px(line_height));
    }
    if let Some(align) = typo.text_align {
        css.insert("text-align", align);
    }
    if let Some(decoration) = typo.text_decoration {
        css.insert("text-decoration", decoration);
    }
    if let Some(transform) = typo.text_transform {
        css.insert("text-transform", transform);
    }
    css.insert("white-space", "pre-wrap");
    if let Some(color) = typo.color {
        css.insert("color", color);
    }
    css.insert("word-break", "break-word");
}

/// `box-shadow`, `filter` and `backdrop-filter`.
pub fn extract_effects(node: &RawNode, css: &mut StyleMap) {
    let effects = facts::effects(node);
    if let Some(filter) = facts::blur_filter(&effects.layer_blurs) {
        css.insert("filter", filter);
    }
    if let Some(filter) = facts::blur_filter(&effects.background_blurs) {
        css.insert("backdrop-filter", filter);
    }
    if !effects.shadows.is_empty() {
        let fragments = effects
            .shadows
            .iter()
            .map(facts::shadow_fragment)
            .collect::<Vec<_>>();
        css.insert("box-shadow", fragments.join(", "));
    }
}

/// All style rules for one node, alphabetically ordered.
pub fn extract_all_styles(node: &RawNode) -> StyleMap {
    let mut css = StyleMap::new();
    extract_layout(node, &mut css);
    extract_box(node, &mut css);
    extract_fill(node, &mut css);
    extract_stroke(node, &mut css);
    extract_text(node, &mut css);
    extract_effects(node, &mut css);
    css.sorted()
}

/// `top right bottom left` in pixels.
pub fn padding_shorthand(padding: &[f64; 4]) -> String {
    quad_px(padding)
}

/// Corner radius shorthand, collapsed to one value when all corners agree.
pub fn radius_shorthand(quad: &[f64; 4]) -> String {
    if quad.iter().all(|r| *r == quad[0]) {
        px(quad[0])
    } else {
        quad_px(quad)
    }
}

fn quad_px(quad: &[f64; 4]) -> String {
    quad.iter().map(|v| px(*v)).collect::<Vec<_>>().join(" ")
}
