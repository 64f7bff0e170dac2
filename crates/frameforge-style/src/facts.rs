//! Canonical style facts extracted from a raw node.
//!
//! Every function here is pure: it reads the node and returns a value,
//! never touching the input.

use frameforge_core::format::{css_color, css_rgba, format_number, gradient_angle, round3};
use frameforge_core::{
    Border, CounterAxisAlign, CrossAxisAlign, EffectKind, FlexDirection, Layout, LayoutMode,
    MainAxisAlign, NodeKind, PaintKind, PrimaryAxisAlign, RawNode, Shadow, TextCase,
};

/// Rounded pixel size from the bounding box.
pub fn size(node: &RawNode) -> Option<(f64, f64)> {
    node.absolute_bounding_box
        .map(|rect| (rect.width.round(), rect.height.round()))
}

/// The node's own opacity, when defined and below 1, rounded to 3 decimals.
pub fn own_opacity(node: &RawNode) -> Option<f64> {
    node.opacity.filter(|o| *o < 1.0).map(round3)
}

/// Background from the first visible fill.
///
/// The legacy `backgroundColor` is consulted only when `fills` is absent.
/// A present but empty list means no background.
pub fn background(node: &RawNode) -> Option<String> {
    match node.fills.as_deref() {
        Some([]) => None,
        Some(_) => {
            let fill = node.first_visible_fill()?;
            match fill.kind {
                PaintKind::Solid => fill.color.as_ref().map(css_color),
                PaintKind::GradientLinear if !fill.gradient_stops.is_empty() => {
                    let angle = gradient_angle(&fill.gradient_handle_positions);
                    let stops = fill
                        .gradient_stops
                        .iter()
                        .map(|stop| {
                            format!(
                                "{} {}%",
                                css_rgba(&stop.color),
                                format_number((stop.position * 100.0).round())
                            )
                        })
                        .collect::<Vec<_>>()
                        .join(", ");
                    Some(format!(
                        "linear-gradient({}deg, {})",
                        format_number(angle),
                        stops
                    ))
                }
                // Image fills are surfaced as placeholder metadata instead.
                _ => None,
            }
        }
        None => node.background_color.as_ref().map(css_color),
    }
}

/// Text color from the first visible solid fill that has a color.
pub fn text_color(node: &RawNode) -> Option<String> {
    node.fills
        .as_deref()?
        .iter()
        .find(|paint| paint.is_visible() && paint.kind == PaintKind::Solid && paint.color.is_some())
        .and_then(|paint| paint.color.as_ref())
        .map(css_color)
}

/// Solid border from the first visible colored stroke and a non-zero weight.
pub fn border(node: &RawNode) -> Option<Border> {
    let weight = node.stroke_weight.filter(|w| *w != 0.0)?;
    let color = node
        .strokes
        .as_deref()?
        .iter()
        .filter(|paint| paint.is_visible())
        .find_map(|paint| paint.color.as_ref())?;
    Some(Border {
        weight,
        color: css_color(color),
    })
}

/// Corner rounding as written in the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CornerRadius {
    Uniform(f64),
    /// top-left, top-right, bottom-right, bottom-left
    PerCorner([f64; 4]),
}

impl CornerRadius {
    pub fn quad(&self) -> [f64; 4] {
        match *self {
            Self::Uniform(r) => [r; 4],
            Self::PerCorner(quad) => quad,
        }
    }
}

/// Per-corner radii win over a uniform radius.
pub fn corner_radius(node: &RawNode) -> Option<CornerRadius> {
    node.rectangle_corner_radii
        .map(CornerRadius::PerCorner)
        .or_else(|| node.corner_radius.map(CornerRadius::Uniform))
}

pub fn main_axis(align: PrimaryAxisAlign) -> MainAxisAlign {
    match align {
        PrimaryAxisAlign::Min => MainAxisAlign::FlexStart,
        PrimaryAxisAlign::Max => MainAxisAlign::FlexEnd,
        PrimaryAxisAlign::SpaceBetween => MainAxisAlign::SpaceBetween,
        PrimaryAxisAlign::Center => MainAxisAlign::Center,
    }
}

pub fn cross_axis(align: CounterAxisAlign) -> CrossAxisAlign {
    match align {
        CounterAxisAlign::Min => CrossAxisAlign::FlexStart,
        CounterAxisAlign::Max => CrossAxisAlign::FlexEnd,
        CounterAxisAlign::Baseline => CrossAxisAlign::Baseline,
        CounterAxisAlign::Center => CrossAxisAlign::Center,
    }
}

/// Flex container facts for auto-layout nodes.
///
/// `gap` is kept whenever item spacing is defined (zero included); the CSS
/// projection decides whether to print it. Padding is zero-filled once any
/// side is defined.
pub fn flex(node: &RawNode) -> Option<Layout> {
    let direction = match node.layout_mode? {
        LayoutMode::Horizontal => FlexDirection::Row,
        LayoutMode::Vertical => FlexDirection::Column,
        LayoutMode::None => return None,
    };

    let sides = [
        node.padding_top,
        node.padding_right,
        node.padding_bottom,
        node.padding_left,
    ];
    let padding = sides
        .iter()
        .any(Option::is_some)
        .then(|| sides.map(|side| side.unwrap_or(0.0)));

    Some(Layout {
        direction,
        gap: node.item_spacing,
        padding,
        justify: node.primary_axis_align_items.map(main_axis),
        align: node.counter_axis_align_items.map(cross_axis),
    })
}

/// Typography of a text node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Typography {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
    /// Only when non-zero.
    pub letter_spacing: Option<f64>,
    /// Rounded pixels.
    pub line_height: Option<f64>,
    pub paragraph_spacing: Option<f64>,
    /// Lowercased.
    pub text_align: Option<String>,
    /// Lowercased, never `none`.
    pub text_decoration: Option<String>,
    pub text_transform: Option<&'static str>,
    pub color: Option<String>,
}

pub fn text_transform(case: TextCase) -> Option<&'static str> {
    match case {
        TextCase::Upper => Some("uppercase"),
        TextCase::Lower => Some("lowercase"),
        TextCase::Title => Some("capitalize"),
        TextCase::Original => None,
    }
}

/// Typography for `TEXT` nodes that carry a type style.
pub fn typography(node: &RawNode) -> Option<Typography> {
    if node.kind != NodeKind::Text {
        return None;
    }
    let style = node.style.as_ref()?;

    Some(Typography {
        font_family: style.font_family.clone().filter(|f| !f.is_empty()),
        font_size: style.font_size.filter(|s| *s != 0.0),
        font_weight: style.font_weight.filter(|w| *w != 0.0),
        letter_spacing: style.letter_spacing.filter(|s| *s != 0.0),
        line_height: style.line_height_px.filter(|l| *l != 0.0).map(f64::round),
        paragraph_spacing: style.paragraph_spacing.filter(|s| *s != 0.0),
        text_align: style
            .text_align_horizontal
            .as_deref()
            .filter(|a| !a.is_empty())
            .map(str::to_lowercase),
        text_decoration: style
            .text_decoration
            .as_deref()
            .filter(|d| !d.is_empty() && !d.eq_ignore_ascii_case("none"))
            .map(str::to_lowercase),
        text_transform: style.text_case.and_then(text_transform),
        color: text_color(node),
    })
}

/// Visible shadow and blur effects, in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EffectFacts {
    pub shadows: Vec<Shadow>,
    pub layer_blurs: Vec<f64>,
    pub background_blurs: Vec<f64>,
}

impl EffectFacts {
    pub fn is_empty(&self) -> bool {
        self.shadows.is_empty() && self.layer_blurs.is_empty() && self.background_blurs.is_empty()
    }
}

/// Classify visible effects. Shadows need both an offset and a color;
/// unsupported effect types are ignored.
pub fn effects(node: &RawNode) -> EffectFacts {
    let mut facts = EffectFacts::default();
    for effect in node.effects.iter().flatten().filter(|e| e.is_visible()) {
        match effect.kind {
            EffectKind::DropShadow | EffectKind::InnerShadow => {
                if let (Some(offset), Some(color)) = (effect.offset, effect.color.as_ref()) {
                    facts.shadows.push(Shadow {
                        x: offset.x,
                        y: offset.y,
                        blur: effect.radius.unwrap_or(0.0),
                        color: css_rgba(color),
                        inset: effect.kind == EffectKind::InnerShadow,
                    });
                }
            }
            EffectKind::LayerBlur => facts.layer_blurs.push(effect.radius.unwrap_or(0.0)),
            EffectKind::BackgroundBlur => {
                facts.background_blurs.push(effect.radius.unwrap_or(0.0))
            }
            EffectKind::Unsupported => {}
        }
    }
    facts
}

/// One `box-shadow` fragment: `<x>px <y>px <blur>px 0 <color>[ inset]`.
pub fn shadow_fragment(shadow: &Shadow) -> String {
    format!(
        "{}px {}px {}px 0 {}{}",
        format_number(shadow.x),
        format_number(shadow.y),
        format_number(shadow.blur),
        shadow.color,
        if shadow.inset { " inset" } else { "" }
    )
}

/// Space-joined `blur(<r>px)` filter functions.
pub fn blur_filter<'a>(radii: impl IntoIterator<Item = &'a f64>) -> Option<String> {
    let joined = radii
        .into_iter()
        .map(|r| format!("blur({}px)", format_number(*r)))
        .collect::<Vec<_>>()
        .join(" ");
    (!joined.is_empty()).then_some(joined)
}
