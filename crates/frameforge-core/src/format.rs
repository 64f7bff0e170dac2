//! Numeric and color formatting shared by the normalizer, the IR builder and
//! both emitters.
//!
//! Every number that ends up in generated code passes through one of these
//! functions, so the rounding rules live in exactly one place.

use crate::types::{Color, Point};

/// Round to 3 decimal places.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Format a number as the shortest decimal string.
///
/// Integers carry no fraction, `-0` becomes `0`, and non-finite values
/// collapse to `0` so that generated code always parses.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Format an opacity with 3 decimals, trimming trailing zeros and the dot.
pub fn format_opacity(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Pixel length, e.g. `12px`.
pub fn px(value: f64) -> String {
    format!("{}px", format_number(value))
}

fn format_alpha(alpha: f64) -> String {
    format_number(round3(alpha))
}

/// CSS color string: `rgb(r, g, b)` when fully opaque, else `rgba(r, g, b, a)`.
pub fn css_color(color: &Color) -> String {
    let (r, g, b) = color.to_rgb8();
    let alpha = round3(color.a);
    if alpha == 1.0 {
        format!("rgb({}, {}, {})", r, g, b)
    } else {
        format!("rgba({}, {}, {}, {})", r, g, b, format_alpha(color.a))
    }
}

/// CSS color string that always carries the alpha channel.
pub fn css_rgba(color: &Color) -> String {
    let (r, g, b) = color.to_rgb8();
    format!("rgba({}, {}, {}, {})", r, g, b, format_alpha(color.a))
}

/// Angle in whole degrees of a linear gradient, in CSS convention.
///
/// The first handle is the gradient start, the second defines the axis.
/// Design-tool gradient space puts zero degrees on the positive x axis while
/// CSS puts it at "to top", hence the quarter turn.
pub fn gradient_angle(handles: &[Point]) -> f64 {
    let [start, end, ..] = handles else {
        return 0.0;
    };
    let delta = end.to_vec2() - start.to_vec2();
    let degrees = delta.y.atan2(delta.x).to_degrees();
    let normalized = (degrees + 90.0 + 360.0).rem_euclid(360.0);
    let rounded = normalized.round();
    if rounded >= 360.0 {
        0.0
    } else {
        rounded
    }
}
