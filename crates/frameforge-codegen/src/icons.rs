//! Placeholder export for vector-like nodes.

use frameforge_core::format::format_number;
use frameforge_core::{DesignNode, NodeKind, RawNode};

use crate::escape::escape_attr;

/// Edge length used when a node carries no size.
pub const DEFAULT_ICON_SIZE: f64 = 24.0;

/// Glyph shown when no markup can be produced.
pub const FALLBACK_GLYPH: &str = "\u{25A1}";

/// Anything an icon can be exported from.
pub trait IconSource {
    fn icon_name(&self) -> &str;
    fn icon_kind(&self) -> NodeKind;
    /// `(width, height)` when known.
    fn icon_size(&self) -> Option<(f64, f64)>;
}

impl IconSource for DesignNode {
    fn icon_name(&self) -> &str {
        &self.name
    }

    fn icon_kind(&self) -> NodeKind {
        self.kind
    }

    fn icon_size(&self) -> Option<(f64, f64)> {
        self.width.zip(self.height)
    }
}

impl IconSource for RawNode {
    fn icon_name(&self) -> &str {
        &self.name
    }

    fn icon_kind(&self) -> NodeKind {
        self.kind
    }

    fn icon_size(&self) -> Option<(f64, f64)> {
        self.absolute_bounding_box.map(|b| (b.width, b.height))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconExport {
    /// Inline `<svg>` markup, valid both as HTML and JSX.
    Svg(String),
    Fallback { glyph: String, label: String },
}

impl IconExport {
    pub fn as_svg(&self) -> Option<&str> {
        match self {
            Self::Svg(markup) => Some(markup),
            Self::Fallback { .. } => None,
        }
    }
}

/// Whether `source` should be exported as an icon.
pub fn is_icon(source: &impl IconSource) -> bool {
    source.icon_kind().is_vector_like()
}

fn icon_label(source: &impl IconSource) -> String {
    let name = source.icon_name().trim();
    if name.is_empty() {
        "icon".to_string()
    } else {
        format!("{} icon", name)
    }
}

/// Placeholder graphic sized to the node. Never fails: an unusable size
/// yields [`IconExport::Fallback`].
pub fn export_icon(source: &impl IconSource) -> IconExport {
    let label = icon_label(source);
    let (width, height) = source
        .icon_size()
        .unwrap_or((DEFAULT_ICON_SIZE, DEFAULT_ICON_SIZE));

    let usable = |v: f64| v.is_finite() && v > 0.0;
    if !usable(width) || !usable(height) {
        tracing::debug!(name = source.icon_name(), width, height, "icon size unusable, using glyph");
        return IconExport::Fallback {
            glyph: FALLBACK_GLYPH.to_string(),
            label,
        };
    }

    let (w, h) = (format_number(width), format_number(height));
    IconExport::Svg(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" fill="none" role="img" aria-label="{label}"><rect width="{w}" height="{h}" rx="2" fill="currentColor" opacity="0.2"/></svg>"#,
        w = w,
        h = h,
        label = escape_attr(&label),
    ))
}
