//! IR sub-record projection of the style facts.

use frameforge_core::{Effects, Layout, RawNode, TextInfo, Visual};

use crate::facts;

pub fn layout(node: &RawNode) -> Option<Layout> {
    facts::flex(node)
}

/// Always present; `border` and `radius` stay `None` when absent.
pub fn visual(node: &RawNode) -> Visual {
    Visual {
        background: facts::background(node),
        border: facts::border(node),
        radius: facts::corner_radius(node).map(|r| r.quad()),
    }
}

/// `None` when no visible supported effect exists. The last layer blur and
/// the last background blur win.
pub fn effects(node: &RawNode) -> Option<Effects> {
    let facts = facts::effects(node);
    if facts.is_empty() {
        return None;
    }
    Some(Effects {
        blur: facts.layer_blurs.last().copied(),
        backdrop_blur: facts.background_blurs.last().copied(),
        shadows: facts.shadows,
    })
}

/// Text record for `TEXT` nodes with non-empty characters.
pub fn text(node: &RawNode) -> Option<TextInfo> {
    if !node.kind.is_text() {
        return None;
    }
    let characters = node.characters.clone().filter(|c| !c.is_empty())?;
    let typo = facts::typography(node).unwrap_or_default();

    Some(TextInfo {
        characters,
        font_family: typo.font_family,
        font_size: typo.font_size,
        font_weight: typo.font_weight,
        // A text node without a type style still has a usable fill color.
        color: typo.color.or_else(|| facts::text_color(node)),
        line_height: typo.line_height,
        letter_spacing: typo.letter_spacing,
        paragraph_spacing: typo.paragraph_spacing,
        text_align: typo.text_align,
        text_decoration: typo.text_decoration,
        text_transform: typo.text_transform.map(str::to_string),
    })
}
