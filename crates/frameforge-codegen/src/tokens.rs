//! Shared text style tokens.
//!
//! Text nodes with identical typography and resolved color share one token
//! class name. Tokens are numbered in pre-order of first appearance, so the
//! same tree always yields the same names. The registry also keeps the CSS
//! each token stands for, so emitters can ship a stylesheet defining the
//! classes they reference.

use frameforge_core::format::{format_number, px};
use frameforge_core::{DesignNode, TextInfo};
use frameforge_style::StyleMap;
use indexmap::IndexMap;

use crate::options::BrandPalette;
use crate::style::StyleContext;

const TOKEN_PREFIX: &str = "ts-";

/// Canonical typography signature:
/// `family|weight|size|lineHeight|letterSpacing|color|paragraphSpacing`.
pub fn text_signature(text: &TextInfo, color: &str) -> String {
    let number = |value: Option<f64>| value.map(format_number).unwrap_or_default();
    [
        text.font_family.clone().unwrap_or_default(),
        number(text.font_weight),
        number(text.font_size),
        number(text.line_height),
        number(text.letter_spacing),
        color.to_string(),
        number(text.paragraph_spacing),
    ]
    .join("|")
}

/// CSS declarations behind a text token, alphabetically ordered.
pub fn text_declarations(text: &TextInfo, color: &str) -> StyleMap {
    let mut css = StyleMap::new();
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
    if let Some(spacing) = text.paragraph_spacing.filter(|s| *s > 0.0) {
        css.insert("margin-bottom", px(spacing));
    }
    css.sorted()
}

/// Signature of a node as seen from its style context.
pub fn node_signature(node: &DesignNode, ctx: &StyleContext<'_>) -> Option<String> {
    node.text
        .as_ref()
        .map(|text| text_signature(text, &ctx.text_color(text)))
}

/// Signature to token name, in registration order.
#[derive(Debug, Clone, Default)]
pub struct StyleTokenRegistry {
    tokens: IndexMap<String, String>,
    /// Token name to its declarations, for tokens registered from text.
    declarations: IndexMap<String, StyleMap>,
}

impl StyleTokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every text node of the tree in pre-order.
    pub fn from_tree(root: &DesignNode, palette: &BrandPalette) -> Self {
        let mut registry = Self::new();
        registry.collect(root, &StyleContext::root(palette));
        tracing::debug!(tokens = registry.len(), "built style token registry");
        registry
    }

    fn collect<'a>(&mut self, node: &'a DesignNode, ctx: &StyleContext<'a>) {
        if let Some(text) = &node.text {
            self.register_text(text, &ctx.text_color(text));
        }
        let child_ctx = ctx.child(node);
        for child in &node.children {
            self.collect(child, &child_ctx);
        }
    }

    /// Token for `signature`, allocating the next name when unseen.
    pub fn register(&mut self, signature: String) -> &str {
        let next = format!("{}{}", TOKEN_PREFIX, self.tokens.len() + 1);
        self.tokens.entry(signature).or_insert(next).as_str()
    }

    /// Token for a text style, recording its declarations on first sight.
    pub fn register_text(&mut self, text: &TextInfo, color: &str) -> &str {
        let signature = text_signature(text, color);
        if !self.tokens.contains_key(&signature) {
            let token = format!("{}{}", TOKEN_PREFIX, self.tokens.len() + 1);
            self.declarations
                .insert(token, text_declarations(text, color));
        }
        self.register(signature)
    }

    pub fn get(&self, signature: &str) -> Option<&str> {
        self.tokens.get(signature).map(String::as_str)
    }

    /// Token of a text node under `ctx`.
    pub fn token_for(&self, node: &DesignNode, ctx: &StyleContext<'_>) -> Option<&str> {
        node_signature(node, ctx).and_then(|signature| self.get(&signature))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// `(token, signature)` pairs in allocation order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens
            .iter()
            .map(|(signature, token)| (token.as_str(), signature.as_str()))
    }

    /// One `.ts-N { ... }` rule per text token, in allocation order.
    pub fn stylesheet_rules(&self) -> Vec<String> {
        self.declarations
            .iter()
            .map(|(token, css)| {
                let body = css
                    .iter()
                    .map(|(key, value)| format!("{}: {};", key, value))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!(".{} {{ {} }}", token, body)
            })
            .collect()
    }

    pub fn stylesheet(&self) -> String {
        self.stylesheet_rules().join("\n")
    }
}
