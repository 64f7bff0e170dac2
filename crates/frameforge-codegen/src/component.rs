//! React component source emitter.

use frameforge_core::{DesignNode, FlexDirection};
use frameforge_style::StyleMap;
use serde_json::json;

use crate::error::Result;
use crate::escape::{escape_attr, escape_jsx_text, js_string, jsx_text};
use crate::icons::{export_icon, is_icon, IconExport};
use crate::landmarks::{detect_landmark, heading_level};
use crate::options::CodegenOptions;
use crate::style::{render_style_object, style_for, StyleContext};
use crate::templates::{TemplateEngine, COMPONENT_TEMPLATE};
use crate::tokens::StyleTokenRegistry;

/// Markup lines with two-space nesting.
#[derive(Debug, Default)]
struct Markup {
    lines: Vec<String>,
    depth: usize,
}

impl Markup {
    fn line(&mut self, text: impl AsRef<str>) {
        self.lines
            .push(format!("{}{}", "  ".repeat(self.depth), text.as_ref()));
    }

    fn open(&mut self, text: impl AsRef<str>) {
        self.line(text);
        self.depth += 1;
    }

    fn close(&mut self, text: impl AsRef<str>) {
        self.depth = self.depth.saturating_sub(1);
        self.line(text);
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// How the `className` attribute is set.
enum ClassName<'t> {
    None,
    /// The component's `className` prop.
    Prop,
    Token(&'t str),
}

/// Attribute string, with a leading space when non-empty.
fn attributes(class: ClassName<'_>, a11y: Option<(&str, &str)>, css: &StyleMap) -> String {
    let mut attrs = Vec::new();
    if let Some((_, label)) = a11y {
        attrs.push(format!("aria-label=\"{}\"", escape_attr(label)));
    }
    match class {
        ClassName::None => {}
        ClassName::Prop => attrs.push("className={className}".to_string()),
        ClassName::Token(token) => attrs.push(format!("className=\"{}\"", escape_attr(token))),
    }
    if let Some((role, _)) = a11y {
        attrs.push(format!("role=\"{}\"", escape_attr(role)));
    }
    if !css.is_empty() {
        attrs.push(format!("style={{{}}}", render_style_object(css)));
    }
    attrs.iter().map(|a| format!(" {}", a)).collect()
}

/// A vertical stack with text children reads as a list.
fn is_list(node: &DesignNode) -> bool {
    matches!(&node.layout, Some(layout) if layout.direction == FlexDirection::Column)
        && node.children.iter().any(DesignNode::is_text)
}

fn list_style(mut css: StyleMap) -> StyleMap {
    css.insert("list-style", "none");
    css.insert("margin", "0px");
    if !css.contains_key("padding") {
        css.insert("padding", "0px");
    }
    css.sorted()
}

pub struct ComponentEmitter<'a> {
    options: &'a CodegenOptions,
}

impl<'a> ComponentEmitter<'a> {
    pub fn new(options: &'a CodegenOptions) -> Self {
        Self { options }
    }

    pub fn emit(&self, root: &DesignNode) -> Result<String> {
        let palette = &self.options.palette;
        let tokens = self
            .options
            .text_tokens
            .then(|| StyleTokenRegistry::from_tree(root, palette));

        let mut markup = Markup::default();
        self.node(root, &StyleContext::root(palette), tokens.as_ref(), true, &mut markup);

        let text_styles: Vec<String> = tokens
            .iter()
            .flat_map(StyleTokenRegistry::stylesheet_rules)
            .map(|rule| js_string(&rule))
            .collect();

        let engine = TemplateEngine::new()?;
        let source = engine.render(
            COMPONENT_TEMPLATE,
            &json!({
                "name": self.options.component_ident(),
                "body": markup.finish(),
                "memo": self.options.memo,
                "text_styles": text_styles,
            }),
        )?;
        tracing::debug!(nodes = root.node_count(), bytes = source.len(), "emitted component source");
        Ok(source)
    }

    fn class_name<'t>(
        &self,
        node: &DesignNode,
        ctx: &StyleContext<'_>,
        tokens: Option<&'t StyleTokenRegistry>,
        is_root: bool,
    ) -> ClassName<'t> {
        if is_root {
            return ClassName::Prop;
        }
        tokens
            .and_then(|t| t.token_for(node, ctx))
            .map_or(ClassName::None, ClassName::Token)
    }

    fn node<'n>(
        &self,
        node: &'n DesignNode,
        ctx: &StyleContext<'n>,
        tokens: Option<&StyleTokenRegistry>,
        is_root: bool,
        out: &mut Markup,
    ) {
        let class = self.class_name(node, ctx, tokens, is_root);
        let a11y = node
            .placeholder
            .as_ref()
            .map(|p| (p.role.as_str(), p.aria_label.as_str()));

        if let Some(text) = &node.text {
            let attrs = attributes(class, a11y, &style_for(node, ctx));
            out.line(format!("<span{}>{}</span>", attrs, jsx_text(&text.characters)));
            return;
        }

        if self.options.icons && is_icon(node) {
            let css = style_for(node, ctx);
            match export_icon(node) {
                IconExport::Svg(markup) => {
                    out.line(format!("<div{}>{}</div>", attributes(class, a11y, &css), markup));
                }
                IconExport::Fallback { glyph, label } => {
                    let attrs = attributes(class, Some(("img", label.as_str())), &css);
                    out.line(format!("<span{}>{}</span>", attrs, escape_jsx_text(&glyph)));
                }
            }
            return;
        }

        let child_ctx = ctx.child(node);
        if is_list(node) {
            let attrs = attributes(class, a11y, &list_style(style_for(node, ctx)));
            out.open(format!("<ul{}>", attrs));
            for child in &node.children {
                self.list_item(child, &child_ctx, tokens, out);
            }
            out.close("</ul>");
            return;
        }

        let tag = detect_landmark(&node.name).map_or("div", |l| l.tag());
        let attrs = attributes(class, a11y, &style_for(node, ctx));
        if node.children.is_empty() {
            out.line(format!("<{}{} />", tag, attrs));
            return;
        }
        out.open(format!("<{}{}>", tag, attrs));
        for child in &node.children {
            self.node(child, &child_ctx, tokens, false, out);
        }
        out.close(format!("</{}>", tag));
    }

    /// One `li` of a regrouped list. Text children carry their style on the
    /// item; heading-like names get an `hN` inside it.
    fn list_item<'n>(
        &self,
        node: &'n DesignNode,
        ctx: &StyleContext<'n>,
        tokens: Option<&StyleTokenRegistry>,
        out: &mut Markup,
    ) {
        let Some(text) = &node.text else {
            out.open("<li>");
            self.node(node, ctx, tokens, false, out);
            out.close("</li>");
            return;
        };

        let class = self.class_name(node, ctx, tokens, false);
        let attrs = attributes(class, None, &style_for(node, ctx));
        let content = jsx_text(&text.characters);
        match heading_level(&node.name) {
            Some(level) => {
                let reset: StyleMap = [("font", "inherit"), ("margin", "0px")].into_iter().collect();
                out.line(format!(
                    "<li{}><h{level} style={{{}}}>{}</h{level}></li>",
                    attrs,
                    render_style_object(&reset),
                    content,
                    level = level
                ));
            }
            None => out.line(format!("<li{}>{}</li>", attrs, content)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frameforge_core::{Layout, NodeKind, Placeholder, TextInfo};

    fn node(name: &str, kind: NodeKind, children: Vec<DesignNode>) -> DesignNode {
        DesignNode {
            id: name.into(),
            name: name.into(),
            kind,
            children,
            ..Default::default()
        }
    }

    fn text(name: &str, characters: &str) -> DesignNode {
        DesignNode {
            text: Some(TextInfo {
                characters: characters.into(),
                ..Default::default()
            }),
            ..node(name, NodeKind::Text, vec![])
        }
    }

    fn column(name: &str, children: Vec<DesignNode>) -> DesignNode {
        DesignNode {
            layout: Some(Layout {
                direction: FlexDirection::Column,
                gap: None,
                padding: None,
                justify: None,
                align: None,
            }),
            ..node(name, NodeKind::Frame, children)
        }
    }

    fn emit(root: &DesignNode) -> String {
        ComponentEmitter::new(&CodegenOptions::default())
            .emit(root)
            .unwrap()
    }

    #[test]
    fn test_component_contract() {
        let source = emit(&node("Card", NodeKind::Frame, vec![]));
        assert!(source.starts_with("import React from 'react';"));
        assert!(source.contains("export interface FigmaComponentProps {\n  className?: string;\n}"));
        assert!(source.contains(
            "export const FigmaComponent: React.FC<FigmaComponentProps> = ({ className }) => {"
        ));
        assert!(source.contains("    <div className={className} />"));
        assert!(source.contains("export default FigmaComponent;"));
        assert!(!source.contains("React.memo"));
    }

    #[test]
    fn test_memo_alias() {
        let options = CodegenOptions::default()
            .with_component_name("pricing card")
            .with_memo(true);
        let source = ComponentEmitter::new(&options)
            .emit(&node("Card", NodeKind::Frame, vec![]))
            .unwrap();
        assert!(source.contains("export const PricingCardMemo = React.memo(PricingCard);"));
    }

    #[test]
    fn test_landmark_tags() {
        let root = node(
            "Page",
            NodeKind::Frame,
            vec![
                node("Header", NodeKind::Frame, vec![]),
                node("Footer", NodeKind::Frame, vec![]),
                node("Card", NodeKind::Frame, vec![]),
            ],
        );
        let source = emit(&root);
        assert!(source.contains("<header />"));
        assert!(source.contains("<footer />"));
        assert!(source.contains("<div />"));
    }

    #[test]
    fn test_text_is_escaped() {
        let root = node(
            "Root",
            NodeKind::Frame,
            vec![text("Body", "Tom & Jerry <3 {braces}")],
        );
        let source = emit(&root);
        assert!(source.contains(">Tom &amp; Jerry &lt;3 &#123;braces&#125;</span>"));
        assert!(source.contains("className=\"ts-1\""));
    }

    #[test]
    fn test_text_tokens_are_defined() {
        let root = node(
            "Root",
            NodeKind::Frame,
            vec![text("A", "one"), text("B", "two")],
        );
        let source = emit(&root);
        assert_eq!(source.matches("className=\"ts-1\"").count(), 2);
        assert!(source.contains("export const FigmaComponentTextStyles = ["));
        assert!(source.contains("  '.ts-1 { color: #000000; }',"));
        assert!(source.contains("].join('\\n');"));

        let options = CodegenOptions {
            text_tokens: false,
            ..Default::default()
        };
        let source = ComponentEmitter::new(&options).emit(&root).unwrap();
        assert!(!source.contains("ts-1"));
        assert!(!source.contains("TextStyles"));

        assert!(!emit(&node("Card", NodeKind::Frame, vec![])).contains("TextStyles"));
    }

    #[test]
    fn test_multiline_text_survives_indentation() {
        let root = node(
            "Root",
            NodeKind::Frame,
            vec![text("Body", "Line one\nLine two")],
        );
        let source = emit(&root);
        assert!(source.contains(">{'Line one\\nLine two'}</span>"));
        assert!(!source.contains("Line one\n"));
    }

    #[test]
    fn test_vertical_text_stack_becomes_list() {
        let root = column(
            "Features",
            vec![
                text("H3 Title", "Why us"),
                text("Item", "Fast"),
                node("Badge", NodeKind::Rectangle, vec![]),
            ],
        );
        let source = emit(&root);
        assert!(source.contains("<ul className={className} style={{ display: 'flex', 'flex-direction': 'column', 'list-style': 'none', margin: '0px', padding: '0px' }}>"));
        assert!(source.contains("<h3 style={{ font: 'inherit', margin: '0px' }}>Why us</h3></li>"));
        assert!(source.contains(">Fast</li>"));
        assert!(source.contains("<li>\n"));
        assert!(source.contains("</ul>"));
    }

    #[test]
    fn test_row_is_not_a_list() {
        let mut root = column("Row", vec![text("Item", "A")]);
        if let Some(layout) = &mut root.layout {
            layout.direction = FlexDirection::Row;
        }
        assert!(!emit(&root).contains("<ul"));
    }

    #[test]
    fn test_placeholder_attributes() {
        let mut image = node("Hero", NodeKind::Rectangle, vec![]);
        image.placeholder = Some(Placeholder {
            role: "img".into(),
            aria_label: "Hero placeholder".into(),
        });
        let root = node("Root", NodeKind::Frame, vec![image]);
        let source = emit(&root);
        assert!(source.contains(
            "<div aria-label=\"Hero placeholder\" role=\"img\" style={{ background: '#ccc' }} />"
        ));
    }

    #[test]
    fn test_icon_inline_svg() {
        let mut icon = node("Arrow", NodeKind::Vector, vec![]);
        icon.width = Some(0.0);
        icon.height = Some(0.0);
        let root = node(
            "Root",
            NodeKind::Frame,
            vec![icon, node("Dot", NodeKind::Ellipse, vec![])],
        );
        let source = emit(&root);
        assert!(source.contains("<div><svg "));
        assert!(source.contains("aria-label=\"Arrow icon\" role=\"img\""));
    }
}
