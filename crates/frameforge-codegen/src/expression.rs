//! Nested `createElement(...)` emitter for sandboxed preview.
//!
//! The output is a single function expression taking `createElement` as its
//! only parameter, so the preview host decides what an element is and the
//! generated code never touches any global.

use std::time::Instant;

use frameforge_core::DesignNode;
use frameforge_telemetry::{PerformanceSample, PerformanceSink};
use serde_json::json;

use crate::error::Result;
use crate::escape::{js_string, object_key};
use crate::icons::{export_icon, is_icon, IconExport};
use crate::options::CodegenOptions;
use crate::style::{render_style_object, style_for, StyleContext};
use crate::templates::{TemplateEngine, EXPRESSION_TEMPLATE};
use crate::tokens::StyleTokenRegistry;

/// Operation label of the emitted performance sample.
pub const EXPRESSION_OPERATION: &str = "generateReactCode";

/// Column of the root element inside the wrapper.
const ROOT_INDENT: usize = 4;

pub struct ExpressionEmitter<'a> {
    options: &'a CodegenOptions,
}

impl<'a> ExpressionEmitter<'a> {
    pub fn new(options: &'a CodegenOptions) -> Self {
        Self { options }
    }

    /// Emit the wrapped expression and record one sample to `sink`.
    pub fn emit(&self, root: &DesignNode, sink: &dyn PerformanceSink) -> Result<String> {
        let start = Instant::now();
        let code = self.render(root);
        let elapsed = start.elapsed();

        // Top-level children approximate the column count of a layout.
        let columns = root.children.len().max(1);
        let ms_per_column = elapsed.as_secs_f64() * 1000.0 / columns as f64;
        sink.record(
            PerformanceSample::new(EXPRESSION_OPERATION, elapsed)
                .with_metadata("columns", columns)
                .with_metadata("msPerColumn", ms_per_column),
        );
        code
    }

    fn render(&self, root: &DesignNode) -> Result<String> {
        let palette = &self.options.palette;
        let tokens = self
            .options
            .text_tokens
            .then(|| StyleTokenRegistry::from_tree(root, palette));
        let tree = self.element(root, &StyleContext::root(palette), tokens.as_ref(), ROOT_INDENT);

        let engine = TemplateEngine::new()?;
        let code = engine.render(
            EXPRESSION_TEMPLATE,
            &json!({ "name": self.options.component_ident(), "tree": tree }),
        )?;
        tracing::debug!(nodes = root.node_count(), bytes = code.len(), "emitted expression tree");
        Ok(code)
    }

    fn element<'n>(
        &self,
        node: &'n DesignNode,
        ctx: &StyleContext<'n>,
        tokens: Option<&StyleTokenRegistry>,
        indent: usize,
    ) -> String {
        let mut props: Vec<(&str, String)> = Vec::new();
        let mut args: Vec<String> = Vec::new();

        let icon = (self.options.icons && is_icon(node)).then(|| export_icon(node));

        let label = match (&icon, &node.placeholder) {
            (Some(IconExport::Fallback { label, .. }), _) => Some(label.as_str()),
            (_, Some(placeholder)) => Some(placeholder.aria_label.as_str()),
            _ => None,
        };
        if let Some(label) = label {
            props.push(("aria-label", js_string(label)));
        }
        if let Some(token) = tokens.and_then(|t| t.token_for(node, ctx)) {
            props.push(("className", js_string(token)));
        }
        match &icon {
            Some(IconExport::Svg(markup)) => {
                props.push(("dangerouslySetInnerHTML", format!("{{ __html: {} }}", js_string(markup))));
            }
            Some(IconExport::Fallback { glyph, .. }) => {
                props.push(("role", js_string("img")));
                args.push(js_string(glyph));
            }
            None => {
                if let Some(placeholder) = &node.placeholder {
                    props.push(("role", js_string(&placeholder.role)));
                }
            }
        }
        let css = style_for(node, ctx);
        if !css.is_empty() {
            props.push(("style", render_style_object(&css)));
        }

        if let Some(text) = &node.text {
            args.push(js_string(&text.characters));
        }
        let child_ctx = ctx.child(node);
        args.extend(
            node.children
                .iter()
                .map(|child| self.element(child, &child_ctx, tokens, indent + 2)),
        );

        let props = if props.is_empty() {
            "null".to_string()
        } else {
            let entries = props
                .iter()
                .map(|(key, value)| format!("{}: {}", object_key(key), value))
                .collect::<Vec<_>>();
            format!("{{ {} }}", entries.join(", "))
        };

        if args.is_empty() {
            return format!("createElement('div', {})", props);
        }
        let inner = " ".repeat(indent + 2);
        format!(
            "createElement('div', {},\n{}{}\n{})",
            props,
            inner,
            args.join(&format!(",\n{}", inner)),
            " ".repeat(indent)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frameforge_core::{NodeKind, Placeholder, PositionInfo, TextInfo};
    use frameforge_telemetry::{MemorySink, NullSink};

    fn frame(id: &str, children: Vec<DesignNode>) -> DesignNode {
        DesignNode {
            id: id.into(),
            name: id.into(),
            kind: NodeKind::Frame,
            width: Some(100.0),
            height: Some(50.0),
            children,
            ..Default::default()
        }
    }

    fn text(characters: &str) -> DesignNode {
        DesignNode {
            id: "t".into(),
            name: "Label".into(),
            kind: NodeKind::Text,
            text: Some(TextInfo {
                characters: characters.into(),
                font_size: Some(14.0),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn emit(root: &DesignNode, options: &CodegenOptions) -> String {
        ExpressionEmitter::new(options).emit(root, &NullSink).unwrap()
    }

    #[test]
    fn test_wrapper_shape() {
        let code = emit(&frame("root", vec![]), &CodegenOptions::default());
        assert_eq!(
            code,
            "(function(createElement) {\n  function FigmaComponent() {\n    return createElement('div', { style: { height: '50px', width: '100px' } });\n  }\n  return FigmaComponent;\n})"
        );
    }

    #[test]
    fn test_children_and_text_arguments() {
        let root = frame("root", vec![text("It's here"), frame("inner", vec![])]);
        let options = CodegenOptions {
            text_tokens: false,
            ..Default::default()
        };
        let code = emit(&root, &options);
        assert!(code.contains(
            "createElement('div', { style: { height: '50px', width: '100px' } },\n      createElement('div',"
        ));
        assert!(code.contains("'It\\'s here'"));
        assert!(code.contains("'white-space': 'pre-wrap'"));
        assert!(!code.contains("className"));
    }

    #[test]
    fn test_prop_order() {
        let mut image = frame("hero", vec![]);
        image.placeholder = Some(Placeholder {
            role: "img".into(),
            aria_label: "Hero placeholder".into(),
        });
        let code = emit(&image, &CodegenOptions::default());
        let aria = code.find("'aria-label'").unwrap();
        let role = code.find("role:").unwrap();
        let style = code.find("style:").unwrap();
        assert!(aria < role && role < style);
        assert!(code.contains("background: '#ccc'"));
    }

    #[test]
    fn test_token_class_name() {
        let root = frame("root", vec![text("A"), text("B")]);
        let code = emit(&root, &CodegenOptions::default());
        assert_eq!(code.matches("className: 'ts-1'").count(), 2);
    }

    #[test]
    fn test_icon_markup() {
        let icon = DesignNode {
            id: "i".into(),
            name: "Star".into(),
            kind: NodeKind::Star,
            width: Some(12.0),
            height: Some(12.0),
            position: Some(PositionInfo::FlexItem),
            ..Default::default()
        };
        let root = frame("root", vec![icon]);
        let code = emit(&root, &CodegenOptions::default());
        assert!(code.contains("dangerouslySetInnerHTML: { __html: '<svg "));

        let options = CodegenOptions {
            icons: false,
            ..Default::default()
        };
        assert!(!emit(&root, &options).contains("dangerouslySetInnerHTML"));
    }

    #[test]
    fn test_records_one_sample() {
        let sink = MemorySink::new();
        let root = frame("root", vec![frame("a", vec![]), frame("b", vec![]), frame("c", vec![])]);
        ExpressionEmitter::new(&CodegenOptions::default())
            .emit(&root, &sink)
            .unwrap();

        let samples = sink.snapshot();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].operation, EXPRESSION_OPERATION);
        assert_eq!(samples[0].metadata["columns"], 3);
        assert!(samples[0].metadata["msPerColumn"].as_f64().unwrap() >= 0.0);
    }

    #[test]
    fn test_empty_props_are_null() {
        let bare = DesignNode {
            id: "g".into(),
            kind: NodeKind::Group,
            ..Default::default()
        };
        assert!(emit(&bare, &CodegenOptions::default()).contains("createElement('div', null)"));
    }
}
