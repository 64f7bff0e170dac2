//! End-to-end generation scenarios on document JSON.

use frameforge_codegen::{
    generate_code_from_ir, generate_from_json, generate_react_component_source, CodegenError,
    CodegenOptions, ERROR_MARKER,
};
use frameforge_core::{DesignNode, DocumentResponse, PositionInfo};
use frameforge_ir::build_ir;
use frameforge_telemetry::{MemorySink, NullSink};
use pretty_assertions::assert_eq;
use regex::Regex;
use serde_json::{json, Value};

fn ir_of(document: &Value) -> DesignNode {
    let response: DocumentResponse = serde_json::from_value(json!({ "document": document })).unwrap();
    build_ir(response.root().unwrap(), None).unwrap()
}

fn expression(ir: &DesignNode) -> String {
    generate_code_from_ir(ir, &CodegenOptions::default(), &NullSink).unwrap()
}

fn component(ir: &DesignNode) -> String {
    generate_react_component_source(ir, &CodegenOptions::default()).unwrap()
}

fn box_of(x: f64, y: f64, width: f64, height: f64) -> Value {
    json!({ "x": x, "y": y, "width": width, "height": height })
}

fn three_panel_layout() -> Value {
    json!({
        "id": "1:1",
        "name": "Dashboard",
        "type": "FRAME",
        "layoutMode": "NONE",
        "absoluteBoundingBox": box_of(0.0, 0.0, 800.0, 600.0),
        "children": [
            { "id": "1:2", "name": "Top", "type": "FRAME", "absoluteBoundingBox": box_of(0.0, 0.0, 800.0, 80.0) },
            { "id": "1:3", "name": "Side", "type": "FRAME", "absoluteBoundingBox": box_of(0.0, 80.0, 200.0, 520.0) },
            { "id": "1:4", "name": "Panel", "type": "FRAME", "absoluteBoundingBox": box_of(200.0, 80.0, 600.0, 520.0) }
        ]
    })
}

/// Keys of every `style` object literal, in emitted order.
fn style_blocks(code: &str) -> Vec<Vec<String>> {
    let block = Regex::new(r"style: \{ (.*?) \}[,)\n ]|style=\{\{ (.*?) \}\}").unwrap();
    let key = Regex::new(r"(?:^|, )'?([a-z][a-z-]*)'?: ").unwrap();
    block
        .captures_iter(code)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|body| {
            key.captures_iter(body.as_str())
                .map(|k| k[1].to_string())
                .collect()
        })
        .collect()
}

#[test]
fn test_three_panel_positions() {
    let ir = ir_of(&three_panel_layout());

    assert_eq!(ir.position, Some(PositionInfo::Root));
    let positions: Vec<_> = ir.children.iter().map(|c| c.position).collect();
    assert_eq!(
        positions,
        vec![
            Some(PositionInfo::Absolute { x: 0.0, y: 0.0 }),
            Some(PositionInfo::Absolute { x: 0.0, y: 80.0 }),
            Some(PositionInfo::Absolute { x: 200.0, y: 80.0 }),
        ]
    );

    for code in [expression(&ir), component(&ir)] {
        assert_eq!(code.matches("position: 'relative'").count(), 1);
        assert_eq!(code.matches("position: 'absolute'").count(), 3);
        assert!(code.contains("left: '0px'"));
        assert!(code.contains("left: '200px'"));
        assert!(code.contains("top: '80px'"));
        assert!(code.contains("top: '0px'"));
    }
}

#[test]
fn test_text_fidelity() {
    let characters = "The quick brown fox jumps over the lazy dog. ".repeat(20);
    let ir = ir_of(&json!({
        "id": "2:1",
        "name": "Paragraph",
        "type": "TEXT",
        "opacity": 0.7534,
        "absoluteBoundingBox": box_of(0.0, 0.0, 400.0, 300.0),
        "characters": characters,
        "style": { "fontFamily": "Inter", "fontSize": 16, "fontWeight": 400, "lineHeightPx": 22.4 },
        "fills": [{ "type": "SOLID", "color": { "r": 0.2, "g": 0.2, "b": 0.2, "a": 1 } }]
    }));

    let code = expression(&ir);
    assert!(code.contains(characters.as_str()));
    assert!(code.contains("opacity: 0.753"));
    assert!(code.to_lowercase().contains("white-space"));
    assert!(code.contains("'line-height': '22px'"));
    assert!(code.contains("color: 'rgb(51, 51, 51)'"));
    assert!(!code.contains("background"));

    let ir = ir_of(&json!({
        "id": "2:2",
        "name": "Address",
        "type": "FRAME",
        "absoluteBoundingBox": box_of(0.0, 0.0, 200.0, 60.0),
        "children": [{
            "id": "2:3",
            "name": "Lines",
            "type": "TEXT",
            "characters": "Line one\nLine two"
        }]
    }));
    assert!(expression(&ir).contains("'Line one\\nLine two'"));
    let source = component(&ir);
    assert!(source.contains(">{'Line one\\nLine two'}</span>"));
    assert!(!source.contains("Line one\n"));
}

#[test]
fn test_emitters_are_deterministic() {
    let ir = ir_of(&three_panel_layout());
    assert_eq!(expression(&ir), expression(&ir));
    assert_eq!(component(&ir), component(&ir));
    assert_eq!(ir, ir_of(&three_panel_layout()));
}

#[test]
fn test_style_keys_are_alphabetical() {
    let ir = ir_of(&json!({
        "id": "3:1",
        "name": "Card",
        "type": "FRAME",
        "layoutMode": "VERTICAL",
        "itemSpacing": 12,
        "paddingTop": 16,
        "primaryAxisAlignItems": "SPACE_BETWEEN",
        "counterAxisAlignItems": "MIN",
        "absoluteBoundingBox": box_of(0.0, 0.0, 320.0, 200.0),
        "cornerRadius": 8,
        "strokes": [{ "type": "SOLID", "color": { "r": 0, "g": 0, "b": 0, "a": 0.1 } }],
        "strokeWeight": 1,
        "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 1, "b": 1, "a": 1 } }],
        "effects": [
            { "type": "DROP_SHADOW", "radius": 4, "offset": { "x": 0, "y": 2 }, "color": { "r": 0, "g": 0, "b": 0, "a": 0.25 } },
            { "type": "LAYER_BLUR", "radius": 2 }
        ],
        "children": [
            {
                "id": "3:2",
                "name": "Title",
                "type": "TEXT",
                "characters": "Pricing",
                "style": { "fontFamily": "Inter", "fontSize": 20, "fontWeight": 700, "textAlignHorizontal": "LEFT", "textCase": "UPPER" }
            }
        ]
    }));

    for code in [expression(&ir), component(&ir)] {
        let blocks = style_blocks(&code);
        assert!(blocks.len() >= 2, "no style blocks in {}", code);
        for keys in blocks {
            let mut sorted = keys.clone();
            sorted.sort();
            assert_eq!(keys, sorted);
        }
    }
}

#[test]
fn test_opacity_compounds_through_ancestors() {
    let ir = ir_of(&json!({
        "id": "4:1",
        "name": "Outer",
        "type": "FRAME",
        "opacity": 0.5,
        "absoluteBoundingBox": box_of(0.0, 0.0, 100.0, 100.0),
        "children": [{
            "id": "4:2",
            "name": "Inner",
            "type": "FRAME",
            "opacity": 0.5,
            "absoluteBoundingBox": box_of(0.0, 0.0, 50.0, 50.0)
        }]
    }));

    // the IR keeps each node's own opacity
    assert_eq!(ir.opacity, Some(0.5));
    assert_eq!(ir.children[0].opacity, Some(0.5));

    for code in [expression(&ir), component(&ir)] {
        assert!(code.contains("opacity: 0.5"));
        assert!(code.contains("opacity: 0.25"));
    }
}

#[test]
fn test_component_source_contract() {
    let ir = ir_of(&json!({
        "id": "5:1",
        "name": "Hero",
        "type": "FRAME",
        "opacity": 0.9,
        "absoluteBoundingBox": box_of(0.0, 0.0, 1200.0, 480.0),
        "fills": [{
            "type": "GRADIENT_LINEAR",
            "gradientHandlePositions": [{ "x": 0, "y": 0 }, { "x": 1, "y": 0 }, { "x": 1, "y": 1 }],
            "gradientStops": [
                { "position": 0, "color": { "r": 1, "g": 0, "b": 0, "a": 1 } },
                { "position": 1, "color": { "r": 0, "g": 0, "b": 1, "a": 1 } }
            ]
        }],
        "children": [{
            "id": "5:2",
            "name": "Photo",
            "type": "RECTANGLE",
            "absoluteBoundingBox": box_of(40.0, 40.0, 300.0, 200.0),
            "fills": [{ "type": "IMAGE", "imageRef": "abc" }]
        }]
    }));

    let source = component(&ir);
    assert!(source.contains("export const FigmaComponent:"));
    assert!(source.contains("className?: string"));
    assert!(source.contains("opacity: 0.9"));
    assert!(source.contains("linear-gradient(90deg, rgba(255, 0, 0, 1) 0%, rgba(0, 0, 255, 1) 100%)"));
    assert!(source.contains("role=\"img\""));
    assert!(source.contains("aria-label=\"Photo placeholder\""));
    assert!(!source.contains("window"));
    assert!(!source.contains("document"));

    let code = expression(&ir);
    assert!(!code.contains("window"));
    assert!(!code.contains("document"));
}

#[test]
fn test_empty_fills_suppress_legacy_background() {
    let ir = ir_of(&json!({
        "id": "6:1",
        "name": "Plain",
        "type": "FRAME",
        "absoluteBoundingBox": box_of(0.0, 0.0, 10.0, 10.0),
        "fills": [],
        "backgroundColor": { "r": 1, "g": 0, "b": 0, "a": 1 }
    }));
    assert!(!expression(&ir).contains("background"));
    assert!(!component(&ir).contains("background"));
}

#[test]
fn test_missing_root_yields_marker() {
    let options = CodegenOptions::default();
    assert_eq!(generate_from_json(r#"{ "name": "file" }"#, &options).unwrap(), ERROR_MARKER);
    assert_eq!(
        generate_from_json(r#"{ "nodes": { "1:1": { "document": null } } }"#, &options).unwrap(),
        ERROR_MARKER
    );
    assert_eq!(
        generate_from_json(
            r#"{ "document": { "id": "1", "name": "x", "type": "FRAME", "visible": false } }"#,
            &options
        )
        .unwrap(),
        ERROR_MARKER
    );
}

#[test]
fn test_malformed_json_is_an_error() {
    let err = generate_from_json("{ not json", &CodegenOptions::default()).unwrap_err();
    assert!(matches!(err, CodegenError::Json(_)));
}

#[test]
fn test_node_scoped_response() {
    let json = json!({
        "nodes": {
            "7:1": { "document": { "id": "7:1", "name": "Picked", "type": "FRAME",
                "absoluteBoundingBox": box_of(0.0, 0.0, 64.0, 32.0) } },
            "7:2": { "document": { "id": "7:2", "name": "Ignored", "type": "FRAME" } }
        }
    });
    let code = generate_from_json(&json.to_string(), &CodegenOptions::default()).unwrap();
    assert!(code.contains("width: '64px'"));
    assert!(code.contains("function FigmaComponent()"));
}

#[test]
fn test_one_sample_per_emission() {
    let ir = ir_of(&three_panel_layout());
    let sink = MemorySink::new();
    generate_code_from_ir(&ir, &CodegenOptions::default(), &sink).unwrap();
    generate_code_from_ir(&ir, &CodegenOptions::default(), &sink).unwrap();

    let samples = sink.snapshot();
    assert_eq!(samples.len(), 2);
    assert!(samples.iter().all(|s| s.metadata["columns"] == 3));
}

#[test]
fn test_wire_alignment_and_text_case() {
    let json = json!({
        "document": {
            "id": "8:1",
            "name": "Toolbar",
            "type": "FRAME",
            "layoutMode": "HORIZONTAL",
            "primaryAxisAlignItems": "SPACE_BETWEEN",
            "counterAxisAlignItems": "BASELINE",
            "absoluteBoundingBox": box_of(0.0, 0.0, 400.0, 48.0),
            "children": [
                {
                    "id": "8:2",
                    "name": "Caption",
                    "type": "TEXT",
                    "characters": "Small caps",
                    "style": { "fontFamily": "Inter", "fontSize": 12, "textCase": "SMALL_CAPS" }
                },
                {
                    "id": "8:3",
                    "name": "Grid",
                    "type": "FRAME",
                    "layoutMode": "GRID",
                    "primaryAxisAlignItems": "SPACE_AROUND",
                    "absoluteBoundingBox": box_of(300.0, 0.0, 100.0, 48.0)
                }
            ]
        }
    });
    let response = DocumentResponse::parse(&json.to_string()).unwrap();
    let ir = build_ir(response.root().unwrap(), None).unwrap();

    for code in [expression(&ir), component(&ir)] {
        assert!(code.contains("'justify-content': 'space-between'"));
        assert!(code.contains("'align-items': 'baseline'"));
        assert_eq!(code.matches("display: 'flex'").count(), 1);
        assert!(!code.contains("text-transform"));
        assert!(code.contains("Small caps"));
    }
}

#[test]
fn test_deeply_nested_document() {
    let mut node = json!({ "id": "leaf", "name": "Leaf", "type": "TEXT", "characters": "bottom" });
    for level in (0..100).rev() {
        node = json!({
            "id": format!("9:{}", level),
            "name": "Level",
            "type": "FRAME",
            "absoluteBoundingBox": box_of(0.0, 0.0, 10.0, 10.0),
            "children": [node]
        });
    }
    let json = json!({ "document": node }).to_string();

    let code = generate_from_json(&json, &CodegenOptions::default()).unwrap();
    assert!(code.contains("'bottom'"));
    assert_eq!(code.matches("createElement('div'").count(), 101);
}
