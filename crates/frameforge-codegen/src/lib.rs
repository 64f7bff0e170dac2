//! Code generation from the frameforge IR.
//!
//! Two emitters share one style computation ([`style::style_for`]):
//!
//! - [`expression`] produces a nested `createElement(...)` tree wrapped in a
//!   function expression, meant to be evaluated by a sandboxed preview host
//! - [`component`] produces React component source
//!
//! Both are byte-deterministic for equal input and options.
//!
//! # Example
//!
//! ```
//! use frameforge_codegen::{generate_from_json, CodegenOptions};
//!
//! let json = r#"{ "document": { "id": "1:1", "name": "Card", "type": "FRAME",
//!     "absoluteBoundingBox": { "x": 0, "y": 0, "width": 320, "height": 200 } } }"#;
//! let code = generate_from_json(json, &CodegenOptions::default()).unwrap();
//! assert!(code.contains("width: '320px'"));
//! ```

pub mod component;
pub mod error;
pub mod escape;
pub mod expression;
pub mod icons;
pub mod landmarks;
pub mod options;
pub mod pipeline;
pub mod style;
pub mod templates;
pub mod tokens;

pub use component::ComponentEmitter;
pub use error::{CodegenError, Result};
pub use expression::ExpressionEmitter;
pub use icons::{export_icon, IconExport, IconSource};
pub use landmarks::{detect_landmark, heading_level, Landmark};
pub use options::{BrandPalette, CodegenOptions, Target};
pub use pipeline::{generate, generate_document, Generation, ERROR_MARKER};
pub use style::{style_for, StyleContext};
pub use tokens::StyleTokenRegistry;

use frameforge_core::{DesignNode, DocumentResponse};
use frameforge_ir::IrBuilder;
use frameforge_telemetry::{PerformanceSink, TracingSink};

/// Expression-tree code for a fetched document.
///
/// A response without a root, or with a hidden root, yields
/// [`ERROR_MARKER`] rather than an error. Performance samples go to the
/// debug log.
pub fn generate_react_code(response: &DocumentResponse, options: &CodegenOptions) -> Result<String> {
    let Some(raw) = response.root() else {
        return Ok(ERROR_MARKER.to_string());
    };
    match IrBuilder::new().build(raw, None).root {
        Some(ir) => generate_code_from_ir(&ir, options, &TracingSink),
        None => Ok(ERROR_MARKER.to_string()),
    }
}

/// [`generate_react_code`] on a JSON document response.
pub fn generate_from_json(json: &str, options: &CodegenOptions) -> Result<String> {
    let response = DocumentResponse::parse(json)?;
    generate_react_code(&response, options)
}

/// Expression-tree code for an IR tree, recording one sample to `sink`.
pub fn generate_code_from_ir(
    ir: &DesignNode,
    options: &CodegenOptions,
    sink: &dyn PerformanceSink,
) -> Result<String> {
    ExpressionEmitter::new(options).emit(ir, sink)
}

/// React component source for an IR tree.
pub fn generate_react_component_source(ir: &DesignNode, options: &CodegenOptions) -> Result<String> {
    ComponentEmitter::new(options).emit(ir)
}
