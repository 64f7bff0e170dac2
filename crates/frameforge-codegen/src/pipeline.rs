//! One full generation run: raw document to IR to emitted code.

use std::time::{Duration, Instant};

use frameforge_core::{DocumentResponse, RawNode};
use frameforge_ir::{IrBuilder, IrOutput};
use frameforge_telemetry::{PerformanceSink, SessionLog};

use crate::component::ComponentEmitter;
use crate::error::Result;
use crate::expression::ExpressionEmitter;
use crate::options::CodegenOptions;

/// Emitted in place of code when the document has nothing to render.
pub const ERROR_MARKER: &str = "// Error: Could not parse design document";

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct Generation {
    pub ir: IrOutput,
    /// Present when the options target the expression emitter.
    pub expression: Option<String>,
    /// Present when the options target the component emitter.
    pub component: Option<String>,
    pub elapsed: Duration,
}

impl Generation {
    /// Session metrics of this run; diagnostics become the warnings.
    pub fn session_log(&self) -> SessionLog {
        SessionLog {
            node_count: self.ir.stats.node_count,
            duration_ms: self.elapsed.as_secs_f64() * 1000.0,
            skipped_count: self.ir.stats.skipped_count,
            unsupported_count: self.ir.stats.unsupported_count,
            warnings: self.ir.diagnostics.messages(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Build the IR for `root` and run the emitters selected by
/// `options.target`. A hidden root yields [`ERROR_MARKER`] outputs.
pub fn generate(
    root: &RawNode,
    options: &CodegenOptions,
    sink: &dyn PerformanceSink,
) -> Result<Generation> {
    let start = Instant::now();
    let ir = IrBuilder::new().build(root, None);

    let mut expression = None;
    let mut component = None;
    match &ir.root {
        Some(node) => {
            if options.target.wants_expression() {
                expression = Some(ExpressionEmitter::new(options).emit(node, sink)?);
            }
            if options.target.wants_component() {
                component = Some(ComponentEmitter::new(options).emit(node)?);
            }
        }
        None => {
            tracing::warn!(id = %root.id, "root node is hidden, nothing to generate");
            if options.target.wants_expression() {
                expression = Some(ERROR_MARKER.to_string());
            }
            if options.target.wants_component() {
                component = Some(ERROR_MARKER.to_string());
            }
        }
    }

    Ok(Generation {
        ir,
        expression,
        component,
        elapsed: start.elapsed(),
    })
}

/// Like [`generate`], starting from a fetched document. `None` when the
/// response carries no root node.
pub fn generate_document(
    response: &DocumentResponse,
    options: &CodegenOptions,
    sink: &dyn PerformanceSink,
) -> Result<Option<Generation>> {
    match response.root() {
        Some(root) => generate(root, options, sink).map(Some),
        None => {
            tracing::warn!("document response holds neither nodes nor a document");
            Ok(None)
        }
    }
}
