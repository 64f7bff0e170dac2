//! Intermediate representation builder for frameforge.
//!
//! Walks a raw document tree once, in pre-order, and produces one
//! [`DesignNode`](frameforge_core::DesignNode) per visible node. Hidden nodes
//! and their subtrees are dropped. Missing geometry and unknown node types
//! are reported as [`Diagnostic`]s, never as errors.

pub mod builder;
pub mod diagnostics;
pub mod position;

pub use builder::{build_ir, IrBuilder, IrOutput};
pub use diagnostics::{Diagnostic, Diagnostics, IrStats};
pub use position::build_position;
