//! Core types for the frameforge design-to-code pipeline.
//!
//! This crate provides the foundational types used across all other frameforge crates:
//! - The raw document model as served by the design tool's REST API
//! - The typed intermediate representation (IR) built from it
//! - Color, number and geometry formatting primitives
//! - Document responses, document locators and the fetcher seam
//! - Error types

pub mod document;
pub mod errors;
pub mod format;
pub mod ir;
pub mod locator;
pub mod raw;
pub mod types;

pub use document::{DocumentResponse, NodeEntry};
pub use errors::*;
pub use ir::*;
pub use locator::{AccessToken, DocumentFetcher, DocumentLocator};
pub use raw::*;
pub use types::*;
