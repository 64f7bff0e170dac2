//! Style normalization for frameforge.
//!
//! A single set of extraction rules ([`facts`]) reads a raw node and yields
//! canonical style facts. Two projections consume them:
//!
//! - [`css`] flattens the facts into an alphabetically ordered CSS-like map
//! - [`records`] shapes them into the IR sub-records
//!
//! Because both go through the same facts, the flat map and the IR can never
//! disagree on a background, border or text color.

pub mod css;
pub mod facts;
pub mod placeholder;
pub mod records;

pub use css::{extract_all_styles, StyleMap, StyleValue};
pub use placeholder::{build_image_placeholder, image_placeholder, placeholder_a11y, ImagePlaceholder};
