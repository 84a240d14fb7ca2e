//! IO module for format-specific reading and writing operations.
//!
//! - `edges` - whitespace-separated edge-list input for graph descriptions
//! - `csv` - CSV format for benchmark timing results
//! - `svg` - SVG format for performance chart export

pub(crate) mod csv;
pub(crate) mod edges;
pub(crate) mod svg;
