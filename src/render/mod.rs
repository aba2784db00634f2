//! SVG output generation
//!
//! This module turns traced curves into path data strings and wraps
//! them in a minimal SVG document sized to the source bitmap.

pub mod document;
pub mod path;

pub use document::SvgDocument;
pub use path::emit;
