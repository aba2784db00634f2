//! Contour tracing interface
//!
//! The tracing algorithm itself (polygon extraction, corner detection,
//! curve fitting) is a substantial piece of work that lives outside
//! this crate. This module fixes the seam: the [`Trace`] trait a
//! tracer must implement and the curve data model it must produce.

pub mod curve;

pub use curve::{Curve, Point, Segment};

use crate::bitmap::Bitmap;
use crate::error::TraceError;

/// A contour tracer: turns a binary bitmap into closed outlines.
///
/// Implementations must yield curves in the order they should appear
/// in the output document (the order affects fill overlap, not the
/// correctness of individual shapes) and every curve must satisfy the
/// closure contract checked by [`Curve::validate`].
pub trait Trace {
    /// Trace the foreground regions of `bitmap` into closed curves.
    ///
    /// A solid-background bitmap traces to an empty list.
    fn trace(&self, bitmap: &Bitmap) -> Result<Vec<Curve>, TraceError>;
}
