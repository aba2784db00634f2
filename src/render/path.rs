//! Path data emission
//!
//! Serializes one closed curve into the SVG path mini-language:
//! `M x y` at the start point, then `L x y` per corner segment and
//! `C x1 y1 x2 y2 x y` per smooth segment. No other commands are
//! produced.

use std::fmt::Write;

use crate::error::Error;
use crate::tracer::{Curve, Segment};

/// Serialize a curve into an SVG path `d` attribute value.
///
/// Corner segments emit a single line to their end point; the corner
/// control point is not drawn. Coordinates pass through `f64`
/// formatting unchanged, separated by single spaces. No explicit `Z`
/// is emitted: the final segment lands on the start point, which
/// [`Curve::validate`] enforces before anything is written.
pub fn emit(curve: &Curve) -> Result<String, Error> {
    curve.validate()?;

    let mut d = format!("M {} {}", curve.start.x, curve.start.y);
    for segment in &curve.segments {
        match segment {
            Segment::Corner { end, .. } => {
                let _ = write!(d, " L {} {}", end.x, end.y);
            }
            Segment::Curve { c1, c2, end } => {
                let _ = write!(
                    d,
                    " C {} {} {} {} {} {}",
                    c1.x, c1.y, c2.x, c2.y, end.x, end.y
                );
            }
        }
    }
    Ok(d)
}
