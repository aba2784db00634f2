//! Curve data model shared with the tracer collaborator

use crate::error::Error;

/// A point in bitmap pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One step of a closed outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// A straight line to `end`.
    ///
    /// `c` is the corner control point the tracer detected; it is
    /// carried through for callers that want it but is not drawn.
    Corner { c: Point, end: Point },

    /// A cubic Bezier through `c1` and `c2` to `end`.
    Curve { c1: Point, c2: Point, end: Point },
}

impl Segment {
    /// The point this segment lands on
    pub fn end(&self) -> Point {
        match self {
            Segment::Corner { end, .. } => *end,
            Segment::Curve { end, .. } => *end,
        }
    }
}

/// A closed outline traced from a bitmap
///
/// Segment order defines traversal direction and is preserved all the
/// way into the emitted path data.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// Where the outline starts (and, by the closure contract, ends).
    pub start: Point,
    /// The steps of the outline, in traversal order.
    pub segments: Vec<Segment>,
}

impl Curve {
    pub fn new(start: Point, segments: Vec<Segment>) -> Self {
        Self { start, segments }
    }

    /// Whether the final segment lands back on the start point
    pub fn is_closed(&self) -> bool {
        self.segments
            .last()
            .is_some_and(|segment| segment.end() == self.start)
    }

    /// Check the contract a tracer must uphold: at least one segment,
    /// and the final segment returns to the start point.
    pub fn validate(&self) -> Result<(), Error> {
        let Some(last) = self.segments.last() else {
            return Err(Error::malformed("curve has no segments"));
        };
        let end = last.end();
        if end != self.start {
            return Err(Error::malformed(format!(
                "curve ends at ({} {}) instead of its start point ({} {})",
                end.x, end.y, self.start.x, self.start.y
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(to: Point) -> Segment {
        Segment::Corner {
            c: Point::new(0.0, 0.0),
            end: to,
        }
    }

    #[test]
    fn closed_triangle_validates() {
        let start = Point::new(1.0, 1.0);
        let curve = Curve::new(
            start,
            vec![
                line(Point::new(5.0, 1.0)),
                line(Point::new(3.0, 4.0)),
                line(start),
            ],
        );
        assert!(curve.is_closed());
        assert!(curve.validate().is_ok());
    }

    #[test]
    fn empty_curve_is_rejected() {
        let curve = Curve::new(Point::new(0.0, 0.0), vec![]);
        assert!(matches!(
            curve.validate(),
            Err(Error::MalformedCurve { .. })
        ));
    }

    #[test]
    fn open_curve_is_rejected() {
        let curve = Curve::new(Point::new(0.0, 0.0), vec![line(Point::new(2.0, 2.0))]);
        let err = curve.validate().unwrap_err();
        assert!(err.to_string().contains("start point"));
    }

    #[test]
    fn segment_end_accessor() {
        let end = Point::new(7.0, 8.0);
        let corner = Segment::Corner {
            c: Point::new(1.0, 2.0),
            end,
        };
        let smooth = Segment::Curve {
            c1: Point::new(1.0, 2.0),
            c2: Point::new(3.0, 4.0),
            end,
        };
        assert_eq!(corner.end(), end);
        assert_eq!(smooth.end(), end);
    }
}
