//! The operand pair an overlay runs on.
//!
//! Operand B may be absent (unary use of the engine). Absent operands behave
//! like empty ones everywhere: null envelope, `Dimension::False`, empty.

use crate::geom::{Dimension, Envelope, Geometry};

/// Operands A (index 0) and B (index 1).
#[derive(Clone, Debug, PartialEq)]
pub struct InputGeometry {
    a: Geometry,
    b: Option<Geometry>,
}

impl InputGeometry {
    pub fn new(a: Geometry, b: Option<Geometry>) -> Self {
        Self { a, b }
    }

    pub fn binary(a: Geometry, b: Geometry) -> Self {
        Self { a, b: Some(b) }
    }

    /// Operand `index` (0 = A, 1 = B); `None` for an absent B or an out-of-range index.
    pub fn geometry(&self, index: usize) -> Option<&Geometry> {
        match index {
            0 => Some(&self.a),
            1 => self.b.as_ref(),
            _ => None,
        }
    }

    /// Envelope of operand `index`; null when absent.
    pub fn envelope(&self, index: usize) -> Envelope {
        self.geometry(index)
            .map(Geometry::envelope)
            .unwrap_or_else(Envelope::null)
    }

    /// Dimension of operand `index`; `False` when absent.
    pub fn dimension(&self, index: usize) -> Dimension {
        self.geometry(index)
            .map(Geometry::dimension)
            .unwrap_or(Dimension::False)
    }

    pub fn is_empty(&self, index: usize) -> bool {
        self.geometry(index).map_or(true, Geometry::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{LineString, Point, Polygon};
    use nalgebra::point;

    #[test]
    fn absent_operand_reads_as_empty() {
        let a = Geometry::Polygon(Polygon::from_envelope(&Envelope::new(0.0, 1.0, 0.0, 1.0)));
        let input = InputGeometry::new(a, None);
        assert!(input.geometry(1).is_none());
        assert!(input.geometry(7).is_none());
        assert!(input.envelope(1).is_null());
        assert_eq!(input.dimension(1), Dimension::False);
        assert!(input.is_empty(1));
        assert_eq!(input.dimension(0), Dimension::Surface);
        assert!(!input.is_empty(0));
    }

    #[test]
    fn point_and_line_operands() {
        let p = Geometry::Point(Point::new(point![1.0, 2.0]));
        let l = Geometry::LineString(LineString::new(vec![point![0.0, 0.0], point![2.0, 0.0]]));
        let pair = InputGeometry::binary(p, l);
        assert_eq!(pair.envelope(0), Envelope::new(1.0, 1.0, 2.0, 2.0));
        assert_eq!(pair.envelope(1), Envelope::new(0.0, 2.0, 0.0, 0.0));
        assert_eq!(pair.dimension(0), Dimension::Point);
        assert_eq!(pair.dimension(1), Dimension::Curve);
        let empty_b = InputGeometry::binary(
            Geometry::Point(Point::new(point![0.0, 0.0])),
            Geometry::Point(Point::empty()),
        );
        assert!(empty_b.is_empty(1));
        assert!(empty_b.geometry(1).is_some());
    }
}
