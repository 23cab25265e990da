//! Pre-overlay decision in one call: skip with an empty result, or compute
//! within an (optional) clipping envelope.

use crate::geom::{Dimension, Envelope, Geometry, GeometryFactory, PrecisionModel};
use crate::input::InputGeometry;
use crate::op::OpCode;
use crate::util::{clipping_envelope, create_empty_result, is_empty_result, result_dimension};

/// What the overlay engine should do for an operand pair.
#[derive(Clone, Debug, PartialEq)]
pub enum OverlayPlan {
    /// Result is provably empty; this is the canonical empty result.
    Empty(Geometry),
    /// Run the overlay. `clip` bounds the input when clipping is safe.
    Compute { clip: Option<Envelope> },
}

impl OverlayPlan {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, OverlayPlan::Empty(_))
    }
}

/// Decide between skipping and computing `op` on `input`.
pub fn plan(op: OpCode, input: &InputGeometry, pm: &PrecisionModel) -> OverlayPlan {
    if is_empty_result(op, input.geometry(0), input.geometry(1), pm) {
        let fact = GeometryFactory;
        return OverlayPlan::Empty(empty_result_for(op, input, &fact));
    }
    OverlayPlan::Compute {
        clip: clipping_envelope(op, input, pm),
    }
}

/// Empty result sized by the dimension algebra. An unknown operand dimension
/// (absent or empty collection) takes the other operand's, so `False` never
/// enters the algebra.
fn empty_result_for(op: OpCode, input: &InputGeometry, fact: &GeometryFactory) -> Geometry {
    let (dim_a, dim_b) = match (input.dimension(0), input.dimension(1)) {
        (Dimension::False, Dimension::False) => return fact.build_geometry(Vec::new()),
        (Dimension::False, d) | (d, Dimension::False) => (d, d),
        dims => dims,
    };
    create_empty_result(result_dimension(op, dim_a, dim_b), fact)
}
