//! Trivially-empty results: detection, dimension algebra, canonical empties.
//!
//! Conservativeness policy
//! - `is_empty_result` may answer `false` when the true result is empty (the
//!   overlay then just computes an empty result), but never `true` when the
//!   result is non-empty.

use crate::error::OverlayError;
use crate::geom::{Dimension, Envelope, Geometry, GeometryFactory, PrecisionModel};
use crate::op::OpCode;

/// True if the result of `op` on `a`, `b` is empty by cheap tests alone.
///
/// Absent (`None`) and empty operands are treated identically.
pub fn is_empty_result(
    op: OpCode,
    a: Option<&Geometry>,
    b: Option<&Geometry>,
    pm: &PrecisionModel,
) -> bool {
    let empty = match op {
        OpCode::Intersection => is_env_disjoint(a, b, pm),
        OpCode::Difference => is_empty(a),
        OpCode::Union | OpCode::SymDifference => is_empty(a) && is_empty(b),
    };
    tracing::debug!(%op, empty, "trivial emptiness check");
    empty
}

#[inline]
fn is_empty(g: Option<&Geometry>) -> bool {
    g.map_or(true, Geometry::is_empty)
}

/// Envelope disjointness at the operative precision; true if either operand is empty.
pub fn is_env_disjoint(a: Option<&Geometry>, b: Option<&Geometry>, pm: &PrecisionModel) -> bool {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => (a, b),
        _ => return true,
    };
    let (env_a, env_b) = (a.envelope(), b.envelope());
    if pm.is_floating() {
        return env_a.disjoint(&env_b);
    }
    is_disjoint_rounded(&env_a, &env_b, pm)
}

/// Disjointness after snapping the compared bounds to the grid of `pm`.
///
/// Coordinates may shift under rounding during the overlay, so a pair that is
/// marginally disjoint in raw form can overlap once rounded (and vice versa).
/// Assumes both envelopes are non-null.
pub fn is_disjoint_rounded(env_a: &Envelope, env_b: &Envelope, pm: &PrecisionModel) -> bool {
    let r = |v: f64| pm.make_precise(v);
    r(env_b.min_x()) > r(env_a.max_x())
        || r(env_b.max_x()) < r(env_a.min_x())
        || r(env_b.min_y()) > r(env_a.max_y())
        || r(env_b.max_y()) < r(env_a.min_y())
}

/// Dimension of the result of `op` on inputs of dimension `dim_a`, `dim_b`.
///
/// - Intersection: the lower input dimension.
/// - Union: the higher input dimension.
/// - Difference: the dimension of A.
/// - SymDifference: the higher input dimension, since
///   `SymDiff(A, B) = Union(Diff(A, B), Diff(B, A))`.
///
/// Known gap: this assumes rounding does not collapse an input completely
/// (e.g. a polygon thinner than a grid cell becoming a line). Detecting that
/// needs the rounded coordinates, which are not available here, so callers
/// apply the rule only where the assumption holds.
pub fn result_dimension(op: OpCode, dim_a: Dimension, dim_b: Dimension) -> Dimension {
    match op {
        OpCode::Intersection => dim_a.min(dim_b),
        OpCode::Union => dim_a.max(dim_b),
        OpCode::Difference => dim_a,
        OpCode::SymDifference => dim_a.max(dim_b),
    }
}

/// Empty atomic geometry of dimension `dim` (never a collection).
///
/// # Panics
/// If `dim` is [`Dimension::False`]: the caller's dimension algebra is broken
/// and no sensible empty result exists.
pub fn create_empty_result(dim: Dimension, fact: &GeometryFactory) -> Geometry {
    match try_create_empty_result(dim, fact) {
        Ok(g) => g,
        Err(err) => panic!("{err}"),
    }
}

/// Fallible form of [`create_empty_result`] for dimensions from untrusted sources.
pub fn try_create_empty_result(
    dim: Dimension,
    fact: &GeometryFactory,
) -> Result<Geometry, OverlayError> {
    let g = match dim {
        Dimension::Point => fact.create_point(),
        Dimension::Curve => fact.create_line_string(),
        Dimension::Surface => fact.create_polygon(),
        Dimension::False => return Err(OverlayError::UndeterminedDimension),
    };
    tracing::trace!(?dim, kind = g.geometry_type(), "empty result");
    Ok(g)
}
