//! Safety-padded envelopes and the per-operation clipping region.

use crate::cfg::{FLOATING_EXPAND_FRACTION, SAFE_ENV_EXPAND_FACTOR};
use crate::geom::{Envelope, PrecisionModel};
use crate::input::InputGeometry;
use crate::op::OpCode;

/// Padding that keeps rounding shifts near the box boundary inside the box.
///
/// - Floating: `0.1 * min(height, width)` of `env`.
/// - Fixed: three grid cells, `3 / scale`.
pub fn expand_distance(env: &Envelope, pm: &PrecisionModel) -> f64 {
    match pm.grid_size() {
        None => FLOATING_EXPAND_FRACTION * env.min_extent(),
        Some(grid) => SAFE_ENV_EXPAND_FACTOR * grid,
    }
}

/// Copy of `env` grown by [`expand_distance`] on every side. A null `env` stays null.
pub fn safe_overlap_envelope(env: &Envelope, pm: &PrecisionModel) -> Envelope {
    let mut safe = *env;
    safe.expand_by(expand_distance(env, pm));
    safe
}

/// Region the overlay input may be clipped to without changing the result.
///
/// `None` means no clipping is safe (Union, SymDifference): every part of
/// both operands can reach the result.
pub fn clipping_envelope(
    op: OpCode,
    input: &InputGeometry,
    pm: &PrecisionModel,
) -> Option<Envelope> {
    let clip = match op {
        OpCode::Intersection => {
            let env_a = safe_overlap_envelope(&input.envelope(0), pm);
            let env_b = safe_overlap_envelope(&input.envelope(1), pm);
            Some(env_a.intersection(&env_b))
        }
        // B outside A's envelope cannot affect A − B
        OpCode::Difference => Some(safe_overlap_envelope(&input.envelope(0), pm)),
        OpCode::Union | OpCode::SymDifference => None,
    };
    tracing::trace!(%op, ?clip, "clipping envelope");
    clip
}
