//! Precision model: floating coordinates or a fixed grid of spacing `1/scale`.

use crate::error::OverlayError;

use super::Coord;

/// Coordinate precision policy.
///
/// Invariants:
/// - `Fixed { scale }` always has a finite `scale > 0` (enforced by [`PrecisionModel::fixed`]).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PrecisionModel {
    /// Arbitrary real coordinates; rounding is the identity.
    #[default]
    Floating,
    /// Coordinates snapped to a grid of spacing `1/scale`.
    Fixed { scale: f64 },
}

impl PrecisionModel {
    /// Fixed-grid model; rejects non-finite or non-positive scales.
    pub fn fixed(scale: f64) -> Result<Self, OverlayError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(OverlayError::InvalidScale(scale));
        }
        Ok(PrecisionModel::Fixed { scale })
    }

    #[inline]
    pub fn is_floating(&self) -> bool {
        matches!(self, PrecisionModel::Floating)
    }

    /// Scale factor; `None` for the floating model.
    #[inline]
    pub fn scale(&self) -> Option<f64> {
        match *self {
            PrecisionModel::Floating => None,
            PrecisionModel::Fixed { scale } => Some(scale),
        }
    }

    /// Grid spacing `1/scale`; `None` for the floating model.
    #[inline]
    pub fn grid_size(&self) -> Option<f64> {
        self.scale().map(|s| 1.0 / s)
    }

    /// Snap a single ordinate to the grid (round half up).
    #[inline]
    pub fn make_precise(&self, value: f64) -> f64 {
        match *self {
            PrecisionModel::Floating => value,
            PrecisionModel::Fixed { scale } => (value * scale + 0.5).floor() / scale,
        }
    }

    /// Snap both ordinates of `c` in place.
    #[inline]
    pub fn make_precise_coord(&self, c: &mut Coord) {
        c.x = self.make_precise(c.x);
        c.y = self.make_precise(c.y);
    }
}
