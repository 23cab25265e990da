//! Box-pair decisions serialised for the command line.
//!
//! Operands are given as envelopes and stand in for axis-aligned rectangles;
//! a null envelope is an empty operand.

use overlay_kit::{
    plan, Envelope, Geometry, InputGeometry, OpCode, OverlayError, OverlayPlan, Polygon,
    PrecisionModel,
};
use serde::Serialize;

/// Clipping region as reported to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClipJson {
    /// No clipping is safe for this operation.
    None,
    /// Clipping is safe but the region contains nothing.
    Empty,
    Box {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },
}

impl From<Envelope> for ClipJson {
    fn from(env: Envelope) -> Self {
        if env.is_null() {
            return ClipJson::Empty;
        }
        ClipJson::Box {
            min_x: env.min_x(),
            min_y: env.min_y(),
            max_x: env.max_x(),
            max_y: env.max_y(),
        }
    }
}

/// Outcome of the pre-overlay decisions for one operand pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    pub op: String,
    pub is_empty_result: bool,
    pub clip: ClipJson,
    /// Geometry type of the canonical empty result (only when empty).
    pub empty_result_type: Option<&'static str>,
    /// Dimension code of the canonical empty result (only when empty).
    pub empty_result_dimension: Option<i32>,
}

/// Operand geometry for an envelope: a rectangle, or an empty polygon for null.
pub fn operand(env: &Envelope) -> Geometry {
    Geometry::Polygon(Polygon::from_envelope(env))
}

pub fn decide(op: OpCode, a: &Envelope, b: &Envelope, pm: &PrecisionModel) -> Decision {
    let input = InputGeometry::binary(operand(a), operand(b));
    match plan(op, &input, pm) {
        OverlayPlan::Empty(g) => Decision {
            op: op.to_string(),
            is_empty_result: true,
            clip: ClipJson::None,
            empty_result_type: Some(g.geometry_type()),
            empty_result_dimension: Some(g.dimension().code()),
        },
        OverlayPlan::Compute { clip } => Decision {
            op: op.to_string(),
            is_empty_result: false,
            clip: clip.map_or(ClipJson::None, ClipJson::from),
            empty_result_type: None,
            empty_result_dimension: None,
        },
    }
}

/// `--scale` → precision model (absent ⇒ floating).
pub fn precision_from_scale(scale: Option<f64>) -> Result<PrecisionModel, OverlayError> {
    scale.map_or(Ok(PrecisionModel::Floating), PrecisionModel::fixed)
}
