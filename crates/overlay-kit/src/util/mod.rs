//! Overlay decision procedures (pure functions over inputs plus a precision model).
//!
//! Purpose
//! - Let the overlay engine skip work it can prove unnecessary, bound its
//!   working area, and assemble results in a stable shape.
//!
//! Flow
//! - Engine asks `clipping_envelope` for a working region, then
//!   `is_empty_result` whether to skip the overlay entirely.
//! - After the overlay: `result_dimension` + `create_empty_result` for an empty
//!   fallback, or `create_result_geometry` for the final geometry.
//! - `to_lines` is independent and only used for diagnostics.
//!
//! Code cross-refs: `crate::plan::plan` wires the pre-overlay steps together.

mod empty;
mod envelope;
mod result;

pub use empty::{
    create_empty_result, is_disjoint_rounded, is_empty_result, is_env_disjoint,
    result_dimension, try_create_empty_result,
};
pub use envelope::{clipping_envelope, expand_distance, safe_overlap_envelope};
pub use result::{create_result_geometry, is_result_area_consistent, round, to_lines};
