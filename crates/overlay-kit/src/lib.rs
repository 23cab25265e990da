//! Decision support for planar overlay (boolean set operations).
//!
//! The overlay engine itself (noding, snap-rounding, labelling, the half-edge
//! graph) lives elsewhere. This crate makes the cheap decisions around it:
//! whether a result is trivially empty, which region the input may be clipped
//! to, what dimension an empty result has, and how result components are
//! assembled.
//!
//! API Policy
//! - Everything is a pure function of its inputs and a `PrecisionModel`; no
//!   state is shared across calls, so all entry points are safe to call from
//!   several threads at once.
//! - Degenerate input (absent operands, empty geometries, null envelopes) is
//!   ordinary control flow, never an error.

pub mod cfg;
pub mod error;
pub mod geom;
pub mod graph;
pub mod input;
pub mod op;
pub mod plan;
pub mod util;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::OverlayError;
pub use geom::{
    Coord, Dimension, Envelope, Geometry, GeometryFactory, LineString, Point, Polygon,
    PrecisionModel,
};
pub use input::InputGeometry;
pub use op::OpCode;
pub use plan::{plan, OverlayPlan};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{
        Coord, Dimension, Envelope, Geometry, GeometryFactory, LineString, Point, Polygon,
        PrecisionModel,
    };
    pub use crate::graph::{DiagnosticLabel, OverlayEdge, OverlayGraph};
    pub use crate::input::InputGeometry;
    pub use crate::op::OpCode;
    pub use crate::plan::{plan, OverlayPlan};
    pub use crate::util::{
        clipping_envelope, create_empty_result, create_result_geometry, is_empty_result,
        result_dimension, round, safe_overlap_envelope, to_lines,
    };
}
