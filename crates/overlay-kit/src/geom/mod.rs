//! Minimal planar geometry model queried by the overlay decisions.
//!
//! Purpose
//! - Provide exactly the capabilities the overlay layer reads: precision
//!   rounding, envelopes, dimension/emptiness of geometries, and a factory that
//!   builds canonical empties and collapses component lists.
//! - Nothing here nodes, snaps or validates geometry.
//!
//! Conventions
//! - Coordinates are `nalgebra::Point2<f64>`.
//! - The null envelope stands for "no points"; it is never an error.
//!
//! Code cross-refs: `crate::util`, `crate::input::InputGeometry`

mod envelope;
mod factory;
mod precision;
mod types;

pub use envelope::Envelope;
pub use factory::GeometryFactory;
pub use precision::PrecisionModel;
pub use types::{Dimension, Geometry, LineString, Point, Polygon};

/// Planar coordinate.
pub type Coord = nalgebra::Point2<f64>;
