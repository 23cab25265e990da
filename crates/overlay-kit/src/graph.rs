//! Read-only view of the overlay engine's half-edge graph.
//!
//! The graph is built and labelled by the noding/labelling stage, which lives
//! outside this crate. Only what diagnostic line extraction needs is exposed.

use crate::geom::Coord;

/// Edge label that can be rendered for debugging, relative to an edge direction.
pub trait DiagnosticLabel {
    fn to_diagnostic_string(&self, is_forward: bool) -> String;
}

/// Directed half-edge.
pub trait OverlayEdge {
    type Label: DiagnosticLabel;

    /// Coordinates in the direction of this half-edge.
    fn coordinates_oriented(&self) -> Vec<Coord>;
    fn is_forward(&self) -> bool;
    fn label(&self) -> &Self::Label;
    /// True if the edge bounds a result polygon.
    fn is_in_result_area(&self) -> bool;
}

/// Half-edge collection, iterated in the graph's own order.
pub trait OverlayGraph {
    type Edge: OverlayEdge;

    fn edges(&self) -> &[Self::Edge];
}
