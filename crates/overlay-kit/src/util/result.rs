//! Result assembly, diagnostic line extraction, point rounding, area sanity.

use crate::cfg::{AREA_HEURISTIC_TOLERANCE, RESULT_AREA_LABEL_SUFFIX};
use crate::geom::{
    Coord, Dimension, Geometry, GeometryFactory, LineString, Point, Polygon, PrecisionModel,
};
use crate::graph::{DiagnosticLabel, OverlayEdge, OverlayGraph};
use crate::op::OpCode;

/// Result geometry from separately computed components.
///
/// Elements are always ordered polygons, lines, points; absent lists count as
/// empty. The factory then picks the most specific type.
pub fn create_result_geometry(
    polys: Option<Vec<Polygon>>,
    lines: Option<Vec<LineString>>,
    points: Option<Vec<Point>>,
    fact: &GeometryFactory,
) -> Geometry {
    let mut geoms: Vec<Geometry> = Vec::new();
    geoms.extend(polys.into_iter().flatten().map(Geometry::Polygon));
    geoms.extend(lines.into_iter().flatten().map(Geometry::LineString));
    geoms.extend(points.into_iter().flatten().map(Geometry::Point));
    fact.build_geometry(geoms)
}

/// Graph edges as annotated lines, for debugging and visualisation.
///
/// With `include_all_edges == false` only result-area edges are kept. Each
/// line carries its edge label rendered for the edge direction, suffixed with
/// `" Res"` for result-area edges.
pub fn to_lines<G: OverlayGraph>(
    graph: &G,
    include_all_edges: bool,
    fact: &GeometryFactory,
) -> Geometry {
    let lines: Vec<Geometry> = graph
        .edges()
        .iter()
        .filter(|e| include_all_edges || e.is_in_result_area())
        .map(|e| {
            Geometry::LineString(
                fact.create_line_string_from(e.coordinates_oriented())
                    .with_annotation(label_for_result(e)),
            )
        })
        .collect();
    tracing::trace!(count = lines.len(), include_all_edges, "graph lines");
    fact.build_geometry(lines)
}

fn label_for_result<E: OverlayEdge>(edge: &E) -> String {
    let mut s = edge.label().to_diagnostic_string(edge.is_forward());
    if edge.is_in_result_area() {
        s.push_str(RESULT_AREA_LABEL_SUFFIX);
    }
    s
}

/// Coordinate of `pt` snapped to the grid of a fixed `pm`; `None` if `pt` is empty.
/// Floating models return the coordinate unchanged.
pub fn round(pt: &Point, pm: &PrecisionModel) -> Option<Coord> {
    let mut c = pt.coord?;
    if !pm.is_floating() {
        pm.make_precise_coord(&mut c);
    }
    Some(c)
}

/// Heuristic check that a polygonal result's area fits the operand areas.
///
/// Returns `true` (nothing to check) when an operand is absent or the result is
/// not polygonal. Intended as a post-overlay sanity test: `false` points at a
/// robustness failure in the overlay, not at bad input.
pub fn is_result_area_consistent(
    a: Option<&Geometry>,
    b: Option<&Geometry>,
    op: OpCode,
    result: &Geometry,
) -> bool {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        _ => return true,
    };
    if result.dimension() < Dimension::Surface {
        return true;
    }
    let tol = AREA_HEURISTIC_TOLERANCE;
    let area_r = result.area();
    let area_a = a.area();
    let area_b = b.area();
    let consistent = match op {
        OpCode::Intersection => is_less(area_r, area_a, tol) && is_less(area_r, area_b, tol),
        OpCode::Difference => is_difference_area_consistent(area_a, area_b, area_r, tol),
        OpCode::SymDifference => is_less(area_r, area_a + area_b, tol),
        OpCode::Union => {
            is_less(area_a, area_r, tol)
                && is_less(area_b, area_r, tol)
                && is_greater(area_r, area_a - area_b, tol)
        }
    };
    if !consistent {
        tracing::warn!(%op, area_a, area_b, area_r, "result area outside expected range");
    }
    consistent
}

fn is_difference_area_consistent(area_a: f64, area_b: f64, area_r: f64, tol: f64) -> bool {
    if !is_less(area_r, area_a, tol) {
        return false;
    }
    let area_diff_min = area_a - area_b - tol * area_a;
    area_r > area_diff_min
}

#[inline]
fn is_less(v1: f64, v2: f64, tol: f64) -> bool {
    v1 <= v2 * (1.0 + tol)
}

#[inline]
fn is_greater(v1: f64, v2: f64, tol: f64) -> bool {
    v1 >= v2 * (1.0 - tol)
}
