//! Geometry factory: canonical empties and "most specific type" assembly.

use super::{Coord, Geometry, LineString, Point, Polygon};

/// Builds result geometries. Geometries carry no precision model of their
/// own; grid snapping goes through `PrecisionModel` directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeometryFactory;

impl GeometryFactory {
    /// Empty point.
    #[inline]
    pub fn create_point(&self) -> Geometry {
        Geometry::Point(Point::empty())
    }
    /// Empty line string.
    #[inline]
    pub fn create_line_string(&self) -> Geometry {
        Geometry::LineString(LineString::default())
    }
    /// Empty polygon.
    #[inline]
    pub fn create_polygon(&self) -> Geometry {
        Geometry::Polygon(Polygon::default())
    }

    #[inline]
    pub fn create_line_string_from(&self, coords: Vec<Coord>) -> LineString {
        LineString::new(coords)
    }

    /// Most specific geometry for `geoms`, preserving element order.
    ///
    /// - empty list → empty `GeometryCollection`
    /// - one element → that element
    /// - several atomic elements of one type → the matching `Multi*`
    /// - anything else (mixed types, nested collections) → `GeometryCollection`
    pub fn build_geometry(&self, mut geoms: Vec<Geometry>) -> Geometry {
        if geoms.len() == 1 {
            if let Some(g) = geoms.pop() {
                return g;
            }
        }
        if geoms.is_empty() {
            return Geometry::GeometryCollection(geoms);
        }
        if geoms.iter().all(|g| matches!(g, Geometry::Polygon(_))) {
            return Geometry::MultiPolygon(
                geoms
                    .into_iter()
                    .filter_map(|g| match g {
                        Geometry::Polygon(p) => Some(p),
                        _ => None,
                    })
                    .collect(),
            );
        }
        if geoms.iter().all(|g| matches!(g, Geometry::LineString(_))) {
            return Geometry::MultiLineString(
                geoms
                    .into_iter()
                    .filter_map(|g| match g {
                        Geometry::LineString(l) => Some(l),
                        _ => None,
                    })
                    .collect(),
            );
        }
        if geoms.iter().all(|g| matches!(g, Geometry::Point(_))) {
            return Geometry::MultiPoint(
                geoms
                    .into_iter()
                    .filter_map(|g| match g {
                        Geometry::Point(p) => Some(p),
                        _ => None,
                    })
                    .collect(),
            );
        }
        Geometry::GeometryCollection(geoms)
    }
}
