//! Geometry value types: atomic Point/LineString/Polygon, collections, dimension.
//!
//! - Values are immutable once built; every operation returns fresh values.
//! - `LineString::annotation` is free-form metadata (diagnostic labels); nothing
//!   in the crate interprets it.

use crate::error::OverlayError;

use super::{Coord, Envelope};

/// Topological dimension.
///
/// Ordering is `False < Point < Curve < Surface`, so `min`/`max` implement the
/// overlay dimension algebra directly. `False` only appears as the dimension of
/// an empty collection or as a placeholder; it is never an operand dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    False,
    Point,
    Curve,
    Surface,
}

impl Dimension {
    /// Numeric code: -1, 0, 1, 2.
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            Dimension::False => -1,
            Dimension::Point => 0,
            Dimension::Curve => 1,
            Dimension::Surface => 2,
        }
    }
}

impl TryFrom<i32> for Dimension {
    type Error = OverlayError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(Dimension::False),
            0 => Ok(Dimension::Point),
            1 => Ok(Dimension::Curve),
            2 => Ok(Dimension::Surface),
            other => Err(OverlayError::InvalidDimension(other)),
        }
    }
}

/// Point; `None` coordinate is the empty point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub coord: Option<Coord>,
}

impl Point {
    #[inline]
    pub fn new(c: Coord) -> Self {
        Self { coord: Some(c) }
    }
    #[inline]
    pub fn empty() -> Self {
        Self { coord: None }
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coord.is_none()
    }
}

/// Polyline with an optional opaque annotation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineString {
    pub coords: Vec<Coord>,
    pub annotation: Option<String>,
}

impl LineString {
    #[inline]
    pub fn new(coords: Vec<Coord>) -> Self {
        Self {
            coords,
            annotation: None,
        }
    }
    /// Same line carrying `annotation`.
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

/// Polygon: outer shell ring plus hole rings. Rings are closed by convention
/// (first == last) but area does not depend on it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub shell: Vec<Coord>,
    pub holes: Vec<Vec<Coord>>,
}

impl Polygon {
    pub fn new(shell: Vec<Coord>, holes: Vec<Vec<Coord>>) -> Self {
        Self { shell, holes }
    }

    /// Closed axis-aligned rectangle over a non-null envelope; empty polygon for null.
    pub fn from_envelope(env: &Envelope) -> Self {
        if env.is_null() {
            return Self::default();
        }
        let (x0, x1, y0, y1) = (env.min_x(), env.max_x(), env.min_y(), env.max_y());
        Self::new(
            vec![
                Coord::new(x0, y0),
                Coord::new(x1, y0),
                Coord::new(x1, y1),
                Coord::new(x0, y1),
                Coord::new(x0, y0),
            ],
            Vec::new(),
        )
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shell.is_empty()
    }

    /// Unsigned area, holes subtracted.
    pub fn area(&self) -> f64 {
        let holes: f64 = self.holes.iter().map(|h| ring_area(h)).sum();
        (ring_area(&self.shell) - holes).max(0.0)
    }
}

/// Unsigned shoelace area of a ring (closing edge implied).
fn ring_area(ring: &[Coord]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for k in 0..ring.len() {
        let p = ring[k];
        let q = ring[(k + 1) % ring.len()];
        twice += p.x * q.y - q.x * p.y;
    }
    0.5 * twice.abs()
}

/// Any geometry the overlay layer handles.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(Vec<Point>),
    MultiLineString(Vec<LineString>),
    MultiPolygon(Vec<Polygon>),
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    /// Type name, e.g. `"MultiPolygon"`.
    pub fn geometry_type(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::LineString(_) => "LineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::GeometryCollection(_) => "GeometryCollection",
        }
    }

    /// Atomic types report their own dimension even when empty; collections
    /// report the max over elements (`False` when they have none).
    pub fn dimension(&self) -> Dimension {
        match self {
            Geometry::Point(_) => Dimension::Point,
            Geometry::LineString(_) => Dimension::Curve,
            Geometry::Polygon(_) => Dimension::Surface,
            Geometry::MultiPoint(v) if !v.is_empty() => Dimension::Point,
            Geometry::MultiLineString(v) if !v.is_empty() => Dimension::Curve,
            Geometry::MultiPolygon(v) if !v.is_empty() => Dimension::Surface,
            Geometry::GeometryCollection(v) => v
                .iter()
                .map(Geometry::dimension)
                .max()
                .unwrap_or(Dimension::False),
            Geometry::MultiPoint(_) | Geometry::MultiLineString(_) | Geometry::MultiPolygon(_) => {
                Dimension::False
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(p) => p.is_empty(),
            Geometry::LineString(l) => l.is_empty(),
            Geometry::Polygon(p) => p.is_empty(),
            Geometry::MultiPoint(v) => v.iter().all(Point::is_empty),
            Geometry::MultiLineString(v) => v.iter().all(LineString::is_empty),
            Geometry::MultiPolygon(v) => v.iter().all(Polygon::is_empty),
            Geometry::GeometryCollection(v) => v.iter().all(Geometry::is_empty),
        }
    }

    #[inline]
    pub fn is_collection(&self) -> bool {
        !matches!(
            self,
            Geometry::Point(_) | Geometry::LineString(_) | Geometry::Polygon(_)
        )
    }

    /// Element count: 1 for atomic geometries.
    pub fn num_geometries(&self) -> usize {
        match self {
            Geometry::Point(_) | Geometry::LineString(_) | Geometry::Polygon(_) => 1,
            Geometry::MultiPoint(v) => v.len(),
            Geometry::MultiLineString(v) => v.len(),
            Geometry::MultiPolygon(v) => v.len(),
            Geometry::GeometryCollection(v) => v.len(),
        }
    }

    /// The `i`-th element as an owned geometry (atomic geometries return themselves for `i == 0`).
    pub fn geometry_n(&self, i: usize) -> Option<Geometry> {
        match self {
            Geometry::Point(_) | Geometry::LineString(_) | Geometry::Polygon(_) => {
                (i == 0).then(|| self.clone())
            }
            Geometry::MultiPoint(v) => v.get(i).cloned().map(Geometry::Point),
            Geometry::MultiLineString(v) => v.get(i).cloned().map(Geometry::LineString),
            Geometry::MultiPolygon(v) => v.get(i).cloned().map(Geometry::Polygon),
            Geometry::GeometryCollection(v) => v.get(i).cloned(),
        }
    }

    /// Bounding box (null when empty).
    pub fn envelope(&self) -> Envelope {
        match self {
            Geometry::Point(p) => p
                .coord
                .map(|c| Envelope::new(c.x, c.x, c.y, c.y))
                .unwrap_or_else(Envelope::null),
            Geometry::LineString(l) => Envelope::of_coords(&l.coords),
            Geometry::Polygon(p) => Envelope::of_coords(&p.shell),
            Geometry::MultiPoint(v) => {
                let coords: Vec<Coord> = v.iter().filter_map(|p| p.coord).collect();
                Envelope::of_coords(&coords)
            }
            Geometry::MultiLineString(v) => {
                union_envs(v.iter().map(|l| Envelope::of_coords(&l.coords)))
            }
            Geometry::MultiPolygon(v) => {
                union_envs(v.iter().map(|p| Envelope::of_coords(&p.shell)))
            }
            Geometry::GeometryCollection(v) => union_envs(v.iter().map(Geometry::envelope)),
        }
    }

    /// Total polygonal area (0 for points and lines).
    pub fn area(&self) -> f64 {
        match self {
            Geometry::Polygon(p) => p.area(),
            Geometry::MultiPolygon(v) => v.iter().map(Polygon::area).sum(),
            Geometry::GeometryCollection(v) => v.iter().map(Geometry::area).sum(),
            Geometry::Point(_)
            | Geometry::LineString(_)
            | Geometry::MultiPoint(_)
            | Geometry::MultiLineString(_) => 0.0,
        }
    }
}

fn union_envs(envs: impl Iterator<Item = Envelope>) -> Envelope {
    let mut out = Envelope::null();
    for e in envs {
        out.expand_to_include_env(&e);
    }
    out
}
