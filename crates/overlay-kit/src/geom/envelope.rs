//! Axis-aligned bounding boxes.

use std::str::FromStr;

use crate::error::OverlayError;

use super::Coord;

/// Axis-aligned bounding box.
///
/// Invariants:
/// - The null envelope (no points) is encoded as `min_x > max_x`; every
///   operation treats it as "contains nothing".
/// - Non-null envelopes have `min_x <= max_x` and `min_y <= max_y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Self::null()
    }
}

impl Envelope {
    /// Envelope spanning the two x and the two y values (in any order).
    pub fn new(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        Self {
            min_x: x1.min(x2),
            max_x: x1.max(x2),
            min_y: y1.min(y2),
            max_y: y1.max(y2),
        }
    }

    #[inline]
    pub fn null() -> Self {
        Self {
            min_x: 0.0,
            max_x: -1.0,
            min_y: 0.0,
            max_y: -1.0,
        }
    }

    /// Bounding box of a coordinate list; null for an empty list.
    pub fn of_coords(coords: &[Coord]) -> Self {
        let mut env = Self::null();
        for c in coords {
            env.expand_to_include(*c);
        }
        env
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.min_x > self.max_x
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Width (0 for null).
    #[inline]
    pub fn width(&self) -> f64 {
        if self.is_null() {
            0.0
        } else {
            self.max_x - self.min_x
        }
    }

    /// Height (0 for null).
    #[inline]
    pub fn height(&self) -> f64 {
        if self.is_null() {
            0.0
        } else {
            self.max_y - self.min_y
        }
    }

    #[inline]
    pub fn min_extent(&self) -> f64 {
        self.width().min(self.height())
    }

    pub fn expand_to_include(&mut self, c: Coord) {
        if self.is_null() {
            *self = Self::new(c.x, c.x, c.y, c.y);
            return;
        }
        self.min_x = self.min_x.min(c.x);
        self.max_x = self.max_x.max(c.x);
        self.min_y = self.min_y.min(c.y);
        self.max_y = self.max_y.max(c.y);
    }

    pub fn expand_to_include_env(&mut self, other: &Envelope) {
        if other.is_null() {
            return;
        }
        if self.is_null() {
            *self = *other;
            return;
        }
        self.min_x = self.min_x.min(other.min_x);
        self.max_x = self.max_x.max(other.max_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_y = self.max_y.max(other.max_y);
    }

    /// Grow by `d` on every side. No-op on null; a box inverted by a negative
    /// `d` becomes null.
    pub fn expand_by(&mut self, d: f64) {
        if self.is_null() {
            return;
        }
        self.min_x -= d;
        self.max_x += d;
        self.min_y -= d;
        self.max_y += d;
        if self.min_x > self.max_x || self.min_y > self.max_y {
            *self = Self::null();
        }
    }

    /// Overlap region; null when either side is null or they are disjoint.
    pub fn intersection(&self, other: &Envelope) -> Envelope {
        if self.disjoint(other) {
            return Self::null();
        }
        Self {
            min_x: self.min_x.max(other.min_x),
            max_x: self.max_x.min(other.max_x),
            min_y: self.min_y.max(other.min_y),
            max_y: self.max_y.min(other.max_y),
        }
    }

    /// True if the boxes share no point (always true when either is null).
    pub fn disjoint(&self, other: &Envelope) -> bool {
        if self.is_null() || other.is_null() {
            return true;
        }
        other.min_x > self.max_x
            || other.max_x < self.min_x
            || other.min_y > self.max_y
            || other.max_y < self.min_y
    }

    #[inline]
    pub fn intersects(&self, other: &Envelope) -> bool {
        !self.disjoint(other)
    }

    /// True if `other` lies inside `self` (boundary included). Null is contained nowhere.
    pub fn contains_env(&self, other: &Envelope) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }
}

/// Parses `minx,miny,maxx,maxy` or `empty` (null envelope).
impl FromStr for Envelope {
    type Err = OverlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("empty") {
            return Ok(Self::null());
        }
        let vals: Vec<f64> = s
            .split(',')
            .map(|t| t.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| OverlayError::MalformedEnvelope(s.to_string()))?;
        match vals.as_slice() {
            &[min_x, min_y, max_x, max_y] if vals.iter().all(|v| v.is_finite()) => {
                Ok(Self::new(min_x, max_x, min_y, max_y))
            }
            _ => Err(OverlayError::MalformedEnvelope(s.to_string())),
        }
    }
}
