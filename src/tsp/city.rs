//! Named points on the plane.

/// A position on the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A city with a fixed position. Immutable once built.
///
/// Names are only used for presentation; two cities may share one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocatedCity {
    name: String,
    position: Point,
}

impl LocatedCity {
    pub fn new(name: impl Into<String>, position: impl Into<Point>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Straight-line distance between the two cities.
    pub fn distance_to(&self, other: &LocatedCity) -> f64 {
        self.position.distance(&other.position)
    }
}

impl<S: Into<String>> From<(S, (f64, f64))> for LocatedCity {
    fn from((name, position): (S, (f64, f64))) -> Self {
        Self::new(name, position)
    }
}
