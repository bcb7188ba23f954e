//! Common models.

#[cfg(test)]
#[path = "../../tests/unit/models/common_test.rs"]
mod common_test;

/// Alias to a scalar floating type.
pub type Float = f64;

/// Represents a distance.
pub type Distance = Float;

/// Represents a point in 2D space.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    /// X value.
    pub x: Float,
    /// Y value.
    pub y: Float,
}

impl Point {
    /// Creates a new instance of `Point`.
    pub fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    /// Computes distance from given point to `other`
    pub fn distance_to_point(&self, other: &Point) -> Distance {
        let delta_x = self.x - other.x;
        let delta_y = self.y - other.y;

        (delta_x * delta_x + delta_y * delta_y).sqrt()
    }

    /// Returns true if both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Euclidean distance between two positions: the only cost criterion used for routing.
pub fn distance(a: &Point, b: &Point) -> Distance {
    a.distance_to_point(b)
}
