use crate::geom::EPS;
use std::fmt;
use std::ops::Add;

/// Point on the drawing plane. `x` grows to the right, `y` grows downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if both points are very close to each other.
    pub fn is_close(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < EPS && (self.y - other.y).abs() < EPS
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(2); // Default 2 decimals
        write!(f, "Point({:.prec$}, {:.prec$})", self.x, self.y, prec = prec)
    }
}

// Offsets a point by (dx, dy)
impl Add<(f64, f64)> for Point {
    type Output = Point;
    fn add(self, (dx, dy): (f64, f64)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}
