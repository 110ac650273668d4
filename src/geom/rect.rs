use crate::geom::EPS;
use crate::geom::point::Point;

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn at(origin: Point, width: f64, height: f64) -> Self {
        Self::new(origin.x, origin.y, width, height)
    }

    /// Top-left corner.
    pub fn min(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Bottom-right corner.
    pub fn max(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2., self.y + self.height / 2.)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Checks whether two rectangles share interior area.
    ///
    /// Rectangles that only touch along an edge or a corner do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        let (min1, max1) = (self.min(), self.max());
        let (min2, max2) = (other.min(), other.max());
        // Separated along any axis
        if max1.x <= min2.x + EPS || min1.x >= max2.x - EPS {
            return false;
        }
        if max1.y <= min2.y + EPS || min1.y >= max2.y - EPS {
            return false;
        }
        true
    }

    /// Checks whether `other` lies inside this rectangle (boundary included).
    pub fn contains_rect(&self, other: &Self) -> bool {
        let (min1, max1) = (self.min(), self.max());
        let (min2, max2) = (other.min(), other.max());
        min2.x >= min1.x - EPS
            && min2.y >= min1.y - EPS
            && max2.x <= max1.x + EPS
            && max2.y <= max1.y + EPS
    }
}
