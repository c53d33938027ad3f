//! Geometric types and shared shape math
//!
//! All geometry in this module is resolution-agnostic; shape code stores
//! points in the native pixel space of the document's base image.

/// A point in a 2D pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Check that both coordinates are finite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Ellipse bezier approximation constant: 4/3 * (sqrt(2) - 1)
pub const BEZIER_K: f32 = 0.552_284_8;

/// Normalize min/max coordinates from arbitrary anchor/cursor points
#[inline]
pub fn normalize_rect(a: Point, b: Point) -> (f32, f32, f32, f32) {
    let (min_x, max_x) = if a.x < b.x { (a.x, b.x) } else { (b.x, a.x) };
    let (min_y, max_y) = if a.y < b.y { (a.y, b.y) } else { (b.y, a.y) };
    (min_x, min_y, max_x, max_y)
}

/// Calculate ellipse center and radii from a bounding box
#[inline]
pub fn ellipse_from_bounds(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> (f32, f32, f32, f32) {
    let cx = (min_x + max_x) * 0.5;
    let cy = (min_y + max_y) * 0.5;
    let rx = (max_x - min_x) * 0.5;
    let ry = (max_y - min_y) * 0.5;
    (cx, cy, rx, ry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_rect_orders_any_corner_pair() {
        let a = Point::new(200.0, 50.0);
        let b = Point::new(100.0, 150.0);
        assert_eq!(normalize_rect(a, b), (100.0, 50.0, 200.0, 150.0));
        assert_eq!(normalize_rect(b, a), (100.0, 50.0, 200.0, 150.0));
    }

    #[test]
    fn ellipse_from_bounds_centers_in_box() {
        let (cx, cy, rx, ry) = ellipse_from_bounds(10.0, 10.0, 110.0, 60.0);
        assert_eq!((cx, cy), (60.0, 35.0));
        assert_eq!((rx, ry), (50.0, 25.0));
    }
}
