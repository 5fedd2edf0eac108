//! Axis-aligned bounding rectangles
//!
//! Every bound the engine hands out (visible world area, light area of
//! effect, scissor rectangle) is one of these, and every one of them is
//! derived the same way: a component-wise min/max reduction over a point
//! set. Zero-area rectangles are valid values, not errors.

use crate::foundation::math::Vec2;

/// Axis-aligned rectangle in world or screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRectangle {
    /// Minimum corner of the rectangle
    pub min: Vec2,
    /// Maximum corner of the rectangle
    pub max: Vec2,
}

impl BoundingRectangle {
    /// Create a rectangle from min and max corners
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build the tightest rectangle enclosing a set of points.
    ///
    /// An empty slice yields a zero-area rectangle at the origin.
    pub fn from_points(points: &[Vec2]) -> Self {
        let first = points.first().copied().unwrap_or_else(Vec2::zeros);
        points
            .iter()
            .skip(1)
            .fold(Self::new(first, first), |rect, point| rect.expanded_to(*point))
    }

    /// Grow the rectangle to enclose one more point
    pub fn expanded_to(&self, point: Vec2) -> Self {
        Self {
            min: self.min.inf(&point),
            max: self.max.sup(&point),
        }
    }

    /// Get the center of the rectangle
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Get the width and height of the rectangle
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Check if the rectangle contains a point (boundary inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y
    }

    /// Check if this rectangle overlaps another (boundary inclusive)
    pub fn intersects(&self, other: &BoundingRectangle) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_reduces_unordered_points() {
        let rect = BoundingRectangle::from_points(&[
            Vec2::new(3.0, -1.0),
            Vec2::new(-2.0, 4.0),
            Vec2::new(1.0, 1.0),
        ]);
        assert_eq!(rect.min, Vec2::new(-2.0, -1.0));
        assert_eq!(rect.max, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn from_points_of_single_point_is_zero_area() {
        let rect = BoundingRectangle::from_points(&[Vec2::new(5.0, 6.0)]);
        assert_eq!(rect.min, rect.max);
        assert_eq!(rect.size(), Vec2::zeros());
    }

    #[test]
    fn from_points_of_empty_slice_sits_at_origin() {
        let rect = BoundingRectangle::from_points(&[]);
        assert_eq!(rect.min, Vec2::zeros());
        assert_eq!(rect.max, Vec2::zeros());
    }

    #[test]
    fn expanded_to_only_grows() {
        let rect = BoundingRectangle::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0));
        let grown = rect.expanded_to(Vec2::new(1.0, 5.0));
        assert_eq!(grown.min, Vec2::new(0.0, 0.0));
        assert_eq!(grown.max, Vec2::new(2.0, 5.0));
        let same = rect.expanded_to(Vec2::new(1.0, 1.0));
        assert_eq!(same, rect);
    }

    #[test]
    fn center_and_size() {
        let rect = BoundingRectangle::new(Vec2::new(-4.0, 2.0), Vec2::new(4.0, 6.0));
        assert_eq!(rect.center(), Vec2::new(0.0, 4.0));
        assert_eq!(rect.size(), Vec2::new(8.0, 4.0));
    }

    #[test]
    fn contains_is_boundary_inclusive() {
        let rect = BoundingRectangle::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(rect.contains(Vec2::new(0.0, 10.0)));
        assert!(rect.contains(Vec2::new(5.0, 5.0)));
        assert!(!rect.contains(Vec2::new(-0.1, 5.0)));
    }

    #[test]
    fn intersects_detects_overlap_and_touching_edges() {
        let a = BoundingRectangle::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 4.0));
        let b = BoundingRectangle::new(Vec2::new(3.0, 3.0), Vec2::new(8.0, 8.0));
        let touching = BoundingRectangle::new(Vec2::new(4.0, 0.0), Vec2::new(6.0, 4.0));
        let apart = BoundingRectangle::new(Vec2::new(5.0, 5.0), Vec2::new(6.0, 6.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(a.intersects(&touching));
        assert!(!a.intersects(&apart));
    }
}
