//! Geometry module - Spatial primitives for bounds and culling

mod bounding_rectangle;

pub use bounding_rectangle::BoundingRectangle;
