//! Math utilities and types
//!
//! Provides the vector and matrix types used across the lighting engine,
//! plus the 2D transform helpers that bounds and scissor computations are
//! built from.

pub use nalgebra::{Matrix4, Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Scalar 2D cross product of two vectors.
///
/// Positive when `b` points counter-clockwise from `a`.
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Rotate a vector counter-clockwise by `radians`.
pub fn rotate(v: Vec2, radians: f32) -> Vec2 {
    let (sin, cos) = radians.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}

/// Extension trait for Mat4 with the 2D pipeline constructors and helpers
pub trait Mat4Ext {
    /// Create an off-center orthographic projection with depth mapped to [0, 1].
    ///
    /// Column-vector convention: points transform as `M * p`. The caller
    /// guarantees `left != right`, `bottom != top` and `near != far`.
    fn orthographic_off_center(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4;

    /// Create a 2D world transform from position, origin, scale and rotation.
    ///
    /// Offsets by `-origin`, scales, rotates counter-clockwise by `rotation`
    /// and translates to `position`, so the matrix maps `origin` onto
    /// `position`.
    fn transform_2d(position: Vec2, origin: Vec2, scale: Vec2, rotation: f32) -> Mat4;

    /// Transform a 2D point, ignoring the perspective row.
    ///
    /// Only the upper-left 2x2 block and the translation column participate;
    /// there is no divide by w.
    fn transform_point2(&self, point: Vec2) -> Vec2;
}

impl Mat4Ext for Mat4 {
    fn orthographic_off_center(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
        Mat4::new(
            2.0 / (right - left), 0.0,                  0.0,                 (left + right) / (left - right),
            0.0,                  2.0 / (top - bottom), 0.0,                 (top + bottom) / (bottom - top),
            0.0,                  0.0,                  1.0 / (near - far),  near / (near - far),
            0.0,                  0.0,                  0.0,                 1.0,
        )
    }

    fn transform_2d(position: Vec2, origin: Vec2, scale: Vec2, rotation: f32) -> Mat4 {
        let (sin, cos) = rotation.sin_cos();
        let scaled_origin = scale.component_mul(&origin);
        // Folding the rotated scaled origin into the translation is what
        // makes the matrix map `origin` back onto `position`.
        let tx = position.x - (scaled_origin.x * cos - scaled_origin.y * sin);
        let ty = position.y - (scaled_origin.x * sin + scaled_origin.y * cos);

        Mat4::new(
            scale.x * cos, -scale.y * sin, 0.0, tx,
            scale.x * sin,  scale.y * cos, 0.0, ty,
            0.0,            0.0,           1.0, 0.0,
            0.0,            0.0,           0.0, 1.0,
        )
    }

    fn transform_point2(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            self.m11 * point.x + self.m12 * point.y + self.m14,
            self.m21 * point.x + self.m22 * point.y + self.m24,
        )
    }
}
