//! Light model
//!
//! Shared light state plus the concrete light kinds. Every light owns a
//! world-space bounding rectangle enclosing its area of effect; geometric
//! setters mark it dirty and the next read recomputes it.

mod point;
mod spotlight;

pub use point::PointLight;
pub use spotlight::Spotlight;

use std::cell::Cell;

use crate::foundation::math::{Mat4, Mat4Ext, Vec2, Vec3};
use crate::geometry::BoundingRectangle;
use crate::render::{EffectBinding, ShadingTechnique};

/// A positioned light source with lazily recomputed world bounds
pub trait LightSource {
    /// Get the shared light state
    fn light(&self) -> &Light;

    /// Get the shared light state mutably
    fn light_mut(&mut self) -> &mut Light;

    /// World-space bounding rectangle enclosing the area of effect.
    ///
    /// Stays valid across mutations: any geometric setter marks the bounds
    /// dirty and the next call recomputes them.
    fn bounds(&self) -> BoundingRectangle;

    /// Push shader parameters and name the technique to draw with
    fn apply_effect_params(&self, binding: &mut dyn EffectBinding) -> ShadingTechnique;
}

/// State shared by every light kind
#[derive(Debug, Clone)]
pub struct Light {
    position: Vec2,
    origin: Vec2,
    rotation: f32,
    scale: Vec2,
    range: f32,
    color: Vec3,
    intensity: f32,
    enabled: bool,
    bounds_cache: Cell<Option<BoundingRectangle>>,
}

impl Light {
    /// Create a light at `position` covering `range` world units.
    ///
    /// Remaining state defaults: zero origin and rotation, unit scale,
    /// white color, intensity 1, enabled.
    pub fn new(position: Vec2, range: f32) -> Self {
        Self {
            position,
            origin: Vec2::zeros(),
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
            range,
            color: Vec3::new(1.0, 1.0, 1.0),
            intensity: 1.0,
            enabled: true,
            bounds_cache: Cell::new(None),
        }
    }

    /// Get the world-space position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Set the world-space position
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.invalidate_bounds();
    }

    /// Get the local origin the light rotates and scales around
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Set the local origin the light rotates and scales around
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
        self.invalidate_bounds();
    }

    /// Get the rotation in radians (counter-clockwise)
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Set the rotation in radians (counter-clockwise)
    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
        self.invalidate_bounds();
    }

    /// Get the scale factors
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Set the scale factors. Negative components flip axes; any value is
    /// accepted.
    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
        self.invalidate_bounds();
    }

    /// Get the range in world units
    pub fn range(&self) -> f32 {
        self.range
    }

    /// Set the range in world units. Non-positive values collapse the
    /// bounds to a point rather than erroring.
    pub fn set_range(&mut self, range: f32) {
        self.range = range;
        self.invalidate_bounds();
    }

    /// Get the light color
    pub fn color(&self) -> Vec3 {
        self.color
    }

    /// Set the light color (does not affect bounds)
    pub fn set_color(&mut self, color: Vec3) {
        self.color = color;
    }

    /// Get the intensity multiplier
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Set the intensity multiplier (does not affect bounds)
    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
    }

    /// Check whether the light participates in rendering
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the light (does not affect bounds)
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Get the world transform placing the light's geometry
    pub fn world_transform(&self) -> Mat4 {
        Mat4::transform_2d(self.position, self.origin, self.scale, self.rotation)
    }

    /// Drop the cached bounds so the next read recomputes them
    pub fn invalidate_bounds(&self) {
        self.bounds_cache.set(None);
    }

    /// Return the cached bounds, computing and storing them when stale.
    ///
    /// Light kinds call this from [`LightSource::bounds`] with their own
    /// geometry; host-defined kinds can reuse the same cache.
    pub fn cached_bounds(&self, compute: impl FnOnce() -> BoundingRectangle) -> BoundingRectangle {
        if let Some(bounds) = self.bounds_cache.get() {
            return bounds;
        }
        let bounds = compute();
        log::trace!(
            "Light bounds recomputed: min ({}, {}), max ({}, {})",
            bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y
        );
        self.bounds_cache.set(Some(bounds));
        bounds
    }

    /// Push the parameters every light kind shares
    pub fn apply_common_params(&self, binding: &mut dyn EffectBinding) {
        binding.set_light_position(self.position);
        binding.set_light_range(self.range);
        binding.set_light_color(self.color);
        binding.set_light_intensity(self.intensity);
        binding.set_light_world_transform(self.world_transform());
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingBinding;
    use super::*;

    const EPSILON: f32 = 0.001;

    #[test]
    fn test_new_light_defaults() {
        let light = Light::new(Vec2::new(4.0, 5.0), 75.0);
        assert_eq!(light.position(), Vec2::new(4.0, 5.0));
        assert!((light.range() - 75.0).abs() < EPSILON);
        assert_eq!(light.scale(), Vec2::new(1.0, 1.0));
        assert_eq!(light.color(), Vec3::new(1.0, 1.0, 1.0));
        assert!((light.intensity() - 1.0).abs() < EPSILON);
        assert!(light.enabled());
    }

    #[test]
    fn test_world_transform_maps_origin_to_position() {
        let mut light = Light::new(Vec2::new(12.0, -3.0), 50.0);
        light.set_origin(Vec2::new(2.0, 2.0));
        light.set_rotation(0.8);
        light.set_scale(Vec2::new(1.5, 0.5));
        let mapped = light.world_transform().transform_point2(light.origin());
        assert!((mapped.x - 12.0).abs() < EPSILON, "X mismatch: {}", mapped.x);
        assert!((mapped.y + 3.0).abs() < EPSILON, "Y mismatch: {}", mapped.y);
    }

    #[test]
    fn test_cached_bounds_recomputes_only_after_invalidate() {
        let light = Light::new(Vec2::zeros(), 10.0);
        let computed = std::cell::Cell::new(0);
        let compute = || {
            computed.set(computed.get() + 1);
            BoundingRectangle::new(Vec2::zeros(), Vec2::new(1.0, 1.0))
        };

        light.cached_bounds(compute);
        light.cached_bounds(compute);
        assert_eq!(computed.get(), 1);

        light.invalidate_bounds();
        light.cached_bounds(compute);
        assert_eq!(computed.get(), 2);
    }

    #[test]
    fn test_geometric_setters_invalidate_bounds_and_cosmetic_setters_do_not() {
        let mut light = Light::new(Vec2::zeros(), 10.0);
        let computed = std::cell::Cell::new(0);
        let compute = || {
            computed.set(computed.get() + 1);
            BoundingRectangle::new(Vec2::zeros(), Vec2::new(1.0, 1.0))
        };

        light.cached_bounds(compute);
        light.set_color(Vec3::new(0.2, 0.4, 0.9));
        light.set_intensity(3.0);
        light.set_enabled(false);
        light.cached_bounds(compute);
        assert_eq!(computed.get(), 1);

        light.set_position(Vec2::new(1.0, 0.0));
        light.cached_bounds(compute);
        assert_eq!(computed.get(), 2);

        light.set_range(40.0);
        light.cached_bounds(compute);
        assert_eq!(computed.get(), 3);
    }

    #[test]
    fn test_apply_common_params_pushes_shared_state() {
        let mut light = Light::new(Vec2::new(6.0, 7.0), 42.0);
        light.set_color(Vec3::new(0.5, 0.6, 0.7));
        light.set_intensity(2.5);

        let mut binding = RecordingBinding::default();
        light.apply_common_params(&mut binding);

        assert_eq!(binding.position.unwrap(), Vec2::new(6.0, 7.0));
        assert!((binding.range.unwrap() - 42.0).abs() < EPSILON);
        assert_eq!(binding.color.unwrap(), Vec3::new(0.5, 0.6, 0.7));
        assert!((binding.intensity.unwrap() - 2.5).abs() < EPSILON);
        assert_eq!(binding.world_transform.unwrap(), light.world_transform());
        assert!(binding.cone_angle.is_none());
    }
}
