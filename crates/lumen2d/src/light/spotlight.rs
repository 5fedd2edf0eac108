//! Cone-shaped light

use crate::foundation::math::{constants, rotate, Vec2};
use crate::geometry::BoundingRectangle;
use crate::light::{Light, LightSource};
use crate::render::{EffectBinding, ShadingTechnique};

/// Light restricted to a cone around a direction.
///
/// The stored cone direction is always unit length: a zero vector falls
/// back to +Y, anything else is normalized on the way in.
#[derive(Debug, Clone)]
pub struct Spotlight {
    light: Light,
    cone_direction: Vec2,
    cone_angle: f32,
    cone_decay: f32,
}

impl Spotlight {
    /// Create a spotlight at `position` covering `range` world units.
    ///
    /// The cone starts pointing along +Y with a quarter-turn apex angle and
    /// a decay of 0.5.
    pub fn new(position: Vec2, range: f32) -> Self {
        Self {
            light: Light::new(position, range),
            cone_direction: Vec2::y(),
            cone_angle: constants::HALF_PI,
            cone_decay: 0.5,
        }
    }

    /// Get the unit-length cone direction
    pub fn cone_direction(&self) -> Vec2 {
        self.cone_direction
    }

    /// Set the cone direction.
    ///
    /// A zero vector falls back to +Y; every other input is normalized
    /// immediately.
    pub fn set_cone_direction(&mut self, direction: Vec2) {
        self.cone_direction = direction.try_normalize(0.0).unwrap_or_else(Vec2::y);
        self.light.invalidate_bounds();
    }

    /// Get the full cone apex angle in radians
    pub fn cone_angle(&self) -> f32 {
        self.cone_angle
    }

    /// Set the full cone apex angle in radians
    pub fn set_cone_angle(&mut self, radians: f32) {
        self.cone_angle = radians;
        self.light.invalidate_bounds();
    }

    /// Get the falloff exponent toward the cone edge
    pub fn cone_decay(&self) -> f32 {
        self.cone_decay
    }

    /// Set the falloff exponent toward the cone edge
    pub fn set_cone_decay(&mut self, decay: f32) {
        self.cone_decay = decay;
        self.light.invalidate_bounds();
    }

    fn compute_bounds(&self) -> BoundingRectangle {
        let half_angle = self.cone_angle * 0.5;
        let position = self.light.position();
        let range = self.light.range();

        // Past a quarter-turn half-angle the cone opens beyond a half
        // plane; cover it with the full disc instead.
        if half_angle.abs() >= constants::HALF_PI {
            let radius = range.max(0.0);
            let extent = Vec2::new(radius, radius);
            return BoundingRectangle::from_points(&[position - extent, position + extent]);
        }

        // Pushing the edge points out to range / cos(half) keeps the whole
        // sector, arc included, inside the position/edge/edge triangle.
        let magnitude = range / half_angle.cos();
        let edge_a = position + rotate(self.cone_direction, half_angle) * magnitude;
        let edge_b = position + rotate(self.cone_direction, -half_angle) * magnitude;
        BoundingRectangle::from_points(&[position, edge_a, edge_b])
    }
}

impl LightSource for Spotlight {
    fn light(&self) -> &Light {
        &self.light
    }

    fn light_mut(&mut self) -> &mut Light {
        &mut self.light
    }

    fn bounds(&self) -> BoundingRectangle {
        self.light.cached_bounds(|| self.compute_bounds())
    }

    fn apply_effect_params(&self, binding: &mut dyn EffectBinding) -> ShadingTechnique {
        self.light.apply_common_params(binding);
        binding.set_cone_angle(self.cone_angle);
        binding.set_cone_decay(self.cone_decay);
        binding.set_cone_direction(self.cone_direction);
        ShadingTechnique::Spotlight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::testing::RecordingBinding;

    const EPSILON: f32 = 0.001;

    fn assert_vec2_approx_eq(a: Vec2, b: Vec2) {
        assert!((a.x - b.x).abs() < EPSILON, "X mismatch: {} != {}", a.x, b.x);
        assert!((a.y - b.y).abs() < EPSILON, "Y mismatch: {} != {}", a.y, b.y);
    }

    #[test]
    fn test_cone_direction_defaults_to_unit_y() {
        let light = Spotlight::new(Vec2::zeros(), 100.0);
        assert_vec2_approx_eq(light.cone_direction(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_zero_cone_direction_falls_back_to_unit_y() {
        let mut light = Spotlight::new(Vec2::zeros(), 100.0);
        light.set_cone_direction(Vec2::new(1.0, 0.0));
        light.set_cone_direction(Vec2::zeros());
        assert_vec2_approx_eq(light.cone_direction(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_cone_direction_is_normalized_on_set() {
        let mut light = Spotlight::new(Vec2::zeros(), 100.0);
        light.set_cone_direction(Vec2::new(3.0, 0.0));
        assert_vec2_approx_eq(light.cone_direction(), Vec2::new(1.0, 0.0));
        light.set_cone_direction(Vec2::new(-2.0, 2.0));
        assert!((light.cone_direction().norm() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_default_cone_shape() {
        let light = Spotlight::new(Vec2::zeros(), 100.0);
        assert!((light.cone_angle() - constants::HALF_PI).abs() < EPSILON);
        assert!((light.cone_decay() - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_bounds_enclose_cone_pointing_along_x() {
        let mut light = Spotlight::new(Vec2::new(10.0, 20.0), 100.0);
        light.set_cone_direction(Vec2::new(1.0, 0.0));
        let bounds = light.bounds();
        assert_vec2_approx_eq(bounds.min, Vec2::new(10.0, -80.0));
        assert_vec2_approx_eq(bounds.max, Vec2::new(110.0, 120.0));
    }

    #[test]
    fn test_bounds_follow_direction_mutation() {
        let mut light = Spotlight::new(Vec2::zeros(), 100.0);
        light.set_cone_direction(Vec2::new(1.0, 0.0));
        let before = light.bounds();
        assert_vec2_approx_eq(before.min, Vec2::new(0.0, -100.0));
        assert_vec2_approx_eq(before.max, Vec2::new(100.0, 100.0));

        light.set_cone_direction(Vec2::new(-1.0, 0.0));
        let after = light.bounds();
        assert_vec2_approx_eq(after.min, Vec2::new(-100.0, -100.0));
        assert_vec2_approx_eq(after.max, Vec2::new(0.0, 100.0));
    }

    #[test]
    fn test_wide_cone_falls_back_to_full_disc() {
        let mut light = Spotlight::new(Vec2::new(5.0, 5.0), 50.0);
        light.set_cone_angle(constants::TAU);
        let bounds = light.bounds();
        assert_vec2_approx_eq(bounds.min, Vec2::new(-45.0, -45.0));
        assert_vec2_approx_eq(bounds.max, Vec2::new(55.0, 55.0));
    }

    #[test]
    fn test_zero_range_gives_zero_area_bounds() {
        let light = Spotlight::new(Vec2::new(3.0, -7.0), 0.0);
        let bounds = light.bounds();
        assert_vec2_approx_eq(bounds.min, Vec2::new(3.0, -7.0));
        assert_vec2_approx_eq(bounds.max, Vec2::new(3.0, -7.0));
    }

    #[test]
    fn test_negative_range_does_not_panic() {
        let mut light = Spotlight::new(Vec2::zeros(), -25.0);
        let narrow = light.bounds();
        assert!(narrow.min.x <= narrow.max.x);
        assert!(narrow.min.y <= narrow.max.y);

        light.set_cone_angle(constants::TAU);
        let disc = light.bounds();
        assert_vec2_approx_eq(disc.min, Vec2::zeros());
        assert_vec2_approx_eq(disc.max, Vec2::zeros());
    }

    #[test]
    fn test_apply_effect_params_pushes_cone_state() {
        let mut light = Spotlight::new(Vec2::new(1.0, 2.0), 30.0);
        light.set_cone_direction(Vec2::new(0.0, -3.0));
        light.set_cone_angle(1.2);
        light.set_cone_decay(0.25);

        let mut binding = RecordingBinding::default();
        let technique = light.apply_effect_params(&mut binding);

        assert_eq!(technique, ShadingTechnique::Spotlight);
        assert_vec2_approx_eq(binding.cone_direction.unwrap(), Vec2::new(0.0, -1.0));
        assert!((binding.cone_angle.unwrap() - 1.2).abs() < EPSILON);
        assert!((binding.cone_decay.unwrap() - 0.25).abs() < EPSILON);
        assert_vec2_approx_eq(binding.position.unwrap(), Vec2::new(1.0, 2.0));
    }
}
