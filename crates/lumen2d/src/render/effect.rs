//! Shading effect parameter binding

use crate::foundation::math::{Mat4, Vec2, Vec3};

/// Shading technique a renderer selects after parameters are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadingTechnique {
    /// Omnidirectional falloff around the light position
    PointLight,
    /// Cone-restricted falloff along the cone direction
    Spotlight,
}

/// Sink for per-light shader parameters
///
/// Implemented by the host over its shader/uniform system. Lights push
/// their current state through these setters during
/// [`LightSource::apply_effect_params`](crate::light::LightSource::apply_effect_params);
/// the engine never owns shader objects.
pub trait EffectBinding {
    /// Set the light's world-space position
    fn set_light_position(&mut self, position: Vec2);

    /// Set the light's range in world units
    fn set_light_range(&mut self, range: f32);

    /// Set the light's color
    fn set_light_color(&mut self, color: Vec3);

    /// Set the light's intensity multiplier
    fn set_light_intensity(&mut self, intensity: f32);

    /// Set the light's world transform for quad placement
    fn set_light_world_transform(&mut self, transform: Mat4);

    /// Set the full cone apex angle in radians
    fn set_cone_angle(&mut self, radians: f32);

    /// Set the falloff exponent toward the cone edge
    fn set_cone_decay(&mut self, decay: f32);

    /// Set the unit-length cone direction
    fn set_cone_direction(&mut self, direction: Vec2);
}
