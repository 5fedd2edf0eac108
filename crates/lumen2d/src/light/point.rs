//! Omnidirectional light

use crate::foundation::math::Vec2;
use crate::geometry::BoundingRectangle;
use crate::light::{Light, LightSource};
use crate::render::{EffectBinding, ShadingTechnique};

/// Light radiating uniformly in every direction
#[derive(Debug, Clone)]
pub struct PointLight {
    light: Light,
}

impl PointLight {
    /// Create a point light at `position` covering `range` world units
    pub fn new(position: Vec2, range: f32) -> Self {
        Self {
            light: Light::new(position, range),
        }
    }

    fn compute_bounds(&self) -> BoundingRectangle {
        let scale = self.light.scale();
        // Non-uniform scale keeps a disc bound; the larger axis wins.
        let radius = (self.light.range() * scale.x.abs().max(scale.y.abs())).max(0.0);
        let extent = Vec2::new(radius, radius);
        let position = self.light.position();
        BoundingRectangle::from_points(&[position - extent, position + extent])
    }
}

impl LightSource for PointLight {
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
        ShadingTechnique::PointLight
    }
}
