//! Render module - Host-facing traits for the lighting pipeline
//!
//! The engine computes matrices and parameters; the host owns the GPU. These
//! traits are the seam: the host implements them over whatever graphics API
//! it runs, and the engine pushes values through without ever touching
//! device resources.

mod device;
mod effect;

pub use device::GraphicsDevice;
pub use effect::{EffectBinding, ShadingTechnique};
