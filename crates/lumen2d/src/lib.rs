//! # Lumen2D
//!
//! The camera and light-model core of a 2D dynamic lighting engine.
//!
//! ## Features
//!
//! - **Projection Composition**: world-to-NDC matrices composed from host
//!   projection conventions in a fixed, documented order
//! - **Light Model**: spotlights and point lights with lazily recomputed
//!   world-space bounds
//! - **Scissor Mapping**: light bounds mapped to screen-pixel rectangles
//!   for per-light draw restriction
//! - **Host Integration**: trait seams for the graphics device and shader
//!   parameter submission; no GPU resources owned here
//! - **Configuration**: TOML/RON persisted startup state
//!
//! ## Quick Start
//!
//! ```rust
//! use lumen2d::prelude::*;
//!
//! struct HeadlessDevice {
//!     width: u32,
//!     height: u32,
//! }
//!
//! impl GraphicsDevice for HeadlessDevice {
//!     fn back_buffer_width(&self) -> u32 {
//!         self.width
//!     }
//!
//!     fn back_buffer_height(&self) -> u32 {
//!         self.height
//!     }
//! }
//!
//! fn main() -> Result<(), CameraError> {
//!     let mut camera = CameraProvider::new();
//!     camera.set_projections(Projections::SPRITE_BATCH)?;
//!     camera.load(&HeadlessDevice { width: 800, height: 600 })?;
//!
//!     let mut torch = Spotlight::new(Vec2::new(400.0, 300.0), 150.0);
//!     torch.set_cone_direction(Vec2::new(1.0, 0.0));
//!
//!     let scissor = camera.scissor_rectangle(&torch)?;
//!     assert!(scissor.contains(Vec2::new(400.0, 300.0)));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod camera;
pub mod config;
pub mod foundation;
pub mod geometry;
pub mod light;
pub mod render;

/// Common imports for lighting pipeline users
pub mod prelude {
    pub use crate::{
        camera::{CameraError, CameraProvider, Projections},
        config::{Config, ConfigError, LightingConfig},
        foundation::math::{Mat4, Mat4Ext, Vec2, Vec3},
        geometry::BoundingRectangle,
        light::{Light, LightSource, PointLight, Spotlight},
        render::{EffectBinding, GraphicsDevice, ShadingTechnique},
    };
}
