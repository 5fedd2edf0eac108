//! Camera module - Projection composition and scissor mapping

mod projections;
mod provider;

pub use projections::Projections;
pub use provider::{CameraError, CameraProvider};
