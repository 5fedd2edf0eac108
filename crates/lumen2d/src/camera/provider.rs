//! # Camera Provider
//!
//! Composes the world-to-NDC view-projection from the enabled projection
//! modes and keeps every derived value a lighting pass needs: the inverse
//! transform, the NDC-to-screen matrix, the visible world bounds, and the
//! Y-inversion flag.
//!
//! ## Lifecycle
//! A provider starts unloaded: configuration is stored but nothing is
//! derived. [`CameraProvider::load`] binds it to a graphics device and
//! derives everything; from then on mutations and resize notifications
//! recompute immediately. Derived-state queries before `load` return
//! [`CameraError::NotLoaded`] instead of stale or sentinel values.
//!
//! ## Composition
//! Enabled modes fold together in [`Projections::COMPOSITION_ORDER`], each
//! mode's matrix left-multiplying the running product (column-vector
//! convention). With no modes enabled the composite is the identity.

use thiserror::Error;

use crate::camera::Projections;
use crate::config::LightingConfig;
use crate::foundation::math::{Mat4, Mat4Ext, Vec2};
use crate::geometry::BoundingRectangle;
use crate::light::LightSource;
use crate::render::GraphicsDevice;

/// Errors from camera provider lifecycle and configuration
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraError {
    /// A derived-state query or notification arrived before `load`
    #[error("camera provider is not loaded; call load() with a graphics device first")]
    NotLoaded,

    /// `load` was called on an already loaded provider
    #[error("camera provider is already loaded")]
    AlreadyLoaded,

    /// The device reported a zero-sized back buffer
    #[error("back buffer dimensions must be non-zero, got {width}x{height}")]
    DegenerateBackBuffer {
        /// Reported width in pixels
        width: u32,
        /// Reported height in pixels
        height: u32,
    },

    /// The composite view-projection has no inverse
    #[error("composite view-projection is not invertible; check the custom matrix and enabled modes")]
    NonInvertibleViewProjection,
}

/// Everything derived from the configuration and the back buffer
#[derive(Debug, Clone)]
struct LoadedState {
    width: u32,
    height: u32,
    view_projection: Mat4,
    inverse_view_projection: Mat4,
    ndc_to_screen: Mat4,
    bounds: BoundingRectangle,
    inverted_y: bool,
}

/// Owner of the composite view-projection and its derived state
///
/// Holds the enabled [`Projections`] set and the custom matrix, and once
/// loaded against a [`GraphicsDevice`] answers every camera query a
/// lighting pass makes. Recomputation is eager after mutations and resize
/// notifications; queries only read.
///
/// A non-invertible composite is a fatal configuration error and is
/// surfaced as [`CameraError::NonInvertibleViewProjection`] from the
/// mutating call; the previously derived state stays in place.
#[derive(Debug, Clone)]
pub struct CameraProvider {
    projections: Projections,
    custom: Mat4,
    state: Option<LoadedState>,
}

impl CameraProvider {
    /// Create an unloaded provider with the default projection modes
    pub fn new() -> Self {
        Self {
            projections: Projections::default(),
            custom: Mat4::identity(),
            state: None,
        }
    }

    /// Create an unloaded provider from persisted configuration
    pub fn from_config(config: &LightingConfig) -> Self {
        Self {
            projections: config.projections,
            custom: config.custom,
            state: None,
        }
    }

    /// Get the enabled projection modes
    pub fn projections(&self) -> Projections {
        self.projections
    }

    /// Get the custom matrix contribution
    pub fn custom(&self) -> Mat4 {
        self.custom
    }

    /// Check whether `load` has succeeded
    pub fn is_loaded(&self) -> bool {
        self.state.is_some()
    }

    /// Replace the enabled projection modes.
    ///
    /// Before `load` the set is only stored; afterwards derived state is
    /// recomputed immediately.
    ///
    /// # Errors
    /// [`CameraError::NonInvertibleViewProjection`] when the new composite
    /// has no inverse; the previous derived state is kept.
    pub fn set_projections(&mut self, projections: Projections) -> Result<(), CameraError> {
        self.projections = projections;
        self.refresh()
    }

    /// Replace the custom matrix contribution.
    ///
    /// The matrix participates only while [`Projections::CUSTOM`] is
    /// enabled; storing it with the flag disabled is valid and takes effect
    /// once the flag is turned on.
    ///
    /// # Errors
    /// [`CameraError::NonInvertibleViewProjection`] when the new composite
    /// has no inverse; the previous derived state is kept.
    pub fn set_custom(&mut self, matrix: Mat4) -> Result<(), CameraError> {
        self.custom = matrix;
        if self.projections.contains(Projections::CUSTOM) {
            self.refresh()
        } else {
            Ok(())
        }
    }

    /// Bind the provider to a graphics device and derive all state.
    ///
    /// Reads the back buffer dimensions once; afterwards the host reports
    /// changes through [`CameraProvider::on_back_buffer_resize`].
    ///
    /// # Errors
    /// - [`CameraError::AlreadyLoaded`] on a second call
    /// - [`CameraError::DegenerateBackBuffer`] when either dimension is zero
    /// - [`CameraError::NonInvertibleViewProjection`] when the configured
    ///   composite has no inverse
    pub fn load(&mut self, device: &dyn GraphicsDevice) -> Result<(), CameraError> {
        if self.state.is_some() {
            return Err(CameraError::AlreadyLoaded);
        }
        let width = device.back_buffer_width();
        let height = device.back_buffer_height();
        self.state = Some(self.derive_state(width, height)?);
        log::debug!("Camera provider loaded with a {}x{} back buffer", width, height);
        Ok(())
    }

    /// Recompute all derived state for a new back buffer size.
    ///
    /// # Errors
    /// - [`CameraError::NotLoaded`] before `load`
    /// - [`CameraError::DegenerateBackBuffer`] when either dimension is zero
    /// - [`CameraError::NonInvertibleViewProjection`] when the composite has
    ///   no inverse; the previous derived state is kept
    pub fn on_back_buffer_resize(&mut self, width: u32, height: u32) -> Result<(), CameraError> {
        if self.state.is_none() {
            return Err(CameraError::NotLoaded);
        }
        log::info!("Back buffer size changed to {}x{}.", width, height);
        self.state = Some(self.derive_state(width, height)?);
        Ok(())
    }

    /// Get the composite world-to-NDC matrix.
    ///
    /// # Errors
    /// [`CameraError::NotLoaded`] before `load`.
    pub fn view_projection(&self) -> Result<Mat4, CameraError> {
        Ok(self.loaded_state()?.view_projection)
    }

    /// Get the NDC-to-world matrix.
    ///
    /// # Errors
    /// [`CameraError::NotLoaded`] before `load`.
    pub fn inverse_view_projection(&self) -> Result<Mat4, CameraError> {
        Ok(self.loaded_state()?.inverse_view_projection)
    }

    /// Get the NDC-to-screen-pixel matrix.
    ///
    /// # Errors
    /// [`CameraError::NotLoaded`] before `load`.
    pub fn ndc_to_screen(&self) -> Result<Mat4, CameraError> {
        Ok(self.loaded_state()?.ndc_to_screen)
    }

    /// Get the world-space rectangle currently visible on screen.
    ///
    /// Derived by pulling the NDC corners back through the inverse
    /// view-projection and reducing.
    ///
    /// # Errors
    /// [`CameraError::NotLoaded`] before `load`.
    pub fn bounds(&self) -> Result<BoundingRectangle, CameraError> {
        Ok(self.loaded_state()?.bounds)
    }

    /// Check whether the composite flips the Y axis.
    ///
    /// True iff exactly one of the two diagonal basis entries is negative,
    /// which holds across every projection convention.
    ///
    /// # Errors
    /// [`CameraError::NotLoaded`] before `load`.
    pub fn inverted_y(&self) -> Result<bool, CameraError> {
        Ok(self.loaded_state()?.inverted_y)
    }

    /// Map a light's world bounds to a screen-pixel scissor rectangle.
    ///
    /// All four corners go through the transform before the min/max
    /// reduction: rotation or axis flips can move any corner to any
    /// extreme. The result is not clamped to the viewport.
    ///
    /// # Errors
    /// [`CameraError::NotLoaded`] before `load`.
    pub fn scissor_rectangle(&self, light: &dyn LightSource) -> Result<BoundingRectangle, CameraError> {
        let state = self.loaded_state()?;
        let to_screen = state.ndc_to_screen * state.view_projection;
        let bounds = light.bounds();
        let corners = [
            to_screen.transform_point2(Vec2::new(bounds.min.x, bounds.max.y)),
            to_screen.transform_point2(Vec2::new(bounds.max.x, bounds.max.y)),
            to_screen.transform_point2(Vec2::new(bounds.max.x, bounds.min.y)),
            to_screen.transform_point2(Vec2::new(bounds.min.x, bounds.min.y)),
        ];
        Ok(BoundingRectangle::from_points(&corners))
    }

    fn loaded_state(&self) -> Result<&LoadedState, CameraError> {
        self.state.as_ref().ok_or(CameraError::NotLoaded)
    }

    /// Recompute with the current dimensions, if loaded
    fn refresh(&mut self) -> Result<(), CameraError> {
        let dimensions = self.state.as_ref().map(|state| (state.width, state.height));
        if let Some((width, height)) = dimensions {
            self.state = Some(self.derive_state(width, height)?);
        }
        Ok(())
    }

    /// Derive the full loaded state; commits nothing on failure
    fn derive_state(&self, width: u32, height: u32) -> Result<LoadedState, CameraError> {
        if width == 0 || height == 0 {
            return Err(CameraError::DegenerateBackBuffer { width, height });
        }
        let w = width as f32;
        let h = height as f32;

        let screen_to_ndc = Mat4::orthographic_off_center(0.0, w, h, 0.0, 0.0, 1.0);
        let ndc_to_screen = screen_to_ndc
            .try_inverse()
            .ok_or(CameraError::NonInvertibleViewProjection)?;

        let view_projection = self.compose_view_projection(w, h);
        let inverse_view_projection = view_projection
            .try_inverse()
            .ok_or(CameraError::NonInvertibleViewProjection)?;

        let inverted_y = (view_projection.m11 < 0.0) != (view_projection.m22 < 0.0);

        let corners = [
            inverse_view_projection.transform_point2(Vec2::new(1.0, 1.0)),
            inverse_view_projection.transform_point2(Vec2::new(1.0, -1.0)),
            inverse_view_projection.transform_point2(Vec2::new(-1.0, -1.0)),
            inverse_view_projection.transform_point2(Vec2::new(-1.0, 1.0)),
        ];
        let bounds = BoundingRectangle::from_points(&corners);

        log::trace!(
            "View-projection derived: bounds min ({}, {}), max ({}, {}), inverted Y: {}",
            bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y, inverted_y
        );

        Ok(LoadedState {
            width,
            height,
            view_projection,
            inverse_view_projection,
            ndc_to_screen,
            bounds,
            inverted_y,
        })
    }

    fn compose_view_projection(&self, width: f32, height: f32) -> Mat4 {
        let mut view_projection = Mat4::identity();
        for mode in Projections::COMPOSITION_ORDER {
            if self.projections.contains(mode) {
                view_projection = self.mode_matrix(mode, width, height) * view_projection;
            }
        }
        view_projection
    }

    fn mode_matrix(&self, mode: Projections, width: f32, height: f32) -> Mat4 {
        if mode == Projections::CUSTOM {
            self.custom
        } else if mode == Projections::SPRITE_BATCH {
            Mat4::orthographic_off_center(0.0, width, height, 0.0, 0.0, 1.0)
        } else if mode == Projections::ORIGIN_CENTER_X_RIGHT_Y_UP {
            Mat4::orthographic_off_center(-width / 2.0, width / 2.0, -height / 2.0, height / 2.0, 0.0, 1.0)
        } else if mode == Projections::ORIGIN_BOTTOM_LEFT_X_RIGHT_Y_UP {
            Mat4::orthographic_off_center(0.0, width, 0.0, height, 0.0, 1.0)
        } else {
            Mat4::identity()
        }
    }
}

impl Default for CameraProvider {
    fn default() -> Self {
        Self::new()
    }
}
