//! Graphics device abstraction

/// Back-buffer information supplied by the host's graphics device.
///
/// The host must call
/// [`CameraProvider::on_back_buffer_resize`](crate::camera::CameraProvider::on_back_buffer_resize)
/// whenever the reported dimensions change.
pub trait GraphicsDevice {
    /// Get the current back buffer width in pixels
    fn back_buffer_width(&self) -> u32;

    /// Get the current back buffer height in pixels
    fn back_buffer_height(&self) -> u32;
}
