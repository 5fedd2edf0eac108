//! Headless lighting pipeline demo
//!
//! Drives the full camera and light surface without a window: loads the
//! camera provider against a stub back buffer, culls lights against the
//! visible world bounds, pushes shader parameters into a logging effect
//! binding and prints per-light scissor rectangles, then simulates a
//! resize and runs the frame again.

use lumen2d::foundation::math::utils;
use lumen2d::prelude::*;

const INITIAL_WIDTH: u32 = 800;
const INITIAL_HEIGHT: u32 = 600;
const RESIZED_WIDTH: u32 = 1280;
const RESIZED_HEIGHT: u32 = 720;

/// Fixed-size stand-in for a swapchain back buffer
struct HeadlessDevice {
    width: u32,
    height: u32,
}

impl GraphicsDevice for HeadlessDevice {
    fn back_buffer_width(&self) -> u32 {
        self.width
    }

    fn back_buffer_height(&self) -> u32 {
        self.height
    }
}

/// Effect binding that logs every parameter instead of touching a shader
struct LoggingBinding;

impl EffectBinding for LoggingBinding {
    fn set_light_position(&mut self, position: Vec2) {
        log::debug!("  position: ({:.1}, {:.1})", position.x, position.y);
    }

    fn set_light_range(&mut self, range: f32) {
        log::debug!("  range: {:.1}", range);
    }

    fn set_light_color(&mut self, color: Vec3) {
        log::debug!("  color: ({:.2}, {:.2}, {:.2})", color.x, color.y, color.z);
    }

    fn set_light_intensity(&mut self, intensity: f32) {
        log::debug!("  intensity: {:.2}", intensity);
    }

    fn set_light_world_transform(&mut self, transform: Mat4) {
        log::debug!(
            "  world transform translation: ({:.1}, {:.1})",
            transform.m14, transform.m24
        );
    }

    fn set_cone_angle(&mut self, radians: f32) {
        log::debug!("  cone angle: {:.1} deg", utils::rad_to_deg(radians));
    }

    fn set_cone_decay(&mut self, decay: f32) {
        log::debug!("  cone decay: {:.2}", decay);
    }

    fn set_cone_direction(&mut self, direction: Vec2) {
        log::debug!("  cone direction: ({:.2}, {:.2})", direction.x, direction.y);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    lumen2d::foundation::logging::init_with_level(log::LevelFilter::Debug);

    let config = LightingConfig::default();
    let mut camera = CameraProvider::from_config(&config);
    camera.load(&HeadlessDevice {
        width: INITIAL_WIDTH,
        height: INITIAL_HEIGHT,
    })?;

    let mut torch = Spotlight::new(Vec2::new(120.0, 40.0), 220.0);
    torch.set_cone_direction(Vec2::new(-1.0, 0.5));
    torch.set_cone_angle(utils::deg_to_rad(70.0));
    torch.light_mut().set_color(Vec3::new(1.0, 0.85, 0.6));

    let mut lamp = PointLight::new(Vec2::new(-250.0, 150.0), 140.0);
    lamp.light_mut().set_intensity(1.4);

    // Sits past the right edge of the 800x600 view; the resize below pulls
    // it into frame.
    let mut far_lamp = PointLight::new(Vec2::new(500.0, 0.0), 60.0);
    far_lamp.light_mut().set_color(Vec3::new(0.4, 0.6, 1.0));

    let lights: Vec<Box<dyn LightSource>> =
        vec![Box::new(torch), Box::new(lamp), Box::new(far_lamp)];

    render_frame(&camera, &lights)?;

    camera.on_back_buffer_resize(RESIZED_WIDTH, RESIZED_HEIGHT)?;
    render_frame(&camera, &lights)?;

    Ok(())
}

/// Cull, bind and scissor every enabled light once
fn render_frame(camera: &CameraProvider, lights: &[Box<dyn LightSource>]) -> Result<(), CameraError> {
    let visible = camera.bounds()?;
    log::info!(
        "Frame: visible world ({:.0}, {:.0})..({:.0}, {:.0}), inverted Y: {}",
        visible.min.x,
        visible.min.y,
        visible.max.x,
        visible.max.y,
        camera.inverted_y()?
    );

    let mut binding = LoggingBinding;
    for (index, light) in lights.iter().enumerate() {
        if !light.light().enabled() {
            continue;
        }
        let bounds = light.bounds();
        if !visible.intersects(&bounds) {
            log::info!("Light {} culled: outside the visible bounds", index);
            continue;
        }

        let technique = light.apply_effect_params(&mut binding);
        let scissor = camera.scissor_rectangle(light.as_ref())?;
        log::info!(
            "Light {} ({:?}): scissor ({:.0}, {:.0})..({:.0}, {:.0})",
            index,
            technique,
            scissor.min.x,
            scissor.min.y,
            scissor.max.x,
            scissor.max.y
        );
    }

    Ok(())
}
