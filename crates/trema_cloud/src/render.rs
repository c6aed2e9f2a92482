//! Per-frame uniform math for the point-cloud renderer.
//!
//! The renderer itself lives outside this crate; what it needs every frame
//! is pure CPU math over the elapsed clock, so it is computed here where it
//! can be tested.
use glam::{Mat3, Vec2};

/// Rotation rate in radians per second at `speed = 1`.
const ROTATION_RATE: f32 = 0.25;
/// Zoom oscillation rate at `speed = 1`.
const ZOOM_RATE: f32 = 0.4;
/// Zoom oscillation amplitude around 1.
const ZOOM_AMPLITUDE: f32 = 0.05;

/// Renderer-only parameters; changing these never triggers regeneration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameParams {
    /// Animation speed multiplier.
    pub speed: f32,
    /// Rendered point size in pixels.
    pub point_size: f32,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            speed: 1.0,
            point_size: 2.0,
        }
    }
}

/// Uniforms handed to the renderer for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    /// Elapsed animation clock in seconds.
    pub elapsed: f32,
    /// View transform: zoom, rotation and aspect correction composed.
    pub transform: Mat3,
    /// Rendered point size in pixels.
    pub point_size: f32,
    /// Animation speed multiplier, forwarded as-is.
    pub speed: f32,
}

/// Compose the animated view transform for one frame.
///
/// Rotation advances at `0.25 * speed` radians per second while an isotropic
/// zoom oscillates by ±5% at `0.4 * speed`; the x axis is divided by the
/// viewport aspect ratio so the unit square stays square on screen. A
/// non-finite or non-positive aspect falls back to 1.
pub fn frame_uniforms(elapsed: f32, aspect: f32, params: &FrameParams) -> FrameUniforms {
    let aspect = if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    };
    let angle = elapsed * ROTATION_RATE * params.speed;
    let zoom = 1.0 + ZOOM_AMPLITUDE * (elapsed * ZOOM_RATE * params.speed).sin();

    let transform = Mat3::from_scale(Vec2::new(1.0 / aspect, 1.0))
        * Mat3::from_angle(angle)
        * Mat3::from_scale(Vec2::splat(zoom));

    FrameUniforms {
        elapsed,
        transform,
        point_size: params.point_size,
        speed: params.speed,
    }
}
