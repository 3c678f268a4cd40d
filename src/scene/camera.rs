use glam::{Mat4, Vec3};

use crate::host::Viewport;
use crate::options::CameraOptions;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera at the configured starting framing, looking at the configured
    /// point.
    #[must_use]
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            eye: Vec3::from(options.position),
            target: Vec3::from(options.look_at),
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Re-orient towards `point`. Position tweens move the eye only, so the
    /// stage calls this after every seek.
    pub fn look_at(&mut self, point: Vec3) {
        self.target = point;
    }

    /// Unit vector from the eye towards the target; `-Z` when they coincide.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).try_normalize().unwrap_or(Vec3::NEG_Z)
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// Match the aspect ratio of a resized viewport.
    pub fn resize(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
    }
}

/// Drawing-buffer size for `viewport`, with the pixel ratio capped at
/// `max_pixel_ratio`.
#[must_use]
pub fn render_size(viewport: Viewport, max_pixel_ratio: f32) -> (u32, u32) {
    let ratio = viewport.device_pixel_ratio.clamp(1.0, max_pixel_ratio.max(1.0));
    (
        (viewport.width * ratio).round().max(1.0) as u32,
        (viewport.height * ratio).round().max(1.0) as u32,
    )
}
