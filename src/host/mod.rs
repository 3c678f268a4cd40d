//! Read-only signals from the hosting environment.

/// Viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Viewport width.
    pub width: f32,
    /// Viewport height.
    pub height: f32,
    /// Physical pixels per CSS pixel.
    pub device_pixel_ratio: f32,
}

impl Viewport {
    /// Viewport with a device pixel ratio of 1.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio: 1.0,
        }
    }

    /// Width over height, guarded against a zero height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width.max(1.0) / self.height.max(1.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// Accessibility and size signals queried from the host.
pub trait Environment {
    /// Whether the user asked the platform for reduced motion.
    fn prefers_reduced_motion(&self) -> bool;
    /// Current viewport.
    fn viewport(&self) -> Viewport;
}

/// Fixed environment for headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticEnvironment {
    /// Reduced-motion preference.
    pub reduced_motion: bool,
    /// Viewport reported to callers.
    pub viewport: Viewport,
}

impl StaticEnvironment {
    /// Environment with the given viewport and no reduced-motion request.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            reduced_motion: false,
            viewport,
        }
    }

    /// Same environment with the reduced-motion preference set.
    #[must_use]
    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }
}

impl Environment for StaticEnvironment {
    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}
