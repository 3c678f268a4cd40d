use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, starting framing, and keyframe framings.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Starting eye position; the closing beat returns here.
    pub position: [f32; 3],
    /// Point the camera looks at while the timeline plays.
    pub look_at: [f32; 3],
    /// Closer, centred framing reached at the `intro` label.
    pub intro_framing: [f32; 3],
    /// Second, closer framing reached at the `timing` label.
    pub timing_framing: [f32; 3],
    /// Upper bound on the device pixel ratio used for render sizing.
    #[schemars(title = "Max Pixel Ratio", range(min = 1.0, max = 3.0))]
    pub max_pixel_ratio: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            position: [0.5, 0.35, 2.2],
            look_at: [0.0, 0.0, 0.0],
            intro_framing: [0.4, 0.3, 2.0],
            timing_framing: [0.2, 0.25, 1.6],
            max_pixel_ratio: 1.8,
        }
    }
}
