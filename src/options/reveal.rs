use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Reduced Motion Reveal", inline)]
#[serde(default)]
/// Fade-in used for chapters when reduced motion is requested.
pub struct RevealOptions {
    /// Viewport fraction (from the top) the chapter top must cross to enter.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub start_fraction: f32,
    /// Viewport fraction (from the top) marking the end of the trigger.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub end_fraction: f32,
    /// Downward offset in CSS px a hidden chapter starts from.
    pub offset_y: f32,
    /// Fade duration in seconds.
    pub duration: f32,
    /// Fade easing.
    #[schemars(skip)]
    pub ease: EasingFunction,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            start_fraction: 0.8,
            end_fraction: 0.2,
            offset_y: 16.0,
            duration: 0.4,
            ease: EasingFunction::QuadraticOut,
        }
    }
}
