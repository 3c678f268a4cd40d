use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scroll", inline)]
#[serde(default)]
/// Scroll coupling of the master timeline.
pub struct ScrollOptions {
    /// Seconds the scrubbed playhead takes to catch up with the scroll
    /// position. Zero couples them directly.
    #[schemars(title = "Scrub Lag", range(min = 0.0, max = 3.0))]
    pub scrub_lag: f32,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self { scrub_lag: 1.0 }
    }
}
