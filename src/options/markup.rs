use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Markup", inline)]
#[serde(default)]
/// Attribute names and selectors that locate chapters, the pinned layer,
/// and the scrolling container in the host document.
pub struct MarkupOptions {
    /// Attribute carrying a chapter's stable id.
    pub chapter_attribute: String,
    /// Optional attribute carrying a chapter's timeline label.
    pub label_attribute: String,
    /// Selector of the visual layer held fixed while chapters scroll.
    pub pin_target: String,
    /// Selector of the container whose scroll drives the timeline.
    pub container: String,
}

impl Default for MarkupOptions {
    fn default() -> Self {
        Self {
            chapter_attribute: "data-chapter".to_owned(),
            label_attribute: "data-section-label".to_owned(),
            pin_target: ".canvas-layer".to_owned(),
            container: ".sections".to_owned(),
        }
    }
}
