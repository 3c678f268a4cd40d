//! Responsive variants: viewport size classes and their derived parameters.
//!
//! Classification and the parameter table live on
//! [`ResponsiveOptions`](crate::options::ResponsiveOptions); this module owns
//! the variant tag and the edge-triggered [`VariantWatcher`].

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::options::ResponsiveOptions;

/// Mutually exclusive viewport size class.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Widest class.
    Desktop,
    /// Middle class.
    Tablet,
    /// Narrowest class.
    Phone,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Desktop => "desktop",
            Self::Tablet => "tablet",
            Self::Phone => "phone",
        })
    }
}

/// Animation parameters derived from a variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VariantParams {
    /// Scroll distance per chapter, in percent of the viewport height.
    pub section_height_factor: f32,
    /// Distance parts travel outward in the exploded view.
    pub explode_offset: f32,
    /// Root rotation applied at the `performance` label, in radians.
    pub rotation_amount: f32,
}

impl VariantParams {
    /// Length of the pinned scroll region in viewport heights.
    #[must_use]
    pub fn scroll_span(&self, chapter_count: usize) -> f32 {
        chapter_count as f32 * self.section_height_factor / 100.0
    }
}

/// A change of the active variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantChange {
    /// Variant active before the change, if any.
    pub previous: Option<Variant>,
    /// Newly active variant.
    pub next: Variant,
}

/// Tracks the active variant and reports only transitions.
#[derive(Debug, Default)]
pub struct VariantWatcher {
    active: Option<Variant>,
}

impl VariantWatcher {
    /// Watcher with no variant matched yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently matched variant.
    #[must_use]
    pub fn active(&self) -> Option<Variant> {
        self.active
    }

    /// Re-evaluate the breakpoints for `width`. Returns a change only when
    /// the matched variant differs from the previous evaluation.
    pub fn observe(
        &mut self,
        options: &ResponsiveOptions,
        width: f32,
    ) -> Option<VariantChange> {
        let next = options.classify(width);
        if self.active == Some(next) {
            return None;
        }
        let previous = self.active.replace(next);
        Some(VariantChange { previous, next })
    }

    /// Forget the matched variant so no further changes are reported
    /// against it.
    pub fn reset(&mut self) {
        self.active = None;
    }
}
