use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::responsive::{Variant, VariantParams};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Responsive", inline)]
#[serde(default)]
/// Breakpoints and the per-variant parameter table.
pub struct ResponsiveOptions {
    /// Narrowest width (CSS px) classified as tablet; anything below is phone.
    pub tablet_min_width: f32,
    /// Narrowest width (CSS px) classified as desktop.
    pub desktop_min_width: f32,
    /// Parameters for widths at or above `desktop_min_width`.
    pub desktop: VariantParams,
    /// Parameters for widths between the two breakpoints.
    pub tablet: VariantParams,
    /// Parameters for widths below `tablet_min_width`.
    pub phone: VariantParams,
}

impl ResponsiveOptions {
    /// Classify a viewport width. The three ranges are disjoint and cover
    /// every width, fractional ones included.
    #[must_use]
    pub fn classify(&self, width: f32) -> Variant {
        if width >= self.desktop_min_width {
            Variant::Desktop
        } else if width >= self.tablet_min_width {
            Variant::Tablet
        } else {
            Variant::Phone
        }
    }

    /// Derived parameters for a variant.
    #[must_use]
    pub fn params(&self, variant: Variant) -> VariantParams {
        match variant {
            Variant::Desktop => self.desktop,
            Variant::Tablet => self.tablet,
            Variant::Phone => self.phone,
        }
    }
}

impl Default for ResponsiveOptions {
    fn default() -> Self {
        Self {
            tablet_min_width: 640.0,
            desktop_min_width: 1024.0,
            desktop: VariantParams {
                section_height_factor: 120.0,
                explode_offset: 0.6,
                rotation_amount: 0.6,
            },
            tablet: VariantParams {
                section_height_factor: 110.0,
                explode_offset: 0.5,
                rotation_amount: 0.5,
            },
            phone: VariantParams {
                section_height_factor: 100.0,
                explode_offset: 0.4,
                rotation_amount: 0.4,
            },
        }
    }
}
