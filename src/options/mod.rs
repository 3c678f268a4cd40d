//! Centralized showcase options with TOML preset support.
//!
//! Everything a page author may tune (markup hooks, breakpoints and the
//! variant table, scrub lag, camera framings, the reduced-motion reveal,
//! model part names) lives here. Options serialize to/from TOML presets.

mod camera;
mod markup;
mod model;
mod responsive;
mod reveal;
mod scroll;

use std::path::Path;

pub use camera::CameraOptions;
pub use markup::MarkupOptions;
pub use model::ModelOptions;
pub use responsive::ResponsiveOptions;
pub use reveal::RevealOptions;
use schemars::JsonSchema;
pub use scroll::ScrollOptions;
use serde::{Deserialize, Serialize};

use crate::error::VitrineError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[responsive]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Document hooks for chapters, pin target, and container.
    pub markup: MarkupOptions,
    /// Breakpoints and per-variant parameters.
    pub responsive: ResponsiveOptions,
    /// Scroll coupling.
    pub scroll: ScrollOptions,
    /// Camera projection and framings.
    pub camera: CameraOptions,
    /// Reduced-motion reveal effect.
    pub reveal: RevealOptions,
    /// Model part names.
    #[schemars(skip)]
    pub model: ModelOptions,
}

impl Options {
    /// Generate JSON Schema describing the author-facing options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::OptionsParse`] on malformed TOML or
    /// inconsistent breakpoints.
    pub fn from_toml(content: &str) -> Result<Self, VitrineError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Io`] if the file cannot be read, otherwise
    /// as [`from_toml`](Self::from_toml).
    pub fn load(path: &Path) -> Result<Self, VitrineError> {
        let content = std::fs::read_to_string(path).map_err(VitrineError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Io`] if the file or its directory cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), VitrineError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VitrineError::Io)?;
        }
        std::fs::write(path, content).map_err(VitrineError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    fn validate(&self) -> Result<(), VitrineError> {
        let r = &self.responsive;
        if !(r.tablet_min_width > 0.0 && r.tablet_min_width < r.desktop_min_width) {
            return Err(VitrineError::OptionsParse(format!(
                "breakpoints must satisfy 0 < tablet_min_width ({}) < desktop_min_width ({})",
                r.tablet_min_width, r.desktop_min_width
            )));
        }
        if self.scroll.scrub_lag < 0.0 {
            return Err(VitrineError::OptionsParse(
                "scroll.scrub_lag must not be negative".to_owned(),
            ));
        }
        Ok(())
    }
}
