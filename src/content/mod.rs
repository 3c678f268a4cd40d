//! Narrative section content and its headless page layout.
//!
//! The default sections describe the six-chapter headphone showcase. A TOML
//! file can replace them; each `[[sections]]` entry becomes one chapter.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dom::{StaticDocument, StaticElement};
use crate::error::VitrineError;
use crate::host::Viewport;
use crate::options::MarkupOptions;

/// Visual treatment of a section card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Translucent card over the model.
    #[default]
    Glass,
    /// Opaque surface card.
    Surface,
}

/// Emphasis of a call-to-action link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Filled button.
    Primary,
    /// Outlined button.
    #[default]
    Default,
}

/// A link rendered in a section's action area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    /// Emphasis.
    #[serde(default, rename = "type")]
    pub kind: ActionKind,
    /// Link text.
    pub label: String,
    /// Target URL or in-page anchor.
    pub href: String,
    /// Whether the link opens outside the page.
    #[serde(default)]
    pub external: bool,
}

/// One narrative section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Anchor id and chapter id.
    pub id: String,
    /// Timeline label; the id when empty.
    #[serde(default)]
    pub label: String,
    /// Small heading above the title.
    #[serde(default)]
    pub eyebrow: String,
    /// Title.
    pub title: String,
    /// Supporting line under the title.
    #[serde(default)]
    pub subtitle: String,
    /// Card treatment.
    #[serde(default)]
    pub tone: Tone,
    /// Action links, possibly none.
    #[serde(default)]
    pub cta: Vec<CallToAction>,
}

impl Section {
    fn new(id: &str, eyebrow: &str, title: &str, subtitle: &str, tone: Tone) -> Self {
        Self {
            id: id.to_owned(),
            label: id.to_owned(),
            eyebrow: eyebrow.to_owned(),
            title: title.to_owned(),
            subtitle: subtitle.to_owned(),
            tone,
            cta: Vec::new(),
        }
    }

    fn with_action(mut self, kind: ActionKind, label: &str, href: &str, external: bool) -> Self {
        self.cta.push(CallToAction {
            kind,
            label: label.to_owned(),
            href: href.to_owned(),
            external,
        });
        self
    }

    /// Label the section registers on the timeline.
    #[must_use]
    pub fn timeline_label(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }
}

/// Ordered list of sections making up the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionsConfig {
    /// Sections in page order.
    pub sections: Vec<Section>,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        use Tone::{Glass, Surface};
        Self {
            sections: vec![
                Section::new(
                    "intro",
                    "Ocean Professional",
                    "AirPods Max",
                    "A premium, scroll-driven showcase with a high-fidelity 3D model pinned behind content.",
                    Glass,
                )
                .with_action(ActionKind::Primary, "Get Started", "#features", false),
                Section::new(
                    "design",
                    "Design",
                    "Minimal. Precise.",
                    "Clean typography and spacious layout.",
                    Surface,
                ),
                Section::new(
                    "performance",
                    "Performance",
                    "Smooth and responsive.",
                    "A capped device pixel ratio keeps rendering sharp and fast.",
                    Glass,
                ),
                Section::new(
                    "timing",
                    "Scroll Timing",
                    "Scrollytelling ready.",
                    "Every chapter is a label on one scroll-driven timeline.",
                    Surface,
                ),
                Section::new(
                    "features",
                    "Highlights",
                    "Built to extend.",
                    "Add chapters, bind animations, and refine the art direction.",
                    Glass,
                ),
                Section::new(
                    "cta",
                    "Next",
                    "Start exploring.",
                    "Scroll back up or jump into the code.",
                    Surface,
                ),
            ],
        }
    }
}

impl SectionsConfig {
    /// Parse sections from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::OptionsParse`] if the text is not valid
    /// sections TOML.
    pub fn from_toml(content: &str) -> Result<Self, VitrineError> {
        toml::from_str(content).map_err(|e| VitrineError::OptionsParse(e.to_string()))
    }

    /// Load sections from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Io`] if the file cannot be read, or
    /// [`VitrineError::OptionsParse`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, VitrineError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Lay the page out headlessly: the pinned layer and the container at
    /// the top, then one viewport-tall block per section carrying the
    /// chapter and label attributes.
    #[must_use]
    pub fn layout_document(&self, markup: &MarkupOptions, viewport: Viewport) -> StaticDocument {
        let height = viewport.height;
        let mut doc = StaticDocument::new();
        let _ = doc.push(StaticElement::new(0.0, height).with_selector(&markup.pin_target));
        let _ = doc.push(
            StaticElement::new(0.0, height * self.sections.len() as f32)
                .with_selector(&markup.container),
        );
        for (index, section) in self.sections.iter().enumerate() {
            let _ = doc.push(
                StaticElement::new(height * index as f32, height)
                    .with_attribute(&markup.chapter_attribute, &section.id)
                    .with_attribute(&markup.label_attribute, section.timeline_label()),
            );
        }
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{collect_chapters, Document};

    #[test]
    fn default_sections_are_the_six_chapters() {
        let config = SectionsConfig::default();
        let ids: Vec<&str> = config.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["intro", "design", "performance", "timing", "features", "cta"]);
        assert_eq!(config.sections[0].cta.len(), 1);
    }

    #[test]
    fn toml_sections_fill_optional_fields() {
        let config = SectionsConfig::from_toml(
            r##"
[[sections]]
id = "intro"
title = "Hello"

[[sections]]
id = "outro"
label = "cta"
title = "Bye"
tone = "surface"
cta = [{ type = "primary", label = "Go", href = "#intro" }]
"##,
        )
        .unwrap();
        assert_eq!(config.sections[0].timeline_label(), "intro");
        assert_eq!(config.sections[0].tone, Tone::Glass);
        assert_eq!(config.sections[1].timeline_label(), "cta");
        assert_eq!(config.sections[1].cta[0].kind, ActionKind::Primary);
        assert!(!config.sections[1].cta[0].external);
    }

    #[test]
    fn layout_exposes_markup_hooks_and_chapters() {
        let markup = MarkupOptions::default();
        let doc = SectionsConfig::default().layout_document(&markup, Viewport::new(1280.0, 800.0));
        assert!(doc.query_selector(".canvas-layer").is_some());
        let container = doc.query_selector(".sections").unwrap();
        assert_eq!(doc.layout(container).unwrap().height, 4800.0);

        let chapters = collect_chapters(&doc, &markup);
        assert_eq!(chapters.len(), 6);
        assert_eq!(doc.layout(chapters[2].element).unwrap().top, 1600.0);
        assert_eq!(chapters[5].label, "cta");
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        assert!(matches!(
            SectionsConfig::from_toml("sections = 3"),
            Err(VitrineError::OptionsParse(_))
        ));
    }
}
