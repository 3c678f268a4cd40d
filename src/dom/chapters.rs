//! Chapter discovery from document markup.

use log::warn;

use super::{Document, ElementRef};
use crate::options::MarkupOptions;

/// One narrative block mapped to a point on the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// Stable id taken from the chapter attribute.
    pub id: String,
    /// Timeline label; the id when no label attribute is present.
    pub label: String,
    /// The chapter's element.
    pub element: ElementRef,
}

/// Collect chapters in document order.
///
/// Elements with an empty id are skipped and a repeated id keeps its first
/// occurrence, so ids are unique and non-empty. A label already claimed
/// by an earlier chapter falls back to the id. Re-running always reflects
/// the current markup.
pub fn collect_chapters<D: Document + ?Sized>(
    document: &D,
    markup: &MarkupOptions,
) -> Vec<Chapter> {
    let mut chapters: Vec<Chapter> = Vec::new();
    for element in document.elements_with_attribute(&markup.chapter_attribute) {
        let Some(id) = document
            .attribute(element, &markup.chapter_attribute)
            .map(|id| id.trim().to_owned())
            .filter(|id| !id.is_empty())
        else {
            continue;
        };
        if chapters.iter().any(|c| c.id == id) {
            warn!("duplicate chapter id '{id}' ignored");
            continue;
        }
        let mut label = document
            .attribute(element, &markup.label_attribute)
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| id.clone());
        if chapters.iter().any(|c| c.label == label) {
            warn!("label '{label}' already taken; chapter '{id}' uses its id");
            label = id.clone();
        }
        chapters.push(Chapter { id, label, element });
    }
    chapters
}
