//! Host document seam: element lookup, layout, and the two style writes
//! the stage performs (reveal fades and pinning).

pub mod chapters;
mod static_doc;

pub use chapters::{collect_chapters, Chapter};
pub use static_doc::{StaticDocument, StaticElement};

/// Opaque handle to an element of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementRef(usize);

impl ElementRef {
    /// Wrap a document-specific element index.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Document-specific element index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Document-relative vertical extent of an element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementBox {
    /// Distance from the document top to the element top.
    pub top: f32,
    /// Element height.
    pub height: f32,
}

/// Opacity and vertical offset written by reveal fades.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Downward translation in CSS pixels.
    pub translate_y: f32,
}

impl RevealStyle {
    /// Fully shown, untranslated.
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        translate_y: 0.0,
    };

    /// Interpolate towards `to` by `t`.
    #[must_use]
    pub fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            translate_y: self.translate_y + (to.translate_y - self.translate_y) * t,
        }
    }
}

/// Placement of a pinned layer relative to its scroll region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PinStyle {
    /// Normal document flow: before the region, or no pin at all.
    #[default]
    Flow,
    /// Held fixed at the viewport top while the region scrolls.
    Fixed,
    /// Past the region: left in flow, shifted down by the region length.
    Parked {
        /// Shift in CSS pixels.
        offset: f32,
    },
}

/// The host document as seen by the timeline stage.
pub trait Document {
    /// First element matching `selector`.
    fn query_selector(&self, selector: &str) -> Option<ElementRef>;
    /// Every element carrying `attribute`, in document order.
    fn elements_with_attribute(&self, attribute: &str) -> Vec<ElementRef>;
    /// Value of `name` on `element`.
    fn attribute(&self, element: ElementRef, name: &str) -> Option<String>;
    /// Current layout box, or `None` if the element is gone.
    fn layout(&self, element: ElementRef) -> Option<ElementBox>;
    /// Write a reveal style onto `element`.
    fn apply_reveal(&mut self, element: ElementRef, style: RevealStyle);
    /// Write a pin placement onto `element`.
    fn apply_pin(&mut self, element: ElementRef, style: PinStyle);
}
