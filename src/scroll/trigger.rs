use crate::dom::{ElementBox, ElementRef};
use crate::host::Viewport;

/// Handle to a trigger registered in a [`ScrollRegistry`](super::ScrollRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(pub(crate) u64);

/// Where a trigger's scroll range ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EndAnchor {
    /// The trigger element's top reaches this fraction of the viewport
    /// height, measured from the viewport top.
    ElementTop {
        /// Fraction of the viewport height.
        viewport_fraction: f32,
    },
    /// A fixed distance after the start, in viewport heights.
    Span {
        /// Length in viewport heights.
        viewport_heights: f32,
    },
}

/// What a trigger does while its range is scrolled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerKind {
    /// Hold `target` fixed for the duration of the range.
    Pin {
        /// Layer to hold fixed.
        target: ElementRef,
    },
    /// Expose smoothed progress through the range.
    Scrub {
        /// Smoothing lag in seconds.
        lag: f32,
    },
    /// Emit enter/leave events when the range boundaries are crossed.
    Toggle,
}

/// Registration request for a trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerSpec {
    /// Element whose position anchors the range.
    pub element: ElementRef,
    /// The range starts when the element top reaches this fraction of the
    /// viewport height (0 = viewport top).
    pub start_fraction: f32,
    /// Where the range ends.
    pub end: EndAnchor,
    /// Behaviour inside the range.
    pub kind: TriggerKind,
}

impl TriggerSpec {
    /// Pin `target` while `element` scrolls `viewport_heights` from its top
    /// reaching the viewport top.
    #[must_use]
    pub fn pin(element: ElementRef, target: ElementRef, viewport_heights: f32) -> Self {
        Self {
            element,
            start_fraction: 0.0,
            end: EndAnchor::Span { viewport_heights },
            kind: TriggerKind::Pin { target },
        }
    }

    /// Scrubbed progress over the same span a [`pin`](Self::pin) covers.
    #[must_use]
    pub fn scrub(element: ElementRef, viewport_heights: f32, lag: f32) -> Self {
        Self {
            element,
            start_fraction: 0.0,
            end: EndAnchor::Span { viewport_heights },
            kind: TriggerKind::Scrub { lag },
        }
    }

    /// Toggle between the element top crossing `start_fraction` and
    /// `end_fraction` of the viewport.
    #[must_use]
    pub fn toggle(element: ElementRef, start_fraction: f32, end_fraction: f32) -> Self {
        Self {
            element,
            start_fraction,
            end: EndAnchor::ElementTop {
                viewport_fraction: end_fraction,
            },
            kind: TriggerKind::Toggle,
        }
    }

    /// Resolve the scroll offsets this spec covers for a given layout.
    #[must_use]
    pub fn resolve(&self, layout: ElementBox, viewport: Viewport) -> ScrollRange {
        let start = layout.top - viewport.height * self.start_fraction;
        let end = match self.end {
            EndAnchor::ElementTop { viewport_fraction } => {
                layout.top - viewport.height * viewport_fraction
            }
            EndAnchor::Span { viewport_heights } => {
                start + viewport.height * viewport_heights
            }
        };
        ScrollRange {
            start,
            end: end.max(start),
        }
    }
}

/// Scroll offsets, in CSS pixels, covered by a trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    /// Offset at which the range begins.
    pub start: f32,
    /// Offset at which the range ends; never before `start`.
    pub end: f32,
}

impl ScrollRange {
    /// Range length.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.end - self.start
    }

    /// Progress of `scroll` through the range, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self, scroll: f32) -> f32 {
        let length = self.length();
        if length <= 0.0 {
            return if scroll >= self.end { 1.0 } else { 0.0 };
        }
        ((scroll - self.start) / length).clamp(0.0, 1.0)
    }

    /// Which side of the range `scroll` lies on.
    #[must_use]
    pub fn zone(&self, scroll: f32) -> Zone {
        if scroll < self.start {
            Zone::Before
        } else if scroll > self.end {
            Zone::After
        } else {
            Zone::Active
        }
    }
}

/// Position of the scroll offset relative to a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Above the start.
    Before,
    /// Inside the range.
    Active,
    /// Past the end.
    After,
}

/// Boundary crossing reported by [`ScrollRegistry::scroll_to`](super::ScrollRegistry::scroll_to).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollEvent {
    /// Crossed the start moving forward.
    Enter(TriggerId),
    /// Crossed the end moving forward.
    Leave(TriggerId),
    /// Crossed the end moving backward.
    EnterBack(TriggerId),
    /// Crossed the start moving backward.
    LeaveBack(TriggerId),
}

impl ScrollEvent {
    /// Trigger the event belongs to.
    #[must_use]
    pub fn trigger(self) -> TriggerId {
        match self {
            Self::Enter(id) | Self::Leave(id) | Self::EnterBack(id) | Self::LeaveBack(id) => id,
        }
    }

    /// Events produced by moving from zone `from` to zone `to`.
    pub(crate) fn crossings(id: TriggerId, from: Zone, to: Zone) -> Vec<Self> {
        match (from, to) {
            (Zone::Before, Zone::Active) => vec![Self::Enter(id)],
            (Zone::Before, Zone::After) => vec![Self::Enter(id), Self::Leave(id)],
            (Zone::Active, Zone::After) => vec![Self::Leave(id)],
            (Zone::After, Zone::Active) => vec![Self::EnterBack(id)],
            (Zone::After, Zone::Before) => vec![Self::EnterBack(id), Self::LeaveBack(id)],
            (Zone::Active, Zone::Before) => vec![Self::LeaveBack(id)],
            _ => Vec::new(),
        }
    }
}
