//! Scroll trigger engine: pins, scrubbed progress, and enter/leave toggles
//! keyed to element positions in the document.
//!
//! The registry is shared by every owner of triggers on a page. Owners keep
//! the [`TriggerId`]s they create and kill exactly those.

mod registry;
mod scrub;
mod trigger;

pub use registry::ScrollRegistry;
pub use scrub::ScrubState;
pub use trigger::{
    EndAnchor, ScrollEvent, ScrollRange, TriggerId, TriggerKind, TriggerSpec,
    Zone,
};
