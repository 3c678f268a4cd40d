//! Shared utilities: easing curves and the frame clock.

pub mod easing;
/// Frame clock feeding per-frame deltas to the stage.
pub mod frame_timing;
