//! Label-addressed keyframe timeline driven by scrub progress.
//!
//! Labels sit one unit apart in registration order. Tweens last one unit
//! and start at their label, so a timeline with `n` chapters spans `n`
//! units and each chapter owns an equal share of the scroll distance.

mod keyframes;
mod sequence;

pub use keyframes::{AxisTargets, AxisValue, Tween, TweenTarget};
pub use sequence::{Label, Timeline, KEYFRAME_DURATION};
