use glam::Vec3;

use crate::scene::{Channel, Part};
use crate::util::easing::EasingFunction;

/// Object a tween writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TweenTarget {
    /// The scene camera (position channel only).
    Camera,
    /// A model part, real or placeholder.
    Part(Part),
}

/// Destination of one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisValue {
    /// Absolute value.
    To(f32),
    /// Offset from the value the axis holds when the tween starts.
    By(f32),
}

impl AxisValue {
    fn apply(self, from: f32) -> f32 {
        match self {
            Self::To(value) => value,
            Self::By(delta) => from + delta,
        }
    }
}

/// Per-axis destinations; untouched axes keep their value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisTargets {
    /// X destination.
    pub x: Option<AxisValue>,
    /// Y destination.
    pub y: Option<AxisValue>,
    /// Z destination.
    pub z: Option<AxisValue>,
}

impl AxisTargets {
    /// All three axes to absolute values.
    #[must_use]
    pub fn to(value: Vec3) -> Self {
        Self {
            x: Some(AxisValue::To(value.x)),
            y: Some(AxisValue::To(value.y)),
            z: Some(AxisValue::To(value.z)),
        }
    }

    /// Set the X destination.
    #[must_use]
    pub fn x(mut self, value: AxisValue) -> Self {
        self.x = Some(value);
        self
    }

    /// Set the Y destination.
    #[must_use]
    pub fn y(mut self, value: AxisValue) -> Self {
        self.y = Some(value);
        self
    }

    /// Set the Z destination.
    #[must_use]
    pub fn z(mut self, value: AxisValue) -> Self {
        self.z = Some(value);
        self
    }

    /// Destination reached from `from`.
    #[must_use]
    pub fn resolve(&self, from: Vec3) -> Vec3 {
        Vec3::new(
            self.x.map_or(from.x, |v| v.apply(from.x)),
            self.y.map_or(from.y, |v| v.apply(from.y)),
            self.z.map_or(from.z, |v| v.apply(from.z)),
        )
    }
}

/// One keyframed change of a transform channel, scheduled at a label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    /// Object written to.
    pub target: TweenTarget,
    /// Channel written to.
    pub channel: Channel,
    /// Label the tween is scheduled at.
    pub label: String,
    /// Start time in timeline units.
    pub start: f32,
    /// Length in timeline units.
    pub duration: f32,
    /// Progress easing.
    pub ease: EasingFunction,
    pub(crate) from: Option<Vec3>,
    pub(crate) axes: AxisTargets,
    pub(crate) endpoints: Option<(Vec3, Vec3)>,
}

impl Tween {
    /// Time at which the tween completes.
    #[must_use]
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }

    /// Resolved start and end values, once the timeline is resolved.
    #[must_use]
    pub fn endpoints(&self) -> Option<(Vec3, Vec3)> {
        self.endpoints
    }

    /// Value at timeline time `time`, clamped to the tween's span.
    #[must_use]
    pub fn value_at(&self, time: f32) -> Option<Vec3> {
        let (from, to) = self.endpoints?;
        let local = if self.duration > 0.0 {
            (time - self.start) / self.duration
        } else if time >= self.start {
            1.0
        } else {
            0.0
        };
        Some(from.lerp(to, self.ease.evaluate(local)))
    }
}
