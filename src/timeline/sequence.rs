use glam::Vec3;
use log::debug;

use super::keyframes::{AxisTargets, Tween, TweenTarget};
use crate::scene::Channel;
use crate::util::easing::EasingFunction;

/// Length of every keyframe, in timeline units (one unit per chapter).
pub const KEYFRAME_DURATION: f32 = 1.0;

/// A named position on the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Label name.
    pub name: String,
    /// Position in timeline units.
    pub time: f32,
}

/// Tweens animating one channel of one target, in start order.
#[derive(Debug, Clone, PartialEq)]
struct Track {
    target: TweenTarget,
    channel: Channel,
    tweens: Vec<usize>,
}

/// Ordered keyframes addressed by label, sampled by normalized progress.
///
/// Start values are resolved once, front to back, after all tweens are
/// registered: each tween starts from where the previous tween on the same
/// channel ended, so relative destinations accumulate.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    labels: Vec<Label>,
    tweens: Vec<Tween>,
    tracks: Vec<Track>,
    ease: EasingFunction,
}

impl Timeline {
    /// Empty timeline with linear keyframes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a label one unit after the previous one.
    pub fn add_label(&mut self, name: &str) -> f32 {
        let time = self.labels.len() as f32;
        self.labels.push(Label {
            name: name.to_owned(),
            time,
        });
        time
    }

    /// Labels in registration order.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Position of the first label called `name`.
    #[must_use]
    pub fn label_time(&self, name: &str) -> Option<f32> {
        self.labels.iter().find(|l| l.name == name).map(|l| l.time)
    }

    /// Tweens in registration order.
    #[must_use]
    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    /// Schedule `target.channel` towards `axes` at `label`, starting from
    /// wherever the channel is at that point. Returns `false` and registers
    /// nothing if the label does not exist.
    pub fn to(
        &mut self,
        target: TweenTarget,
        channel: Channel,
        axes: AxisTargets,
        label: &str,
    ) -> bool {
        self.push(target, channel, None, axes, label)
    }

    /// Like [`to`](Self::to) with an explicit start value.
    pub fn from_to(
        &mut self,
        target: TweenTarget,
        channel: Channel,
        from: Vec3,
        axes: AxisTargets,
        label: &str,
    ) -> bool {
        self.push(target, channel, Some(from), axes, label)
    }

    fn push(
        &mut self,
        target: TweenTarget,
        channel: Channel,
        from: Option<Vec3>,
        axes: AxisTargets,
        label: &str,
    ) -> bool {
        let Some(start) = self.label_time(label) else {
            debug!("no label '{label}'; {target:?} {channel:?} tween skipped");
            return false;
        };
        self.tweens.push(Tween {
            target,
            channel,
            label: label.to_owned(),
            start,
            duration: KEYFRAME_DURATION,
            ease: self.ease,
            from,
            axes,
            endpoints: None,
        });
        true
    }

    /// Targets and channels scheduled at `label`, in registration order.
    #[must_use]
    pub fn targets_at(&self, label: &str) -> Vec<(TweenTarget, Channel)> {
        self.tweens
            .iter()
            .filter(|t| t.label == label)
            .map(|t| (t.target, t.channel))
            .collect()
    }

    /// Total length: the later of the last label's slot and the last
    /// tween's end.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.tweens
            .iter()
            .map(Tween::end)
            .fold(self.labels.len() as f32, f32::max)
    }

    /// Resolve start and end values. `initial` supplies the value each
    /// channel holds before the timeline touches it.
    pub fn resolve<F>(&mut self, mut initial: F)
    where
        F: FnMut(TweenTarget, Channel) -> Vec3,
    {
        self.tracks.clear();
        for (index, tween) in self.tweens.iter().enumerate() {
            match self
                .tracks
                .iter_mut()
                .find(|t| t.target == tween.target && t.channel == tween.channel)
            {
                Some(track) => track.tweens.push(index),
                None => self.tracks.push(Track {
                    target: tween.target,
                    channel: tween.channel,
                    tweens: vec![index],
                }),
            }
        }

        for track in &mut self.tracks {
            let tweens = &mut self.tweens;
            track
                .tweens
                .sort_by(|a, b| tweens[*a].start.total_cmp(&tweens[*b].start));
            let mut value = initial(track.target, track.channel);
            for &index in &track.tweens {
                let tween = &mut tweens[index];
                let from = tween.from.unwrap_or(value);
                let to = tween.axes.resolve(from);
                tween.endpoints = Some((from, to));
                value = to;
            }
        }
    }

    /// Write the value of every animated channel at `time`. Channels whose
    /// first tween has not started yet receive that tween's start value.
    pub fn sample<F>(&self, time: f32, mut apply: F)
    where
        F: FnMut(TweenTarget, Channel, Vec3),
    {
        for track in &self.tracks {
            let mut value = None;
            for &index in &track.tweens {
                let tween = &self.tweens[index];
                if time < tween.start {
                    if value.is_none() {
                        value = tween.endpoints.map(|(from, _)| from);
                    }
                    break;
                }
                value = tween.value_at(time).or(value);
            }
            if let Some(value) = value {
                apply(track.target, track.channel, value);
            }
        }
    }

    /// [`sample`](Self::sample) at a normalized progress in `[0, 1]`.
    pub fn seek<F>(&self, progress: f32, apply: F)
    where
        F: FnMut(TweenTarget, Channel, Vec3),
    {
        self.sample(progress.clamp(0.0, 1.0) * self.duration(), apply);
    }
}
