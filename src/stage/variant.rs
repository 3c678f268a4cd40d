//! Everything one responsive variant owns: its pin, its scrub, and the
//! timeline they drive.

use glam::Vec3;
use log::{debug, warn};

use super::choreography::choreograph;
use crate::dom::{Chapter, Document, ElementRef, PinStyle};
use crate::error::VitrineError;
use crate::options::Options;
use crate::responsive::{Variant, VariantParams};
use crate::scene::{Channel, PartSlot, PartTable, SceneProvider, Transform};
use crate::scroll::{ScrollRegistry, TriggerId, TriggerSpec};
use crate::timeline::{Timeline, TweenTarget};

/// Elements the stage anchors a variant to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Anchors {
    /// Scrolling content container.
    pub container: ElementRef,
    /// Layer pinned while the container scrolls.
    pub pin_target: ElementRef,
}

/// Resources of the active variant, released together by
/// [`dispose`](Self::dispose).
#[derive(Debug)]
pub struct VariantBundle {
    variant: Variant,
    params: VariantParams,
    pin_target: ElementRef,
    pin: Option<TriggerId>,
    scrub: Option<TriggerId>,
    timeline: Timeline,
    parts: PartTable,
    rest: Vec<(TweenTarget, Channel, Vec3)>,
    look_at: Vec3,
    applied_progress: Option<f32>,
    applied_pin: Option<PinStyle>,
}

impl VariantBundle {
    /// Register the pin, then the scrub, then build the timeline. If a
    /// trigger cannot be created, triggers already created by this call are
    /// removed before the error is returned.
    pub(crate) fn build<D, S>(
        document: &D,
        scene: &S,
        registry: &mut ScrollRegistry,
        chapters: &[Chapter],
        anchors: Anchors,
        variant: Variant,
        options: &Options,
    ) -> Result<Self, VitrineError>
    where
        D: Document + ?Sized,
        S: SceneProvider + ?Sized,
    {
        let params = options.responsive.params(variant);
        let span = params.scroll_span(chapters.len());

        let pin = registry.create(
            document,
            TriggerSpec::pin(anchors.container, anchors.pin_target, span),
        )?;
        let scrub = match registry.create(
            document,
            TriggerSpec::scrub(anchors.container, span, options.scroll.scrub_lag),
        ) {
            Ok(id) => id,
            Err(e) => {
                let _ = registry.kill(pin);
                return Err(e);
            }
        };

        let parts = PartTable::new(&scene.model_parts());
        let camera_home = scene.camera().map(|c| c.eye);
        let mut timeline =
            choreograph(chapters, params, &options.camera, camera_home);

        let mut rest = Vec::new();
        timeline.resolve(|target, channel| {
            let value = read(scene, &parts, target, channel);
            rest.push((target, channel, value));
            value
        });

        debug!(
            "{variant} bundle: {} labels, {} tweens, span {span:.2} viewport heights, {} placeholder(s)",
            timeline.labels().len(),
            timeline.tweens().len(),
            parts.placeholder_count()
        );

        Ok(Self {
            variant,
            params,
            pin_target: anchors.pin_target,
            pin: Some(pin),
            scrub: Some(scrub),
            timeline,
            parts,
            rest,
            look_at: Vec3::from(options.camera.look_at),
            applied_progress: None,
            applied_pin: None,
        })
    }

    /// Variant this bundle was built for.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Parameters derived from the variant.
    #[must_use]
    pub fn params(&self) -> VariantParams {
        self.params
    }

    /// Pin trigger, until disposed.
    #[must_use]
    pub fn pin(&self) -> Option<TriggerId> {
        self.pin
    }

    /// Scrub trigger, until disposed.
    #[must_use]
    pub fn scrub(&self) -> Option<TriggerId> {
        self.scrub
    }

    /// The variant's timeline.
    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Part slots, including placeholders standing in for missing parts.
    #[must_use]
    pub fn parts(&self) -> &PartTable {
        &self.parts
    }

    /// Whether any trigger is still registered.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.pin.is_some() || self.scrub.is_some()
    }

    /// Mirror the pin trigger's placement onto the pinned layer.
    pub(crate) fn sync_pin<D: Document + ?Sized>(
        &mut self,
        document: &mut D,
        registry: &ScrollRegistry,
    ) {
        let Some(style) = self.pin.and_then(|id| registry.pin_style(id)) else {
            return;
        };
        if self.applied_pin != Some(style) {
            document.apply_pin(self.pin_target, style);
            self.applied_pin = Some(style);
        }
    }

    /// Seek to the scrub trigger's progress. When it moved, write the
    /// sampled values, re-point the camera, and request one render.
    /// Returns whether a render was requested.
    pub(crate) fn play<S: SceneProvider + ?Sized>(
        &mut self,
        scene: &mut S,
        registry: &ScrollRegistry,
    ) -> bool {
        let Some(progress) = self.scrub.and_then(|id| registry.progress(id)) else {
            return false;
        };
        if self.applied_progress == Some(progress) {
            return false;
        }
        self.applied_progress = Some(progress);

        let parts = &mut self.parts;
        self.timeline.seek(progress, |target, channel, value| {
            write(scene, parts, target, channel, value);
        });
        if let Some(camera) = scene.camera_mut() {
            camera.look_at(self.look_at);
        }
        scene.request_render();
        true
    }

    /// Kill the scrub, then the pin, unpin the layer, and put every animated
    /// channel back to its value before the bundle was built. Each step runs
    /// at most once, so a repeated call is a no-op.
    pub(crate) fn dispose<D, S>(
        &mut self,
        document: &mut D,
        scene: &mut S,
        registry: &mut ScrollRegistry,
    ) where
        D: Document + ?Sized,
        S: SceneProvider + ?Sized,
    {
        if let Some(id) = self.scrub.take() {
            if !registry.kill(id) {
                warn!("{} scrub trigger was already gone", self.variant);
            }
        }
        if let Some(id) = self.pin.take() {
            if !registry.kill(id) {
                warn!("{} pin trigger was already gone", self.variant);
            }
            document.apply_pin(self.pin_target, PinStyle::Flow);
        }
        for (target, channel, value) in self.rest.drain(..) {
            write(scene, &mut self.parts, target, channel, value);
        }
        debug!("{} bundle disposed", self.variant);
    }
}

fn read<S: SceneProvider + ?Sized>(
    scene: &S,
    parts: &PartTable,
    target: TweenTarget,
    channel: Channel,
) -> Vec3 {
    match target {
        TweenTarget::Camera => scene.camera().map_or(Vec3::ZERO, |c| c.eye),
        TweenTarget::Part(part) => match parts.slot(part) {
            PartSlot::Real(node) => scene
                .transform(*node)
                .unwrap_or(Transform::IDENTITY)
                .channel(channel),
            PartSlot::Placeholder(transform) => transform.channel(channel),
        },
    }
}

fn write<S: SceneProvider + ?Sized>(
    scene: &mut S,
    parts: &mut PartTable,
    target: TweenTarget,
    channel: Channel,
    value: Vec3,
) {
    match target {
        TweenTarget::Camera => {
            if let Some(camera) = scene.camera_mut() {
                camera.eye = value;
            }
        }
        TweenTarget::Part(part) => match parts.slot_mut(part) {
            PartSlot::Real(node) => {
                if let Some(transform) = scene.transform_mut(*node) {
                    *transform.channel_mut(channel) = value;
                }
            }
            PartSlot::Placeholder(transform) => {
                *transform.channel_mut(channel) = value;
            }
        },
    }
}
