//! The scroll stage: decides between the rich timeline, the reduced-motion
//! reveals, or nothing, and owns whatever it created until cleanup.
//!
//! ```text
//! Uninitialized ──mount──▶ Inert            (missing container, pin target, or chapters)
//!               ├────────▶ ReducedMotion    (per-chapter reveals)
//!               └────────▶ Active(variant)  (pin + scrub + timeline)
//! any ──cleanup──▶ TornDown
//! ```
//!
//! Within `Active`, a breakpoint crossing disposes the current
//! [`VariantBundle`] before the next one is built, so two variants never
//! hold triggers at the same time.

mod choreography;
mod reveal;
mod variant;

use std::fmt;

pub use choreography::labels;
use log::{debug, info, warn};
pub use reveal::RevealSet;
pub use variant::VariantBundle;
use variant::Anchors;

use crate::dom::{collect_chapters, Chapter, Document};
use crate::host::{Environment, Viewport};
use crate::options::Options;
use crate::responsive::{Variant, VariantWatcher};
use crate::scene::SceneProvider;
use crate::scroll::{ScrollEvent, ScrollRegistry};
use crate::timeline::Timeline;

/// Lifecycle state of a [`Stage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagePhase {
    /// Not mounted yet.
    Uninitialized,
    /// Mounted without effects: a required element or every chapter was
    /// missing.
    Inert,
    /// Mounted with per-chapter reveals only.
    ReducedMotion,
    /// Mounted with the scroll-driven timeline for a variant.
    Active(Variant),
    /// Cleaned up; nothing is held.
    TornDown,
}

impl fmt::Display for StagePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => f.write_str("uninitialized"),
            Self::Inert => f.write_str("inert"),
            Self::ReducedMotion => f.write_str("reduced motion"),
            Self::Active(variant) => write!(f, "active ({variant})"),
            Self::TornDown => f.write_str("torn down"),
        }
    }
}

/// Master timeline state machine for one mount of the showcase.
#[derive(Debug)]
pub struct Stage {
    options: Options,
    phase: StagePhase,
    chapters: Vec<Chapter>,
    anchors: Option<Anchors>,
    watcher: VariantWatcher,
    bundle: Option<VariantBundle>,
    reveals: RevealSet,
}

impl Stage {
    /// Unmounted stage.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            phase: StagePhase::Uninitialized,
            chapters: Vec::new(),
            anchors: None,
            watcher: VariantWatcher::new(),
            bundle: None,
            reveals: RevealSet::default(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> StagePhase {
        self.phase
    }

    /// Options the stage was created with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Chapters found at mount.
    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Resources of the active variant, if one is built.
    #[must_use]
    pub fn bundle(&self) -> Option<&VariantBundle> {
        self.bundle.as_ref()
    }

    /// Timeline of the active variant.
    #[must_use]
    pub fn timeline(&self) -> Option<&Timeline> {
        self.bundle.as_ref().map(VariantBundle::timeline)
    }

    /// Reveal triggers of the reduced-motion path.
    #[must_use]
    pub fn reveals(&self) -> &RevealSet {
        &self.reveals
    }

    /// Read the document and the environment once and enter the matching
    /// phase. The variant follows the registry's viewport, the latest one
    /// seen. Mounting anything but an uninitialized stage does nothing.
    pub fn mount<D, E, S>(
        &mut self,
        document: &mut D,
        environment: &E,
        scene: &mut S,
        registry: &mut ScrollRegistry,
    ) -> StagePhase
    where
        D: Document + ?Sized,
        E: Environment + ?Sized,
        S: SceneProvider + ?Sized,
    {
        if self.phase != StagePhase::Uninitialized {
            warn!("mount ignored: stage is {}", self.phase);
            return self.phase;
        }

        let markup = &self.options.markup;
        let container = document.query_selector(&markup.container);
        let pin_target = document.query_selector(&markup.pin_target);
        let chapters = collect_chapters(&*document, markup);
        let (Some(container), Some(pin_target)) = (container, pin_target) else {
            info!(
                "stage inert: '{}' or '{}' not found",
                markup.container, markup.pin_target
            );
            self.phase = StagePhase::Inert;
            return self.phase;
        };
        if chapters.is_empty() {
            info!("stage inert: no chapters");
            self.phase = StagePhase::Inert;
            return self.phase;
        }

        if environment.prefers_reduced_motion() {
            match RevealSet::install(document, registry, &chapters, &self.options.reveal) {
                Ok(reveals) => {
                    self.reveals = reveals;
                    self.chapters = chapters;
                    self.phase = StagePhase::ReducedMotion;
                    info!("stage mounted with {} reveal(s)", self.reveals.len());
                    let events = registry.evaluate();
                    self.on_scroll_events(&events);
                }
                Err(e) => {
                    warn!("reveals not installed: {e}");
                    self.phase = StagePhase::Inert;
                }
            }
            return self.phase;
        }

        self.chapters = chapters;
        self.anchors = Some(Anchors {
            container,
            pin_target,
        });
        let width = registry.viewport().width;
        if let Some(change) = self.watcher.observe(&self.options.responsive, width) {
            self.activate(document, scene, registry, change.next);
        }
        self.phase
    }

    /// Follow a viewport change: recompute trigger ranges and, when a
    /// breakpoint was crossed, replace the variant bundle.
    pub fn on_viewport_change<D, S>(
        &mut self,
        document: &mut D,
        scene: &mut S,
        registry: &mut ScrollRegistry,
        viewport: Viewport,
    ) where
        D: Document + ?Sized,
        S: SceneProvider + ?Sized,
    {
        registry.refresh(&*document, viewport);
        if let StagePhase::Active(_) = self.phase {
            if let Some(change) = self.watcher.observe(&self.options.responsive, viewport.width) {
                info!(
                    "breakpoint crossed: {} -> {}",
                    change.previous.map_or_else(|| "none".to_owned(), |v| v.to_string()),
                    change.next
                );
                self.deactivate(document, scene, registry);
                self.activate(document, scene, registry, change.next);
            }
        }
        let events = registry.evaluate();
        self.on_scroll_events(&events);
    }

    /// React to boundary crossings reported by the registry.
    pub fn on_scroll_events(&mut self, events: &[ScrollEvent]) {
        if self.phase == StagePhase::ReducedMotion {
            self.reveals.handle(events);
        }
    }

    /// Per-frame work after the registry advanced its scrubs: run reveal
    /// fades, mirror the pin, and apply timeline progress to the scene.
    /// Returns whether a render was requested.
    pub fn update<D, S>(
        &mut self,
        document: &mut D,
        scene: &mut S,
        registry: &ScrollRegistry,
        dt: f32,
    ) -> bool
    where
        D: Document + ?Sized,
        S: SceneProvider + ?Sized,
    {
        match self.phase {
            StagePhase::ReducedMotion => {
                let _ = self.reveals.advance(document, dt);
                false
            }
            StagePhase::Active(_) => {
                let Some(bundle) = self.bundle.as_mut() else {
                    return false;
                };
                bundle.sync_pin(document, registry);
                bundle.play(scene, registry)
            }
            _ => false,
        }
    }

    /// Release everything the stage created. Safe to call in any phase and
    /// any number of times.
    pub fn cleanup<D, S>(&mut self, document: &mut D, scene: &mut S, registry: &mut ScrollRegistry)
    where
        D: Document + ?Sized,
        S: SceneProvider + ?Sized,
    {
        if self.phase == StagePhase::TornDown {
            return;
        }
        self.watcher.reset();
        self.deactivate(document, scene, registry);
        self.reveals.dispose(registry);
        self.anchors = None;
        info!("stage torn down from {}", self.phase);
        self.phase = StagePhase::TornDown;
    }

    fn activate<D, S>(
        &mut self,
        document: &mut D,
        scene: &mut S,
        registry: &mut ScrollRegistry,
        variant: Variant,
    ) where
        D: Document + ?Sized,
        S: SceneProvider + ?Sized,
    {
        self.phase = StagePhase::Active(variant);
        let Some(anchors) = self.anchors else {
            return;
        };
        match VariantBundle::build(
            &*document,
            &*scene,
            registry,
            &self.chapters,
            anchors,
            variant,
            &self.options,
        ) {
            Ok(mut bundle) => {
                info!("{variant} variant active");
                bundle.sync_pin(document, registry);
                let _ = bundle.play(scene, registry);
                self.bundle = Some(bundle);
            }
            Err(e) => warn!("{variant} variant not built: {e}"),
        }
    }

    fn deactivate<D, S>(&mut self, document: &mut D, scene: &mut S, registry: &mut ScrollRegistry)
    where
        D: Document + ?Sized,
        S: SceneProvider + ?Sized,
    {
        if let Some(mut bundle) = self.bundle.take() {
            bundle.dispose(document, scene, registry);
            debug!("{} variant released", bundle.variant());
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::dom::{PinStyle, RevealStyle, StaticDocument, StaticElement};
    use crate::host::StaticEnvironment;
    use crate::scene::{Channel, ModelManifest, Part, ShowcaseScene, Transform};
    use crate::scroll::TriggerKind;
    use crate::timeline::TweenTarget;

    const SIX: [&str; 6] = ["intro", "design", "performance", "timing", "features", "cta"];

    const HEADPHONES: &str = r#"{
        "name": "AirPodsMax",
        "children": [
            { "name": "Headband", "position": [0.0, 0.4, 0.0] },
            { "name": "Cup_L", "position": [-0.3, 0.0, 0.0] },
            { "name": "Cup_R", "position": [0.3, 0.0, 0.0] },
            { "name": "Frame" }
        ]
    }"#;

    struct Rig {
        doc: StaticDocument,
        env: StaticEnvironment,
        scene: ShowcaseScene,
        registry: ScrollRegistry,
        stage: Stage,
    }

    impl Rig {
        fn new(labels: &[&str], width: f32, options: Options) -> Self {
            let viewport = Viewport::new(width, 1000.0);
            let mut manifest = ModelManifest::from_json(HEADPHONES).unwrap();
            Self {
                doc: page(labels, viewport.height),
                env: StaticEnvironment::new(viewport),
                scene: ShowcaseScene::new(&mut manifest, viewport, &options),
                registry: ScrollRegistry::new(viewport),
                stage: Stage::new(options),
            }
        }

        fn mount(&mut self) -> StagePhase {
            self.stage
                .mount(&mut self.doc, &self.env, &mut self.scene, &mut self.registry)
        }

        fn resize(&mut self, width: f32) {
            let viewport = Viewport::new(width, 1000.0);
            self.stage
                .on_viewport_change(&mut self.doc, &mut self.scene, &mut self.registry, viewport);
        }

        fn scroll(&mut self, y: f32) -> bool {
            let events = self.registry.scroll_to(y);
            self.stage.on_scroll_events(&events);
            let _ = self.registry.tick(10.0);
            self.stage
                .update(&mut self.doc, &mut self.scene, &self.registry, 10.0)
        }

        fn cleanup(&mut self) {
            self.stage
                .cleanup(&mut self.doc, &mut self.scene, &mut self.registry);
        }

        fn part(&self, part: Part) -> Transform {
            let node = self.scene.model_parts().get(part).unwrap();
            self.scene.transform(node).unwrap()
        }

        fn pins(&self) -> usize {
            self.registry
                .ids()
                .into_iter()
                .filter(|id| matches!(self.registry.kind(*id), Some(TriggerKind::Pin { .. })))
                .count()
        }
    }

    fn page(labels: &[&str], height: f32) -> StaticDocument {
        let mut doc = StaticDocument::new();
        let _ = doc.push(StaticElement::new(0.0, height).with_selector(".canvas-layer"));
        let _ = doc.push(
            StaticElement::new(0.0, height * labels.len() as f32).with_selector(".sections"),
        );
        for (i, label) in labels.iter().enumerate() {
            let _ = doc.push(
                StaticElement::new(height * i as f32, height)
                    .with_attribute("data-chapter", label)
                    .with_attribute("data-section-label", label),
            );
        }
        doc
    }

    fn instant() -> Options {
        let mut options = Options::default();
        options.scroll.scrub_lag = 0.0;
        options
    }

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn six_chapter_desktop_showcase() {
        let mut rig = Rig::new(&SIX, 1280.0, Options::default());
        assert_eq!(rig.mount(), StagePhase::Active(Variant::Desktop));

        let bundle = rig.stage.bundle().unwrap();
        assert_eq!(rig.registry.len(), 2);
        assert_eq!(rig.pins(), 1);
        let pin = rig.registry.range(bundle.pin().unwrap()).unwrap();
        let scrub = rig.registry.range(bundle.scrub().unwrap()).unwrap();
        assert!((pin.length() - 7200.0).abs() < 1e-2);
        assert_eq!(pin, scrub);
        assert_eq!(
            rig.registry.kind(bundle.scrub().unwrap()),
            Some(TriggerKind::Scrub { lag: 1.0 })
        );

        let timeline = rig.stage.timeline().unwrap();
        let labels: Vec<&str> = timeline.labels().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(labels, SIX);

        let labels_for = |target: TweenTarget, channel: Channel| {
            timeline
                .tweens()
                .iter()
                .filter(|t| t.target == target && t.channel == channel)
                .map(|t| t.label.as_str())
                .collect::<Vec<_>>()
        };
        assert_eq!(
            labels_for(TweenTarget::Camera, Channel::Position),
            ["intro", "timing", "cta"]
        );
        for part in [Part::Headband, Part::LeftCup, Part::RightCup, Part::Frame] {
            assert_eq!(
                labels_for(TweenTarget::Part(part), Channel::Position),
                ["design", "cta"]
            );
        }
        assert_eq!(
            labels_for(TweenTarget::Part(Part::Root), Channel::Rotation),
            ["performance"]
        );
        for part in [Part::LeftCup, Part::RightCup] {
            assert_eq!(
                labels_for(TweenTarget::Part(part), Channel::Scale),
                ["features", "cta"]
            );
        }
    }

    #[test]
    fn one_label_per_chapter_in_document_order() {
        for labels in [&["solo"][..], &["b", "a", "c"][..], &SIX[..]] {
            let mut rig = Rig::new(labels, 1280.0, Options::default());
            let _ = rig.mount();
            let timeline = rig.stage.timeline().unwrap();
            let names: Vec<&str> = timeline.labels().iter().map(|l| l.name.as_str()).collect();
            assert_eq!(names, labels);
        }
    }

    #[test]
    fn reduced_motion_installs_one_reveal_per_chapter() {
        let mut rig = Rig::new(&SIX, 1280.0, Options::default());
        rig.env = rig.env.with_reduced_motion(true);
        assert_eq!(rig.mount(), StagePhase::ReducedMotion);

        assert_eq!(rig.registry.len(), 6);
        assert_eq!(rig.pins(), 0);
        assert!(rig
            .registry
            .ids()
            .into_iter()
            .all(|id| rig.registry.kind(id) == Some(TriggerKind::Toggle)));
        assert!(rig.stage.timeline().is_none());
        assert_eq!(rig.stage.reveals().len(), 6);

        let last = rig.stage.chapters()[5].element;
        assert_eq!(
            rig.doc.reveal_style(last),
            Some(RevealStyle {
                opacity: 0.0,
                translate_y: 16.0
            })
        );
        let before = rig.part(Part::Headband);
        assert!(!rig.scroll(4500.0));
        assert_eq!(rig.doc.reveal_style(last), Some(RevealStyle::SHOWN));
        assert_eq!(rig.part(Part::Headband), before);
        assert_eq!(rig.scene.renders(), 0);
    }

    #[test]
    fn reduced_motion_cleanup_kills_only_its_reveals() {
        let mut rig = Rig::new(&SIX, 1280.0, Options::default());
        rig.env = rig.env.with_reduced_motion(true);
        let _ = rig.mount();
        let first = rig.stage.chapters()[0].element;
        let foreign = rig
            .registry
            .create(&rig.doc, crate::scroll::TriggerSpec::toggle(first, 0.5, 0.1))
            .unwrap();

        rig.cleanup();
        assert_eq!(rig.registry.ids(), [foreign]);
        assert!(rig.stage.reveals().is_empty());
    }

    #[test]
    fn missing_markup_leaves_the_page_untouched() {
        let viewport = Viewport::new(1280.0, 1000.0);
        let mut no_container = Rig::new(&SIX, 1280.0, Options::default());
        no_container.doc = StaticDocument::new();
        let _ = no_container
            .doc
            .push(StaticElement::new(0.0, 1000.0).with_selector(".canvas-layer"));
        let chapter = no_container
            .doc
            .push(StaticElement::new(0.0, 1000.0).with_attribute("data-chapter", "intro"));

        let mut no_chapters = Rig::new(&[], 1280.0, Options::default());
        assert!(no_chapters.doc.len() == 2);

        for rig in [&mut no_container, &mut no_chapters] {
            assert_eq!(rig.mount(), StagePhase::Inert);
            assert!(rig.registry.is_empty());
            rig.cleanup();
            rig.cleanup();
            assert!(rig.registry.is_empty());
            assert_eq!(rig.scene.renders(), 0);
            rig.stage
                .on_viewport_change(&mut rig.doc, &mut rig.scene, &mut rig.registry, viewport);
            assert!(rig.registry.is_empty());
        }
        assert_eq!(no_container.doc.reveal_style(chapter), None);
    }

    #[test]
    fn cleanup_twice_matches_cleanup_once() {
        let mut rig = Rig::new(&SIX, 1280.0, instant());
        let _ = rig.mount();
        let _ = rig.scroll(3000.0);
        let pin_target = rig.doc.query_selector(".canvas-layer").unwrap();
        assert_eq!(rig.doc.pin_style(pin_target), PinStyle::Fixed);

        rig.cleanup();
        let after_once = (rig.registry.len(), rig.part(Part::Headband), rig.stage.phase());
        rig.cleanup();
        let after_twice = (rig.registry.len(), rig.part(Part::Headband), rig.stage.phase());

        assert_eq!(after_once, after_twice);
        assert_eq!(after_once.0, 0);
        assert_eq!(after_once.2, StagePhase::TornDown);
        assert_eq!(rig.doc.pin_style(pin_target), PinStyle::Flow);
        assert_eq!(rig.mount(), StagePhase::TornDown);
    }

    #[test]
    fn crossing_a_breakpoint_replaces_the_variant() {
        let mut rig = Rig::new(&SIX, 1280.0, Options::default());
        let _ = rig.mount();
        let desktop_pin = rig.stage.bundle().unwrap().pin().unwrap();

        rig.resize(1100.0);
        assert_eq!(rig.stage.bundle().unwrap().pin(), Some(desktop_pin));

        rig.resize(800.0);
        assert_eq!(rig.stage.phase(), StagePhase::Active(Variant::Tablet));
        assert!(!rig.registry.contains(desktop_pin));
        assert_eq!(rig.registry.len(), 2);
        assert_eq!(rig.pins(), 1);
        let bundle = rig.stage.bundle().unwrap();
        let span = rig.registry.range(bundle.pin().unwrap()).unwrap().length();
        assert!((span - 6600.0).abs() < 1e-2);
        assert_eq!(bundle.params().explode_offset, 0.5);

        rig.resize(320.0);
        assert_eq!(rig.stage.phase(), StagePhase::Active(Variant::Phone));
        assert_eq!(rig.pins(), 1);
    }

    #[test]
    fn scroll_progress_poses_the_model() {
        let mut rig = Rig::new(&SIX, 1280.0, instant());
        let _ = rig.mount();

        // End of the design keyframe: exploded, not yet rotated.
        assert!(rig.scroll(2400.0));
        assert!(close(rig.part(Part::Headband).position, Vec3::new(0.0, 1.0, 0.0)));
        assert!(close(rig.part(Part::LeftCup).position, Vec3::new(-0.9, 0.0, 0.6)));
        assert!(close(rig.part(Part::RightCup).position, Vec3::new(0.9, 0.0, 0.6)));
        assert!(close(rig.part(Part::Frame).position, Vec3::new(0.0, -0.3, 0.0)));
        assert!(close(rig.part(Part::Root).rotation, Vec3::ZERO));

        // End of the timeline: back at rest, rotation kept.
        assert!(rig.scroll(7200.0));
        for part in [Part::Headband, Part::LeftCup, Part::RightCup, Part::Frame] {
            assert!(close(rig.part(part).position, Vec3::ZERO), "{part:?}");
        }
        assert!(close(rig.part(Part::LeftCup).scale, Vec3::ONE));
        assert!(close(rig.part(Part::Root).rotation, Vec3::new(0.15, 0.6, 0.0)));
        let camera = rig.scene.camera().unwrap();
        assert!(close(camera.eye, Vec3::new(0.5, 0.35, 2.2)));
        assert_eq!(camera.target, Vec3::ZERO);

        let renders = rig.scene.renders();
        assert!(!rig.scroll(7200.0));
        assert_eq!(rig.scene.renders(), renders);
    }

    #[test]
    fn camera_framings_follow_their_labels() {
        let mut rig = Rig::new(&SIX, 1280.0, instant());
        let _ = rig.mount();
        let _ = rig.scroll(1200.0);
        assert!(close(rig.scene.camera().unwrap().eye, Vec3::new(0.4, 0.3, 2.0)));
        let _ = rig.scroll(4800.0);
        assert!(close(rig.scene.camera().unwrap().eye, Vec3::new(0.2, 0.25, 1.6)));
        let _ = rig.scroll(6000.0);
        assert!(close(rig.part(Part::LeftCup).scale, Vec3::splat(1.15)));
        assert!(close(rig.part(Part::RightCup).scale, Vec3::splat(0.95)));
    }

    #[test]
    fn cleanup_returns_the_scene_to_rest() {
        let mut rig = Rig::new(&SIX, 1280.0, instant());
        let _ = rig.mount();
        let _ = rig.scroll(3600.0);
        assert!(!close(rig.part(Part::Headband).position, Vec3::new(0.0, 0.4, 0.0)));

        rig.cleanup();
        assert!(close(rig.part(Part::Headband).position, Vec3::new(0.0, 0.4, 0.0)));
        assert!(close(rig.part(Part::Root).rotation, Vec3::ZERO));
        assert!(close(rig.scene.camera().unwrap().eye, Vec3::new(0.5, 0.35, 2.2)));
    }

    #[test]
    fn missing_parts_are_animated_as_placeholders() {
        let options = instant();
        let viewport = Viewport::new(1280.0, 1000.0);
        let mut rig = Rig::new(&SIX, 1280.0, options.clone());
        let mut bare = ModelManifest::from_json(r#"{ "name": "Model" }"#).unwrap();
        rig.scene = ShowcaseScene::new(&mut bare, viewport, &options);

        let _ = rig.mount();
        let bundle = rig.stage.bundle().unwrap();
        assert_eq!(bundle.parts().placeholder_count(), 4);
        assert_eq!(rig.stage.timeline().unwrap().targets_at("design").len(), 4);

        assert!(rig.scroll(3600.0));
        assert!(close(rig.part(Part::Root).rotation, Vec3::new(0.15, 0.6, 0.0)));
    }

    #[test]
    fn without_a_camera_only_camera_keyframes_are_skipped() {
        let options = instant();
        let viewport = Viewport::new(1280.0, 1000.0);
        let mut rig = Rig::new(&SIX, 1280.0, options.clone());
        let mut manifest = ModelManifest::from_json(HEADPHONES).unwrap();
        rig.scene = ShowcaseScene::new(&mut manifest, viewport, &options).without_camera();

        let _ = rig.mount();
        let timeline = rig.stage.timeline().unwrap();
        assert!(timeline.tweens().iter().all(|t| t.target != TweenTarget::Camera));
        assert_eq!(timeline.targets_at("design").len(), 4);
        assert!(rig.scroll(2400.0));
        assert!(close(rig.part(Part::Headband).position, Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn failed_registration_leaves_no_triggers() {
        let rig = Rig::new(&SIX, 1280.0, Options::default());
        let chapters = collect_chapters(&rig.doc, &rig.stage.options().markup);
        assert_eq!(chapters.len(), 6);
        let mut registry = ScrollRegistry::new(Viewport::new(1280.0, 1000.0));
        let container = rig.doc.query_selector(".sections").unwrap();
        let result = VariantBundle::build(
            &rig.doc,
            &rig.scene,
            &mut registry,
            &chapters,
            Anchors {
                container,
                pin_target: crate::dom::ElementRef::new(404),
            },
            Variant::Desktop,
            &Options::default(),
        );
        assert!(result.is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn disposed_bundle_holds_no_triggers() {
        let mut rig = Rig::new(&SIX, 1280.0, Options::default());
        let chapters = collect_chapters(&rig.doc, &rig.stage.options().markup);
        let anchors = Anchors {
            container: rig.doc.query_selector(".sections").unwrap(),
            pin_target: rig.doc.query_selector(".canvas-layer").unwrap(),
        };
        let mut bundle = VariantBundle::build(
            &rig.doc,
            &rig.scene,
            &mut rig.registry,
            &chapters,
            anchors,
            Variant::Desktop,
            &Options::default(),
        )
        .unwrap();
        assert!(bundle.is_live());
        assert_eq!(rig.registry.len(), 2);

        bundle.dispose(&mut rig.doc, &mut rig.scene, &mut rig.registry);
        assert!(!bundle.is_live());
        assert!(rig.registry.is_empty());
    }

    #[test]
    fn resize_before_mount_sets_the_first_variant() {
        let mut rig = Rig::new(&SIX, 1280.0, Options::default());
        rig.resize(500.0);
        assert_eq!(rig.stage.phase(), StagePhase::Uninitialized);
        assert_eq!(rig.mount(), StagePhase::Active(Variant::Phone));
        assert_eq!(rig.pins(), 1);
    }
}
