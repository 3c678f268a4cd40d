//! Host-side wiring: one page, its scroll registry, the scene slot, and the
//! stage that animates them.

use log::{debug, info};

use crate::dom::Document;
use crate::host::{Environment, Viewport};
use crate::options::Options;
use crate::scene::{SceneProvider, SceneSlot, ShowcaseScene};
use crate::scroll::ScrollRegistry;
use crate::stage::{Stage, StagePhase};
use crate::util::frame_timing::FrameClock;

/// A mounted showcase page.
///
/// The scene arrives after the page, once its model has loaded; the stage
/// mounts on delivery. A redelivery replaces the scene and remounts, and a
/// delivery after [`unmount`](Self::unmount) is discarded.
pub struct Showcase<D, E> {
    document: D,
    environment: E,
    options: Options,
    registry: ScrollRegistry,
    scene: SceneSlot<ShowcaseScene>,
    stage: Stage,
    clock: FrameClock,
}

impl<D: Document, E: Environment> Showcase<D, E> {
    /// Page waiting for its scene.
    #[must_use]
    pub fn new(document: D, environment: E, options: Options) -> Self {
        let registry = ScrollRegistry::new(environment.viewport());
        let stage = Stage::new(options.clone());
        Self {
            document,
            environment,
            options,
            registry,
            scene: SceneSlot::Pending,
            stage,
            clock: FrameClock::new(),
        }
    }

    /// Hand over a ready scene and mount the stage against it.
    pub fn deliver_scene(&mut self, scene: ShowcaseScene) -> StagePhase {
        if let Some(previous) = self.scene.get_mut() {
            debug!("scene redelivered; remounting");
            self.stage
                .cleanup(&mut self.document, previous, &mut self.registry);
            self.stage = Stage::new(self.options.clone());
        }
        if !self.scene.deliver(scene) {
            return self.stage.phase();
        }
        let Some(scene) = self.scene.get_mut() else {
            return self.stage.phase();
        };
        scene.resize(self.registry.viewport());
        let phase = self.stage.mount(
            &mut self.document,
            &self.environment,
            scene,
            &mut self.registry,
        );
        info!("showcase mounted: {phase}");
        phase
    }

    /// Follow a viewport change.
    pub fn resize(&mut self, viewport: Viewport) {
        match self.scene.get_mut() {
            Some(scene) => {
                scene.resize(viewport);
                self.stage.on_viewport_change(
                    &mut self.document,
                    scene,
                    &mut self.registry,
                    viewport,
                );
            }
            None => self.registry.refresh(&self.document, viewport),
        }
    }

    /// Recompute trigger ranges after the content reflowed at an unchanged
    /// viewport.
    pub fn refresh(&mut self) {
        let viewport = self.registry.viewport();
        self.resize(viewport);
    }

    /// Move the page to scroll offset `y`.
    pub fn scroll_to(&mut self, y: f32) {
        let events = self.registry.scroll_to(y);
        self.stage.on_scroll_events(&events);
    }

    /// Advance one frame by `dt` seconds. Returns whether a render was
    /// requested.
    pub fn frame(&mut self, dt: f32) -> bool {
        let _ = self.registry.tick(dt);
        let Some(scene) = self.scene.get_mut() else {
            return false;
        };
        let mut rendered = false;
        if scene.model().fallback {
            scene.tick(dt);
            scene.request_render();
            rendered = true;
        }
        rendered |= self
            .stage
            .update(&mut self.document, scene, &self.registry, dt);
        rendered
    }

    /// Advance by the wall-clock time since the previous call, for hosts
    /// driven by an animation-frame callback.
    pub fn tick(&mut self) -> bool {
        let dt = self.clock.tick();
        self.frame(dt)
    }

    /// Smoothed frame rate seen by [`tick`](Self::tick).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }

    /// Tear the stage down and release the scene. Later deliveries are
    /// discarded.
    pub fn unmount(&mut self) {
        if let Some(scene) = self.scene.get_mut() {
            self.stage
                .cleanup(&mut self.document, scene, &mut self.registry);
        }
        if self.scene.release().is_some() {
            info!("showcase unmounted");
        }
    }

    /// Current stage phase.
    #[must_use]
    pub fn phase(&self) -> StagePhase {
        self.stage.phase()
    }

    /// The stage.
    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// The delivered scene, if any.
    #[must_use]
    pub fn scene(&self) -> Option<&ShowcaseScene> {
        self.scene.get()
    }

    /// Page-wide scroll triggers.
    #[must_use]
    pub fn registry(&self) -> &ScrollRegistry {
        &self.registry
    }

    /// The page.
    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    /// The page, for hosts that edit its content.
    #[must_use]
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// The hosting environment.
    #[must_use]
    pub fn environment(&self) -> &E {
        &self.environment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SectionsConfig;
    use crate::error::VitrineError;
    use crate::host::StaticEnvironment;
    use crate::responsive::Variant;
    use crate::scene::{ModelManifest, ModelSource, NodeId, SceneGraph};
    use crate::dom::{ElementBox, StaticDocument};

    struct Unreachable;

    impl ModelSource for Unreachable {
        fn load(&mut self, _: &mut SceneGraph) -> Result<NodeId, VitrineError> {
            Err(VitrineError::ModelLoad("404".to_owned()))
        }
    }

    fn showcase(viewport: Viewport) -> Showcase<StaticDocument, StaticEnvironment> {
        let options = Options::default();
        let doc = SectionsConfig::default().layout_document(&options.markup, viewport);
        Showcase::new(doc, StaticEnvironment::new(viewport), options)
    }

    fn headphones(viewport: Viewport) -> ShowcaseScene {
        let mut manifest = ModelManifest {
            name: "AirPodsMax".to_owned(),
            position: [0.0; 3],
            children: ["Headband", "Cup_L", "Cup_R", "Frame"]
                .map(|name| ModelManifest {
                    name: name.to_owned(),
                    position: [0.0; 3],
                    children: Vec::new(),
                })
                .to_vec(),
        };
        ShowcaseScene::new(&mut manifest, viewport, &Options::default())
    }

    #[test]
    fn stage_waits_for_the_scene() {
        let viewport = Viewport::new(1280.0, 800.0);
        let mut page = showcase(viewport);
        page.scroll_to(500.0);
        assert!(!page.frame(0.016));
        assert_eq!(page.phase(), StagePhase::Uninitialized);
        assert!(page.registry().is_empty());

        assert_eq!(
            page.deliver_scene(headphones(viewport)),
            StagePhase::Active(Variant::Desktop)
        );
        assert_eq!(page.registry().len(), 2);
    }

    #[test]
    fn redelivery_remounts_without_leaking_triggers() {
        let viewport = Viewport::new(1280.0, 800.0);
        let mut page = showcase(viewport);
        let _ = page.deliver_scene(headphones(viewport));
        let first = page.registry().ids();

        let _ = page.deliver_scene(headphones(viewport));
        assert_eq!(page.registry().len(), 2);
        assert!(first.iter().all(|id| !page.registry().contains(*id)));
    }

    #[test]
    fn deliveries_after_unmount_are_discarded() {
        let viewport = Viewport::new(800.0, 800.0);
        let mut page = showcase(viewport);
        let _ = page.deliver_scene(headphones(viewport));
        page.unmount();
        page.unmount();
        assert!(page.registry().is_empty());
        assert_eq!(page.phase(), StagePhase::TornDown);

        let _ = page.deliver_scene(headphones(viewport));
        assert!(page.scene().is_none());
        assert!(page.registry().is_empty());
    }

    #[test]
    fn frames_scrub_towards_the_scroll_position() {
        let viewport = Viewport::new(1280.0, 800.0);
        let mut page = showcase(viewport);
        let _ = page.deliver_scene(headphones(viewport));
        let renders = page.scene().unwrap().renders();

        page.scroll_to(3000.0);
        assert!(page.frame(0.016));
        assert!(page.frame(0.016));
        assert!(page.scene().unwrap().renders() >= renders + 2);
    }

    #[test]
    fn fallback_model_spins_every_frame() {
        let viewport = Viewport::new(1280.0, 800.0);
        let mut page = showcase(viewport);
        let scene = ShowcaseScene::new(&mut Unreachable, viewport, &Options::default());
        let _ = page.deliver_scene(scene);

        assert!(page.frame(0.5));
        let scene = page.scene().unwrap();
        let root = scene.model().root;
        assert!((scene.transform(root).unwrap().rotation.y - 0.1).abs() < 1e-6);
    }

    #[test]
    fn resizing_follows_breakpoints() {
        let mut page = showcase(Viewport::new(1280.0, 800.0));
        let _ = page.deliver_scene(headphones(Viewport::new(1280.0, 800.0)));
        page.resize(Viewport::new(500.0, 800.0));
        assert_eq!(page.phase(), StagePhase::Active(Variant::Phone));
        assert_eq!(page.scene().unwrap().camera().unwrap().aspect, 500.0 / 800.0);
    }

    #[test]
    fn resize_before_delivery_picks_the_current_variant() {
        let mut page = showcase(Viewport::new(1280.0, 800.0));
        page.resize(Viewport::new(500.0, 800.0));
        assert_eq!(
            page.deliver_scene(headphones(Viewport::new(1280.0, 800.0))),
            StagePhase::Active(Variant::Phone)
        );
        let scene = page.scene().unwrap();
        assert_eq!(scene.camera().unwrap().aspect, 500.0 / 800.0);
    }

    #[test]
    fn refresh_follows_reflowed_content() {
        let viewport = Viewport::new(1280.0, 800.0);
        let mut page = showcase(viewport);
        let _ = page.deliver_scene(headphones(viewport));
        let pin = page.stage().bundle().unwrap().pin().unwrap();
        let before = page.registry().range(pin).unwrap();

        let container = page.document().query_selector(".sections").unwrap();
        let layout = page.document().layout(container).unwrap();
        page.document_mut().set_layout(
            container,
            ElementBox {
                top: layout.top + 400.0,
                height: layout.height,
            },
        );
        assert_eq!(page.registry().range(pin).unwrap(), before);

        page.refresh();
        let after = page.registry().range(pin).unwrap();
        assert_eq!(after.start, before.start + 400.0);
        assert_eq!(page.phase(), StagePhase::Active(Variant::Desktop));
    }
}
