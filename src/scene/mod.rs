//! The 3D side of the showcase as the timeline sees it: a camera, named
//! part nodes, and a render trigger.
//!
//! Asset decoding and GPU rendering stay outside this crate. A renderer
//! reads [`ShowcaseScene`] (or its own [`SceneProvider`]) after each
//! requested render.

mod camera;
mod graph;
pub mod model;
mod parts;
mod slot;
mod transform;

pub use camera::{render_size, Camera};
pub use graph::{NodeId, SceneGraph, SceneNode};
pub use model::{load_or_fallback, LoadedModel, ModelManifest, ModelSource};
pub use parts::{CupParts, ModelParts, Part, PartSlot, PartTable};
pub use slot::SceneSlot;
pub use transform::{Channel, Transform};

use glam::Vec3;
use log::trace;

use crate::host::Viewport;
use crate::options::Options;

/// What the timeline needs from the 3D integration.
pub trait SceneProvider {
    /// Camera, if the integration has one.
    fn camera(&self) -> Option<&Camera>;
    /// Mutable camera, if the integration has one.
    fn camera_mut(&mut self) -> Option<&mut Camera>;
    /// Handles to the animated parts; absent parts get placeholders.
    fn model_parts(&self) -> ModelParts;
    /// Local transform of a node.
    fn transform(&self, node: NodeId) -> Option<Transform>;
    /// Mutable local transform of a node.
    fn transform_mut(&mut self, node: NodeId) -> Option<&mut Transform>;
    /// Redraw the current frame.
    fn request_render(&mut self);
}

/// Camera plus scene graph with a loaded (or fallback) model.
#[derive(Debug)]
pub struct ShowcaseScene {
    camera: Option<Camera>,
    graph: SceneGraph,
    parts: ModelParts,
    model: LoadedModel,
    fallback_spin: f32,
    max_pixel_ratio: f32,
    render_size: (u32, u32),
    renders: u64,
}

impl ShowcaseScene {
    /// Build the scene: default camera framing, then the model from
    /// `source` (or the fallback object).
    pub fn new<S: ModelSource + ?Sized>(
        source: &mut S,
        viewport: Viewport,
        options: &Options,
    ) -> Self {
        let mut graph = SceneGraph::new();
        let model = load_or_fallback(source, &mut graph);
        let parts = ModelParts::resolve(&graph, &options.model);
        Self {
            camera: Some(Camera::from_options(&options.camera, viewport.aspect())),
            graph,
            parts,
            model,
            fallback_spin: options.model.fallback_spin,
            max_pixel_ratio: options.camera.max_pixel_ratio,
            render_size: render_size(viewport, options.camera.max_pixel_ratio),
            renders: 0,
        }
    }

    /// Same scene without a camera.
    #[must_use]
    pub fn without_camera(mut self) -> Self {
        self.camera = None;
        self
    }

    /// Scene graph.
    #[must_use]
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// Root and fallback status of the loaded model.
    #[must_use]
    pub fn model(&self) -> LoadedModel {
        self.model
    }

    /// Number of renders requested so far.
    #[must_use]
    pub fn renders(&self) -> u64 {
        self.renders
    }

    /// Drawing-buffer size for the current viewport.
    #[must_use]
    pub fn render_size(&self) -> (u32, u32) {
        self.render_size
    }

    /// Track a viewport change.
    pub fn resize(&mut self, viewport: Viewport) {
        if let Some(camera) = self.camera.as_mut() {
            camera.resize(viewport);
        }
        self.render_size = render_size(viewport, self.max_pixel_ratio);
    }

    /// Per-frame idle work: a fallback model spins slowly about Y.
    pub fn tick(&mut self, dt: f32) {
        if !self.model.fallback {
            return;
        }
        if let Some(node) = self.graph.node_mut(self.model.root) {
            node.transform.rotation += Vec3::Y * (self.fallback_spin * dt);
        }
    }
}

impl SceneProvider for ShowcaseScene {
    fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    fn camera_mut(&mut self) -> Option<&mut Camera> {
        self.camera.as_mut()
    }

    fn model_parts(&self) -> ModelParts {
        self.parts
    }

    fn transform(&self, node: NodeId) -> Option<Transform> {
        self.graph.node(node).map(|n| n.transform)
    }

    fn transform_mut(&mut self, node: NodeId) -> Option<&mut Transform> {
        self.graph.node_mut(node).map(|n| &mut n.transform)
    }

    fn request_render(&mut self) {
        self.renders += 1;
        trace!("render #{}", self.renders);
    }
}
