//! Model loading with a deterministic fallback.
//!
//! Loading never fails from the caller's point of view: any error is
//! logged and replaced by a single `FallbackObject` node, so the timeline
//! always finds a root to animate.

use std::path::Path;

use glam::Vec3;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::graph::{NodeId, SceneGraph};
use crate::error::VitrineError;

/// Name given to the stand-in node inserted when loading fails.
pub const FALLBACK_NODE_NAME: &str = "FallbackObject";

/// Something that can populate a scene graph with a model.
pub trait ModelSource {
    /// Insert the model's nodes and return its root.
    fn load(&mut self, graph: &mut SceneGraph) -> Result<NodeId, VitrineError>;
}

/// Declarative model description: a tree of named nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelManifest {
    /// Root node name.
    pub name: String,
    /// Root position.
    #[serde(default)]
    pub position: [f32; 3],
    /// Child nodes.
    #[serde(default)]
    pub children: Vec<ModelManifest>,
}

impl ModelManifest {
    /// Parse a manifest from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::ModelLoad`] on malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, VitrineError> {
        serde_json::from_str(json).map_err(|e| VitrineError::ModelLoad(e.to_string()))
    }

    /// Read and parse a manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Io`] if the file cannot be read, or
    /// [`VitrineError::ModelLoad`] if it does not parse.
    pub fn from_path(path: &Path) -> Result<Self, VitrineError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn insert(&self, graph: &mut SceneGraph, parent: Option<NodeId>) -> NodeId {
        let id = graph.add_at(&self.name, parent, Vec3::from(self.position));
        for child in &self.children {
            let _ = child.insert(graph, Some(id));
        }
        id
    }
}

impl ModelSource for ModelManifest {
    fn load(&mut self, graph: &mut SceneGraph) -> Result<NodeId, VitrineError> {
        if self.name.is_empty() {
            return Err(VitrineError::ModelLoad("manifest root has no name".to_owned()));
        }
        Ok(self.insert(graph, None))
    }
}

/// A manifest read lazily from disk when loaded.
#[derive(Debug, Clone)]
pub struct ManifestFile<'a> {
    path: &'a Path,
}

impl<'a> ManifestFile<'a> {
    /// Source reading `path` at load time.
    #[must_use]
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }
}

impl ModelSource for ManifestFile<'_> {
    fn load(&mut self, graph: &mut SceneGraph) -> Result<NodeId, VitrineError> {
        ModelManifest::from_path(self.path)?.load(graph)
    }
}

/// Outcome of [`load_or_fallback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedModel {
    /// Root of the inserted model.
    pub root: NodeId,
    /// Whether the fallback object was substituted.
    pub fallback: bool,
}

/// Load `source` into `graph`, substituting the fallback object on error.
pub fn load_or_fallback<S: ModelSource + ?Sized>(
    source: &mut S,
    graph: &mut SceneGraph,
) -> LoadedModel {
    match source.load(graph) {
        Ok(root) => {
            info!("model loaded ({} nodes)", graph.len());
            LoadedModel {
                root,
                fallback: false,
            }
        }
        Err(e) => {
            warn!("model load failed, using fallback geometry: {e}");
            LoadedModel {
                root: insert_fallback(graph),
                fallback: true,
            }
        }
    }
}

/// Insert the centred stand-in node.
pub fn insert_fallback(graph: &mut SceneGraph) -> NodeId {
    let id = graph.add(FALLBACK_NODE_NAME, None);
    if let Some(node) = graph.node_mut(id) {
        node.fallback = true;
    }
    id
}
