use glam::{Mat4, Vec3};

use super::transform::Transform;

/// Handle to a node of a [`SceneGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A named, transformable scene node.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Node name as authored in the model.
    pub name: String,
    /// Parent node, `None` for top-level nodes.
    pub parent: Option<NodeId>,
    /// Local transform.
    pub transform: Transform,
    /// Whether the node stands in for a model that failed to load.
    pub fallback: bool,
}

/// Flat node storage in insertion order. Nodes are never removed, so
/// handles stay valid for the graph's lifetime.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    /// Empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node with an identity transform.
    pub fn add(&mut self, name: &str, parent: Option<NodeId>) -> NodeId {
        self.add_at(name, parent, Vec3::ZERO)
    }

    /// Append a node at `position`.
    pub fn add_at(&mut self, name: &str, parent: Option<NodeId>, position: Vec3) -> NodeId {
        self.nodes.push(SceneNode {
            name: name.to_owned(),
            parent,
            transform: Transform::from_position(position),
            fallback: false,
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Node by handle.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    /// Mutable node by handle.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.0)
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node whose name equals `name` exactly.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.name == name).map(NodeId)
    }

    /// First top-level node whose name contains `hint`, ignoring case.
    #[must_use]
    pub fn find_root_by_hint(&self, hint: &str) -> Option<NodeId> {
        let hint = hint.to_lowercase();
        self.roots()
            .find(|id| {
                self.node(*id)
                    .is_some_and(|n| n.name.to_lowercase().contains(&hint))
            })
    }

    /// Top-level nodes in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.parent.is_none())
            .map(|(index, _)| NodeId(index))
    }

    /// Direct children of `parent` in insertion order.
    pub fn children(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, n)| n.parent == Some(parent))
            .map(|(index, _)| NodeId(index))
    }

    /// World matrix of a node, composing parent transforms.
    #[must_use]
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let mut matrix = Mat4::IDENTITY;
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let Some(node) = self.node(current) else {
                break;
            };
            matrix = node.transform.matrix() * matrix;
            cursor = node.parent;
        }
        matrix
    }
}
