//! Animated model parts and the placeholder substitution used when a part
//! is missing.

use log::debug;

use super::graph::{NodeId, SceneGraph};
use super::transform::Transform;
use crate::options::ModelOptions;

/// Cup nodes of the model: split, or one node serving both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CupParts {
    /// Separately addressable cups; either may be missing.
    Pair {
        /// Left cup.
        left: Option<NodeId>,
        /// Right cup.
        right: Option<NodeId>,
    },
    /// One node animated as both cups.
    Single(NodeId),
}

/// Optional handles to the model's animated parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModelParts {
    /// Whole-model root.
    pub root: Option<NodeId>,
    /// Headband.
    pub headband: Option<NodeId>,
    /// Cups.
    pub cups: Option<CupParts>,
    /// Frame.
    pub frame: Option<NodeId>,
}

impl ModelParts {
    /// Locate parts by the configured node names. The root falls back to
    /// the first top-level node when no name matches the hint.
    #[must_use]
    pub fn resolve(graph: &SceneGraph, names: &ModelOptions) -> Self {
        let cups = match (graph.find(&names.left_cup), graph.find(&names.right_cup)) {
            (None, None) => graph.find(&names.cups).map(CupParts::Single),
            (left, right) => Some(CupParts::Pair { left, right }),
        };
        Self {
            root: graph
                .find_root_by_hint(&names.root_hint)
                .or_else(|| graph.roots().next()),
            headband: graph.find(&names.headband),
            cups,
            frame: graph.find(&names.frame),
        }
    }

    /// Handle for one logical part.
    #[must_use]
    pub fn get(&self, part: Part) -> Option<NodeId> {
        match part {
            Part::Root => self.root,
            Part::Headband => self.headband,
            Part::Frame => self.frame,
            Part::LeftCup => match self.cups? {
                CupParts::Pair { left, .. } => left,
                CupParts::Single(id) => Some(id),
            },
            Part::RightCup => match self.cups? {
                CupParts::Pair { right, .. } => right,
                CupParts::Single(id) => Some(id),
            },
        }
    }
}

/// Logical part addressed by keyframes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Part {
    /// Whole model.
    Root,
    /// Headband.
    Headband,
    /// Left cup.
    LeftCup,
    /// Right cup.
    RightCup,
    /// Frame.
    Frame,
}

impl Part {
    /// Every part, in slot order.
    pub const ALL: [Self; 5] = [
        Self::Root,
        Self::Headband,
        Self::LeftCup,
        Self::RightCup,
        Self::Frame,
    ];

    fn slot(self) -> usize {
        match self {
            Self::Root => 0,
            Self::Headband => 1,
            Self::LeftCup => 2,
            Self::RightCup => 3,
            Self::Frame => 4,
        }
    }
}

/// A keyframe target: a real scene node or an identity stand-in that
/// absorbs writes harmlessly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartSlot {
    /// Node supplied by the scene.
    Real(NodeId),
    /// Stand-in owned by the timeline that created it.
    Placeholder(Transform),
}

impl PartSlot {
    /// Whether this slot is a stand-in.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

/// One slot per [`Part`]; every part always resolves to something.
#[derive(Debug, Clone, PartialEq)]
pub struct PartTable {
    slots: [PartSlot; 5],
}

impl PartTable {
    /// Fill every slot, substituting placeholders for missing parts.
    #[must_use]
    pub fn new(parts: &ModelParts) -> Self {
        let slots = Part::ALL.map(|part| match parts.get(part) {
            Some(id) => PartSlot::Real(id),
            None => {
                debug!("{part:?} missing from scene; animating a placeholder");
                PartSlot::Placeholder(Transform::IDENTITY)
            }
        });
        Self { slots }
    }

    /// Slot for `part`.
    #[must_use]
    pub fn slot(&self, part: Part) -> &PartSlot {
        &self.slots[part.slot()]
    }

    /// Mutable slot for `part`.
    pub fn slot_mut(&mut self, part: Part) -> &mut PartSlot {
        &mut self.slots[part.slot()]
    }

    /// Number of parts backed by placeholders.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_placeholder()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headphones() -> SceneGraph {
        let mut graph = SceneGraph::new();
        let root = graph.add("AirPodsMax", None);
        let _ = graph.add("Headband", Some(root));
        let _ = graph.add("Cup_L", Some(root));
        let _ = graph.add("Cup_R", Some(root));
        let _ = graph.add("Frame", Some(root));
        graph
    }

    #[test]
    fn resolves_named_parts() {
        let graph = headphones();
        let parts = ModelParts::resolve(&graph, &ModelOptions::default());
        for part in Part::ALL {
            assert!(parts.get(part).is_some(), "{part:?} unresolved");
        }
        assert_ne!(parts.get(Part::LeftCup), parts.get(Part::RightCup));
    }

    #[test]
    fn single_cups_node_serves_both_sides() {
        let mut graph = SceneGraph::new();
        let root = graph.add("Model", None);
        let cups = graph.add("Cups", Some(root));
        let parts = ModelParts::resolve(&graph, &ModelOptions::default());
        assert_eq!(parts.root, Some(root));
        assert_eq!(parts.get(Part::LeftCup), Some(cups));
        assert_eq!(parts.get(Part::RightCup), Some(cups));
    }

    #[test]
    fn missing_parts_become_identity_placeholders() {
        let table = PartTable::new(&ModelParts::default());
        assert_eq!(table.placeholder_count(), 5);
        assert_eq!(
            *table.slot(Part::Frame),
            PartSlot::Placeholder(Transform::IDENTITY)
        );
    }
}
