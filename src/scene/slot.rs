use log::debug;

/// Hand-off point for a scene produced after the consumer was created.
///
/// Replaces a process-wide mutable handle: the producer delivers into the
/// slot, the consumer checks readiness explicitly, and a delivery after
/// release is dropped instead of reviving torn-down state.
#[derive(Debug, Default)]
pub enum SceneSlot<S> {
    /// Nothing delivered yet.
    #[default]
    Pending,
    /// A scene is available.
    Ready(S),
    /// Torn down; further deliveries are discarded.
    Released,
}

impl<S> SceneSlot<S> {
    /// Store `scene`, replacing any earlier delivery. Returns `false` and
    /// drops the scene if the slot was released.
    pub fn deliver(&mut self, scene: S) -> bool {
        if matches!(self, Self::Released) {
            debug!("scene delivered after release; discarded");
            return false;
        }
        *self = Self::Ready(scene);
        true
    }

    /// The delivered scene, if ready.
    #[must_use]
    pub fn get(&self) -> Option<&S> {
        match self {
            Self::Ready(scene) => Some(scene),
            _ => None,
        }
    }

    /// Mutable access to the delivered scene, if ready.
    pub fn get_mut(&mut self) -> Option<&mut S> {
        match self {
            Self::Ready(scene) => Some(scene),
            _ => None,
        }
    }

    /// Whether a scene is available.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Release the slot, returning the scene it held.
    pub fn release(&mut self) -> Option<S> {
        match std::mem::replace(self, Self::Released) {
            Self::Ready(scene) => Some(scene),
            _ => None,
        }
    }
}
