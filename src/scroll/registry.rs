use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::scrub::ScrubState;
use super::trigger::{
    ScrollEvent, ScrollRange, TriggerId, TriggerKind, TriggerSpec, Zone,
};
use crate::dom::{Document, PinStyle};
use crate::error::VitrineError;
use crate::host::Viewport;

#[derive(Debug)]
struct Trigger {
    spec: TriggerSpec,
    range: ScrollRange,
    zone: Zone,
    scrub: Option<ScrubState>,
}

/// Page-wide set of scroll triggers and the current scroll offset.
#[derive(Debug)]
pub struct ScrollRegistry {
    next_id: u64,
    triggers: FxHashMap<TriggerId, Trigger>,
    scroll: f32,
    viewport: Viewport,
}

impl ScrollRegistry {
    /// Empty registry at scroll offset 0.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            next_id: 0,
            triggers: FxHashMap::default(),
            scroll: 0.0,
            viewport,
        }
    }

    /// Register a trigger, resolving its range against the current layout.
    ///
    /// New triggers start in the [`Zone::Before`] state; call
    /// [`evaluate`](Self::evaluate) to report crossings already behind the
    /// current offset.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::MissingElement`] if the trigger element or
    /// the pin target has no layout.
    pub fn create<D: Document + ?Sized>(
        &mut self,
        document: &D,
        spec: TriggerSpec,
    ) -> Result<TriggerId, VitrineError> {
        let layout = document.layout(spec.element).ok_or_else(|| {
            VitrineError::MissingElement(format!(
                "trigger element #{}",
                spec.element.index()
            ))
        })?;
        if let TriggerKind::Pin { target } = spec.kind {
            if document.layout(target).is_none() {
                return Err(VitrineError::MissingElement(format!(
                    "pin target #{}",
                    target.index()
                )));
            }
        }

        let range = spec.resolve(layout, self.viewport);
        let scrub = match spec.kind {
            TriggerKind::Scrub { lag } => {
                Some(ScrubState::new(lag, range.progress(self.scroll)))
            }
            _ => None,
        };
        let id = TriggerId(self.next_id);
        self.next_id += 1;
        debug!(
            "trigger {} created: {:?} over {:.0}..{:.0}",
            id.0, spec.kind, range.start, range.end
        );
        let _ = self.triggers.insert(
            id,
            Trigger {
                spec,
                range,
                zone: Zone::Before,
                scrub,
            },
        );
        Ok(id)
    }

    /// Remove a trigger. Returns `false` if it was already gone.
    pub fn kill(&mut self, id: TriggerId) -> bool {
        let removed = self.triggers.remove(&id).is_some();
        if removed {
            debug!("trigger {} killed", id.0);
        }
        removed
    }

    /// Whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: TriggerId) -> bool {
        self.triggers.contains_key(&id)
    }

    /// Number of registered triggers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    /// Whether no triggers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Registered ids in creation order.
    #[must_use]
    pub fn ids(&self) -> Vec<TriggerId> {
        let mut ids: Vec<TriggerId> = self.triggers.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Kind of a registered trigger.
    #[must_use]
    pub fn kind(&self, id: TriggerId) -> Option<TriggerKind> {
        self.triggers.get(&id).map(|t| t.spec.kind)
    }

    /// Resolved scroll range of a trigger.
    #[must_use]
    pub fn range(&self, id: TriggerId) -> Option<ScrollRange> {
        self.triggers.get(&id).map(|t| t.range)
    }

    /// Current scroll offset.
    #[must_use]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Viewport ranges are resolved against.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Recompute every range for a new viewport or reflowed content.
    /// Triggers whose element lost its layout keep their previous range.
    pub fn refresh<D: Document + ?Sized>(&mut self, document: &D, viewport: Viewport) {
        self.viewport = viewport;
        let scroll = self.scroll;
        for (id, trigger) in &mut self.triggers {
            let Some(layout) = document.layout(trigger.spec.element) else {
                debug!("trigger {} kept stale range: element has no layout", id.0);
                continue;
            };
            trigger.range = trigger.spec.resolve(layout, viewport);
            if let Some(scrub) = trigger.scrub.as_mut() {
                scrub.set_target(trigger.range.progress(scroll));
            }
        }
    }

    /// Move to `scroll` and report boundary crossings, ordered by trigger
    /// creation.
    pub fn scroll_to(&mut self, scroll: f32) -> Vec<ScrollEvent> {
        self.scroll = scroll;
        let mut events = Vec::new();
        for id in self.ids() {
            let Some(trigger) = self.triggers.get_mut(&id) else {
                continue;
            };
            let zone = trigger.range.zone(scroll);
            events.extend(ScrollEvent::crossings(id, trigger.zone, zone));
            trigger.zone = zone;
            if let Some(scrub) = trigger.scrub.as_mut() {
                scrub.set_target(trigger.range.progress(scroll));
            }
        }
        if !events.is_empty() {
            trace!("scroll {scroll:.0}: {} crossing(s)", events.len());
        }
        events
    }

    /// Report crossings between each trigger's last known zone and the
    /// current offset, e.g. for triggers created below the fold.
    pub fn evaluate(&mut self) -> Vec<ScrollEvent> {
        self.scroll_to(self.scroll)
    }

    /// Advance scrub smoothing by `dt` seconds. Returns `true` if any
    /// scrubbed progress moved.
    pub fn tick(&mut self, dt: f32) -> bool {
        let mut moved = false;
        for trigger in self.triggers.values_mut() {
            if let Some(scrub) = trigger.scrub.as_mut() {
                moved |= scrub.advance(dt);
            }
        }
        moved
    }

    /// Progress of a trigger: smoothed for scrubs, immediate otherwise.
    #[must_use]
    pub fn progress(&self, id: TriggerId) -> Option<f32> {
        self.triggers.get(&id).map(|t| {
            t.scrub
                .map_or_else(|| t.range.progress(self.scroll), |s| s.current())
        })
    }

    /// Placement of a pin trigger's target at the current offset.
    #[must_use]
    pub fn pin_style(&self, id: TriggerId) -> Option<PinStyle> {
        let trigger = self.triggers.get(&id)?;
        if !matches!(trigger.spec.kind, TriggerKind::Pin { .. }) {
            return None;
        }
        Some(match trigger.range.zone(self.scroll) {
            Zone::Before => PinStyle::Flow,
            Zone::Active => PinStyle::Fixed,
            Zone::After => PinStyle::Parked {
                offset: trigger.range.length(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ElementRef, StaticDocument, StaticElement};

    fn page() -> (StaticDocument, ElementRef, ElementRef, ElementRef) {
        let mut doc = StaticDocument::new();
        let layer = doc.push(StaticElement::new(0.0, 1000.0).with_selector(".canvas-layer"));
        let container = doc.push(StaticElement::new(0.0, 3000.0).with_selector(".sections"));
        let section = doc.push(StaticElement::new(2000.0, 1000.0));
        (doc, layer, container, section)
    }

    #[test]
    fn toggle_reports_enter_and_enter_back() {
        let (doc, _, _, section) = page();
        let mut registry = ScrollRegistry::new(Viewport::new(1280.0, 1000.0));
        let id = registry
            .create(&doc, TriggerSpec::toggle(section, 0.8, 0.2))
            .unwrap();

        assert!(registry.scroll_to(1000.0).is_empty());
        assert_eq!(registry.scroll_to(1300.0), vec![ScrollEvent::Enter(id)]);
        assert_eq!(registry.scroll_to(2500.0), vec![ScrollEvent::Leave(id)]);
        assert_eq!(registry.scroll_to(1500.0), vec![ScrollEvent::EnterBack(id)]);
        assert_eq!(registry.scroll_to(0.0), vec![ScrollEvent::LeaveBack(id)]);
    }

    #[test]
    fn evaluate_reports_triggers_created_past_their_start() {
        let (doc, _, _, section) = page();
        let mut registry = ScrollRegistry::new(Viewport::new(1280.0, 1000.0));
        let _ = registry.scroll_to(1500.0);
        let id = registry
            .create(&doc, TriggerSpec::toggle(section, 0.8, 0.2))
            .unwrap();
        assert_eq!(registry.evaluate(), vec![ScrollEvent::Enter(id)]);
        assert!(registry.evaluate().is_empty());
    }

    #[test]
    fn pin_style_follows_the_range() {
        let (doc, layer, container, _) = page();
        let mut registry = ScrollRegistry::new(Viewport::new(1280.0, 1000.0));
        let pin = registry
            .create(&doc, TriggerSpec::pin(container, layer, 2.0))
            .unwrap();

        let _ = registry.scroll_to(1000.0);
        assert_eq!(registry.pin_style(pin), Some(PinStyle::Fixed));
        let _ = registry.scroll_to(2500.0);
        assert_eq!(
            registry.pin_style(pin),
            Some(PinStyle::Parked { offset: 2000.0 })
        );
    }

    #[test]
    fn refresh_recomputes_spans_for_the_new_viewport() {
        let (doc, layer, container, _) = page();
        let mut registry = ScrollRegistry::new(Viewport::new(1280.0, 1000.0));
        let pin = registry
            .create(&doc, TriggerSpec::pin(container, layer, 2.0))
            .unwrap();
        assert_eq!(registry.range(pin).unwrap().end, 2000.0);

        registry.refresh(&doc, Viewport::new(800.0, 600.0));
        assert_eq!(registry.range(pin).unwrap().end, 1200.0);
    }

    #[test]
    fn scrub_progress_lags_behind_scroll() {
        let (doc, _, container, _) = page();
        let mut registry = ScrollRegistry::new(Viewport::new(1280.0, 1000.0));
        let scrub = registry
            .create(&doc, TriggerSpec::scrub(container, 2.0, 1.0))
            .unwrap();

        let _ = registry.scroll_to(1000.0);
        assert_eq!(registry.progress(scrub), Some(0.0));
        assert!(registry.tick(0.1));
        let p = registry.progress(scrub).unwrap();
        assert!(p > 0.0 && p < 0.5);
    }

    #[test]
    fn missing_elements_are_rejected_and_kill_is_idempotent() {
        let (doc, layer, _, _) = page();
        let mut registry = ScrollRegistry::new(Viewport::default());
        let err = registry
            .create(&doc, TriggerSpec::pin(ElementRef::new(99), layer, 1.0))
            .unwrap_err();
        assert!(matches!(err, VitrineError::MissingElement(_)));
        assert!(registry.is_empty());

        let id = registry
            .create(&doc, TriggerSpec::toggle(layer, 0.8, 0.2))
            .unwrap();
        assert!(registry.kill(id));
        assert!(!registry.kill(id));
    }
}
