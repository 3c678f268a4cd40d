//! Reduced-motion path: one fade-in per chapter, no pinning, no scrubbing,
//! no scene changes.

use log::debug;

use crate::dom::{Chapter, Document, ElementRef, RevealStyle};
use crate::error::VitrineError;
use crate::options::RevealOptions;
use crate::scroll::{ScrollEvent, ScrollRegistry, TriggerId, TriggerSpec};

#[derive(Debug, Clone, Copy)]
struct Fade {
    from: RevealStyle,
    elapsed: f32,
}

#[derive(Debug)]
struct Reveal {
    element: ElementRef,
    trigger: Option<TriggerId>,
    style: RevealStyle,
    fade: Option<Fade>,
}

/// Fade triggers created for the chapters, and their running fades.
#[derive(Debug, Default)]
pub struct RevealSet {
    reveals: Vec<Reveal>,
    options: RevealOptions,
}

impl RevealSet {
    /// Hide every chapter and register its toggle trigger. On failure the
    /// triggers registered so far are killed and hidden chapters are shown
    /// again.
    pub(crate) fn install<D: Document + ?Sized>(
        document: &mut D,
        registry: &mut ScrollRegistry,
        chapters: &[Chapter],
        options: &RevealOptions,
    ) -> Result<Self, VitrineError> {
        let hidden = RevealStyle {
            opacity: 0.0,
            translate_y: options.offset_y,
        };
        let mut set = Self {
            reveals: Vec::with_capacity(chapters.len()),
            options: options.clone(),
        };
        for chapter in chapters {
            let spec = TriggerSpec::toggle(
                chapter.element,
                options.start_fraction,
                options.end_fraction,
            );
            let trigger = match registry.create(&*document, spec) {
                Ok(id) => id,
                Err(e) => {
                    set.dispose(registry);
                    for reveal in &set.reveals {
                        document.apply_reveal(reveal.element, RevealStyle::SHOWN);
                    }
                    return Err(e);
                }
            };
            document.apply_reveal(chapter.element, hidden);
            set.reveals.push(Reveal {
                element: chapter.element,
                trigger: Some(trigger),
                style: hidden,
                fade: None,
            });
        }
        debug!("{} reveal trigger(s) installed", set.reveals.len());
        Ok(set)
    }

    /// Live trigger ids, in chapter order.
    #[must_use]
    pub fn triggers(&self) -> Vec<TriggerId> {
        self.reveals.iter().filter_map(|r| r.trigger).collect()
    }

    /// Number of live triggers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reveals.iter().filter(|r| r.trigger.is_some()).count()
    }

    /// Whether no trigger is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Start a fade for every entering chapter. Entering from above is
    /// treated like entering from below.
    pub(crate) fn handle(&mut self, events: &[ScrollEvent]) {
        for event in events {
            let (ScrollEvent::Enter(id) | ScrollEvent::EnterBack(id)) = *event else {
                continue;
            };
            if let Some(reveal) = self.reveals.iter_mut().find(|r| r.trigger == Some(id)) {
                reveal.fade = Some(Fade {
                    from: reveal.style,
                    elapsed: 0.0,
                });
            }
        }
    }

    /// Advance running fades by `dt` seconds. Returns whether any style
    /// was written.
    pub(crate) fn advance<D: Document + ?Sized>(&mut self, document: &mut D, dt: f32) -> bool {
        let duration = self.options.duration;
        let ease = self.options.ease;
        let mut wrote = false;
        for reveal in &mut self.reveals {
            let Some(fade) = reveal.fade.as_mut() else {
                continue;
            };
            fade.elapsed += dt;
            let t = if duration > 0.0 {
                fade.elapsed / duration
            } else {
                1.0
            };
            reveal.style = fade.from.lerp(RevealStyle::SHOWN, ease.evaluate(t));
            if t >= 1.0 {
                reveal.style = RevealStyle::SHOWN;
                reveal.fade = None;
            }
            document.apply_reveal(reveal.element, reveal.style);
            wrote = true;
        }
        wrote
    }

    /// Kill the triggers this set registered and stop running fades.
    /// Styles already written stay as they are.
    pub(crate) fn dispose(&mut self, registry: &mut ScrollRegistry) {
        for reveal in &mut self.reveals {
            reveal.fade = None;
            if let Some(id) = reveal.trigger.take() {
                let _ = registry.kill(id);
            }
        }
    }
}
