//! Browser adapters for the host seams (feature `web`).

use std::cell::RefCell;

use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, Window};

use crate::dom::{Document, ElementBox, ElementRef, PinStyle, RevealStyle};
use crate::error::VitrineError;
use crate::host::{Environment, Viewport};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Route `log` output to the browser console and report panics there.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        debug!("logger already installed");
    }
}

/// The live page. Elements are interned on first lookup; an
/// [`ElementRef`] indexes the intern table.
pub struct WebDocument {
    window: Window,
    document: web_sys::Document,
    elements: RefCell<Vec<Element>>,
}

impl WebDocument {
    /// Adapter over the window's document.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::MissingElement`] if the window has no
    /// document.
    pub fn new(window: Window) -> Result<Self, VitrineError> {
        let document = window
            .document()
            .ok_or_else(|| VitrineError::MissingElement("window.document".to_owned()))?;
        Ok(Self {
            window,
            document,
            elements: RefCell::new(Vec::new()),
        })
    }

    /// Current vertical scroll offset of the window.
    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.window.scroll_y().unwrap_or(0.0) as f32
    }

    fn intern(&self, element: Element) -> ElementRef {
        let mut elements = self.elements.borrow_mut();
        if let Some(index) = elements.iter().position(|e| *e == element) {
            return ElementRef::new(index);
        }
        elements.push(element);
        ElementRef::new(elements.len() - 1)
    }

    fn element(&self, element: ElementRef) -> Option<Element> {
        self.elements.borrow().get(element.index()).cloned()
    }

    fn html(&self, element: ElementRef) -> Option<HtmlElement> {
        self.element(element)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    }
}

impl Document for WebDocument {
    fn query_selector(&self, selector: &str) -> Option<ElementRef> {
        let element = self.document.query_selector(selector).ok().flatten()?;
        Some(self.intern(element))
    }

    fn elements_with_attribute(&self, attribute: &str) -> Vec<ElementRef> {
        let Ok(nodes) = self.document.query_selector_all(&format!("[{attribute}]")) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| self.intern(element))
            .collect()
    }

    fn attribute(&self, element: ElementRef, name: &str) -> Option<String> {
        self.element(element)?.get_attribute(name)
    }

    fn layout(&self, element: ElementRef) -> Option<ElementBox> {
        let element = self.element(element)?;
        if !element.is_connected() {
            return None;
        }
        let rect = element.get_bounding_client_rect();
        Some(ElementBox {
            top: (rect.top() + self.window.scroll_y().unwrap_or(0.0)) as f32,
            height: rect.height() as f32,
        })
    }

    fn apply_reveal(&mut self, element: ElementRef, style: RevealStyle) {
        let Some(html) = self.html(element) else {
            return;
        };
        let css = html.style();
        let written = css
            .set_property("opacity", &style.opacity.to_string())
            .and_then(|()| {
                css.set_property("transform", &format!("translateY({}px)", style.translate_y))
            });
        if written.is_err() {
            debug!("reveal style not written to element #{}", element.index());
        }
    }

    fn apply_pin(&mut self, element: ElementRef, style: PinStyle) {
        let Some(html) = self.html(element) else {
            return;
        };
        let css = html.style();
        let written = match style {
            PinStyle::Flow => css
                .remove_property("position")
                .and_then(|_| css.remove_property("top"))
                .and_then(|_| css.remove_property("transform"))
                .map(|_| ()),
            PinStyle::Fixed => css
                .set_property("position", "fixed")
                .and_then(|()| css.set_property("top", "0"))
                .and_then(|()| css.remove_property("transform").map(|_| ())),
            PinStyle::Parked { offset } => css
                .set_property("position", "relative")
                .and_then(|()| css.set_property("top", "0"))
                .and_then(|()| {
                    css.set_property("transform", &format!("translateY({offset}px)"))
                }),
        };
        if written.is_err() {
            debug!("pin style not written to element #{}", element.index());
        }
    }
}

/// Window-backed environment signals.
pub struct WebEnvironment {
    window: Window,
}

impl WebEnvironment {
    /// Environment of `window`.
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Environment for WebEnvironment {
    fn prefers_reduced_motion(&self) -> bool {
        self.window
            .match_media(REDUCED_MOTION_QUERY)
            .ok()
            .flatten()
            .is_some_and(|query| query.matches())
    }

    fn viewport(&self) -> Viewport {
        let size = |value: Result<JsValue, JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
        };
        Viewport {
            width: size(self.window.inner_width()),
            height: size(self.window.inner_height()),
            device_pixel_ratio: self.window.device_pixel_ratio() as f32,
        }
    }
}
