use super::{Document, ElementBox, ElementRef, PinStyle, RevealStyle};

/// One element of a [`StaticDocument`].
#[derive(Debug, Clone, Default)]
pub struct StaticElement {
    selectors: Vec<String>,
    attributes: Vec<(String, String)>,
    layout: ElementBox,
    reveal: Option<RevealStyle>,
    pin: PinStyle,
}

impl StaticElement {
    /// Element at `top` with the given `height`.
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            layout: ElementBox { top, height },
            ..Self::default()
        }
    }

    /// Add a selector (e.g. `.sections`) this element answers to.
    #[must_use]
    pub fn with_selector(mut self, selector: &str) -> Self {
        self.selectors.push(selector.to_owned());
        self
    }

    /// Add an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_owned(), value.to_owned()));
        self
    }
}

/// In-memory document used headless and in tests.
///
/// Selectors match by exact string; elements never leave the document, so
/// handles stay valid for its lifetime.
#[derive(Debug, Clone, Default)]
pub struct StaticDocument {
    elements: Vec<StaticElement>,
}

impl StaticDocument {
    /// Empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element and return its handle.
    pub fn push(&mut self, element: StaticElement) -> ElementRef {
        self.elements.push(element);
        ElementRef::new(self.elements.len() - 1)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the document has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Last reveal style written to `element`.
    #[must_use]
    pub fn reveal_style(&self, element: ElementRef) -> Option<RevealStyle> {
        self.elements.get(element.index()).and_then(|e| e.reveal)
    }

    /// Last pin placement written to `element`.
    #[must_use]
    pub fn pin_style(&self, element: ElementRef) -> PinStyle {
        self.elements
            .get(element.index())
            .map_or(PinStyle::Flow, |e| e.pin)
    }

    /// Move and resize `element`, as a content reflow would.
    pub fn set_layout(&mut self, element: ElementRef, layout: ElementBox) {
        if let Some(e) = self.elements.get_mut(element.index()) {
            e.layout = layout;
        }
    }
}

impl Document for StaticDocument {
    fn query_selector(&self, selector: &str) -> Option<ElementRef> {
        self.elements
            .iter()
            .position(|e| e.selectors.iter().any(|s| s == selector))
            .map(ElementRef::new)
    }

    fn elements_with_attribute(&self, attribute: &str) -> Vec<ElementRef> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.attributes.iter().any(|(name, _)| name == attribute))
            .map(|(index, _)| ElementRef::new(index))
            .collect()
    }

    fn attribute(&self, element: ElementRef, name: &str) -> Option<String> {
        self.elements.get(element.index()).and_then(|e| {
            e.attributes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, value)| value.clone())
        })
    }

    fn layout(&self, element: ElementRef) -> Option<ElementBox> {
        self.elements.get(element.index()).map(|e| e.layout)
    }

    fn apply_reveal(&mut self, element: ElementRef, style: RevealStyle) {
        if let Some(e) = self.elements.get_mut(element.index()) {
            e.reveal = Some(style);
        }
    }

    fn apply_pin(&mut self, element: ElementRef, style: PinStyle) {
        if let Some(e) = self.elements.get_mut(element.index()) {
            e.pin = style;
        }
    }
}
