//! DOM-backed cells and registry.

use crate::cell::{Cell, CellSet};
use crate::registry::CellRegistry;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, HtmlElement, HtmlInputElement};

/// A fillable element in the live DOM.
///
/// Inputs get their value set; any other element gets its text content.
#[derive(Debug, Clone)]
pub struct DomCell {
    element: HtmlElement,
}

impl DomCell {
    /// Wrap `element`.
    pub const fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    /// The wrapped element.
    pub const fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl Cell for DomCell {
    fn display(&self, value: Option<char>) {
        let mut buf = [0u8; 4];
        let text = match value {
            Some(c) => &*c.encode_utf8(&mut buf),
            None => "",
        };
        match self.element.dyn_ref::<HtmlInputElement>() {
            Some(input) => input.set_value(text),
            None => self.element.set_text_content(Some(text)),
        }
    }

    fn focus(&self) {
        // Detached or non-focusable elements reject focus; nothing to do then.
        let _ = self.element.focus();
    }
}

/// Registry that queries the document with a CSS selector.
#[derive(Debug, Clone)]
pub struct DomRegistry {
    document: Document,
    selector: String,
}

impl DomRegistry {
    /// Create a registry for `selector` on `document`.
    pub fn new(document: Document, selector: &str) -> Self {
        Self {
            document,
            selector: selector.to_string(),
        }
    }
}

impl CellRegistry for DomRegistry {
    type Cell = DomCell;

    fn discover(&self) -> CellSet<DomCell> {
        let Ok(nodes) = self.document.query_selector_all(&self.selector) else {
            return CellSet::empty();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(DomCell::new)
            .collect()
    }
}

/// Read the numeric status at `path` below `event`.
///
/// Missing properties and non-numeric values yield `None`.
pub fn swap_status(event: &Event, path: &[String]) -> Option<u16> {
    let mut value: JsValue = event.clone().into();
    for key in path {
        if value.is_null() || value.is_undefined() {
            return None;
        }
        value = Reflect::get(&value, &JsValue::from_str(key)).ok()?;
    }
    let status = value.as_f64()?;
    if status.fract() != 0.0 || !(0.0..=f64::from(u16::MAX)).contains(&status) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(status as u16)
}
