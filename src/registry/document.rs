//! Document: An in-memory stand-in for the page markup.
//!
//! The document is an ordered list of elements plus a single focus pointer.
//! Markup is replaced wholesale ([`Document::swap`]) or per element
//! ([`Document::replace`]), the same two shapes an out-of-band page swap
//! takes. Handles to replaced elements go dead: writes through them are
//! dropped, as writes to a removed DOM node never reach the screen.
//!
//! ```text
//! Document ──owns──▶ Rc<Node> ◀──weak── ElementHandle (held by the machine)
//!     │
//!     └── focused: key of at most one live node
//! ```

use super::CellRegistry;
use crate::cell::{Cell, CellSet};
use bitflags::bitflags;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

bitflags! {
    /// Per-element state reported in snapshots.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
    pub struct ElementFlags: u8 {
        /// Element currently holds input focus
        const FOCUSED = 0b0000_0001;
        /// Element shows a non-empty value
        const FILLED = 0b0000_0010;
    }
}

/// Markup for one element, as produced by the server.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Element id (may be empty).
    pub id: String,
    /// Class list, in source order.
    pub classes: Vec<String>,
    /// Initial value.
    pub value: String,
}

impl Element {
    /// Create an element with the given id and no classes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            classes: Vec::new(),
            value: String::new(),
        }
    }

    /// Add a class.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set the initial value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Check if the element carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Point-in-time view of one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSnapshot {
    /// Element id.
    pub id: String,
    /// Class list.
    pub classes: Vec<String>,
    /// Current value.
    pub value: String,
    /// Focus/fill state.
    pub flags: ElementFlags,
}

impl ElementSnapshot {
    /// Check if the element carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// A live element owned by the document.
#[derive(Debug)]
struct Node {
    key: u64,
    markup: Element,
    value: RefCell<String>,
}

#[derive(Debug, Default)]
struct Inner {
    nodes: Vec<Rc<Node>>,
    focused: Option<u64>,
    next_key: u64,
    generation: u64,
}

impl Inner {
    fn mount(&mut self, markup: Element) -> Rc<Node> {
        let key = self.next_key;
        self.next_key += 1;
        Rc::new(Node {
            key,
            value: RefCell::new(markup.value.clone()),
            markup,
        })
    }
}

/// Shared handle to the in-memory document.
///
/// Cloning is cheap and every clone sees the same markup.
#[derive(Debug, Clone, Default)]
pub struct Document {
    inner: Rc<RefCell<Inner>>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document holding `elements`.
    pub fn from_elements(elements: Vec<Element>) -> Self {
        let document = Self::new();
        document.swap(elements);
        document
    }

    /// Replace the whole markup.
    ///
    /// Every previously issued [`ElementHandle`] is detached and focus is
    /// dropped, since the focused element no longer exists.
    pub fn swap(&self, elements: Vec<Element>) {
        let mut inner = self.inner.borrow_mut();
        let nodes: Vec<_> = elements.into_iter().map(|e| inner.mount(e)).collect();
        inner.nodes = nodes;
        inner.focused = None;
        inner.generation += 1;
        log::trace!("document swapped, generation {}", inner.generation);
    }

    /// Replace the element with id `id` by `element`.
    ///
    /// Returns `false` when no element has that id. Handles to the old
    /// element are detached; all other elements keep their identity.
    pub fn replace(&self, id: &str, element: Element) -> bool {
        let mut inner = self.inner.borrow_mut();
        let Some(pos) = inner.nodes.iter().position(|n| n.markup.id == id) else {
            return false;
        };
        let old_key = inner.nodes[pos].key;
        let node = inner.mount(element);
        inner.nodes[pos] = node;
        if inner.focused == Some(old_key) {
            inner.focused = None;
        }
        inner.generation += 1;
        true
    }

    /// Handles for every element carrying `class`, in document order.
    pub fn query_class(&self, class: &str) -> Vec<ElementHandle> {
        let inner = self.inner.borrow();
        inner
            .nodes
            .iter()
            .filter(|n| n.markup.has_class(class))
            .map(|n| ElementHandle {
                node: Rc::downgrade(n),
                document: Rc::downgrade(&self.inner),
            })
            .collect()
    }

    /// Current value of the element with id `id`.
    pub fn value_of(&self, id: &str) -> Option<String> {
        let inner = self.inner.borrow();
        inner
            .nodes
            .iter()
            .find(|n| n.markup.id == id)
            .map(|n| n.value.borrow().clone())
    }

    /// Id of the focused element, if any.
    pub fn focused_id(&self) -> Option<String> {
        let inner = self.inner.borrow();
        let key = inner.focused?;
        inner
            .nodes
            .iter()
            .find(|n| n.key == key)
            .map(|n| n.markup.id.clone())
    }

    /// Number of replacements applied so far.
    pub fn generation(&self) -> u64 {
        self.inner.borrow().generation
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.inner.borrow().nodes.len()
    }

    /// Check if the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().nodes.is_empty()
    }

    /// Copy out the current state of every element.
    pub fn snapshot(&self) -> Vec<ElementSnapshot> {
        let inner = self.inner.borrow();
        inner
            .nodes
            .iter()
            .map(|n| {
                let value = n.value.borrow().clone();
                let mut flags = ElementFlags::empty();
                flags.set(ElementFlags::FOCUSED, inner.focused == Some(n.key));
                flags.set(ElementFlags::FILLED, !value.is_empty());
                ElementSnapshot {
                    id: n.markup.id.clone(),
                    classes: n.markup.classes.clone(),
                    value,
                    flags,
                }
            })
            .collect()
    }
}

/// Weak handle to one document element.
///
/// Holding a handle never keeps an element alive. Once the document
/// replaces the element, the handle is detached and both [`Cell`]
/// operations become no-ops.
#[derive(Debug, Clone)]
pub struct ElementHandle {
    node: Weak<Node>,
    document: Weak<RefCell<Inner>>,
}

impl ElementHandle {
    /// Check if the element is still part of the document.
    pub fn is_attached(&self) -> bool {
        self.node.strong_count() > 0
    }

    /// Element id, if still attached.
    pub fn id(&self) -> Option<String> {
        self.node.upgrade().map(|n| n.markup.id.clone())
    }
}

impl Cell for ElementHandle {
    fn display(&self, value: Option<char>) {
        if let Some(node) = self.node.upgrade() {
            let mut current = node.value.borrow_mut();
            current.clear();
            current.extend(value);
        }
    }

    fn focus(&self) {
        let (Some(node), Some(document)) = (self.node.upgrade(), self.document.upgrade()) else {
            return;
        };
        document.borrow_mut().focused = Some(node.key);
    }
}

/// Registry over a [`Document`], matching elements by marker class.
#[derive(Debug, Clone)]
pub struct DocumentRegistry {
    document: Document,
    marker: String,
}

impl DocumentRegistry {
    /// Create a registry matching elements that carry the class `selector`
    /// names.
    ///
    /// Only single-class selectors (`.name` or a bare `name`) are
    /// understood. Anything richer, such as `input.cell` or `[data-cell]`,
    /// is taken literally as a class name and will usually match nothing.
    pub fn new(document: Document, selector: &str) -> Self {
        let marker = selector.trim_start_matches('.');
        if class_selector(selector).is_none() {
            log::debug!("selector {selector:?} is not a single class, matching class {marker:?}");
        }
        Self {
            document,
            marker: marker.to_string(),
        }
    }

    /// The document this registry queries.
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// The marker class matched.
    pub fn marker(&self) -> &str {
        &self.marker
    }
}

/// Class name of a single-class selector (`.name` or `name`).
///
/// `None` for compound selectors, attribute selectors, combinators and the
/// empty string.
pub fn class_selector(selector: &str) -> Option<&str> {
    let name = selector.strip_prefix('.').unwrap_or(selector);
    let plain = !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_');
    plain.then_some(name)
}

impl CellRegistry for DocumentRegistry {
    type Cell = ElementHandle;

    fn discover(&self) -> CellSet<ElementHandle> {
        CellSet::new(self.document.query_class(&self.marker))
    }
}
