//! `LetterInputMachine`: Buffer, key handling and rendering for one row.

use super::key::{KeyClass, KeyUp};
use super::reset::SwapEvent;
use crate::cell::{Cell, CellSet, LetterBuffer};
use crate::registry::CellRegistry;

/// What a key event did to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyOutcome {
    /// The letter was appended.
    Pushed(char),
    /// Backward delete; carries the removed letter (`None` on an empty row).
    Popped(Option<char>),
    /// Single character outside the allowed range, or the row is full.
    Rejected,
    /// Not a key the row reacts to.
    Ignored,
}

/// What a swap event did to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResetOutcome {
    /// Buffer cleared and cells rediscovered.
    Cleared,
    /// Validation failure; state left exactly as it was.
    Preserved,
}

/// Index of the cell that should hold focus.
///
/// `None` only when there are no cells. An empty row focuses the first
/// cell, a full row the last one, anything in between the next empty slot.
pub const fn focus_index(filled: usize, cells: usize) -> Option<usize> {
    if cells == 0 {
        None
    } else if filled == 0 {
        Some(0)
    } else if filled >= cells {
        Some(cells - 1)
    } else {
        Some(filled)
    }
}

/// The letter-row state machine.
///
/// Owns the letter buffer and the most recently discovered cells. One
/// instance lives for a page session; hosts hand it to their event handlers
/// by reference.
///
/// # Example
///
/// ```
/// use lettr_input::{Document, DocumentRegistry, Element, KeyUp, LetterInputMachine};
///
/// let document = Document::from_elements(
///     (0..5).map(|i| Element::new(format!("c{i}")).with_class("focusable")).collect(),
/// );
/// let mut machine = LetterInputMachine::new(DocumentRegistry::new(document.clone(), ".focusable"));
/// machine.initialize();
///
/// for c in "hi".chars() {
///     machine.on_key_up(&KeyUp::from(c));
/// }
/// assert_eq!(machine.letters().to_string(), "hi");
/// assert_eq!(document.focused_id().as_deref(), Some("c2"));
/// ```
pub struct LetterInputMachine<R: CellRegistry> {
    /// Where cells come from.
    registry: R,
    /// Letters typed so far.
    letters: LetterBuffer,
    /// Cells bound at the last discovery.
    cells: CellSet<R::Cell>,
}

impl<R: CellRegistry> LetterInputMachine<R> {
    /// Create an unbound machine. Call [`initialize`](Self::initialize)
    /// once the document is ready.
    pub const fn new(registry: R) -> Self {
        Self {
            registry,
            letters: LetterBuffer::new(),
            cells: CellSet::empty(),
        }
    }

    /// Bind to the current cells with an empty buffer and render.
    pub fn initialize(&mut self) {
        self.letters.clear();
        self.cells = self.registry.discover();
        log::debug!("letter row bound to {} cells", self.cells.len());
        self.render();
    }

    /// Handle a key release.
    ///
    /// Never fails; keys the row does not accept leave state and display
    /// untouched.
    pub fn on_key_up(&mut self, event: &KeyUp) -> KeyOutcome {
        match event.class() {
            KeyClass::Printable(c) => {
                if !event.is_allowed_char() {
                    log::trace!("key {:?} outside allowed range", event.key());
                    return KeyOutcome::Rejected;
                }
                if !self.letters.push(c, self.cells.len()) {
                    log::trace!("row full, dropping {c:?}");
                    return KeyOutcome::Rejected;
                }
                self.render();
                KeyOutcome::Pushed(c)
            }
            KeyClass::DeleteBackward => {
                let removed = self.letters.pop();
                self.render();
                KeyOutcome::Popped(removed)
            }
            KeyClass::Other => KeyOutcome::Ignored,
        }
    }

    /// Handle a swap-completion signal.
    ///
    /// A validation failure keeps everything, because the swapped markup is
    /// an error message for the letters still on screen. Any other status
    /// means the cells may have been replaced: clear the buffer and bind to
    /// freshly discovered cells.
    pub fn on_external_reset(&mut self, event: &SwapEvent) -> ResetOutcome {
        if event.preserves_input() {
            log::debug!("swap with status {}, keeping {:?}", event.status(), self.letters);
            return ResetOutcome::Preserved;
        }
        self.letters.clear();
        self.cells = self.registry.discover();
        log::debug!(
            "swap with status {}, rebound to {} cells",
            event.status(),
            self.cells.len()
        );
        self.render();
        ResetOutcome::Cleared
    }

    /// Mirror the buffer into the cells and place focus.
    fn render(&self) {
        for (i, cell) in self.cells.iter().enumerate() {
            cell.display(self.letters.get(i));
        }
        if let Some(cell) = self.focus_index().and_then(|i| self.cells.get(i)) {
            cell.focus();
        }
    }

    /// Letters typed so far.
    pub const fn letters(&self) -> &LetterBuffer {
        &self.letters
    }

    /// Number of letters typed.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Check if no letters are typed.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Number of bound cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if every cell holds a letter.
    pub fn is_full(&self) -> bool {
        self.letters.len() >= self.cells.len()
    }

    /// Index of the cell that holds focus after the last render.
    pub fn focus_index(&self) -> Option<usize> {
        focus_index(self.letters.len(), self.cells.len())
    }

    /// The registry cells are discovered from.
    pub const fn registry(&self) -> &R {
        &self.registry
    }
}
