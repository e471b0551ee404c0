//! Session: The letter row bound to the terminal host.
//!
//! A `RowSession` plays the part of the page: it owns the document, the
//! letter machine and the theme switch, and answers each host event with
//! exactly one of them. Submitting the row is delegated to a [`Responder`],
//! which stands in for the server and performs the out-of-band swap.

use super::engine::{EventHandler, Poster};
use crate::config::InputConfig;
use crate::machine::{KeyUp, LetterInputMachine, SwapEvent};
use crate::registry::{Document, DocumentRegistry};
use crate::terminal::Scene;
use crate::theme::{MemoryThemeStore, ThemeSwitch};

/// Key that submits a full row.
pub const SUBMIT_KEY: &str = "Enter";

/// Key that flips the theme.
pub const THEME_KEY: &str = "F2";

/// Key that ends the session.
pub const QUIT_KEY: &str = "Escape";

/// The server side of a submission.
pub trait Responder {
    /// Handle `word`, replace markup in `document` as the response
    /// dictates, and return the response status (if any).
    fn submit(&mut self, word: &str, document: &Document) -> Option<u16>;
}

impl<F> Responder for F
where
    F: FnMut(&str, &Document) -> Option<u16>,
{
    fn submit(&mut self, word: &str, document: &Document) -> Option<u16> {
        self(word, document)
    }
}

/// Page state for one terminal session.
pub struct RowSession<P: Responder> {
    document: Document,
    machine: LetterInputMachine<DocumentRegistry>,
    theme: ThemeSwitch<MemoryThemeStore>,
    config: InputConfig,
    responder: P,
}

impl<P: Responder> RowSession<P> {
    /// Create a session over `document`. The row is bound on
    /// `DocumentReady`, not here.
    pub fn new(document: Document, config: InputConfig, theme: ThemeSwitch<MemoryThemeStore>, responder: P) -> Self {
        let registry = DocumentRegistry::new(document.clone(), &config.selector);
        Self {
            document,
            machine: LetterInputMachine::new(registry),
            theme,
            config,
            responder,
        }
    }

    /// The letter machine.
    pub const fn machine(&self) -> &LetterInputMachine<DocumentRegistry> {
        &self.machine
    }

    /// The document.
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// The theme switch.
    pub const fn theme(&self) -> &ThemeSwitch<MemoryThemeStore> {
        &self.theme
    }

    fn submit(&mut self, poster: &Poster) {
        if !self.machine.is_full() {
            return;
        }
        let word = self.machine.letters().to_string();
        let status = self.responder.submit(&word, &self.document);
        log::debug!("submitted {word:?}, status {status:?}");
        poster.swap_completed(SwapEvent::from(status));
    }
}

impl<P: Responder> EventHandler for RowSession<P> {
    fn document_ready(&mut self, _poster: &Poster) {
        self.machine.initialize();
    }

    fn key_up(&mut self, event: &KeyUp, poster: &Poster) {
        self.machine.on_key_up(event);
        match event.key() {
            SUBMIT_KEY => self.submit(poster),
            THEME_KEY => {
                self.theme.toggle();
            }
            QUIT_KEY => poster.shutdown(),
            _ => {}
        }
    }

    fn after_swap(&mut self, event: &SwapEvent, _poster: &Poster) {
        self.machine.on_external_reset(event);
    }

    fn scene(&self) -> Scene {
        Scene {
            elements: self.document.snapshot(),
            marker: self.config.marker_class().to_string(),
            theme: self.theme.current(),
            hint: format!("{SUBMIT_KEY}: submit   {THEME_KEY}: theme   Esc: quit"),
        }
    }
}
