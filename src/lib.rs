//! # Lettr Input
//!
//! Keeps a row of single-letter cells (a Wordle-style guess row) in sync
//! with the keyboard, on a page whose markup the server may replace at any
//! time.
//!
//! ## Core Concepts
//!
//! - **Letter buffer**: The typed letters live in memory, never in the cells
//! - **Render after every mutation**: Cells and focus are a pure function of
//!   the buffer length
//! - **Rediscovery on swap**: After an out-of-band swap the cells are queried
//!   again, unless the swap reports a rejected submission (status 422)
//! - **Hosts at the edge**: A browser host (`web` feature) and a terminal
//!   host (`terminal` feature) feed the same machine
//!
//! ## Example
//!
//! ```rust
//! use lettr_input::{Document, DocumentRegistry, Element, KeyUp, LetterInputMachine, SwapEvent};
//!
//! let document = Document::from_elements(
//!     (0..5).map(|i| Element::new(format!("c{i}")).with_class("focusable")).collect(),
//! );
//! let mut machine = LetterInputMachine::new(DocumentRegistry::new(document.clone(), ".focusable"));
//! machine.initialize();
//!
//! for key in ["c", "r", "a", "n", "e"] {
//!     machine.on_key_up(&KeyUp::new(key));
//! }
//! machine.on_external_reset(&SwapEvent::with_status(422));
//! assert_eq!(machine.letters().to_string(), "crane");
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cell;
pub mod config;
pub mod machine;
pub mod registry;
pub mod theme;

#[cfg(feature = "terminal")]
pub mod actor;
#[cfg(feature = "terminal")]
pub mod terminal;

#[cfg(feature = "web")]
pub mod web;

// Re-exports for convenience
pub use cell::{Cell, CellSet, LetterBuffer};
pub use config::InputConfig;
pub use machine::{focus_index, KeyClass, KeyOutcome, KeyUp, LetterInputMachine, ResetOutcome, SwapEvent};
pub use registry::{CellRegistry, Document, DocumentRegistry, Element, ElementFlags, ElementHandle, ElementSnapshot};
pub use theme::{MemoryThemeStore, Theme, ThemeStore, ThemeSwitch};

#[cfg(feature = "terminal")]
pub use actor::{Engine, EngineConfig, EventHandler, HostEvent, Poster, Responder, RowSession};
#[cfg(feature = "terminal")]
pub use terminal::{RowView, Scene};
