//! Actor Model: The terminal host for the letter row.
//!
//! This module wires the row to a terminal using crossbeam channels:
//! - **Input Actor**: Polls terminal events, forwards DOM-style key releases
//! - **Render Actor**: Receives scenes, paints them in one write
//! - **Dispatch Loop**: Runs one handler per event, to completion; events
//!   posted by handlers go on their own unbounded queue, drained first
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐      HostEvent      ┌──────────────┐
//! │ Input Thread │ ─────────────────▶  │              │
//! └──────────────┘                     │ Dispatch Loop│ ◀─┐ AfterSwap
//!                                      │ (RowSession) │ ──┘ (Poster)
//! ┌──────────────┐    RenderCommand    │              │
//! │Render Thread │ ◀───────────────── │              │
//! └──────────────┘                     └──────────────┘
//! ```

mod engine;
mod input;
mod messages;
mod renderer;
mod session;

pub use engine::{Dispatcher, Engine, EngineConfig, EventHandler, Flow, Poster};
pub use input::InputActor;
pub use messages::{HostEvent, RenderCommand};
pub use renderer::RendererActor;
pub use session::{Responder, RowSession, QUIT_KEY, SUBMIT_KEY, THEME_KEY};
