//! Message types for actor communication.
//!
//! These enums define the protocol between the input actor, the dispatch
//! loop and the render actor.

use crate::machine::{KeyUp, SwapEvent};
use crate::terminal::Scene;

/// Events delivered to the dispatch loop.
///
/// Each variant is handled by exactly one handler. `DocumentReady` is
/// always the first event in the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// The document is in place; bind the letter row.
    DocumentReady,

    /// A key was released.
    KeyUp(KeyUp),

    /// Part of the document was replaced out-of-band.
    AfterSwap(SwapEvent),

    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Ctrl+C.
    Interrupt,

    /// Input thread encountered an error.
    Error(String),

    /// Input thread is shutting down.
    Shutdown,
}

/// Commands sent to the render thread.
#[derive(Debug)]
pub enum RenderCommand {
    /// Draw a scene, replacing whatever is on screen.
    Paint(Box<Scene>),

    /// The terminal size changed.
    Resize {
        /// New width.
        width: u16,
        /// New height.
        height: u16,
    },

    /// Shutdown the render thread.
    Shutdown,
}
