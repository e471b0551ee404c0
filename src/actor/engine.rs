//! Engine: Main coordinator that ties actors together.
//!
//! The Engine owns the terminal, spawns the input and render actors, and
//! runs the dispatch loop. Handlers run one at a time on the calling
//! thread, each to completion, so an [`EventHandler`] never sees two
//! events interleaved.

use super::messages::{HostEvent, RenderCommand};
use super::{InputActor, RendererActor};
use crate::machine::{KeyUp, SwapEvent};
use crate::terminal::Scene;
use crossbeam_channel::{bounded, unbounded, Receiver, RecvTimeoutError, Sender, TrySendError};
use crossterm::{
    cursor,
    event::{KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use std::time::Duration;

/// Configuration for the Engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Input poll timeout.
    pub input_poll_timeout: Duration,
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
    /// Ask the terminal for key release events when it supports them.
    pub report_key_release: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            input_poll_timeout: Duration::from_millis(10),
            alternate_screen: true,
            report_key_release: true,
        }
    }
}

/// Application side of the dispatch loop.
///
/// One method per event kind. `document_ready` is called exactly once and
/// before any other handler.
pub trait EventHandler {
    /// The document is in place.
    fn document_ready(&mut self, poster: &Poster);

    /// A key was released.
    fn key_up(&mut self, event: &KeyUp, poster: &Poster);

    /// Part of the document was replaced.
    fn after_swap(&mut self, event: &SwapEvent, poster: &Poster);

    /// What to draw after a handler ran.
    fn scene(&self) -> Scene;
}

/// Queues events for later dispatch.
///
/// Handlers use it to signal things that happen "after" the current event,
/// such as a swap completing or a request to quit. Posting never blocks:
/// the handler runs on the thread that drains the queue.
#[derive(Debug, Clone)]
pub struct Poster {
    tx: Sender<HostEvent>,
}

impl Poster {
    /// Wrap the sending side of the event queue.
    pub const fn new(tx: Sender<HostEvent>) -> Self {
        Self { tx }
    }

    /// Queue `event`. Dropped if the queue is full or the loop is gone.
    pub fn post(&self, event: HostEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => log::warn!("event queue full, dropping {event:?}"),
            Err(TrySendError::Disconnected(_)) => {}
        }
    }

    /// Queue a swap-completion event.
    pub fn swap_completed(&self, event: SwapEvent) {
        self.post(HostEvent::AfterSwap(event));
    }

    /// Ask the loop to stop.
    pub fn shutdown(&self) {
        self.post(HostEvent::Shutdown);
    }
}

/// What the loop should do after dispatching an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// State may have changed; paint a new scene.
    Repaint,
    /// The terminal changed size.
    Resize {
        /// New width.
        width: u16,
        /// New height.
        height: u16,
    },
    /// Nothing to do.
    Idle,
    /// Leave the loop.
    Stop,
}

/// Routes host events to handlers, holding back input until ready.
#[derive(Debug, Default)]
pub struct Dispatcher {
    ready: bool,
}

impl Dispatcher {
    /// Create a dispatcher that has not seen `DocumentReady` yet.
    pub const fn new() -> Self {
        Self { ready: false }
    }

    /// Check if `DocumentReady` has been handled.
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Run the handler for `event`.
    pub fn dispatch<H: EventHandler>(&mut self, event: HostEvent, handler: &mut H, poster: &Poster) -> Flow {
        match event {
            HostEvent::DocumentReady => {
                if self.ready {
                    return Flow::Idle;
                }
                self.ready = true;
                handler.document_ready(poster);
                Flow::Repaint
            }
            HostEvent::KeyUp(_) | HostEvent::AfterSwap(_) if !self.ready => {
                log::trace!("dropping {event:?} before document ready");
                Flow::Idle
            }
            HostEvent::KeyUp(key) => {
                handler.key_up(&key, poster);
                Flow::Repaint
            }
            HostEvent::AfterSwap(swap) => {
                handler.after_swap(&swap, poster);
                Flow::Repaint
            }
            HostEvent::Resize { width, height } => Flow::Resize { width, height },
            HostEvent::Error(message) => {
                log::warn!("input error: {message}");
                Flow::Idle
            }
            HostEvent::Interrupt | HostEvent::Shutdown => Flow::Stop,
        }
    }
}

/// The terminal host.
///
/// Creating an engine switches the terminal to raw mode; dropping it
/// restores the terminal.
pub struct Engine {
    /// Configuration.
    config: EngineConfig,
    /// Input queue, fed by the input actor.
    input_rx: Receiver<HostEvent>,
    /// Events posted by handlers; drained before the next input event.
    posted_tx: Sender<HostEvent>,
    posted_rx: Receiver<HostEvent>,
    /// Render command sender.
    render_tx: Sender<RenderCommand>,
    /// Input actor handle.
    input_actor: Option<InputActor>,
    /// Renderer actor handle.
    renderer_actor: Option<RendererActor>,
    /// Whether release reporting was pushed to the terminal.
    key_release: bool,
    /// Terminal width.
    width: u16,
    /// Terminal height.
    height: u16,
    /// Whether the engine is running.
    running: bool,
}

impl Engine {
    /// Create a new engine with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails (raw mode, alternate screen, etc.).
    pub fn new() -> io::Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create a new engine with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn with_config(config: EngineConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        execute!(stdout, cursor::Hide)?;

        let key_release =
            config.report_key_release && terminal::supports_keyboard_enhancement().unwrap_or(false);
        if key_release {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        let release_kind = if key_release {
            KeyEventKind::Release
        } else {
            KeyEventKind::Press
        };

        let (input_tx, input_rx) = bounded::<HostEvent>(64);
        let (posted_tx, posted_rx) = unbounded::<HostEvent>();
        let (render_tx, render_rx) = bounded::<RenderCommand>(16);

        // Posted events are drained before input, so this is always first.
        posted_tx
            .send(HostEvent::DocumentReady)
            .map_err(|e| io::Error::other(e.to_string()))?;

        let input_actor = InputActor::spawn(input_tx, config.input_poll_timeout, release_kind);
        let renderer_actor = RendererActor::spawn(render_rx, width, height);
        log::debug!("engine started {width}x{height}, key release reporting: {key_release}");

        Ok(Self {
            config,
            input_rx,
            posted_tx,
            posted_rx,
            render_tx,
            input_actor: Some(input_actor),
            renderer_actor: Some(renderer_actor),
            key_release,
            width,
            height,
            running: true,
        })
    }

    /// Get the terminal width.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the terminal height.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// A poster feeding this engine's event queue.
    pub fn poster(&self) -> Poster {
        Poster::new(self.posted_tx.clone())
    }

    /// Check if the engine is still running.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the engine.
    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// Run the dispatch loop until a handler or the user stops it.
    pub fn run<H: EventHandler>(&mut self, handler: &mut H) {
        let poster = self.poster();
        let mut dispatcher = Dispatcher::new();

        while self.running {
            let event = match next_event(&self.posted_rx, &self.input_rx, self.config.input_poll_timeout) {
                Ok(event) => event,
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => break,
            };

            match dispatcher.dispatch(event, handler, &poster) {
                Flow::Repaint => self.paint(handler.scene()),
                Flow::Resize { width, height } => self.handle_resize(width, height),
                Flow::Idle => {}
                Flow::Stop => self.stop(),
            }
        }
    }

    /// Send a scene to the renderer.
    pub fn paint(&self, scene: Scene) {
        let _ = self.render_tx.send(RenderCommand::Paint(Box::new(scene)));
    }

    /// Handle a resize event.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let _ = self.render_tx.send(RenderCommand::Resize { width, height });
    }
}

/// Next event to dispatch: anything handlers posted, then input.
fn next_event(
    posted: &Receiver<HostEvent>,
    input: &Receiver<HostEvent>,
    timeout: Duration,
) -> Result<HostEvent, RecvTimeoutError> {
    if let Ok(event) = posted.try_recv() {
        return Ok(event);
    }
    input.recv_timeout(timeout)
}

impl Drop for Engine {
    fn drop(&mut self) {
        // Stop actors
        if let Some(actor) = self.input_actor.take() {
            actor.join();
        }

        let _ = self.render_tx.send(RenderCommand::Shutdown);
        if let Some(actor) = self.renderer_actor.take() {
            actor.join();
        }

        // Restore terminal state
        let mut stdout = io::stdout();
        if self.key_release {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(stdout, cursor::Show);
        if self.config.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
    }
}
