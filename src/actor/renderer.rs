//! Renderer Actor: Dedicated thread for drawing to the terminal.
//!
//! This actor owns stdout. It receives scenes from the dispatch loop,
//! paints each into a pre-allocated buffer and flushes it in a single
//! write to avoid flicker.

use super::messages::RenderCommand;
use crate::terminal::{RowView, Scene};
use crossbeam_channel::Receiver;
use std::io::{self, Stdout, Write};
use std::thread::{self, JoinHandle};

/// Renderer actor that handles terminal output.
pub struct RendererActor {
    /// Handle to the render thread.
    handle: Option<JoinHandle<()>>,
}

/// Internal renderer state.
struct Renderer {
    view: RowView,
    /// Pre-allocated output buffer.
    output: Vec<u8>,
    stdout: Stdout,
    /// Frames drawn so far.
    frames: u64,
}

impl Renderer {
    fn new(width: u16, height: u16) -> Self {
        Self {
            view: RowView::new(width, height),
            output: Vec::with_capacity(16 * 1024),
            stdout: io::stdout(),
            frames: 0,
        }
    }

    fn paint(&mut self, scene: &Scene) -> io::Result<()> {
        self.output.clear();
        self.view.paint(scene, &mut self.output)?;

        // Flush to terminal in a single write
        self.stdout.write_all(&self.output)?;
        self.stdout.flush()?;
        self.frames += 1;
        log::trace!("frame {} painted, {} bytes", self.frames, self.output.len());
        Ok(())
    }
}

impl RendererActor {
    /// Spawn the renderer actor thread.
    ///
    /// # Arguments
    ///
    /// * `receiver` - Channel to receive render commands from.
    /// * `width` - Initial terminal width.
    /// * `height` - Initial terminal height.
    pub fn spawn(receiver: Receiver<RenderCommand>, width: u16, height: u16) -> Self {
        let handle = thread::Builder::new()
            .name("lettr-render".to_string())
            .spawn(move || {
                if let Err(e) = Self::run_loop(&receiver, width, height) {
                    log::error!("render thread error: {e}");
                }
            })
            .expect("Failed to spawn render thread");

        Self {
            handle: Some(handle),
        }
    }

    /// Wait for the render thread to finish.
    ///
    /// Send [`RenderCommand::Shutdown`] first, or drop the sender.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main render loop. Ends on `Shutdown` or when the sender is dropped.
    fn run_loop(receiver: &Receiver<RenderCommand>, width: u16, height: u16) -> io::Result<()> {
        let mut renderer = Renderer::new(width, height);
        let mut last_scene: Option<Box<Scene>> = None;

        while let Ok(command) = receiver.recv() {
            match command {
                RenderCommand::Paint(scene) => {
                    renderer.paint(&scene)?;
                    last_scene = Some(scene);
                }
                RenderCommand::Resize { width, height } => {
                    renderer.view.resize(width, height);
                    if let Some(scene) = &last_scene {
                        renderer.paint(scene)?;
                    }
                }
                RenderCommand::Shutdown => break,
            }
        }

        Ok(())
    }
}
