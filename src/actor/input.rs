//! Input Actor: Dedicated thread for polling terminal events.
//!
//! This actor runs in its own thread and uses crossterm's event polling to
//! turn key and resize events into [`HostEvent`]s. Key names follow the DOM
//! `KeyboardEvent.key` convention so the letter row sees the same
//! identifiers a browser would report.

use super::messages::HostEvent;
use crate::machine::{KeyUp, BACKSPACE, DELETE};
use crossbeam_channel::{SendTimeoutError, Sender};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Input actor that polls terminal events.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// # Arguments
    ///
    /// * `sender` - Channel to send host events to the dispatch loop.
    /// * `poll_timeout` - How long to wait for events before checking shutdown.
    /// * `release_kind` - Key event kind forwarded as a key release. Terminals
    ///   without release reporting only deliver presses.
    pub fn spawn(sender: Sender<HostEvent>, poll_timeout: Duration, release_kind: KeyEventKind) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("lettr-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout, release_kind);
            })
            .expect("Failed to spawn input thread");

        Self {
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main input polling loop.
    fn run_loop(
        sender: &Sender<HostEvent>,
        shutdown: &AtomicBool,
        poll_timeout: Duration,
        release_kind: KeyEventKind,
    ) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                // Nobody drains the queue during teardown.
                let _ = sender.try_send(HostEvent::Shutdown);
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if let Some(host_event) = convert_event(event, release_kind) {
                            if !forward(sender, shutdown, host_event, poll_timeout) {
                                break;
                            }
                        }
                    }
                    Err(e) => {
                        if !forward(sender, shutdown, HostEvent::Error(e.to_string()), poll_timeout) {
                            break;
                        }
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    if !forward(sender, shutdown, HostEvent::Error(e.to_string()), poll_timeout) {
                        break;
                    }
                }
            }
        }
    }
}

/// Send `event`, waiting while the queue is full.
///
/// Returns `false` when the thread should exit: the receiver is gone, or
/// shutdown was requested while waiting.
fn forward(sender: &Sender<HostEvent>, shutdown: &AtomicBool, event: HostEvent, wait: Duration) -> bool {
    let mut event = event;
    loop {
        match sender.send_timeout(event, wait) {
            Ok(()) => return true,
            Err(SendTimeoutError::Disconnected(_)) => return false,
            Err(SendTimeoutError::Timeout(back)) => {
                if shutdown.load(Ordering::Relaxed) {
                    return false;
                }
                event = back;
            }
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Convert a crossterm event to a host event.
fn convert_event(event: Event, release_kind: KeyEventKind) -> Option<HostEvent> {
    match event {
        Event::Key(key) => convert_key(key, release_kind),
        Event::Resize(width, height) => Some(HostEvent::Resize { width, height }),
        _ => None,
    }
}

fn convert_key(key: KeyEvent, release_kind: KeyEventKind) -> Option<HostEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == event::KeyCode::Char('c') {
        return (key.kind == KeyEventKind::Press).then_some(HostEvent::Interrupt);
    }
    if key.kind != release_kind {
        return None;
    }
    key_name(key.code).map(|name| HostEvent::KeyUp(KeyUp::new(name)))
}

/// DOM key name for a crossterm key code.
pub(crate) fn key_name(code: event::KeyCode) -> Option<String> {
    let name = match code {
        event::KeyCode::Char(c) => return Some(c.to_string()),
        event::KeyCode::F(n) => return Some(format!("F{n}")),
        event::KeyCode::Backspace => BACKSPACE,
        event::KeyCode::Delete => DELETE,
        event::KeyCode::Enter => "Enter",
        event::KeyCode::Left => "ArrowLeft",
        event::KeyCode::Right => "ArrowRight",
        event::KeyCode::Up => "ArrowUp",
        event::KeyCode::Down => "ArrowDown",
        event::KeyCode::Home => "Home",
        event::KeyCode::End => "End",
        event::KeyCode::PageUp => "PageUp",
        event::KeyCode::PageDown => "PageDown",
        event::KeyCode::Tab | event::KeyCode::BackTab => "Tab",
        event::KeyCode::Insert => "Insert",
        event::KeyCode::Esc => "Escape",
        _ => return None, // Ignore other key codes
    };
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState};

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_key_names_match_dom() {
        assert_eq!(key_name(KeyCode::Char('H')).as_deref(), Some("H"));
        assert_eq!(key_name(KeyCode::Backspace).as_deref(), Some("Backspace"));
        assert_eq!(key_name(KeyCode::Delete).as_deref(), Some("Delete"));
        assert_eq!(key_name(KeyCode::Left).as_deref(), Some("ArrowLeft"));
        assert_eq!(key_name(KeyCode::Esc).as_deref(), Some("Escape"));
        assert_eq!(key_name(KeyCode::F(2)).as_deref(), Some("F2"));
        assert_eq!(key_name(KeyCode::CapsLock), None);
    }

    #[test]
    fn test_only_configured_kind_is_forwarded() {
        let press = key(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Press);
        let release = key(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Release);

        assert_eq!(
            convert_event(press.clone(), KeyEventKind::Press),
            Some(HostEvent::KeyUp(KeyUp::new("a")))
        );
        assert_eq!(convert_event(release.clone(), KeyEventKind::Press), None);
        assert_eq!(convert_event(press, KeyEventKind::Release), None);
        assert_eq!(
            convert_event(release, KeyEventKind::Release),
            Some(HostEvent::KeyUp(KeyUp::new("a")))
        );
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        let event = key(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);
        assert_eq!(convert_event(event, KeyEventKind::Release), Some(HostEvent::Interrupt));
    }

    #[test]
    fn test_resize() {
        assert_eq!(
            convert_event(Event::Resize(80, 24), KeyEventKind::Press),
            Some(HostEvent::Resize { width: 80, height: 24 })
        );
    }

    #[test]
    fn test_forward_gives_up_on_shutdown_when_full() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        tx.send(HostEvent::KeyUp(KeyUp::new("a"))).unwrap();
        let shutdown = AtomicBool::new(true);

        let forwarded = forward(&tx, &shutdown, HostEvent::KeyUp(KeyUp::new("b")), Duration::from_millis(1));
        assert!(!forwarded);
        assert_eq!(rx.len(), 1);
    }

    #[test]
    fn test_forward_waits_for_room() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        tx.send(HostEvent::KeyUp(KeyUp::new("a"))).unwrap();
        let shutdown = AtomicBool::new(false);

        let reader = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            let first = rx.recv().unwrap();
            let second = rx.recv().unwrap();
            (first, second)
        });

        assert!(forward(&tx, &shutdown, HostEvent::KeyUp(KeyUp::new("b")), Duration::from_millis(1)));
        let (first, second) = reader.join().unwrap();
        assert_eq!(first, HostEvent::KeyUp(KeyUp::new("a")));
        assert_eq!(second, HostEvent::KeyUp(KeyUp::new("b")));
    }

    #[test]
    fn test_forward_stops_when_receiver_dropped() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        drop(rx);
        let shutdown = AtomicBool::new(false);
        assert!(!forward(&tx, &shutdown, HostEvent::Shutdown, Duration::from_millis(1)));
    }
}
