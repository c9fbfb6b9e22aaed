//! Event handling for the TUI
//!
//! Terminal events (key presses, mouse events, resize) are read on a
//! dedicated thread and queued over an mpsc channel. The reader thread only
//! forwards events; every state transition runs to completion on the main
//! loop thread, so handlers never interleave. There are no timers: nothing
//! in this app does background work.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::sync::mpsc;
use std::thread;

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
}

/// Event handler for terminal events
pub struct EventHandler {
    /// Event receiver
    receiver: mpsc::Receiver<Event>,
    /// Event thread handle
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler and spawn the reader thread
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        let handler = thread::spawn(move || loop {
            let event = match event::read().expect("Failed to read event") {
                CrosstermEvent::Key(key) => Event::Key(key),
                CrosstermEvent::Mouse(mouse) => Event::Mouse(mouse),
                CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
                _ => continue,
            };
            if sender.send(event).is_err() {
                return;
            }
        });

        Self { receiver, handler }
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
