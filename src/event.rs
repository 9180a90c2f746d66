//! Event handling for the TUI
//!
//! Terminal input, animation ticks and spin timers all arrive on one
//! async channel, so the main loop has a single place to wait.

use color_eyre::{eyre::eyre, Result};
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::wheel::SpinTicket;

/// Events that can occur in the application
#[derive(Debug, Clone)]
pub enum Event {
    /// Frame tick (drives the spin animation)
    Tick,
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// A spin's resolution timer fired
    SpinResolved(SpinTicket),
    /// Error occurred
    Error(String),
}

/// Event handler that manages terminal events
pub struct EventHandler {
    /// Event sender, handed to timers that report back into the loop
    tx: mpsc::UnboundedSender<Event>,
    /// Event receiver
    rx: mpsc::UnboundedReceiver<Event>,
    /// Terminal reader task; `None` once it has stopped
    reader: Option<JoinHandle<()>>,
    /// Stop signal sender
    _stop_tx: mpsc::Sender<()>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        Self::with_reader(|event_tx, stop_rx| {
            tokio::spawn(read_terminal(event_tx, stop_rx, tick_rate))
        })
    }

    fn with_reader<F>(spawn_reader: F) -> Self
    where
        F: FnOnce(mpsc::UnboundedSender<Event>, mpsc::Receiver<()>) -> JoinHandle<()>,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let (stop_tx, stop_rx) = mpsc::channel::<()>(1);
        let reader = spawn_reader(tx.clone(), stop_rx);

        Self {
            tx,
            rx,
            reader: Some(reader),
            _stop_tx: stop_tx,
        }
    }

    /// A sender for posting events into the loop
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.tx.clone()
    }

    /// Get the next event.
    ///
    /// Fails once the terminal reader has stopped and everything it sent has
    /// been handed out, even while timers still hold a sender.
    pub async fn next(&mut self) -> Result<Event> {
        if let Ok(event) = self.rx.try_recv() {
            return Ok(event);
        }

        let Some(reader) = self.reader.as_mut() else {
            return Err(eyre!("Terminal input stopped"));
        };

        let received = tokio::select! {
            event = self.rx.recv() => Some(event),
            _ = reader => None,
        };
        if let Some(event) = received {
            return event.ok_or_else(|| eyre!("Event channel closed"));
        }

        self.reader = None;
        self.rx
            .try_recv()
            .map_err(|_| eyre!("Terminal input stopped"))
    }
}

/// Poll crossterm until the handler is dropped or the terminal fails
async fn read_terminal(
    event_tx: mpsc::UnboundedSender<Event>,
    mut stop_rx: mpsc::Receiver<()>,
    tick_rate: Duration,
) {
    loop {
        // Stops once the handler (and its stop sender) is dropped
        if !matches!(stop_rx.try_recv(), Err(mpsc::error::TryRecvError::Empty)) {
            break;
        }

        let event = match event::poll(tick_rate) {
            Ok(true) => match event::read() {
                // Ignore key releases on terminals that report them
                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => Event::Key(key),
                Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                Ok(_) => continue,
                Err(e) => Event::Error(e.to_string()),
            },
            Ok(false) => Event::Tick,
            Err(e) => Event::Error(e.to_string()),
        };

        let fatal = matches!(event, Event::Error(_));
        if event_tx.send(event).is_err() || fatal {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A reader that reports one failure and exits, like crossterm without a tty
    fn failing_reader() -> EventHandler {
        EventHandler::with_reader(|tx, _stop_rx| {
            tokio::spawn(async move {
                let _ = tx.send(Event::Error("no terminal".to_string()));
            })
        })
    }

    #[tokio::test]
    async fn reader_error_is_delivered_then_next_fails() {
        let mut events = failing_reader();
        // Timers keep the channel open
        let _timer_tx = events.sender();

        match events.next().await {
            Ok(Event::Error(e)) => assert_eq!(e, "no terminal"),
            other => panic!("unexpected {other:?}"),
        }

        let after = tokio::time::timeout(Duration::from_secs(2), events.next()).await;
        assert!(matches!(after, Ok(Err(_))), "next() did not fail: {after:?}");
    }

    #[tokio::test]
    async fn timer_events_still_arrive_while_the_reader_runs() {
        let mut events = EventHandler::with_reader(|_tx, mut stop_rx| {
            tokio::spawn(async move {
                stop_rx.recv().await;
            })
        });

        events
            .sender()
            .send(Event::SpinResolved(SpinTicket(7)))
            .unwrap();

        match events.next().await {
            Ok(Event::SpinResolved(ticket)) => assert_eq!(ticket, SpinTicket(7)),
            other => panic!("unexpected {other:?}"),
        }
    }
}

/// Key bindings
pub mod keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Check if key is quit (q or Ctrl+C)
    pub fn is_quit(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
                ..
            } | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Check if key is escape
    pub fn is_escape(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Esc,
                ..
            }
        )
    }

    /// Check if key is enter
    pub fn is_enter(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            }
        )
    }

    /// Check if key requests a spin (Space, Enter or s)
    pub fn is_spin(key: &KeyEvent) -> bool {
        is_enter(key) || is_char(key, ' ') || is_char(key, 's')
    }

    /// Check for specific character (handles both with and without shift for case-sensitive matching)
    pub fn is_char(key: &KeyEvent, c: char) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char(ch),
                modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
                ..
            } if *ch == c
        )
    }

}
