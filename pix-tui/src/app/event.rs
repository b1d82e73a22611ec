//! Terminal event polling
//!
//! Produces a tick whenever no input arrives within the tick rate, so the
//! loop can expire toasts and pick up finished decodes.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Wait up to one tick for input
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        if !event::poll(self.tick_rate)? {
            return Ok(TuiEvent::Tick);
        }
        match event::read()? {
            CrosstermEvent::Key(key) => Ok(TuiEvent::Key(key)),
            CrosstermEvent::Resize(w, h) => Ok(TuiEvent::Resize(w, h)),
            _ => Ok(TuiEvent::Tick),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_rate_from_millis() {
        let handler = EventHandler::new(250);
        assert_eq!(handler.tick_rate, Duration::from_millis(250));
    }
}
