use crossterm::event::{poll, Event, KeyEvent};
use tokio::time::Duration;

/// Poll interval doubling as the application tick rate.
const TICK_RATE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

/// Terminal event source for the UI loop.
///
/// Keys and resizes are returned as soon as they arrive; when the terminal
/// is quiet a `Tick` is emitted so background results still get drained.
#[derive(Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return match crossterm::event::read()? {
                Event::Key(key) => Ok(EventType::Key(key)),
                Event::Resize(w, h) => Ok(EventType::Resize(w, h)),
                _ => Ok(EventType::Other),
            };
        }

        // If no immediate event, wait a bit and return tick
        tokio::time::sleep(TICK_RATE).await;
        Ok(EventType::Tick)
    }
}
