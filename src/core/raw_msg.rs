use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::clock::TimeUnit;

/// Raw external events before translation into domain messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Resize(u16, u16),
    Quit,
    Resume,

    // User input (raw keyboard events)
    Key(KeyEvent),

    // Periodic clock timers
    ClockTick(TimeUnit),

    // Host failures
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::ClockTick(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_msg_frequent_detection() {
        assert!(RawMsg::Tick.is_frequent());
        assert!(RawMsg::ClockTick(TimeUnit::Seconds).is_frequent());
        assert!(!RawMsg::Quit.is_frequent());
        assert!(!RawMsg::Error("x".to_string()).is_frequent());
    }
}
