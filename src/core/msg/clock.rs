use serde::{Deserialize, Serialize};

use crate::{core::state::clock::ClockState, domain::clock::TimeUnit};

/// Messages specific to the clock face
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockMsg {
    /// One of the periodic timers fired
    Tick(TimeUnit),
    /// Jump every counter to a new position
    Reset(ClockState),
}

#[cfg(test)]
mod tests {
    use super::*;

    use color_eyre::Result;

    #[test]
    fn test_clock_msg_equality() {
        assert_eq!(
            ClockMsg::Tick(TimeUnit::Seconds),
            ClockMsg::Tick(TimeUnit::Seconds)
        );
        assert_ne!(
            ClockMsg::Tick(TimeUnit::Seconds),
            ClockMsg::Tick(TimeUnit::Hours)
        );
    }

    #[test]
    fn test_clock_msg_serialization() -> Result<()> {
        let msg = ClockMsg::Reset(ClockState::DEMO);
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: ClockMsg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);

        Ok(())
    }
}
