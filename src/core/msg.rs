use serde::{Deserialize, Serialize};

pub mod clock;
pub mod system;

use clock::ClockMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Clock operations (delegated to ClockFaceModel)
    Clock(ClockMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::Clock(ClockMsg::Tick(_)))
    }
}
