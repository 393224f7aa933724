//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod clock;

pub use clock::ClockComponent;

/// Collection of all components
pub struct Components {
    pub clock: ClockComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            clock: ClockComponent::new(),
        }
    }

    /// Render all components
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        self.clock.view(state, frame, area);
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}
