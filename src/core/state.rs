pub mod clock;
pub mod system;

use crate::{
    domain::geometry::FaceGeometry,
    presentation::config::{keybindings::KeyBindings, Theme},
};

use clock::{ClockFaceModel, ClockState};
use system::SystemState;

/// Unified application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub clock: ClockFaceModel,
    pub system: SystemState,
    pub face: FaceState,
    pub keybindings: KeyBindings,
    /// Position the clock was mounted with, used by reset
    pub initial_clock: ClockState,
}

/// Static inputs of the renderer, fixed for the widget's lifetime
#[derive(Debug, Clone, Default)]
pub struct FaceState {
    pub geometry: FaceGeometry,
    pub theme: Theme,
}

impl AppState {
    pub fn new(clock: ClockFaceModel, geometry: FaceGeometry, theme: Theme) -> Self {
        Self {
            initial_clock: clock.state(),
            clock,
            system: SystemState::default(),
            face: FaceState { geometry, theme },
            keybindings: KeyBindings::default_bindings(),
        }
    }

    pub fn with_keybindings(mut self, keybindings: KeyBindings) -> Self {
        self.keybindings = keybindings;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            ClockFaceModel::default(),
            FaceGeometry::default(),
            Theme::default(),
        )
    }
}
