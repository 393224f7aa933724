//! Clock component
//!
//! A stateless component that renders the clock face and status line from AppState.

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::{
        face::render_face,
        widgets::{clock_face::ClockFaceWidget, status_bar::StatusBarWidget},
    },
};

/// Clock component
#[derive(Debug, Clone, Default)]
pub struct ClockComponent;

impl ClockComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the face in `area`, leaving the bottom row for the status line
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let rects = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let geometry = &state.face.geometry;
        let list = render_face(&state.clock, geometry, &state.face.theme);
        frame.render_widget(ClockFaceWidget::new(list, geometry.diameter()), rects[0]);

        frame.render_widget(
            StatusBarWidget::new(state.system.status_message.clone()),
            rects[1],
        );
    }
}
