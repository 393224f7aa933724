use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::canvas::Canvas,
};

use crate::presentation::face::{canvas::CanvasSurface, DrawList, Painter};

/// Room left around the face for its shadow, in face units
pub const FACE_PADDING: f64 = 15.0;

/// Mapping between terminal cells and face units for one area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    /// Face units per terminal column
    pub cell_width: f64,
    /// Face units per braille dot (square)
    pub dot: f64,
}

impl Viewport {
    /// Fit a square of side `extent` into `area`, keeping circles round.
    /// Terminal cells are about twice as tall as they are wide.
    pub fn fit(area: Rect, extent: f64) -> Option<Self> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let columns = f64::from(area.width);
        let rows = f64::from(area.height);

        let cell_width = (extent / columns).max(extent / (2.0 * rows));
        let cell_height = cell_width * 2.0;
        let half_width = columns * cell_width / 2.0;
        let half_height = rows * cell_height / 2.0;

        Some(Self {
            x_bounds: [-half_width, half_width],
            y_bounds: [-half_height, half_height],
            cell_width,
            dot: cell_width / 2.0,
        })
    }
}

/// Draws a prepared face on a braille canvas
#[derive(Debug, Clone, PartialEq)]
pub struct ClockFaceWidget {
    list: DrawList,
    extent: f64,
}

impl ClockFaceWidget {
    pub fn new(list: DrawList, diameter: f64) -> Self {
        Self {
            list,
            extent: diameter + FACE_PADDING * 2.0,
        }
    }
}

impl Widget for ClockFaceWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let Some(viewport) = Viewport::fit(area, self.extent) else {
            return;
        };

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds(viewport.x_bounds)
            .y_bounds(viewport.y_bounds)
            .paint(|ctx| {
                let mut surface = CanvasSurface::new(ctx, viewport.dot, viewport.cell_width);
                Painter::paint(&self.list, &mut surface);
            })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::state::clock::ClockFaceModel,
        domain::geometry::FaceGeometry,
        presentation::{config::Theme, face::render_face},
    };

    fn default_widget() -> ClockFaceWidget {
        let geometry = FaceGeometry::default();
        let list = render_face(&ClockFaceModel::default(), &geometry, &Theme::default());
        ClockFaceWidget::new(list, geometry.diameter())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_viewport_keeps_dots_square() {
        let viewport = Viewport::fit(Rect::new(0, 0, 80, 24), 270.0).expect("non-empty");
        let x_span = viewport.x_bounds[1] - viewport.x_bounds[0];
        let y_span = viewport.y_bounds[1] - viewport.y_bounds[0];

        assert!(x_span >= 270.0);
        assert!(y_span >= 270.0);
        // 2 dots per column, 4 dots per row
        assert!((x_span / 160.0 - y_span / 96.0).abs() < 1e-9);
    }

    #[test]
    fn test_viewport_empty_area() {
        assert_eq!(Viewport::fit(Rect::new(0, 0, 0, 10), 100.0), None);
    }

    #[test]
    fn test_render_prints_numerals() {
        let area = Rect::new(0, 0, 80, 40);
        let mut buffer = Buffer::empty(area);

        default_widget().render(area, &mut buffer);

        let content = buffer_text(&buffer);
        for numeral in ["12", "3", "6", "9", "11"] {
            assert!(content.contains(numeral), "missing {numeral}");
        }
    }

    #[test]
    fn test_render_is_stable() {
        let area = Rect::new(0, 0, 60, 30);
        let mut first = Buffer::empty(area);
        let mut second = Buffer::empty(area);

        default_widget().render(area, &mut first);
        default_widget().render(area, &mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn test_render_into_empty_area_does_nothing() {
        let area = Rect::new(0, 0, 0, 0);
        let mut buffer = Buffer::empty(area);
        default_widget().render(area, &mut buffer);
    }
}
