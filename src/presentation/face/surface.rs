use ratatui::style::Color;

use super::scene::{CircleClip, DrawCommand, DrawList, Point, RotatedRect, Shadow};

/// What a host must offer for the face to be drawn on it
pub trait DrawingSurface {
    /// Fill a circular region with a solid color
    fn fill_disc(&mut self, center: Point, radius: f64, color: Color);
    /// Restrict subsequent drawing to a circle; `None` lifts the restriction
    fn clip_circle(&mut self, clip: Option<CircleClip>);
    fn drop_shadow(&mut self, shadow: &Shadow);
    fn draw_rotated_rect(&mut self, rect: &RotatedRect, color: Color);
    fn draw_text(&mut self, center: Point, text: &str, rotation: f64, color: Color);
}

/// Replays a draw list onto a surface in paint order
#[derive(Debug, Clone, Copy, Default)]
pub struct Painter;

impl Painter {
    pub fn paint(list: &DrawList, surface: &mut dyn DrawingSurface) {
        let mut active_clip = None;
        surface.clip_circle(None);

        for item in list.in_paint_order() {
            if item.clip != active_clip {
                surface.clip_circle(item.clip);
                active_clip = item.clip;
            }

            match &item.cmd {
                DrawCommand::DropShadow(shadow) => surface.drop_shadow(shadow),
                DrawCommand::Disc {
                    center,
                    radius,
                    color,
                } => surface.fill_disc(*center, *radius, *color),
                DrawCommand::Hand { rect, color, .. } => surface.draw_rotated_rect(rect, *color),
                DrawCommand::Label {
                    text,
                    center,
                    rotation,
                    color,
                    ..
                } => surface.draw_text(*center, text, *rotation, *color),
            }
        }

        if active_clip.is_some() {
            surface.clip_circle(None);
        }
    }
}

/// One call received by a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    FillDisc {
        center: Point,
        radius: f64,
        color: Color,
    },
    ClipCircle(Option<CircleClip>),
    DropShadow(Shadow),
    RotatedRect(RotatedRect, Color),
    Text {
        center: Point,
        text: String,
        rotation: f64,
        color: Color,
    },
}

/// Surface that only remembers what it was asked to draw
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawingSurface for RecordingSurface {
    fn fill_disc(&mut self, center: Point, radius: f64, color: Color) {
        self.calls.push(SurfaceCall::FillDisc {
            center,
            radius,
            color,
        });
    }

    fn clip_circle(&mut self, clip: Option<CircleClip>) {
        self.calls.push(SurfaceCall::ClipCircle(clip));
    }

    fn drop_shadow(&mut self, shadow: &Shadow) {
        self.calls.push(SurfaceCall::DropShadow(*shadow));
    }

    fn draw_rotated_rect(&mut self, rect: &RotatedRect, color: Color) {
        self.calls.push(SurfaceCall::RotatedRect(*rect, color));
    }

    fn draw_text(&mut self, center: Point, text: &str, rotation: f64, color: Color) {
        self.calls.push(SurfaceCall::Text {
            center,
            text: text.to_string(),
            rotation,
            color,
        });
    }
}
