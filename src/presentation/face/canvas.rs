use std::f64::consts::TAU;

use ratatui::{
    style::{Color, Style},
    text::Line,
    widgets::canvas::{Context, Line as CanvasLine, Points},
};

use super::{
    scene::{CircleClip, Point, RotatedRect, Shadow},
    surface::DrawingSurface,
};

/// Upper bound on the rings used to fake a blur
const MAX_SHADOW_RINGS: usize = 4;

/// [`DrawingSurface`] backed by a ratatui canvas.
///
/// Canvas coordinates are the face coordinates, so the caller must set the
/// canvas bounds around the face. Terminal text cannot rotate: every label is
/// printed upright, which is what the label counter-rotation asks for anyway.
pub struct CanvasSurface<'c, 'a> {
    ctx: &'c mut Context<'a>,
    /// Face units covered by one braille dot
    dot: f64,
    /// Face units covered by one terminal column
    cell_width: f64,
    clip: Option<CircleClip>,
}

impl<'c, 'a> CanvasSurface<'c, 'a> {
    pub fn new(ctx: &'c mut Context<'a>, dot: f64, cell_width: f64) -> Self {
        Self {
            ctx,
            dot: dot.max(f64::EPSILON),
            cell_width,
            clip: None,
        }
    }

    fn visible(&self, point: Point) -> bool {
        self.clip.map_or(true, |clip| clip.contains(point))
    }

    fn ring_points(&self, center: Point, radius: f64) -> Vec<(f64, f64)> {
        let circumference = TAU * radius;
        let steps = (circumference / self.dot).ceil().max(8.0) as usize;
        (0..steps)
            .map(|i| {
                let theta = TAU * i as f64 / steps as f64;
                Point::new(
                    center.x + radius * theta.cos(),
                    center.y + radius * theta.sin(),
                )
            })
            .filter(|p| self.visible(*p))
            .map(|p| (p.x, p.y))
            .collect()
    }

    fn draw_segment(&mut self, a: Point, b: Point, color: Color) {
        let segment = match self.clip {
            Some(clip) => clip_segment(a, b, clip),
            None => Some((a, b)),
        };
        if let Some((a, b)) = segment {
            self.ctx.draw(&CanvasLine {
                x1: a.x,
                y1: a.y,
                x2: b.x,
                y2: b.y,
                color,
            });
        }
    }
}

impl DrawingSurface for CanvasSurface<'_, '_> {
    fn fill_disc(&mut self, center: Point, radius: f64, color: Color) {
        let steps = (radius / self.dot).ceil() as i64;
        let mut coords = Vec::with_capacity((steps * steps * 4).max(0) as usize);
        for i in -steps..=steps {
            for j in -steps..=steps {
                let p = Point::new(
                    center.x + i as f64 * self.dot,
                    center.y + j as f64 * self.dot,
                );
                if p.distance(center) <= radius && self.visible(p) {
                    coords.push((p.x, p.y));
                }
            }
        }
        self.ctx.draw(&Points {
            coords: &coords,
            color,
        });
        // Later shapes go on a fresh layer so they are not merged into the fill
        self.ctx.layer();
    }

    fn clip_circle(&mut self, clip: Option<CircleClip>) {
        self.clip = clip;
    }

    fn drop_shadow(&mut self, shadow: &Shadow) {
        let center = Point::new(
            shadow.center.x + shadow.offset.x,
            shadow.center.y + shadow.offset.y,
        );
        let rings = ((shadow.blur / 4.0 / self.dot).ceil() as usize).clamp(1, MAX_SHADOW_RINGS);
        for ring in 0..rings {
            let coords = self.ring_points(center, shadow.radius + ring as f64 * self.dot);
            self.ctx.draw(&Points {
                coords: &coords,
                color: shadow.color,
            });
        }
        self.ctx.layer();
    }

    fn draw_rotated_rect(&mut self, rect: &RotatedRect, color: Color) {
        let (near, far) = rect.axis();
        let direction = Point::from_dial_angle(rect.angle);
        let normal = Point::new(-direction.y, direction.x);

        let lines = ((rect.thickness / self.dot).round() as usize).max(1);
        for line in 0..lines {
            let shift = if lines == 1 {
                0.0
            } else {
                -rect.thickness / 2.0 + rect.thickness * line as f64 / (lines - 1) as f64
            };
            self.draw_segment(near.offset(normal, shift), far.offset(normal, shift), color);
        }
    }

    fn draw_text(&mut self, center: Point, text: &str, _rotation: f64, color: Color) {
        if !self.visible(center) {
            return;
        }
        let width = text.chars().count() as f64 * self.cell_width;
        self.ctx.print(
            center.x - width / 2.0,
            center.y,
            Line::styled(text.to_string(), Style::default().fg(color)),
        );
    }
}

/// Part of segment `a`-`b` that lies inside `clip`, if any
pub fn clip_segment(a: Point, b: Point, clip: CircleClip) -> Option<(Point, Point)> {
    let d = Point::new(b.x - a.x, b.y - a.y);
    let f = Point::new(a.x - clip.center.x, a.y - clip.center.y);

    let qa = d.x * d.x + d.y * d.y;
    if qa == 0.0 {
        return clip.contains(a).then_some((a, a));
    }
    let qb = 2.0 * (f.x * d.x + f.y * d.y);
    let qc = f.x * f.x + f.y * f.y - clip.radius * clip.radius;

    let discriminant = qb * qb - 4.0 * qa * qc;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    let enter = ((-qb - root) / (2.0 * qa)).max(0.0);
    let exit = ((-qb + root) / (2.0 * qa)).min(1.0);
    if enter > exit {
        return None;
    }

    Some((
        Point::new(a.x + d.x * enter, a.y + d.y * enter),
        Point::new(a.x + d.x * exit, a.y + d.y * exit),
    ))
}
