use std::cmp::Ordering;

use ratatui::style::Color;

use crate::domain::clock::TimeUnit;

/// A point in face coordinates: origin at the face centre, x right, y up
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector for a dial angle: clockwise degrees, 0 at 9 o'clock
    pub fn from_dial_angle(degrees: f64) -> Self {
        let radians = degrees.to_radians();
        Self {
            x: -radians.cos(),
            y: radians.sin(),
        }
    }

    pub fn offset(self, direction: Point, distance: f64) -> Self {
        Self {
            x: self.x + direction.x * distance,
            y: self.y + direction.y * distance,
        }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Z-ordering key for draw items.
///
/// Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const OUTER_SHADOW: ZIndex = ZIndex(0);
    pub const OUTER_DISC: ZIndex = ZIndex(1);
    pub const INNER_SHADOW: ZIndex = ZIndex(2);
    pub const INNER_DISC: ZIndex = ZIndex(3);
    pub const HANDS: ZIndex = ZIndex(4);
    pub const LABELS: ZIndex = ZIndex(5);
    pub const SECOND_HAND: ZIndex = ZIndex(i32::MAX);
}

/// Circular clipping region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleClip {
    pub center: Point,
    pub radius: f64,
}

impl CircleClip {
    pub fn contains(&self, point: Point) -> bool {
        self.center.distance(point) <= self.radius
    }
}

/// Blurred, offset silhouette of a disc
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub center: Point,
    pub radius: f64,
    pub color: Color,
    pub alpha: f64,
    pub blur: f64,
    pub offset: Point,
}

/// A bar of `length` x `thickness` starting `start` units from `pivot` and
/// rotated around it by `angle` dial degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedRect {
    pub pivot: Point,
    pub angle: f64,
    pub start: f64,
    pub length: f64,
    pub thickness: f64,
}

impl RotatedRect {
    /// Centre line of the bar, from near end to far end
    pub fn axis(&self) -> (Point, Point) {
        let direction = Point::from_dial_angle(self.angle);
        (
            self.pivot.offset(direction, self.start),
            self.pivot.offset(direction, self.start + self.length),
        )
    }
}

/// Renderer-agnostic draw command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    DropShadow(Shadow),
    Disc {
        center: Point,
        radius: f64,
        color: Color,
    },
    Hand {
        unit: TimeUnit,
        rect: RotatedRect,
        color: Color,
    },
    Label {
        text: String,
        center: Point,
        /// Rotation of the glyph relative to its placement
        rotation: f64,
        width: f64,
        color: Color,
    },
}

/// A single draw item: z-index, insertion order, command and clip.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub z: ZIndex,
    pub order: u32,
    pub cmd: DrawCommand,
    pub clip: Option<CircleClip>,
}

/// Recorded draw stream for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    items: Vec<DrawItem>,
    clip_stack: Vec<CircleClip>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in insertion order
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index. The item inherits the
    /// innermost active clip.
    pub fn push(&mut self, z: ZIndex, cmd: DrawCommand) {
        let order = self.items.len() as u32;
        self.items.push(DrawItem {
            z,
            order,
            cmd,
            clip: self.clip_stack.last().copied(),
        });
    }

    pub fn push_clip(&mut self, clip: CircleClip) {
        self.clip_stack.push(clip);
    }

    pub fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }

    /// Items sorted by z-index; ties keep insertion order
    pub fn in_paint_order(&self) -> Vec<&DrawItem> {
        let mut sorted: Vec<&DrawItem> = self.items.iter().collect();
        sorted.sort_by(|a, b| match a.z.cmp(&b.z) {
            Ordering::Equal => a.order.cmp(&b.order),
            other => other,
        });
        sorted
    }
}
