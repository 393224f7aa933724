use ratatui::style::Color;

use crate::{
    core::state::clock::ClockFaceModel,
    domain::{clock::TimeUnit, geometry::FaceGeometry},
    presentation::config::Theme,
};

use super::scene::{CircleClip, DrawCommand, DrawList, Point, RotatedRect, Shadow, ZIndex};

/// Shadow cast by the whole face
pub const OUTER_SHADOW_ALPHA: f64 = 0.09;
pub const OUTER_SHADOW_BLUR: f64 = 60.0;
// y points up, so this is 5 right and 5 down
pub const OUTER_SHADOW_OFFSET: Point = Point::new(5.0, -5.0);

/// Shadow of the inner disc (elevation 2)
pub const INNER_SHADOW_ALPHA: f64 = 0.2;
pub const INNER_SHADOW_BLUR: f64 = 2.0;
pub const INNER_SHADOW_OFFSET: Point = Point::new(0.0, -2.0);

/// Build the draw list for the current face.
///
/// Pure: the same model, geometry and theme always produce the same list.
pub fn render_face(model: &ClockFaceModel, geometry: &FaceGeometry, theme: &Theme) -> DrawList {
    let mut list = DrawList::new();
    let radius = geometry.radius();

    list.push(
        ZIndex::OUTER_SHADOW,
        DrawCommand::DropShadow(Shadow {
            center: Point::ORIGIN,
            radius,
            color: theme.shadow,
            alpha: OUTER_SHADOW_ALPHA,
            blur: OUTER_SHADOW_BLUR,
            offset: OUTER_SHADOW_OFFSET,
        }),
    );

    list.push_clip(CircleClip {
        center: Point::ORIGIN,
        radius,
    });

    list.push(
        ZIndex::OUTER_DISC,
        DrawCommand::Disc {
            center: Point::ORIGIN,
            radius,
            color: theme.background,
        },
    );

    let inner_radius = geometry.inner_diameter() / 2.0;
    list.push(
        ZIndex::INNER_SHADOW,
        DrawCommand::DropShadow(Shadow {
            center: Point::ORIGIN,
            radius: inner_radius,
            color: theme.shadow,
            alpha: INNER_SHADOW_ALPHA,
            blur: INNER_SHADOW_BLUR,
            offset: INNER_SHADOW_OFFSET,
        }),
    );
    list.push(
        ZIndex::INNER_DISC,
        DrawCommand::Disc {
            center: Point::ORIGIN,
            radius: inner_radius,
            color: theme.background,
        },
    );

    push_hand(&mut list, model, geometry, TimeUnit::Minutes, theme.foreground);
    push_hand(&mut list, model, geometry, TimeUnit::Hours, theme.foreground);

    for label in model.tick_labels() {
        list.push(
            ZIndex::LABELS,
            DrawCommand::Label {
                text: label.text(),
                center: Point::ORIGIN.offset(
                    Point::from_dial_angle(label.placement_angle),
                    geometry.label_radius(),
                ),
                rotation: label.counter_rotation(),
                width: geometry.label_width(),
                color: theme.foreground,
            },
        );
    }

    push_hand(&mut list, model, geometry, TimeUnit::Seconds, theme.primary);

    list.pop_clip();
    list
}

fn push_hand(
    list: &mut DrawList,
    model: &ClockFaceModel,
    geometry: &FaceGeometry,
    unit: TimeUnit,
    color: Color,
) {
    let length = geometry.hand_length(unit);
    if length <= 0.0 {
        return;
    }
    let z = match unit {
        TimeUnit::Seconds => ZIndex::SECOND_HAND,
        TimeUnit::Minutes | TimeUnit::Hours => ZIndex::HANDS,
    };
    list.push(
        z,
        DrawCommand::Hand {
            unit,
            rect: RotatedRect {
                pivot: Point::ORIGIN,
                angle: model.hand_angle(unit),
                start: 0.0,
                length,
                thickness: geometry.hand_thickness(unit),
            },
            color,
        },
    );
}
