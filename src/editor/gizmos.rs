//! Immediate-mode rendering of the shape document.

use bevy::prelude::*;

use crate::canvas::{CanvasDocument, CurrentShape, Shape};

use super::camera::canvas_to_world;

const HANDLE_SIZE: f32 = 4.0;

fn rect_center_world(origin: Vec2, size: Vec2) -> Vec2 {
    canvas_to_world(origin + size / 2.0)
}

/// Draw every shape in the document each frame.
pub fn draw_shapes(mut gizmos: Gizmos, document: Res<CanvasDocument>) {
    let line_color = Color::srgb(0.9, 0.9, 0.9);
    let rect_color = Color::srgb(0.3, 0.8, 0.4);
    let circle_color = Color::srgb(0.4, 0.6, 1.0);

    for shape in document.iter() {
        match shape {
            Shape::Line(l) => {
                gizmos.line_2d(canvas_to_world(l.start), canvas_to_world(l.end), line_color);
            }
            Shape::Rect(r) => {
                gizmos.rect_2d(
                    Isometry2d::from_translation(rect_center_world(r.origin, r.size)),
                    r.size,
                    rect_color,
                );
            }
            Shape::Circle(c) => {
                gizmos.circle_2d(
                    Isometry2d::from_translation(canvas_to_world(c.center())),
                    c.diameter / 2.0,
                    circle_color,
                );
            }
        }
    }
}

/// Draw handle indicators on the selected shape.
pub fn draw_selection_indicators(
    mut gizmos: Gizmos,
    document: Res<CanvasDocument>,
    selection: Res<CurrentShape>,
) {
    let Some(shape) = selection.index.and_then(|i| document.get(i)) else {
        return;
    };

    let selection_color = Color::srgb(0.2, 0.6, 1.0);

    match shape {
        Shape::Line(l) => {
            // Square handles at each endpoint
            for p in [l.start, l.end] {
                gizmos.rect_2d(
                    Isometry2d::from_translation(canvas_to_world(p)),
                    Vec2::splat(HANDLE_SIZE * 2.0),
                    selection_color,
                );
            }
        }
        Shape::Rect(r) => {
            gizmos.rect_2d(
                Isometry2d::from_translation(rect_center_world(r.origin, r.size)),
                r.size,
                selection_color,
            );

            let min = r.origin;
            let max = r.origin + r.size;
            let mid = r.origin + r.size / 2.0;

            // Corner handles
            let corners = [
                min,
                Vec2::new(max.x, min.y),
                max,
                Vec2::new(min.x, max.y),
            ];
            for corner in corners {
                gizmos.rect_2d(
                    Isometry2d::from_translation(canvas_to_world(corner)),
                    Vec2::splat(HANDLE_SIZE * 2.0),
                    selection_color,
                );
            }

            // Edge handles (smaller)
            let edges = [
                Vec2::new(mid.x, min.y),
                Vec2::new(mid.x, max.y),
                Vec2::new(min.x, mid.y),
                Vec2::new(max.x, mid.y),
            ];
            for edge in edges {
                gizmos.rect_2d(
                    Isometry2d::from_translation(canvas_to_world(edge)),
                    Vec2::splat(HANDLE_SIZE * 1.5),
                    selection_color,
                );
            }
        }
        Shape::Circle(c) => {
            // Highlight ring just outside the circle
            gizmos.circle_2d(
                Isometry2d::from_translation(canvas_to_world(c.center())),
                c.diameter / 2.0 + HANDLE_SIZE,
                selection_color,
            );
        }
    }
}
