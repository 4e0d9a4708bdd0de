//! Serializable on-disk representation of the canvas.
//!
//! The file format is a JSON document with a flat shape list. Each
//! record carries a `type` tag and flattened scalar fields rather than
//! nested points, which keeps files readable and hand-editable.

use serde::{Deserialize, Serialize};

use crate::canvas::document::CanvasDocument;
use crate::canvas::shape::{CircleShape, LineShape, RectShape, Shape};
use bevy::prelude::*;

/// One serialized shape record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum SavedShape {
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Rectangle { x: f32, y: f32, width: f32, height: f32 },
    Circle { x: f32, y: f32, diameter: f32 },
}

impl SavedShape {
    pub fn from_shape(shape: &Shape) -> Self {
        match shape {
            Shape::Line(l) => SavedShape::Line {
                x1: l.start.x,
                y1: l.start.y,
                x2: l.end.x,
                y2: l.end.y,
            },
            Shape::Rect(r) => SavedShape::Rectangle {
                x: r.origin.x,
                y: r.origin.y,
                width: r.size.x,
                height: r.size.y,
            },
            Shape::Circle(c) => SavedShape::Circle {
                x: c.origin.x,
                y: c.origin.y,
                diameter: c.diameter,
            },
        }
    }

    pub fn into_shape(self) -> Shape {
        match self {
            SavedShape::Line { x1, y1, x2, y2 } => Shape::Line(LineShape {
                start: Vec2::new(x1, y1),
                end: Vec2::new(x2, y2),
            }),
            SavedShape::Rectangle {
                x,
                y,
                width,
                height,
            } => Shape::Rect(RectShape {
                origin: Vec2::new(x, y),
                size: Vec2::new(width, height),
            }),
            SavedShape::Circle { x, y, diameter } => Shape::Circle(CircleShape {
                origin: Vec2::new(x, y),
                diameter,
            }),
        }
    }
}

/// Complete file contents: every shape in draw order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SavedCanvas {
    pub shapes: Vec<SavedShape>,
}

impl SavedCanvas {
    /// Snapshot the live document for serialization.
    pub fn capture(document: &CanvasDocument) -> Self {
        Self {
            shapes: document.iter().map(SavedShape::from_shape).collect(),
        }
    }
}
