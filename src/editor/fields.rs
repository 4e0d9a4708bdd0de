//! Text-field state backing the shape panel.
//!
//! Both panel forms hold raw strings; nothing is parsed until the user
//! commits with a button. Parsing failures surface through
//! [`FieldError`] and never partially mutate a shape.

use bevy::prelude::*;

use crate::canvas::{CircleShape, LineShape, RectShape, Shape, ShapeKind};

/// Input fields for the New Shape form. Meaning depends on the active
/// tool: lines read them as x1/y1/x2/y2, rectangles as x/y/width/height,
/// circles as x/y/diameter with `size2` unused.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct CreateFields {
    pub x: String,
    pub y: String,
    pub size1: String,
    pub size2: String,
}

impl CreateFields {
    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
        self.size1.clear();
        self.size2.clear();
    }
}

/// Input fields mirroring the currently selected shape.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct EditFields {
    pub x: String,
    pub y: String,
    pub size1: String,
    pub size2: String,
}

impl EditFields {
    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
        self.size1.clear();
        self.size2.clear();
    }

    /// Refresh the fields from a shape, or blank them when nothing is
    /// selected.
    pub fn populate(&mut self, shape: Option<&Shape>) {
        match shape {
            None => self.clear(),
            Some(Shape::Line(l)) => {
                self.x = fmt(l.start.x);
                self.y = fmt(l.start.y);
                self.size1 = fmt(l.end.x);
                self.size2 = fmt(l.end.y);
            }
            Some(Shape::Rect(r)) => {
                self.x = fmt(r.origin.x);
                self.y = fmt(r.origin.y);
                self.size1 = fmt(r.size.x);
                self.size2 = fmt(r.size.y);
            }
            Some(Shape::Circle(c)) => {
                self.x = fmt(c.origin.x);
                self.y = fmt(c.origin.y);
                self.size1 = fmt(c.diameter);
                self.size2.clear();
            }
        }
    }
}

/// Validation error shown in a modal dialog until dismissed.
#[derive(Resource, Default)]
pub struct FieldError {
    pub message: Option<String>,
}

/// Per-kind field labels: (x, y, size1, size2). A `None` fourth label
/// means the field is hidden for that kind.
pub fn field_labels(
    kind: ShapeKind,
) -> (&'static str, &'static str, &'static str, Option<&'static str>) {
    match kind {
        ShapeKind::Line => ("X1", "Y1", "X2", Some("Y2")),
        ShapeKind::Rectangle => ("X", "Y", "Width", Some("Height")),
        ShapeKind::Circle => ("X", "Y", "Diameter", None),
    }
}

fn fmt(v: f32) -> String {
    format!("{}", v)
}

fn parse_field(label: &str, text: &str) -> Result<f32, String> {
    text.trim()
        .parse::<f32>()
        .map_err(|_| format!("Invalid value for {}: '{}'", label, text.trim()))
}

fn parse_size(label: &str, text: &str) -> Result<f32, String> {
    let value = parse_field(label, text)?;
    if value < 0.0 {
        return Err(format!("{} cannot be negative", label));
    }
    Ok(value)
}

/// Build a new shape of the given kind from the New Shape form.
pub fn shape_from_fields(kind: ShapeKind, fields: &CreateFields) -> Result<Shape, String> {
    let (lx, ly, ls1, ls2) = field_labels(kind);
    let x = parse_field(lx, &fields.x)?;
    let y = parse_field(ly, &fields.y)?;

    match kind {
        ShapeKind::Line => {
            let x2 = parse_field(ls1, &fields.size1)?;
            let y2 = parse_field(ls2.unwrap_or("Y2"), &fields.size2)?;
            Ok(Shape::Line(LineShape {
                start: Vec2::new(x, y),
                end: Vec2::new(x2, y2),
            }))
        }
        ShapeKind::Rectangle => {
            let width = parse_size(ls1, &fields.size1)?;
            let height = parse_size(ls2.unwrap_or("Height"), &fields.size2)?;
            Ok(Shape::Rect(RectShape {
                origin: Vec2::new(x, y),
                size: Vec2::new(width, height),
            }))
        }
        ShapeKind::Circle => {
            let diameter = parse_size(ls1, &fields.size1)?;
            Ok(Shape::Circle(CircleShape {
                origin: Vec2::new(x, y),
                diameter,
            }))
        }
    }
}

/// Overwrite a shape's geometry from the edit form.
///
/// All fields are parsed before any mutation, so a bad field leaves the
/// shape exactly as it was.
pub fn apply_edit(shape: &mut Shape, fields: &EditFields) -> Result<(), String> {
    let (lx, ly, ls1, ls2) = field_labels(shape.kind());
    let x = parse_field(lx, &fields.x)?;
    let y = parse_field(ly, &fields.y)?;

    match shape {
        Shape::Line(l) => {
            let x2 = parse_field(ls1, &fields.size1)?;
            let y2 = parse_field(ls2.unwrap_or("Y2"), &fields.size2)?;
            l.start = Vec2::new(x, y);
            l.end = Vec2::new(x2, y2);
        }
        Shape::Rect(r) => {
            let width = parse_size(ls1, &fields.size1)?;
            let height = parse_size(ls2.unwrap_or("Height"), &fields.size2)?;
            r.origin = Vec2::new(x, y);
            r.size = Vec2::new(width, height);
        }
        Shape::Circle(c) => {
            let diameter = parse_size(ls1, &fields.size1)?;
            c.origin = Vec2::new(x, y);
            c.diameter = diameter;
        }
    }
    Ok(())
}
