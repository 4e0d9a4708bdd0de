//! The in-memory shape document and the current selection.

use bevy::prelude::*;

use super::shape::Shape;

/// Ordered collection of every shape on the canvas.
///
/// Insertion order is draw order: later shapes render on top of and
/// win hit tests against earlier ones.
#[derive(Resource, Default, Debug)]
pub struct CanvasDocument {
    shapes: Vec<Shape>,
}

impl CanvasDocument {
    pub fn push(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn extend(&mut self, shapes: impl IntoIterator<Item = Shape>) {
        self.shapes.extend(shapes);
    }

    /// Find the topmost shape under a canvas point, scanning from the
    /// most recently added shape down.
    pub fn top_shape_at(&self, p: Vec2) -> Option<usize> {
        self.shapes
            .iter()
            .enumerate()
            .rev()
            .find(|(_, shape)| shape.hit_test(p))
            .map(|(index, _)| index)
    }
}

/// Index of the currently selected shape, if any.
#[derive(Resource, Default, Debug)]
pub struct CurrentShape {
    pub index: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::shape::{RectShape, Shape};

    fn rect_at(x: f32, y: f32, w: f32, h: f32) -> Shape {
        Shape::Rect(RectShape {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        })
    }

    #[test]
    fn test_push_returns_index_in_order() {
        let mut doc = CanvasDocument::default();
        assert_eq!(doc.push(rect_at(0.0, 0.0, 10.0, 10.0)), 0);
        assert_eq!(doc.push(rect_at(5.0, 5.0, 10.0, 10.0)), 1);
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_top_shape_at_prefers_most_recent() {
        let mut doc = CanvasDocument::default();
        doc.push(rect_at(0.0, 0.0, 100.0, 100.0));
        doc.push(rect_at(50.0, 50.0, 100.0, 100.0));
        // Overlap region: the later shape wins
        assert_eq!(doc.top_shape_at(Vec2::new(75.0, 75.0)), Some(1));
        // Only the first shape covers this point
        assert_eq!(doc.top_shape_at(Vec2::new(10.0, 10.0)), Some(0));
    }

    #[test]
    fn test_top_shape_at_miss() {
        let mut doc = CanvasDocument::default();
        doc.push(rect_at(0.0, 0.0, 10.0, 10.0));
        assert_eq!(doc.top_shape_at(Vec2::new(500.0, 500.0)), None);
    }

    #[test]
    fn test_clear_empties_document() {
        let mut doc = CanvasDocument::default();
        doc.push(rect_at(0.0, 0.0, 10.0, 10.0));
        doc.clear();
        assert!(doc.is_empty());
        assert_eq!(doc.top_shape_at(Vec2::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_extend_appends() {
        let mut doc = CanvasDocument::default();
        doc.push(rect_at(0.0, 0.0, 10.0, 10.0));
        doc.extend(vec![
            rect_at(20.0, 0.0, 10.0, 10.0),
            rect_at(40.0, 0.0, 10.0, 10.0),
        ]);
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.top_shape_at(Vec2::new(45.0, 5.0)), Some(2));
    }
}
