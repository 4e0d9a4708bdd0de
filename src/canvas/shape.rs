//! Shape variants and their editing behavior.
//!
//! Each variant owns its own hit test, handle classification, and
//! handle-driven resize math; the `Shape` enum only dispatches. Shapes
//! live in canvas coordinates: y grows downward and a bounding box
//! origin is the visual top-left corner.

use bevy::prelude::*;

use crate::common::DragHandle;
use crate::constants::HIT_TOLERANCE;

use super::geometry::{
    near_bottom_edge, near_left_edge, near_right_edge, near_ring, near_top_edge, point_in_ellipse,
    point_in_rect, point_near_endpoint, point_near_segment, Endpoint,
};

/// The three supported primitive kinds, used both as the drawing-tool
/// selector and as the tag when constructing shapes from field input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeKind {
    #[default]
    Line,
    Rectangle,
    Circle,
}

impl ShapeKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeKind::Line => "Line (L)",
            ShapeKind::Rectangle => "Rectangle (R)",
            ShapeKind::Circle => "Circle (C)",
        }
    }

    pub fn all() -> &'static [ShapeKind] {
        &[ShapeKind::Line, ShapeKind::Rectangle, ShapeKind::Circle]
    }
}

/// A straight segment between two independently draggable endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct LineShape {
    pub start: Vec2,
    pub end: Vec2,
}

/// Axis-aligned rectangle. `origin` is the top-left corner and `size`
/// components are kept non-negative by every resize path.
#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    pub origin: Vec2,
    pub size: Vec2,
}

/// Circle stored as the top-left of its bounding box plus a diameter,
/// so width and height can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    pub origin: Vec2,
    pub diameter: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(LineShape),
    Rect(RectShape),
    Circle(CircleShape),
}

impl LineShape {
    fn classify_handle(&self, p: Vec2) -> DragHandle {
        match point_near_endpoint(p, self.start, self.end, HIT_TOLERANCE) {
            Some(Endpoint::Start) => DragHandle::LineStart,
            Some(Endpoint::End) => DragHandle::LineEnd,
            None => DragHandle::Body,
        }
    }

    fn drag_resize(&mut self, handle: DragHandle, delta: Vec2) {
        match handle {
            DragHandle::LineStart => self.start += delta,
            DragHandle::LineEnd => self.end += delta,
            _ => {}
        }
    }
}

impl RectShape {
    /// Classify in fixed priority: top corners/edge, bottom corners/edge,
    /// left edge, right edge, then body. First match wins.
    fn classify_handle(&self, p: Vec2) -> DragHandle {
        let (o, s) = (self.origin, self.size);
        if near_top_edge(p, o, s, HIT_TOLERANCE) {
            if near_left_edge(p, o, s, HIT_TOLERANCE) {
                DragHandle::TopLeft
            } else if near_right_edge(p, o, s, HIT_TOLERANCE) {
                DragHandle::TopRight
            } else {
                DragHandle::Top
            }
        } else if near_bottom_edge(p, o, s, HIT_TOLERANCE) {
            if near_left_edge(p, o, s, HIT_TOLERANCE) {
                DragHandle::BottomLeft
            } else if near_right_edge(p, o, s, HIT_TOLERANCE) {
                DragHandle::BottomRight
            } else {
                DragHandle::Bottom
            }
        } else if near_left_edge(p, o, s, HIT_TOLERANCE) {
            DragHandle::Left
        } else if near_right_edge(p, o, s, HIT_TOLERANCE) {
            DragHandle::Right
        } else {
            DragHandle::Body
        }
    }

    /// Move the edges named by `handle` to the pointer, then normalize.
    ///
    /// Edges are tracked independently so a drag may cross the opposite
    /// edge; normalization swaps the crossed pair back so the stored
    /// origin is always the minimum corner and size stays non-negative.
    /// With aspect lock held the larger candidate dimension becomes a
    /// common side length, re-derived so the corner or edge opposite the
    /// dragged handle stays fixed.
    fn drag_resize(&mut self, handle: DragHandle, pointer: Vec2, aspect_lock: bool) {
        let mut left = self.origin.x;
        let mut top = self.origin.y;
        let mut right = left + self.size.x;
        let mut bottom = top + self.size.y;

        if matches!(
            handle,
            DragHandle::Left | DragHandle::TopLeft | DragHandle::BottomLeft
        ) {
            left = pointer.x;
        }
        if matches!(
            handle,
            DragHandle::Right | DragHandle::TopRight | DragHandle::BottomRight
        ) {
            right = pointer.x;
        }
        if matches!(
            handle,
            DragHandle::Top | DragHandle::TopLeft | DragHandle::TopRight
        ) {
            top = pointer.y;
        }
        if matches!(
            handle,
            DragHandle::Bottom | DragHandle::BottomLeft | DragHandle::BottomRight
        ) {
            bottom = pointer.y;
        }

        if aspect_lock {
            let side = (right - left).abs().max((bottom - top).abs());
            match handle {
                DragHandle::TopLeft => {
                    left = right - side;
                    top = bottom - side;
                }
                DragHandle::TopRight => {
                    right = left + side;
                    top = bottom - side;
                }
                DragHandle::BottomLeft => {
                    left = right - side;
                    bottom = top + side;
                }
                DragHandle::BottomRight => {
                    right = left + side;
                    bottom = top + side;
                }
                DragHandle::Left => left = right - side,
                DragHandle::Right => right = left + side,
                DragHandle::Top => top = bottom - side,
                DragHandle::Bottom => bottom = top + side,
                _ => {}
            }
        }

        self.origin = Vec2::new(left.min(right), top.min(bottom));
        self.size = Vec2::new((right - left).abs(), (bottom - top).abs());
    }
}

impl CircleShape {
    pub fn center(&self) -> Vec2 {
        self.origin + Vec2::splat(self.diameter / 2.0)
    }

    /// Resize against the fixed center: the new radius is the larger of
    /// the pointer's axis distances from the center, so the ring follows
    /// the pointer regardless of drag angle.
    fn drag_resize(&mut self, pointer: Vec2) {
        let center = self.center();
        let radius = (pointer.x - center.x)
            .abs()
            .max((pointer.y - center.y).abs());
        self.origin = center - Vec2::splat(radius);
        self.diameter = radius * 2.0;
    }
}

impl Shape {
    /// A zero-sized shape of the given kind anchored at `p`, as created
    /// lazily on the first pointer move of a drawing gesture.
    pub fn new_at(kind: ShapeKind, p: Vec2) -> Self {
        match kind {
            ShapeKind::Line => Shape::Line(LineShape { start: p, end: p }),
            ShapeKind::Rectangle => Shape::Rect(RectShape {
                origin: p,
                size: Vec2::ZERO,
            }),
            ShapeKind::Circle => Shape::Circle(CircleShape {
                origin: p,
                diameter: 0.0,
            }),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(_) => ShapeKind::Line,
            Shape::Rect(_) => ShapeKind::Rectangle,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    /// Whole-shape hit test used by the topmost-shape resolver.
    pub fn hit_test(&self, p: Vec2) -> bool {
        match self {
            Shape::Line(l) => {
                point_near_segment(p, l.start, l.end, HIT_TOLERANCE)
                    || point_near_endpoint(p, l.start, l.end, HIT_TOLERANCE).is_some()
            }
            Shape::Rect(r) => point_in_rect(p, r.origin, r.size),
            Shape::Circle(c) => point_in_ellipse(p, c.origin, Vec2::splat(c.diameter)),
        }
    }

    /// Determine which handle is under a point already known to hit the
    /// shape. Endpoint/ring/edge handles take precedence over the body.
    pub fn classify_handle(&self, p: Vec2) -> DragHandle {
        match self {
            Shape::Line(l) => l.classify_handle(p),
            Shape::Rect(r) => r.classify_handle(p),
            Shape::Circle(c) => {
                if near_ring(p, c.origin, c.diameter, HIT_TOLERANCE) {
                    DragHandle::Ring
                } else {
                    DragHandle::Body
                }
            }
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Line(l) => {
                l.start += delta;
                l.end += delta;
            }
            Shape::Rect(r) => r.origin += delta,
            Shape::Circle(c) => c.origin += delta,
        }
    }

    /// Rebuild geometry from a drawing gesture spanning anchor to
    /// pointer. Rectangles span the two points (height forced equal to
    /// width under aspect lock); circles take the smaller axis delta as
    /// diameter; lines connect the points directly.
    pub fn update_from_gesture(&mut self, anchor: Vec2, pointer: Vec2, aspect_lock: bool) {
        match self {
            Shape::Line(l) => {
                l.start = anchor;
                l.end = pointer;
            }
            Shape::Rect(r) => {
                let w = (pointer.x - anchor.x).abs();
                let h = if aspect_lock {
                    w
                } else {
                    (pointer.y - anchor.y).abs()
                };
                r.size = Vec2::new(w, h);
                r.origin = Vec2::new(anchor.x.min(pointer.x), anchor.y.min(pointer.y));
            }
            Shape::Circle(c) => {
                let d = (pointer.x - anchor.x)
                    .abs()
                    .min((pointer.y - anchor.y).abs());
                c.diameter = d;
                c.origin = Vec2::new(anchor.x.min(pointer.x), anchor.y.min(pointer.y));
            }
        }
    }

    /// Apply one resize step of an active gesture. Rectangles follow the
    /// pointer's absolute position, circles resize against their center,
    /// and lines move the grabbed endpoint by the incremental delta.
    pub fn drag_resize(&mut self, handle: DragHandle, pointer: Vec2, delta: Vec2, aspect_lock: bool) {
        match self {
            Shape::Line(l) => l.drag_resize(handle, delta),
            Shape::Rect(r) => r.drag_resize(handle, pointer, aspect_lock),
            Shape::Circle(c) => c.drag_resize(pointer),
        }
    }

    /// Keyboard resize (Shift+arrows): rectangles grow per axis clamped
    /// to zero, circles grow uniformly by the larger delta, lines move
    /// their end point.
    pub fn nudge_resize(&mut self, delta: Vec2) {
        match self {
            Shape::Line(l) => l.end += delta,
            Shape::Rect(r) => {
                r.size.x = (r.size.x + delta.x).max(0.0);
                r.size.y = (r.size.y + delta.y).max(0.0);
            }
            Shape::Circle(c) => {
                c.diameter = (c.diameter + delta.x.max(delta.y)).max(0.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Shape {
        Shape::Rect(RectShape {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        })
    }

    fn circle(x: f32, y: f32, d: f32) -> Shape {
        Shape::Circle(CircleShape {
            origin: Vec2::new(x, y),
            diameter: d,
        })
    }

    fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> Shape {
        Shape::Line(LineShape {
            start: Vec2::new(x1, y1),
            end: Vec2::new(x2, y2),
        })
    }

    #[test]
    fn test_line_classify_endpoints_and_body() {
        let l = line(10.0, 10.0, 50.0, 50.0);
        assert_eq!(l.classify_handle(Vec2::new(10.0, 10.0)), DragHandle::LineStart);
        assert_eq!(l.classify_handle(Vec2::new(50.0, 50.0)), DragHandle::LineEnd);
        assert_eq!(l.classify_handle(Vec2::new(30.0, 30.0)), DragHandle::Body);
    }

    #[test]
    fn test_line_hit_and_miss() {
        let l = line(10.0, 10.0, 50.0, 50.0);
        assert!(l.hit_test(Vec2::new(10.0, 10.0)));
        assert!(l.hit_test(Vec2::new(30.0, 30.0)));
        assert!(!l.hit_test(Vec2::new(200.0, 200.0)));
    }

    #[test]
    fn test_rect_classify_priority() {
        let r = rect(0.0, 0.0, 100.0, 50.0);
        assert_eq!(r.classify_handle(Vec2::new(0.0, 0.0)), DragHandle::TopLeft);
        assert_eq!(r.classify_handle(Vec2::new(100.0, 0.0)), DragHandle::TopRight);
        assert_eq!(r.classify_handle(Vec2::new(50.0, 0.0)), DragHandle::Top);
        assert_eq!(r.classify_handle(Vec2::new(0.0, 50.0)), DragHandle::BottomLeft);
        assert_eq!(r.classify_handle(Vec2::new(100.0, 50.0)), DragHandle::BottomRight);
        assert_eq!(r.classify_handle(Vec2::new(50.0, 50.0)), DragHandle::Bottom);
        assert_eq!(r.classify_handle(Vec2::new(0.0, 25.0)), DragHandle::Left);
        assert_eq!(r.classify_handle(Vec2::new(100.0, 25.0)), DragHandle::Right);
        assert_eq!(r.classify_handle(Vec2::new(50.0, 25.0)), DragHandle::Body);
    }

    #[test]
    fn test_circle_classify_ring_over_body() {
        let c = circle(0.0, 0.0, 100.0);
        assert_eq!(c.classify_handle(Vec2::new(100.0, 50.0)), DragHandle::Ring);
        assert_eq!(c.classify_handle(Vec2::new(50.0, 50.0)), DragHandle::Body);
    }

    #[test]
    fn test_rect_resize_simple_edge() {
        let mut r = rect(0.0, 0.0, 100.0, 50.0);
        r.drag_resize(DragHandle::Right, Vec2::new(120.0, 25.0), Vec2::ZERO, false);
        let Shape::Rect(ref inner) = r else { panic!() };
        assert_eq!(inner.origin, Vec2::new(0.0, 0.0));
        assert_eq!(inner.size, Vec2::new(120.0, 50.0));
    }

    #[test]
    fn test_rect_resize_crossing_opposite_edge_normalizes() {
        let mut r = rect(0.0, 0.0, 100.0, 50.0);
        // Drag the left edge past the right edge
        r.drag_resize(DragHandle::Left, Vec2::new(130.0, 25.0), Vec2::ZERO, false);
        let Shape::Rect(ref inner) = r else { panic!() };
        assert_eq!(inner.origin, Vec2::new(100.0, 0.0));
        assert_eq!(inner.size, Vec2::new(30.0, 50.0));
        assert!(inner.size.x >= 0.0 && inner.size.y >= 0.0);
    }

    #[test]
    fn test_rect_resize_corner_crossing_both_edges() {
        let mut r = rect(10.0, 10.0, 40.0, 30.0);
        r.drag_resize(DragHandle::TopLeft, Vec2::new(80.0, 70.0), Vec2::ZERO, false);
        let Shape::Rect(ref inner) = r else { panic!() };
        // left crossed right (50), top crossed bottom (40)
        assert_eq!(inner.origin, Vec2::new(50.0, 40.0));
        assert_eq!(inner.size, Vec2::new(30.0, 30.0));
    }

    #[test]
    fn test_rect_aspect_lock_bottom_right_anchors_top_left() {
        let mut r = rect(0.0, 0.0, 100.0, 50.0);
        r.drag_resize(
            DragHandle::BottomRight,
            Vec2::new(130.0, 60.0),
            Vec2::ZERO,
            true,
        );
        let Shape::Rect(ref inner) = r else { panic!() };
        assert_eq!(inner.origin, Vec2::new(0.0, 0.0));
        assert_eq!(inner.size, Vec2::new(130.0, 130.0));
    }

    #[test]
    fn test_rect_aspect_lock_edge_handle() {
        let mut r = rect(0.0, 0.0, 100.0, 50.0);
        r.drag_resize(DragHandle::Right, Vec2::new(120.0, 25.0), Vec2::ZERO, true);
        let Shape::Rect(ref inner) = r else { panic!() };
        // side = max(120, 50) = 120, right edge recomputed from left
        assert_eq!(inner.size, Vec2::new(120.0, 50.0));
    }

    #[test]
    fn test_circle_ring_resize_keeps_center() {
        let mut c = circle(0.0, 0.0, 100.0);
        let before_center = Vec2::new(50.0, 50.0);
        c.drag_resize(DragHandle::Ring, Vec2::new(130.0, 50.0), Vec2::ZERO, false);
        let Shape::Circle(ref inner) = c else { panic!() };
        assert_eq!(inner.center(), before_center);
        assert_eq!(inner.diameter, 160.0);
        assert_eq!(inner.origin, Vec2::new(-30.0, -30.0));
    }

    #[test]
    fn test_circle_resize_uses_larger_axis_distance() {
        let mut c = circle(0.0, 0.0, 100.0);
        c.drag_resize(DragHandle::Ring, Vec2::new(60.0, 120.0), Vec2::ZERO, false);
        let Shape::Circle(ref inner) = c else { panic!() };
        // |60-50| = 10, |120-50| = 70 -> radius 70
        assert_eq!(inner.diameter, 140.0);
    }

    #[test]
    fn test_line_resize_moves_only_grabbed_endpoint() {
        let mut l = line(10.0, 10.0, 50.0, 50.0);
        l.drag_resize(
            DragHandle::LineStart,
            Vec2::new(15.0, 12.0),
            Vec2::new(5.0, 2.0),
            false,
        );
        let Shape::Line(ref inner) = l else { panic!() };
        assert_eq!(inner.start, Vec2::new(15.0, 12.0));
        assert_eq!(inner.end, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_draw_gesture_rect_spans_any_direction() {
        let mut r = Shape::new_at(ShapeKind::Rectangle, Vec2::new(100.0, 100.0));
        // Drag up-left from the anchor
        r.update_from_gesture(Vec2::new(100.0, 100.0), Vec2::new(40.0, 70.0), false);
        let Shape::Rect(ref inner) = r else { panic!() };
        assert_eq!(inner.origin, Vec2::new(40.0, 70.0));
        assert_eq!(inner.size, Vec2::new(60.0, 30.0));
    }

    #[test]
    fn test_draw_gesture_rect_aspect_lock() {
        let mut r = Shape::new_at(ShapeKind::Rectangle, Vec2::ZERO);
        r.update_from_gesture(Vec2::ZERO, Vec2::new(80.0, 20.0), true);
        let Shape::Rect(ref inner) = r else { panic!() };
        assert_eq!(inner.size, Vec2::new(80.0, 80.0));
    }

    #[test]
    fn test_draw_gesture_circle_takes_min_axis() {
        let mut c = Shape::new_at(ShapeKind::Circle, Vec2::ZERO);
        c.update_from_gesture(Vec2::ZERO, Vec2::new(80.0, 30.0), false);
        let Shape::Circle(ref inner) = c else { panic!() };
        assert_eq!(inner.diameter, 30.0);
        assert_eq!(inner.origin, Vec2::ZERO);
    }

    #[test]
    fn test_translate_line_moves_both_endpoints() {
        let mut l = line(0.0, 0.0, 10.0, 10.0);
        l.translate(Vec2::new(5.0, -3.0));
        let Shape::Line(ref inner) = l else { panic!() };
        assert_eq!(inner.start, Vec2::new(5.0, -3.0));
        assert_eq!(inner.end, Vec2::new(15.0, 7.0));
    }

    #[test]
    fn test_nudge_resize_rect_clamps_to_zero() {
        let mut r = rect(0.0, 0.0, 1.0, 1.0);
        r.nudge_resize(Vec2::new(-2.0, -2.0));
        let Shape::Rect(ref inner) = r else { panic!() };
        assert_eq!(inner.size, Vec2::ZERO);
    }

    #[test]
    fn test_nudge_resize_circle_stays_uniform() {
        let mut c = circle(0.0, 0.0, 10.0);
        c.nudge_resize(Vec2::new(2.0, 0.0));
        let Shape::Circle(ref inner) = c else { panic!() };
        assert_eq!(inner.diameter, 12.0);
        c.nudge_resize(Vec2::new(0.0, -2.0));
        let Shape::Circle(ref inner) = c else { panic!() };
        // max(0, -2) = 0, diameter unchanged
        assert_eq!(inner.diameter, 12.0);
    }

    #[test]
    fn test_nudge_resize_line_moves_end() {
        let mut l = line(0.0, 0.0, 10.0, 10.0);
        l.nudge_resize(Vec2::new(2.0, 0.0));
        let Shape::Line(ref inner) = l else { panic!() };
        assert_eq!(inner.start, Vec2::ZERO);
        assert_eq!(inner.end, Vec2::new(12.0, 10.0));
    }

    #[test]
    fn test_shape_kind_display_names() {
        assert_eq!(ShapeKind::Line.display_name(), "Line (L)");
        assert_eq!(ShapeKind::Rectangle.display_name(), "Rectangle (R)");
        assert_eq!(ShapeKind::Circle.display_name(), "Circle (C)");
        assert_eq!(ShapeKind::all().len(), 3);
    }
}
