//! Pure geometric predicates used for shape hit testing.
//!
//! All functions work in canvas coordinates (y grows downward, so a
//! rectangle's origin is its visual top-left corner) and take the hit
//! tolerance explicitly so the tests can exercise boundaries directly.

use bevy::prelude::*;

/// Which end of a segment an endpoint test matched.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Endpoint {
    Start,
    End,
}

/// Check if a point lies inside an axis-aligned box (bounds inclusive).
pub fn point_in_rect(p: Vec2, origin: Vec2, size: Vec2) -> bool {
    p.x >= origin.x && p.x <= origin.x + size.x && p.y >= origin.y && p.y <= origin.y + size.y
}

/// Check if a point lies inside the ellipse inscribed in a bounding box.
///
/// Uses the normalized squared distance against the semi-axes; a
/// degenerate (zero-sized) box never contains anything.
pub fn point_in_ellipse(p: Vec2, origin: Vec2, size: Vec2) -> bool {
    let a = size.x / 2.0;
    let b = size.y / 2.0;
    if a <= 0.0 || b <= 0.0 {
        return false;
    }
    let nx = (p.x - (origin.x + a)) / a;
    let ny = (p.y - (origin.y + b)) / b;
    nx * nx + ny * ny <= 1.0
}

/// Check if a point is within `tol` of a line segment.
///
/// Requires both the segment's bounding box expanded by `tol` and the
/// perpendicular distance to the infinite line. The box test alone
/// would accept the far extension of near-axis-aligned segments; the
/// distance test alone would accept points past the endpoints.
pub fn point_near_segment(p: Vec2, start: Vec2, end: Vec2, tol: f32) -> bool {
    let within_box = p.x >= start.x.min(end.x) - tol
        && p.x <= start.x.max(end.x) + tol
        && p.y >= start.y.min(end.y) - tol
        && p.y <= start.y.max(end.y) + tol;
    if !within_box {
        return false;
    }

    let d = end - start;
    let len_sq = d.length_squared();
    if len_sq < 0.0001 {
        // Segment is essentially a point
        return p.distance(start) <= tol;
    }

    let dist = (d.y * p.x - d.x * p.y + end.x * start.y - end.y * start.x).abs() / len_sq.sqrt();
    dist <= tol
}

/// Check if a point is within `tol` of either segment endpoint.
///
/// Proximity is measured per axis (box norm, not Euclidean). The start
/// endpoint wins if both match, which only happens for segments shorter
/// than the tolerance.
pub fn point_near_endpoint(p: Vec2, start: Vec2, end: Vec2, tol: f32) -> Option<Endpoint> {
    if (p.x - start.x).abs() <= tol && (p.y - start.y).abs() <= tol {
        return Some(Endpoint::Start);
    }
    if (p.x - end.x).abs() <= tol && (p.y - end.y).abs() <= tol {
        return Some(Endpoint::End);
    }
    None
}

/// Check if a point is near a rectangle's top side (minimal y).
pub fn near_top_edge(p: Vec2, origin: Vec2, size: Vec2, tol: f32) -> bool {
    (p.y - origin.y).abs() <= tol && p.x >= origin.x - tol && p.x <= origin.x + size.x + tol
}

/// Check if a point is near a rectangle's bottom side (maximal y).
pub fn near_bottom_edge(p: Vec2, origin: Vec2, size: Vec2, tol: f32) -> bool {
    (p.y - (origin.y + size.y)).abs() <= tol
        && p.x >= origin.x - tol
        && p.x <= origin.x + size.x + tol
}

/// Check if a point is near a rectangle's left side.
pub fn near_left_edge(p: Vec2, origin: Vec2, size: Vec2, tol: f32) -> bool {
    (p.x - origin.x).abs() <= tol && p.y >= origin.y - tol && p.y <= origin.y + size.y + tol
}

/// Check if a point is near a rectangle's right side.
pub fn near_right_edge(p: Vec2, origin: Vec2, size: Vec2, tol: f32) -> bool {
    (p.x - (origin.x + size.x)).abs() <= tol
        && p.y >= origin.y - tol
        && p.y <= origin.y + size.y + tol
}

/// Check if a point is near the ring of the circle inscribed at `origin`
/// with the given diameter: the Euclidean distance to the center must
/// differ from the radius by at most `tol`.
pub fn near_ring(p: Vec2, origin: Vec2, diameter: f32, tol: f32) -> bool {
    let r = diameter / 2.0;
    let center = origin + Vec2::splat(r);
    (p.distance(center) - r).abs() <= tol
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 8.0;

    #[test]
    fn test_point_in_rect_inclusive_bounds() {
        let origin = Vec2::new(10.0, 20.0);
        let size = Vec2::new(100.0, 50.0);
        assert!(point_in_rect(Vec2::new(10.0, 20.0), origin, size));
        assert!(point_in_rect(Vec2::new(110.0, 70.0), origin, size));
        assert!(point_in_rect(Vec2::new(60.0, 45.0), origin, size));
        assert!(!point_in_rect(Vec2::new(9.9, 45.0), origin, size));
        assert!(!point_in_rect(Vec2::new(60.0, 70.1), origin, size));
    }

    #[test]
    fn test_point_in_ellipse_center_and_rim() {
        let origin = Vec2::new(0.0, 0.0);
        let size = Vec2::new(100.0, 100.0);
        assert!(point_in_ellipse(Vec2::new(50.0, 50.0), origin, size));
        // On the rim (normalized distance == 1)
        assert!(point_in_ellipse(Vec2::new(100.0, 50.0), origin, size));
        // Corner of the bounding box is outside the ellipse
        assert!(!point_in_ellipse(Vec2::new(0.0, 0.0), origin, size));
    }

    #[test]
    fn test_point_in_ellipse_degenerate() {
        assert!(!point_in_ellipse(Vec2::ZERO, Vec2::ZERO, Vec2::ZERO));
    }

    #[test]
    fn test_point_near_segment_on_line() {
        let a = Vec2::new(10.0, 10.0);
        let b = Vec2::new(50.0, 50.0);
        assert!(point_near_segment(Vec2::new(30.0, 30.0), a, b, TOL));
        assert!(point_near_segment(Vec2::new(30.0, 35.0), a, b, TOL));
    }

    #[test]
    fn test_point_near_segment_rejects_far_extension() {
        // On the infinite line but well past the endpoints
        let a = Vec2::new(10.0, 10.0);
        let b = Vec2::new(50.0, 50.0);
        assert!(!point_near_segment(Vec2::new(200.0, 200.0), a, b, TOL));
    }

    #[test]
    fn test_point_near_segment_rejects_perpendicular_offset() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(100.0, 0.0);
        assert!(point_near_segment(Vec2::new(50.0, 7.0), a, b, TOL));
        assert!(!point_near_segment(Vec2::new(50.0, 9.0), a, b, TOL));
    }

    #[test]
    fn test_point_near_segment_degenerate() {
        let a = Vec2::new(20.0, 20.0);
        assert!(point_near_segment(Vec2::new(24.0, 20.0), a, a, TOL));
        assert!(!point_near_segment(Vec2::new(40.0, 20.0), a, a, TOL));
    }

    #[test]
    fn test_point_near_endpoint_matches() {
        let a = Vec2::new(10.0, 10.0);
        let b = Vec2::new(50.0, 50.0);
        assert_eq!(point_near_endpoint(a, a, b, TOL), Some(Endpoint::Start));
        assert_eq!(
            point_near_endpoint(Vec2::new(52.0, 47.0), a, b, TOL),
            Some(Endpoint::End)
        );
        assert_eq!(point_near_endpoint(Vec2::new(30.0, 30.0), a, b, TOL), None);
    }

    #[test]
    fn test_point_near_endpoint_prefers_start_when_degenerate() {
        let a = Vec2::new(10.0, 10.0);
        let b = Vec2::new(12.0, 10.0);
        assert_eq!(
            point_near_endpoint(Vec2::new(11.0, 10.0), a, b, TOL),
            Some(Endpoint::Start)
        );
    }

    #[test]
    fn test_endpoint_uses_box_norm() {
        // Euclidean distance > 8 but both axis deltas <= 8
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(100.0, 0.0);
        assert_eq!(
            point_near_endpoint(Vec2::new(7.0, 7.0), a, b, TOL),
            Some(Endpoint::Start)
        );
    }

    #[test]
    fn test_rect_edges() {
        let origin = Vec2::new(0.0, 0.0);
        let size = Vec2::new(100.0, 50.0);
        assert!(near_top_edge(Vec2::new(50.0, 5.0), origin, size, TOL));
        assert!(near_bottom_edge(Vec2::new(50.0, 55.0), origin, size, TOL));
        assert!(near_left_edge(Vec2::new(-5.0, 25.0), origin, size, TOL));
        assert!(near_right_edge(Vec2::new(104.0, 25.0), origin, size, TOL));
        // Perpendicular axis within tol but parallel axis out of span
        assert!(!near_top_edge(Vec2::new(120.0, 5.0), origin, size, TOL));
        assert!(!near_left_edge(Vec2::new(-5.0, 70.0), origin, size, TOL));
    }

    #[test]
    fn test_near_ring() {
        let origin = Vec2::new(0.0, 0.0);
        let diameter = 100.0;
        // On the ring
        assert!(near_ring(Vec2::new(100.0, 50.0), origin, diameter, TOL));
        // Just inside the tolerance band
        assert!(near_ring(Vec2::new(93.0, 50.0), origin, diameter, TOL));
        // Center is not on the ring
        assert!(!near_ring(Vec2::new(50.0, 50.0), origin, diameter, TOL));
        // Far outside
        assert!(!near_ring(Vec2::new(200.0, 50.0), origin, diameter, TOL));
    }
}
