//! Common types shared across multiple modules.

use bevy::window::{CursorIcon, SystemCursorIcon};

/// Identifies which part of a shape a pointer interaction grabs.
///
/// `Body` means the whole shape (translation); every other non-`None`
/// variant is a resize handle. Edge/corner variants apply to
/// rectangles, `Ring` to circles, `LineStart`/`LineEnd` to lines.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum DragHandle {
    #[default]
    None,
    Body,
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Ring,
    LineStart,
    LineEnd,
}

impl DragHandle {
    /// Get the hover cursor icon for this handle.
    pub fn cursor_icon(&self) -> Option<CursorIcon> {
        match self {
            DragHandle::None => None,
            DragHandle::Body | DragHandle::Ring => Some(CursorIcon::System(SystemCursorIcon::Move)),
            DragHandle::LineStart | DragHandle::LineEnd => {
                Some(CursorIcon::System(SystemCursorIcon::Crosshair))
            }
            DragHandle::Left | DragHandle::Right => {
                Some(CursorIcon::System(SystemCursorIcon::EwResize))
            }
            DragHandle::Top | DragHandle::Bottom => {
                Some(CursorIcon::System(SystemCursorIcon::NsResize))
            }
            DragHandle::TopLeft | DragHandle::BottomRight => {
                Some(CursorIcon::System(SystemCursorIcon::NwseResize))
            }
            DragHandle::TopRight | DragHandle::BottomLeft => {
                Some(CursorIcon::System(SystemCursorIcon::NeswResize))
            }
        }
    }

    /// Check if grabbing this handle starts a resize (rather than a drag).
    pub fn is_resize(&self) -> bool {
        !matches!(self, DragHandle::None | DragHandle::Body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_handle_default() {
        assert_eq!(DragHandle::default(), DragHandle::None);
    }

    #[test]
    fn test_cursor_icon_none() {
        assert!(DragHandle::None.cursor_icon().is_none());
    }

    #[test]
    fn test_cursor_icon_body_is_move() {
        assert_eq!(
            DragHandle::Body.cursor_icon(),
            Some(CursorIcon::System(SystemCursorIcon::Move))
        );
        assert_eq!(
            DragHandle::Ring.cursor_icon(),
            Some(CursorIcon::System(SystemCursorIcon::Move))
        );
    }

    #[test]
    fn test_cursor_icon_line_ends_are_crosshair() {
        assert_eq!(
            DragHandle::LineStart.cursor_icon(),
            Some(CursorIcon::System(SystemCursorIcon::Crosshair))
        );
        assert_eq!(
            DragHandle::LineEnd.cursor_icon(),
            Some(CursorIcon::System(SystemCursorIcon::Crosshair))
        );
    }

    #[test]
    fn test_cursor_icon_diagonals() {
        assert_eq!(
            DragHandle::TopLeft.cursor_icon(),
            Some(CursorIcon::System(SystemCursorIcon::NwseResize))
        );
        assert_eq!(
            DragHandle::BottomLeft.cursor_icon(),
            Some(CursorIcon::System(SystemCursorIcon::NeswResize))
        );
    }

    #[test]
    fn test_is_resize() {
        assert!(!DragHandle::None.is_resize());
        assert!(!DragHandle::Body.is_resize());
        assert!(DragHandle::Left.is_resize());
        assert!(DragHandle::TopRight.is_resize());
        assert!(DragHandle::Ring.is_resize());
        assert!(DragHandle::LineStart.is_resize());
    }
}
