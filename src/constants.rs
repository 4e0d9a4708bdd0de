//! Centralized constants used across the application.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Pointer proximity tolerance for hit tests, in canvas units.
/// Applies to segment, endpoint, edge, and ring proximity alike.
pub const HIT_TOLERANCE: f32 = 8.0;

/// Distance moved per arrow-key press, in canvas units.
/// Also the per-press size delta for Shift+arrow resizing.
pub const NUDGE_STEP: f32 = 2.0;
