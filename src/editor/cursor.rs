//! Cursor icon management for shape hovering.

use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow, SystemCursorIcon};
use bevy_egui::EguiContexts;

use crate::canvas::CanvasDocument;

use super::interaction::GestureState;
use super::params::CameraParams;

/// Update the cursor icon from whatever handle is under the pointer.
///
/// During an active gesture the grabbed handle's cursor sticks even if
/// the pointer momentarily leaves the shape.
pub fn update_hover_cursor(
    window_query: Query<Entity, With<PrimaryWindow>>,
    camera: CameraParams,
    document: Res<CanvasDocument>,
    gesture: Res<GestureState>,
    mut commands: Commands,
    mut contexts: EguiContexts,
) {
    let Ok(window_entity) = window_query.single() else {
        return;
    };

    // Use default cursor over UI
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.is_pointer_over_area()
    {
        commands
            .entity(window_entity)
            .insert(CursorIcon::System(SystemCursorIcon::Default));
        return;
    }

    if gesture.is_active()
        && let Some(cursor) = gesture.handle.cursor_icon()
    {
        commands.entity(window_entity).insert(cursor);
        return;
    }

    let Some(p) = camera.cursor_canvas_pos() else {
        return;
    };

    let hover_cursor = document
        .top_shape_at(p)
        .and_then(|i| document.get(i))
        .and_then(|shape| shape.classify_handle(p).cursor_icon());

    commands
        .entity(window_entity)
        .insert(hover_cursor.unwrap_or(CursorIcon::System(SystemCursorIcon::Default)));
}
