use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::canvas::ShapeKind;

/// The shape kind used for new drawing gestures and the New Shape form.
#[derive(Resource, Default)]
pub struct CurrentTool {
    pub kind: ShapeKind,
}

pub fn handle_tool_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut current_tool: ResMut<CurrentTool>,
    mut contexts: EguiContexts,
) {
    // Don't change tools if typing in a text field
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    let new_kind = if keyboard.just_pressed(KeyCode::KeyL) {
        Some(ShapeKind::Line)
    } else if keyboard.just_pressed(KeyCode::KeyR) {
        Some(ShapeKind::Rectangle)
    } else if keyboard.just_pressed(KeyCode::KeyC) {
        Some(ShapeKind::Circle)
    } else {
        None
    };

    if let Some(kind) = new_kind {
        current_tool.kind = kind;
    }
}
