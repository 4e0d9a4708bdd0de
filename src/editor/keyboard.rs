//! Arrow-key nudging of the selected shape.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::canvas::{CanvasDocument, CurrentShape};
use crate::constants::NUDGE_STEP;

use super::params::wants_keyboard_input;

fn arrow_delta(keyboard: &ButtonInput<KeyCode>) -> Vec2 {
    let mut delta = Vec2::ZERO;
    if keyboard.just_pressed(KeyCode::ArrowLeft) {
        delta.x -= NUDGE_STEP;
    }
    if keyboard.just_pressed(KeyCode::ArrowRight) {
        delta.x += NUDGE_STEP;
    }
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        delta.y -= NUDGE_STEP;
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        delta.y += NUDGE_STEP;
    }
    delta
}

/// Arrows translate the selected shape; Shift+arrows resize it instead.
/// With no selection the keys do nothing.
pub fn nudge_selected_shape(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    selection: Res<CurrentShape>,
    mut document: ResMut<CanvasDocument>,
) {
    if wants_keyboard_input(&mut contexts) {
        return;
    }

    let delta = arrow_delta(&keyboard);
    if delta == Vec2::ZERO {
        return;
    }

    let Some(shape) = selection.index.and_then(|i| document.get_mut(i)) else {
        return;
    };

    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);
    if shift {
        shape.nudge_resize(delta);
    } else {
        shape.translate(delta);
    }
}
