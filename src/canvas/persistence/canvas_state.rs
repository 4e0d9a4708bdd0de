//! Whole-canvas state transitions (clearing the document).

use bevy::prelude::*;

use crate::canvas::document::{CanvasDocument, CurrentShape};
use crate::editor::fields::{CreateFields, EditFields};

use super::messages::ClearCanvasRequest;

/// Removes every shape, drops the selection, and blanks all panel
/// fields in one step.
pub fn clear_canvas_system(
    mut events: MessageReader<ClearCanvasRequest>,
    mut document: ResMut<CanvasDocument>,
    mut current_shape: ResMut<CurrentShape>,
    mut create_fields: ResMut<CreateFields>,
    mut edit_fields: ResMut<EditFields>,
) {
    for _ in events.read() {
        document.clear();
        current_shape.index = None;
        create_fields.clear();
        edit_fields.clear();
        info!("Canvas cleared");
    }
}
