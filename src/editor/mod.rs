mod camera;
mod cursor;
pub mod fields;
mod gizmos;
mod interaction;
mod keyboard;
mod params;
mod tools;

pub use camera::{canvas_to_world, world_to_canvas, EditorCamera};
pub use fields::{
    apply_edit, field_labels, shape_from_fields, CreateFields, EditFields, FieldError,
};
pub use interaction::{GestureMode, GestureState};
pub use params::{is_cursor_over_ui, wants_keyboard_input, CameraParams};
pub use tools::CurrentTool;

use bevy::prelude::*;

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentTool>()
            .init_resource::<GestureState>()
            .init_resource::<CreateFields>()
            .init_resource::<EditFields>()
            .init_resource::<FieldError>()
            .add_systems(Startup, camera::spawn_camera)
            .add_systems(
                Update,
                (
                    tools::handle_tool_shortcuts,
                    camera::camera_pan,
                    camera::camera_zoom,
                    camera::apply_camera_zoom,
                    keyboard::nudge_selected_shape,
                    // Press/motion/release must run in order within a frame
                    (
                        interaction::pointer_press_system,
                        interaction::pointer_motion_system,
                        interaction::pointer_release_system,
                    )
                        .chain(),
                    cursor::update_hover_cursor,
                    gizmos::draw_shapes,
                    gizmos::draw_selection_indicators,
                ),
            );
    }
}
