mod file_menu;
mod shape_panel;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Side panel renders first so the top panel fits beside it;
        // dialogs render last so they overlay everything
        app.add_systems(
            EguiPrimaryContextPass,
            (
                shape_panel::shape_panel_ui,
                toolbar::toolbar_ui,
                (
                    shape_panel::field_error_dialog_ui,
                    file_menu::load_error_dialog_ui,
                    file_menu::save_error_dialog_ui,
                    file_menu::async_operation_modal_ui,
                ),
            )
                .chain(),
        );
    }
}
