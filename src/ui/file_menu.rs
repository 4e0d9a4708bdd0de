//! Dialog windows for file operation status and errors.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::canvas::persistence::{AsyncCanvasOperation, CanvasLoadError, CanvasSaveError};

/// Load error dialog with dismiss button
pub fn load_error_dialog_ui(
    mut contexts: EguiContexts,
    mut load_error: ResMut<CanvasLoadError>,
) -> Result {
    let Some(error) = load_error.message.clone() else {
        return Ok(());
    };

    egui::Window::new("Load Error")
        .collapsible(false)
        .resizable(true)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                ui.colored_label(egui::Color32::RED, &error);
            });
            if ui.button("OK").clicked() {
                load_error.message = None;
            }
        });

    Ok(())
}

/// Save error dialog with dismiss button
pub fn save_error_dialog_ui(
    mut contexts: EguiContexts,
    mut save_error: ResMut<CanvasSaveError>,
) -> Result {
    let Some(error) = save_error.message.clone() else {
        return Ok(());
    };

    egui::Window::new("Save Error")
        .collapsible(false)
        .resizable(true)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                ui.colored_label(egui::Color32::RED, &error);
            });
            if ui.button("OK").clicked() {
                save_error.message = None;
            }
        });

    Ok(())
}

/// Modal shown while an async save or load is running
pub fn async_operation_modal_ui(
    mut contexts: EguiContexts,
    async_op: Res<AsyncCanvasOperation>,
) -> Result {
    if !async_op.is_busy() {
        return Ok(());
    }

    egui::Window::new("Working")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                let description = async_op
                    .operation_description
                    .as_deref()
                    .unwrap_or("Working...");
                ui.label(description);
            });
        });

    Ok(())
}
