use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::canvas::{CanvasDocument, CurrentShape};
use crate::editor::{
    apply_edit, field_labels, shape_from_fields, CreateFields, CurrentTool, EditFields, FieldError,
};

fn labeled_field(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.horizontal(|ui| {
        ui.label(format!("{}:", label));
        ui.add(egui::TextEdit::singleline(value).desired_width(80.0));
    });
}

/// Side panel with the New Shape form and the selected-shape editor.
pub fn shape_panel_ui(
    mut contexts: EguiContexts,
    current_tool: Res<CurrentTool>,
    mut create_fields: ResMut<CreateFields>,
    mut edit_fields: ResMut<EditFields>,
    mut field_error: ResMut<FieldError>,
    mut document: ResMut<CanvasDocument>,
    selection: Res<CurrentShape>,
) -> Result {
    egui::SidePanel::right("shape_panel")
        .default_width(220.0)
        .show(contexts.ctx_mut()?, |ui| {
            let kind = current_tool.kind;
            let (lx, ly, ls1, ls2) = field_labels(kind);

            ui.add_space(4.0);
            ui.heading("New Shape");
            ui.label(egui::RichText::new(kind.display_name()).weak());
            ui.add_space(4.0);

            labeled_field(ui, lx, &mut create_fields.x);
            labeled_field(ui, ly, &mut create_fields.y);
            labeled_field(ui, ls1, &mut create_fields.size1);
            if let Some(label) = ls2 {
                labeled_field(ui, label, &mut create_fields.size2);
            }

            if ui.button("Draw").clicked() {
                match shape_from_fields(kind, &create_fields) {
                    // The new shape is added without selecting it
                    Ok(shape) => {
                        document.push(shape);
                    }
                    Err(message) => field_error.message = Some(message),
                }
            }

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(8.0);

            ui.heading("Selected Shape");
            ui.add_space(4.0);

            let Some(index) = selection.index else {
                ui.label("No shape selected");
                return;
            };
            let Some(shape) = document.get(index) else {
                ui.label("No shape selected");
                return;
            };

            let (ex, ey, es1, es2) = field_labels(shape.kind());
            ui.label(egui::RichText::new(shape.kind().display_name()).weak());
            ui.add_space(4.0);

            labeled_field(ui, ex, &mut edit_fields.x);
            labeled_field(ui, ey, &mut edit_fields.y);
            labeled_field(ui, es1, &mut edit_fields.size1);
            if let Some(label) = es2 {
                labeled_field(ui, label, &mut edit_fields.size2);
            }

            if ui.button("Apply").clicked()
                && let Some(shape) = document.get_mut(index)
                && let Err(message) = apply_edit(shape, &edit_fields)
            {
                field_error.message = Some(message);
            }
        });
    Ok(())
}

/// Modal window for field validation errors.
pub fn field_error_dialog_ui(
    mut contexts: EguiContexts,
    mut field_error: ResMut<FieldError>,
) -> Result {
    let Some(message) = field_error.message.clone() else {
        return Ok(());
    };

    egui::Window::new("Invalid Input")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.colored_label(egui::Color32::RED, &message);
            if ui.button("OK").clicked() {
                field_error.message = None;
            }
        });

    Ok(())
}
