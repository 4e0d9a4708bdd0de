use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::canvas::persistence::{ClearCanvasRequest, LoadCanvasRequest, SaveCanvasRequest};
use crate::canvas::ShapeKind;
use crate::editor::CurrentTool;

/// Main toolbar showing shape tools, the clear button, and file actions
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut current_tool: ResMut<CurrentTool>,
    mut clear_events: MessageWriter<ClearCanvasRequest>,
    mut save_events: MessageWriter<SaveCanvasRequest>,
    mut load_events: MessageWriter<LoadCanvasRequest>,
) -> Result {
    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                // Tool buttons with keyboard shortcuts
                for kind in ShapeKind::all() {
                    let selected = current_tool.kind == *kind;
                    let button = egui::Button::new(
                        egui::RichText::new(tool_button_label(kind)).size(14.0).strong(),
                    )
                    .min_size(egui::vec2(0.0, 28.0))
                    .selected(selected);

                    let response = ui.add(button);
                    if response.clicked() {
                        current_tool.kind = *kind;
                    }
                    response.on_hover_text(kind.display_name());
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if ui
                    .add(egui::Button::new("Clear").min_size(egui::vec2(0.0, 28.0)))
                    .on_hover_text("Remove all shapes")
                    .clicked()
                {
                    clear_events.write(ClearCanvasRequest);
                }

                // Right-aligned file actions
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(egui::Button::new("Load...").min_size(egui::vec2(0.0, 28.0)))
                        .clicked()
                        && let Some(path) = rfd::FileDialog::new()
                            .add_filter("Canvas Files", &["json"])
                            .set_title("Load Canvas")
                            .pick_file()
                    {
                        load_events.write(LoadCanvasRequest { path });
                    }

                    if ui
                        .add(egui::Button::new("Save...").min_size(egui::vec2(0.0, 28.0)))
                        .clicked()
                        && let Some(path) = rfd::FileDialog::new()
                            .add_filter("Canvas Files", &["json"])
                            .set_file_name("canvas.json")
                            .set_title("Save Canvas")
                            .save_file()
                    {
                        save_events.write(SaveCanvasRequest { path });
                    }
                });
            });
        });
    Ok(())
}

/// Get the button label for a tool (with keyboard shortcut)
fn tool_button_label(kind: &ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Line => "Line [L]",
        ShapeKind::Rectangle => "Rectangle [R]",
        ShapeKind::Circle => "Circle [C]",
    }
}
