mod document;
pub mod geometry;
pub mod persistence;
mod shape;

pub use document::{CanvasDocument, CurrentShape};
pub use shape::{CircleShape, LineShape, RectShape, Shape, ShapeKind};

use bevy::prelude::*;

use persistence::{
    AsyncCanvasOperation, CanvasLoadError, CanvasSaveError, ClearCanvasRequest, CurrentCanvasFile,
    LoadCanvasRequest, SaveCanvasRequest,
};

pub struct CanvasPlugin;

impl Plugin for CanvasPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CanvasDocument>()
            .init_resource::<CurrentShape>()
            .init_resource::<CanvasLoadError>()
            .init_resource::<CanvasSaveError>()
            .init_resource::<CurrentCanvasFile>()
            .init_resource::<AsyncCanvasOperation>()
            .add_message::<SaveCanvasRequest>()
            .add_message::<LoadCanvasRequest>()
            .add_message::<ClearCanvasRequest>()
            .add_systems(
                Update,
                (
                    persistence::save_canvas_system.run_if(on_message::<SaveCanvasRequest>),
                    persistence::load_canvas_system.run_if(on_message::<LoadCanvasRequest>),
                    persistence::clear_canvas_system.run_if(on_message::<ClearCanvasRequest>),
                    persistence::poll_save_tasks,
                    persistence::poll_load_tasks,
                ),
            );
    }
}
