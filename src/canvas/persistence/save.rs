//! Canvas save system and task polling.

use bevy::prelude::*;
use bevy::tasks::IoTaskPool;
use futures_lite::future;

use crate::canvas::document::CanvasDocument;

use super::messages::SaveCanvasRequest;
use super::records::SavedCanvas;
use super::resources::{AsyncCanvasOperation, CanvasSaveError, CurrentCanvasFile, SaveCanvasTask};
use super::results::SaveResult;

/// Starts an async save operation
pub fn save_canvas_system(
    mut commands: Commands,
    mut events: MessageReader<SaveCanvasRequest>,
    document: Res<CanvasDocument>,
    mut async_op: ResMut<AsyncCanvasOperation>,
) {
    for event in events.read() {
        // Don't start a new save if one is already in progress
        if async_op.is_busy() {
            warn!("Save operation already in progress");
            continue;
        }

        let saved_canvas = SavedCanvas::capture(&document);

        let path = event.path.clone();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("canvas")
            .to_string();

        // Mark as saving
        async_op.is_saving = true;
        async_op.operation_description = Some(format!("Saving {}...", file_name));

        // Spawn async task for serialization and file I/O
        let task_pool = IoTaskPool::get();
        let task = task_pool.spawn(async move {
            match serde_json::to_string_pretty(&saved_canvas) {
                Ok(json) => {
                    if let Err(e) = std::fs::write(&path, json) {
                        SaveResult {
                            path,
                            success: false,
                            error: Some(format!("Failed to write file: {}", e)),
                        }
                    } else {
                        SaveResult {
                            path,
                            success: true,
                            error: None,
                        }
                    }
                }
                Err(e) => SaveResult {
                    path,
                    success: false,
                    error: Some(format!("Failed to serialize canvas: {}", e)),
                },
            }
        });

        commands.spawn(SaveCanvasTask(task));
    }
}

/// Polls save tasks and handles completion
pub fn poll_save_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut SaveCanvasTask)>,
    mut async_op: ResMut<AsyncCanvasOperation>,
    mut current_file: ResMut<CurrentCanvasFile>,
    mut save_error: ResMut<CanvasSaveError>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        if let Some(result) = future::block_on(future::poll_once(&mut task.0)) {
            // Clear async state
            async_op.is_saving = false;
            async_op.operation_description = None;

            if result.success {
                info!("Canvas saved to {:?}", result.path);
                save_error.message = None;
                current_file.path = Some(result.path);
            } else if let Some(error) = result.error {
                error!("{}", error);
                // Store error for display to user
                save_error.message = Some(error);
            }

            commands.entity(entity).despawn();
        }
    }
}
