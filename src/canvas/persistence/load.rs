//! Canvas load system and task polling.

use bevy::prelude::*;
use bevy::tasks::IoTaskPool;
use futures_lite::future;

use crate::canvas::document::CanvasDocument;

use super::messages::LoadCanvasRequest;
use super::records::SavedCanvas;
use super::resources::{AsyncCanvasOperation, CanvasLoadError, CurrentCanvasFile, LoadCanvasTask};
use super::results::LoadResult;

/// Starts an async load operation (file I/O and parsing only)
pub fn load_canvas_system(
    mut commands: Commands,
    mut events: MessageReader<LoadCanvasRequest>,
    mut async_op: ResMut<AsyncCanvasOperation>,
) {
    for event in events.read() {
        // Don't start a new load if one is already in progress
        if async_op.is_busy() {
            warn!("Load operation already in progress");
            continue;
        }

        let path = event.path.clone();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("canvas")
            .to_string();

        // Mark as loading
        async_op.is_loading = true;
        async_op.operation_description = Some(format!("Loading {}...", file_name));

        let task_pool = IoTaskPool::get();
        let task = task_pool.spawn(async move {
            let json = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    return LoadResult {
                        path,
                        saved_canvas: None,
                        error: Some(format!("Failed to read file: {}", e)),
                    };
                }
            };

            match serde_json::from_str::<SavedCanvas>(&json) {
                Ok(saved_canvas) => LoadResult {
                    path,
                    saved_canvas: Some(saved_canvas),
                    error: None,
                },
                Err(e) => LoadResult {
                    path,
                    saved_canvas: None,
                    error: Some(format!("Failed to parse canvas file: {}", e)),
                },
            }
        });

        commands.spawn(LoadCanvasTask(task));
    }
}

/// Polls load tasks and handles completion.
///
/// Loaded shapes are appended after the existing ones, so a load never
/// discards current work. On any error the document is left untouched.
pub fn poll_load_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut LoadCanvasTask)>,
    mut async_op: ResMut<AsyncCanvasOperation>,
    mut document: ResMut<CanvasDocument>,
    mut load_error: ResMut<CanvasLoadError>,
    mut current_file: ResMut<CurrentCanvasFile>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        if let Some(result) = future::block_on(future::poll_once(&mut task.0)) {
            // Clear async state
            async_op.is_loading = false;
            async_op.operation_description = None;
            load_error.message = None;

            if let Some(error) = result.error {
                error!("{}", error);
                load_error.message = Some(error);
                commands.entity(entity).despawn();
                continue;
            }

            let Some(saved_canvas) = result.saved_canvas else {
                commands.entity(entity).despawn();
                continue;
            };

            let count = saved_canvas.shapes.len();
            document.extend(saved_canvas.shapes.into_iter().map(|s| s.into_shape()));

            info!("Loaded {} shapes from {:?}", count, result.path);
            current_file.path = Some(result.path);

            commands.entity(entity).despawn();
        }
    }
}
