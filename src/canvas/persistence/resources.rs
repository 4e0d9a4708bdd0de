//! Resource types for canvas persistence state tracking.

use bevy::prelude::*;
use bevy::tasks::Task;
use std::path::PathBuf;

use super::results::{LoadResult, SaveResult};

/// Resource tracking load operation errors for display to user.
#[derive(Resource, Default)]
pub struct CanvasLoadError {
    pub message: Option<String>,
}

/// Resource tracking save operation errors for display to user.
#[derive(Resource, Default)]
pub struct CanvasSaveError {
    pub message: Option<String>,
}

/// Resource tracking async canvas I/O operations for modal dialog
#[derive(Resource, Default)]
pub struct AsyncCanvasOperation {
    /// Whether a save operation is in progress
    pub is_saving: bool,
    /// Whether a load operation is in progress
    pub is_loading: bool,
    /// Description of the current operation
    pub operation_description: Option<String>,
}

impl AsyncCanvasOperation {
    pub fn is_busy(&self) -> bool {
        self.is_saving || self.is_loading
    }
}

/// Component for save task
#[derive(Component)]
pub struct SaveCanvasTask(pub Task<SaveResult>);

/// Component for load task
#[derive(Component)]
pub struct LoadCanvasTask(pub Task<LoadResult>);

/// Resource tracking the most recently saved or loaded file path
#[derive(Resource, Default)]
pub struct CurrentCanvasFile {
    pub path: Option<PathBuf>,
}
