//! Message types for canvas persistence operations.

use bevy::prelude::*;
use std::path::PathBuf;

#[derive(Message)]
pub struct SaveCanvasRequest {
    pub path: PathBuf,
}

#[derive(Message)]
pub struct LoadCanvasRequest {
    pub path: PathBuf,
}

/// Message to request removing every shape from the canvas.
#[derive(Message)]
pub struct ClearCanvasRequest;
