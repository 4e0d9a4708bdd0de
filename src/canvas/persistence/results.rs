//! Result types for async canvas file operations.

use std::path::PathBuf;

use super::records::SavedCanvas;

/// Result of an async save operation
pub struct SaveResult {
    pub path: PathBuf,
    pub success: bool,
    pub error: Option<String>,
}

/// Result of an async load operation
pub struct LoadResult {
    pub path: PathBuf,
    pub saved_canvas: Option<SavedCanvas>,
    pub error: Option<String>,
}
