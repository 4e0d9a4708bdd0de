//! Canvas persistence: saving and loading shape documents as JSON.
//!
//! Handles async file I/O for the shape document, including:
//! - Save/load with async task pooling
//! - Appending loaded shapes to the current document
//! - Error state resources for dialog display
//!
//! ## Module Structure
//!
//! - [`messages`] - Message types for canvas operations
//! - [`records`] - Serializable file format types
//! - [`resources`] - Resource types for state tracking
//! - [`results`] - Result types for async operations
//! - [`save`] - Save system and task polling
//! - [`load`] - Load system and task polling
//! - [`canvas_state`] - Clear canvas system
//!
//! ## Systems
//!
//! - [`save_canvas_system`] - Starts async save operation
//! - [`poll_save_tasks`] - Polls save task completion
//! - [`load_canvas_system`] - Starts async load operation
//! - [`poll_load_tasks`] - Polls load task completion
//! - [`clear_canvas_system`] - Empties the document and selection

mod canvas_state;
mod load;
mod messages;
mod records;
mod resources;
mod results;
mod save;


// Re-exports - Messages
pub use messages::{ClearCanvasRequest, LoadCanvasRequest, SaveCanvasRequest};

// Re-exports - Records
pub use records::{SavedCanvas, SavedShape};

// Re-exports - Resources
pub use resources::{
    AsyncCanvasOperation, CanvasLoadError, CanvasSaveError, CurrentCanvasFile,
};

// Re-exports - Systems
pub use canvas_state::clear_canvas_system;
pub use load::{load_canvas_system, poll_load_tasks};
pub use save::{poll_save_tasks, save_canvas_system};
