//! Pointer gesture handling: drawing, dragging, and resizing shapes.
//!
//! The gesture lifecycle lives in [`GestureState`] as plain methods so
//! the press/motion/release sequencing can be tested without an ECS
//! world. The systems below only translate input events and cursor
//! positions into those calls.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::canvas::{CanvasDocument, CurrentShape, Shape, ShapeKind};
use crate::common::DragHandle;

use super::fields::EditFields;
use super::params::{is_cursor_over_ui, CameraParams};
use super::tools::CurrentTool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureMode {
    #[default]
    Idle,
    Drawing,
    Dragging,
    Resizing,
}

/// State of the in-progress pointer gesture.
///
/// `anchor` is re-anchored to the pointer on every drag/resize step, so
/// those gestures work on incremental deltas; drawing keeps the original
/// press point as its fixed anchor. `target` indexes into the document.
#[derive(Resource, Default, Debug)]
pub struct GestureState {
    pub mode: GestureMode,
    pub anchor: Vec2,
    pub handle: DragHandle,
    pub target: Option<usize>,
}

impl GestureState {
    /// Handle a press at a canvas point.
    ///
    /// Over a shape this selects it and starts a drag or resize based on
    /// the grabbed handle. Over empty canvas it clears the selection and
    /// arms a drawing gesture; no shape exists until the pointer moves.
    pub fn press(
        &mut self,
        p: Vec2,
        document: &CanvasDocument,
        selection: &mut CurrentShape,
        edit_fields: &mut EditFields,
    ) {
        self.anchor = p;
        match document.top_shape_at(p).and_then(|i| document.get(i).map(|s| (i, s))) {
            Some((index, shape)) => {
                let handle = shape.classify_handle(p);
                self.handle = handle;
                self.target = Some(index);
                self.mode = if handle.is_resize() {
                    GestureMode::Resizing
                } else {
                    GestureMode::Dragging
                };
                selection.index = Some(index);
                edit_fields.populate(Some(shape));
            }
            None => {
                self.handle = DragHandle::None;
                self.target = None;
                self.mode = GestureMode::Drawing;
                selection.index = None;
                edit_fields.populate(None);
            }
        }
    }

    /// Handle pointer motion while a gesture is active.
    pub fn motion(
        &mut self,
        p: Vec2,
        aspect_lock: bool,
        kind: ShapeKind,
        document: &mut CanvasDocument,
    ) {
        match self.mode {
            GestureMode::Idle => {}
            GestureMode::Drawing => {
                if self.target.is_none() {
                    // No shape until the pointer actually leaves the
                    // press point; a click without movement draws nothing.
                    if p == self.anchor {
                        return;
                    }
                    self.target = Some(document.push(Shape::new_at(kind, self.anchor)));
                }
                if let Some(shape) = self.target.and_then(|i| document.get_mut(i)) {
                    shape.update_from_gesture(self.anchor, p, aspect_lock);
                }
            }
            GestureMode::Dragging => {
                if let Some(shape) = self.target.and_then(|i| document.get_mut(i)) {
                    shape.translate(p - self.anchor);
                }
                self.anchor = p;
            }
            GestureMode::Resizing => {
                if let Some(shape) = self.target.and_then(|i| document.get_mut(i)) {
                    shape.drag_resize(self.handle, p, p - self.anchor, aspect_lock);
                }
                self.anchor = p;
            }
        }
    }

    /// Handle the pointer release that ends a gesture.
    ///
    /// The selection is re-resolved under the release point rather than
    /// kept from the press, so a freshly drawn shape becomes selected
    /// and a drag that ends over a different shape selects that one.
    pub fn release(
        &mut self,
        p: Vec2,
        document: &CanvasDocument,
        selection: &mut CurrentShape,
        edit_fields: &mut EditFields,
    ) {
        self.mode = GestureMode::Idle;
        self.handle = DragHandle::None;
        self.target = None;

        selection.index = document.top_shape_at(p);
        edit_fields.populate(selection.index.and_then(|i| document.get(i)));
    }

    pub fn is_active(&self) -> bool {
        self.mode != GestureMode::Idle
    }
}

fn shift_pressed(keyboard: &ButtonInput<KeyCode>) -> bool {
    keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight)
}

pub fn pointer_press_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    camera: CameraParams,
    mut contexts: EguiContexts,
    mut gesture: ResMut<GestureState>,
    document: Res<CanvasDocument>,
    mut selection: ResMut<CurrentShape>,
    mut edit_fields: ResMut<EditFields>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) || is_cursor_over_ui(&mut contexts) {
        return;
    }
    let Some(p) = camera.cursor_canvas_pos() else {
        return;
    };
    gesture.press(p, &document, &mut selection, &mut edit_fields);
}

pub fn pointer_motion_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    camera: CameraParams,
    mut gesture: ResMut<GestureState>,
    current_tool: Res<CurrentTool>,
    mut document: ResMut<CanvasDocument>,
) {
    if !gesture.is_active() || !mouse_button.pressed(MouseButton::Left) {
        return;
    }
    let Some(p) = camera.cursor_canvas_pos() else {
        return;
    };
    gesture.motion(p, shift_pressed(&keyboard), current_tool.kind, &mut document);
}

pub fn pointer_release_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    camera: CameraParams,
    mut gesture: ResMut<GestureState>,
    document: Res<CanvasDocument>,
    mut selection: ResMut<CurrentShape>,
    mut edit_fields: ResMut<EditFields>,
) {
    if !mouse_button.just_released(MouseButton::Left) || !gesture.is_active() {
        return;
    }
    let Some(p) = camera.cursor_canvas_pos() else {
        return;
    };
    gesture.release(p, &document, &mut selection, &mut edit_fields);
}
