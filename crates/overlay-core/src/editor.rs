//! Live editor instance state.
//!
//! A [`LiveEditor`] is the transient on-screen object the host surface
//! manages while an overlay is visible. It is never persisted directly;
//! the parameter converter mediates between this runtime state and the
//! stored [`overlay_model::ParameterRecord`].

use crate::ink_path::{DrawablePath, StrokePath};
use overlay_model::{Color, InkPayload, InkStroke, OverlayId, SelectionBox};

/// Runtime kind of a live editor.
///
/// A superset of the persistable overlay variants: line editors exist on
/// screen but have no persisted representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorKind {
    Highlight,
    FreeText,
    Ink,
    Arrow,
    Stamp,
    Line,
}

/// Runtime state of a free-hand drawing editor.
#[derive(Debug, Clone, PartialEq)]
pub struct InkState {
    pub color: Color,
    pub thickness: f32,
    pub opacity: f32,
    /// Committed strokes in document space.
    pub strokes: Vec<InkStroke>,
    /// Bounding rect `[bl_x, bl_y, tr_x, tr_y]` in document space.
    pub rect: [f32; 4],
    pub rotation: u16,
    /// True while a stroke gesture is still in progress.
    pub drawing: bool,
    /// Reconstructed device-space paths, populated on materialization.
    pub device_paths: Vec<StrokePath>,
    pub drawables: Vec<DrawablePath>,
}

impl InkState {
    /// Completed serialization of the drawing, or `None` while a stroke is
    /// in progress.
    pub fn serialize(&self) -> Option<InkPayload> {
        if self.drawing {
            return None;
        }
        Some(InkPayload {
            color: self.color,
            thickness: self.thickness,
            opacity: self.opacity,
            strokes: self.strokes.clone(),
            rect: self.rect,
            rotation: self.rotation,
        })
    }
}

/// Per-variant runtime state of a live editor.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorState {
    Highlight {
        selected_text: String,
        color: Color,
        boxes: Vec<SelectionBox>,
    },
    FreeText {
        content: String,
        color: Color,
        font_size: f32,
    },
    Ink(InkState),
    Arrow {
        /// Raw rectangle in normalized page coordinates, as reported by the
        /// editor's own geometry rather than the common fields.
        raw_x: f32,
        raw_y: f32,
        raw_width: f32,
        raw_height: f32,
        arrow_type: u32,
    },
    Stamp {
        img_base64: String,
    },
    /// Text strike-line selection editor; on-screen only, never persisted.
    Line {
        selected_text: String,
        boxes: Vec<SelectionBox>,
    },
}

impl EditorState {
    pub fn kind(&self) -> EditorKind {
        match self {
            EditorState::Highlight { .. } => EditorKind::Highlight,
            EditorState::FreeText { .. } => EditorKind::FreeText,
            EditorState::Ink(_) => EditorKind::Ink,
            EditorState::Arrow { .. } => EditorKind::Arrow,
            EditorState::Stamp { .. } => EditorKind::Stamp,
            EditorState::Line { .. } => EditorKind::Line,
        }
    }
}

/// A live, on-screen editor instance.
///
/// Owned by the host surface's editor layer for as long as it is on screen.
/// Created by direct user interaction or by the materialization controller.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveEditor {
    pub id: OverlayId,
    pub page_index: u16,
    /// Geometry normalized (0..1) to the page dimensions.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub is_centered: bool,
    /// Set when the instance was constructed from stored state rather than
    /// direct user action.
    pub from_command: bool,
    pub state: EditorState,
}

impl LiveEditor {
    pub fn kind(&self) -> EditorKind {
        self.state.kind()
    }
}
