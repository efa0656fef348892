//! Parameter conversion.
//!
//! Pure mapping from a live editor's runtime fields to a persisted
//! [`ParameterRecord`], dispatching on the editor's variant. The returned
//! record owns every array it carries, so later mutation of the live
//! instance can never reach the store.

use crate::editor::{EditorState, LiveEditor};
use overlay_model::{OverlayPayload, ParameterRecord};

/// Convert a live editor into its persisted record.
///
/// Returns `None` when the editor cannot be persisted: an unsupported
/// variant, or an ink editor whose stroke gesture has not settled yet.
/// Callers treat `None` as "cannot persist, log and drop".
pub fn to_record(editor: &LiveEditor) -> Option<ParameterRecord> {
    let payload = match &editor.state {
        EditorState::Highlight { selected_text, color, boxes } => OverlayPayload::Highlight {
            selected_text: selected_text.clone(),
            color: *color,
            boxes: boxes.clone(),
        },
        EditorState::FreeText { content, color, font_size } => OverlayPayload::FreeText {
            content: content.clone(),
            color: *color,
            font_size: *font_size,
        },
        EditorState::Ink(ink) => OverlayPayload::Ink(ink.serialize()?),
        EditorState::Arrow { arrow_type, .. } => OverlayPayload::Arrow { arrow_type: *arrow_type },
        EditorState::Stamp { img_base64 } => {
            OverlayPayload::Stamp { img_base64: img_base64.clone() }
        }
        EditorState::Line { .. } => return None,
    };

    let mut record = ParameterRecord {
        id: editor.id.clone(),
        page_index: editor.page_index,
        x: editor.x,
        y: editor.y,
        width: editor.width,
        height: editor.height,
        is_centered: editor.is_centered,
        hidden: false,
        payload,
    };

    // Arrows report their geometry through the raw rectangle, not the
    // common fields.
    if let EditorState::Arrow { raw_x, raw_y, raw_width, raw_height, .. } = editor.state {
        record.x = raw_x;
        record.y = raw_y;
        record.width = raw_width;
        record.height = raw_height;
    }

    Some(record)
}
