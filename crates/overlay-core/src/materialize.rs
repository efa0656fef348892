//! Materialization controller.
//!
//! Decides, per overlay id and per page, whether a live editor instance
//! should exist, and constructs or detaches instances on demand. Stored ink
//! geometry is replayed through the path reconstruction before attaching.

use crate::editor::{EditorState, InkState, LiveEditor};
use crate::host::EditorLayers;
use crate::ink_path::{build_drawable, reconstruct_strokes, rect_in_page_coords};
use crate::store::ParameterStore;
use overlay_model::{InkPayload, OverlayId, OverlayPayload, ParameterRecord};

/// Materialize every non-hidden record relevant to the sweep.
///
/// With a page filter, only that page's records are considered; without one,
/// every record is. After the sweep, a pending selection whose instance now
/// exists is cleared and selected.
pub fn render_relevant(
    store: &mut ParameterStore,
    layers: &mut impl EditorLayers,
    page_filter: Option<u16>,
) {
    let ids: Vec<OverlayId> = store
        .iter()
        .filter(|r| page_filter.map_or(true, |page| r.page_index == page) && !r.hidden)
        .map(|r| r.id.clone())
        .collect();
    for id in ids {
        show(store, layers, &id);
    }

    let Some(pending) = layers.pending_selection() else {
        return;
    };
    if layers.editor(&pending).is_some() {
        layers.set_pending_selection(None);
        layers.select_editor(&pending);
    }
}

/// Construct and attach a live instance for `id`.
///
/// No-op when an instance already exists, no record exists, or the page's
/// editor layer is not mounted.
pub fn show(store: &mut ParameterStore, layers: &mut impl EditorLayers, id: &str) {
    if layers.editor(id).is_some() {
        return;
    }
    let Some(record) = store.get(id) else {
        return;
    };
    if !layers.layer_exists(record.page_index) {
        return;
    }

    let record = record.clone();
    store.set_hidden(id, false);

    let editor = match &record.payload {
        OverlayPayload::Highlight { selected_text, color, boxes } => from_record(
            &record,
            EditorState::Highlight {
                selected_text: selected_text.clone(),
                color: *color,
                boxes: boxes.clone(),
            },
        ),
        OverlayPayload::FreeText { content, color, font_size } => from_record(
            &record,
            EditorState::FreeText {
                content: content.clone(),
                color: *color,
                font_size: *font_size,
            },
        ),
        OverlayPayload::Ink(payload) => construct_ink(&record, payload, layers),
        OverlayPayload::Arrow { arrow_type } => from_record(
            &record,
            EditorState::Arrow {
                raw_x: record.x,
                raw_y: record.y,
                raw_width: record.width,
                raw_height: record.height,
                arrow_type: *arrow_type,
            },
        ),
        OverlayPayload::Stamp { img_base64 } => {
            from_record(&record, EditorState::Stamp { img_base64: img_base64.clone() })
        }
    };
    layers.add_editor(editor);
}

/// Detach the live instance and mark the record hidden.
///
/// The record itself is retained; only its visibility flag changes. This is
/// distinct from the store's `remove`, which deletes the record entirely.
pub fn hide(store: &mut ParameterStore, layers: &mut impl EditorLayers, id: &str) {
    detach(store, layers, id, true);
}

/// Like [`hide`], with the host choosing soft vs. hard removal of the
/// instance via `direct`.
pub fn remove(
    store: &mut ParameterStore,
    layers: &mut impl EditorLayers,
    id: &str,
    direct: bool,
) {
    detach(store, layers, id, direct);
}

fn detach(store: &mut ParameterStore, layers: &mut impl EditorLayers, id: &str, direct: bool) {
    if layers.editor(id).is_none() {
        return;
    }
    layers.remove_editor(id, direct);
    store.set_hidden(id, true);
}

fn from_record(record: &ParameterRecord, state: EditorState) -> LiveEditor {
    LiveEditor {
        id: record.id.clone(),
        page_index: record.page_index,
        x: record.x,
        y: record.y,
        width: record.width,
        height: record.height,
        is_centered: record.is_centered,
        from_command: true,
        state,
    }
}

/// Rebuild a live ink editor from its stored payload.
///
/// The editor's normalized geometry is re-derived from the stored rect in
/// the page frame, and the stroke geometry is replayed into device-space
/// paths at the layer's current render scale.
fn construct_ink(
    record: &ParameterRecord,
    payload: &InkPayload,
    layers: &impl EditorLayers,
) -> LiveEditor {
    let (page_width, page_height) = layers.page_dimensions(record.page_index);
    let [rx, ry, rw, rh] = rect_in_page_coords(payload.rect, payload.rotation, page_height);

    let scale = layers.render_scale(record.page_index);
    let device_paths = reconstruct_strokes(
        &payload.strokes,
        payload.rect,
        payload.rotation,
        payload.thickness,
        scale,
    );
    let drawables = device_paths.iter().map(build_drawable).collect();

    let mut editor = from_record(
        record,
        EditorState::Ink(InkState {
            color: payload.color,
            thickness: payload.thickness,
            opacity: payload.opacity,
            strokes: payload.strokes.clone(),
            rect: payload.rect,
            rotation: payload.rotation,
            drawing: false,
            device_paths,
            drawables,
        }),
    );
    editor.x = rx / page_width;
    editor.y = ry / page_height;
    editor.width = rw / page_width;
    editor.height = rh / page_height;
    editor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ink_path::PathCommand;
    use crate::test_util::{highlight_record, ink_record, MockSurface};
    use overlay_model::IdAllocator;

    fn store_with(records: Vec<ParameterRecord>) -> ParameterStore {
        let mut store = ParameterStore::new();
        store.initialize(records, &mut IdAllocator::default());
        store
    }

    #[test]
    fn render_relevant_filters_by_page() {
        let mut store = store_with(vec![
            highlight_record("viewer_editor_0", 0),
            highlight_record("viewer_editor_1", 1),
        ]);
        let mut surface = MockSurface::with_pages(&[0, 1]);

        render_relevant(&mut store, &mut surface, Some(0));
        assert!(surface.editors.contains_key("viewer_editor_0"));
        assert!(!surface.editors.contains_key("viewer_editor_1"));
    }

    #[test]
    fn page_zero_filter_is_not_treated_as_no_filter() {
        let mut store = store_with(vec![highlight_record("viewer_editor_1", 1)]);
        let mut surface = MockSurface::with_pages(&[0, 1]);

        render_relevant(&mut store, &mut surface, Some(0));
        assert!(surface.editors.is_empty());
    }

    #[test]
    fn render_relevant_skips_hidden_records() {
        let mut record = highlight_record("viewer_editor_0", 0);
        record.hidden = true;
        let mut store = store_with(vec![record]);
        let mut surface = MockSurface::with_pages(&[0]);

        render_relevant(&mut store, &mut surface, None);
        assert!(surface.editors.is_empty());
    }

    #[test]
    fn show_is_noop_without_record_or_layer() {
        let mut store = store_with(vec![highlight_record("viewer_editor_0", 3)]);
        let mut surface = MockSurface::with_pages(&[0]);

        show(&mut store, &mut surface, "viewer_editor_404");
        show(&mut store, &mut surface, "viewer_editor_0"); // page 3 unmounted
        assert!(surface.editors.is_empty());
    }

    #[test]
    fn show_marks_instance_as_command_originated() {
        let mut store = store_with(vec![highlight_record("viewer_editor_0", 0)]);
        let mut surface = MockSurface::with_pages(&[0]);

        show(&mut store, &mut surface, "viewer_editor_0");
        let editor = surface.editors.get("viewer_editor_0").expect("materialized");
        assert!(editor.from_command);
    }

    #[test]
    fn show_clears_hidden_flag() {
        let mut record = highlight_record("viewer_editor_0", 0);
        record.hidden = true;
        let mut store = store_with(vec![record]);
        let mut surface = MockSurface::with_pages(&[0]);

        show(&mut store, &mut surface, "viewer_editor_0");
        assert_eq!(store.get("viewer_editor_0").map(|r| r.hidden), Some(false));
    }

    #[test]
    fn ink_show_replays_stored_geometry() {
        let mut store = store_with(vec![ink_record("viewer_editor_0", 0)]);
        let mut surface = MockSurface::with_pages(&[0]);
        surface.scale = 2.0;

        show(&mut store, &mut surface, "viewer_editor_0");
        let editor = surface.editors.get("viewer_editor_0").expect("materialized");
        let EditorState::Ink(ink) = &editor.state else {
            panic!("expected ink state");
        };

        assert_eq!(ink.device_paths.len(), 1);
        assert!(!ink.device_paths[0].is_empty());
        assert!(matches!(ink.drawables[0].0[0], PathCommand::MoveTo(_)));
        // Normalized geometry is re-derived from the stored rect.
        let (page_width, page_height) = surface.page_dimensions(0);
        let rect = ink.rect;
        assert!((editor.width - (rect[2] - rect[0]) / page_width).abs() < 1e-6);
        assert!((editor.height - (rect[3] - rect[1]) / page_height).abs() < 1e-6);
    }

    #[test]
    fn hide_keeps_record_but_detaches_instance() {
        let mut store = store_with(vec![highlight_record("viewer_editor_0", 0)]);
        let mut surface = MockSurface::with_pages(&[0]);

        show(&mut store, &mut surface, "viewer_editor_0");
        hide(&mut store, &mut surface, "viewer_editor_0");

        assert!(surface.editors.is_empty());
        assert_eq!(store.get("viewer_editor_0").map(|r| r.hidden), Some(true));
    }

    #[test]
    fn double_remove_is_idempotent() {
        let mut store = store_with(vec![highlight_record("viewer_editor_0", 0)]);
        let mut surface = MockSurface::with_pages(&[0]);

        show(&mut store, &mut surface, "viewer_editor_0");
        remove(&mut store, &mut surface, "viewer_editor_0", true);
        let after_first = store.get("viewer_editor_0").cloned();

        remove(&mut store, &mut surface, "viewer_editor_0", true);
        assert_eq!(store.get("viewer_editor_0").cloned(), after_first);
        assert!(surface.editors.is_empty());
        assert_eq!(surface.removed.len(), 1);
    }

    #[test]
    fn pending_selection_resolves_after_sweep() {
        let mut store = store_with(vec![highlight_record("viewer_editor_0", 0)]);
        let mut surface = MockSurface::with_pages(&[0]);
        surface.set_pending_selection(Some("viewer_editor_0".to_owned()));

        render_relevant(&mut store, &mut surface, Some(0));
        assert_eq!(surface.pending_selection(), None);
        assert_eq!(surface.selected, vec!["viewer_editor_0".to_owned()]);
    }

    #[test]
    fn pending_selection_for_unmaterialized_id_is_kept() {
        let mut store = store_with(vec![highlight_record("viewer_editor_0", 0)]);
        let mut surface = MockSurface::with_pages(&[0]);
        surface.set_pending_selection(Some("viewer_editor_7".to_owned()));

        render_relevant(&mut store, &mut surface, Some(0));
        assert_eq!(surface.pending_selection(), Some("viewer_editor_7".to_owned()));
        assert!(surface.selected.is_empty());
    }
}
