//! Positioning service.
//!
//! Computes the scroll offset that centers a given overlay in the viewport
//! and triggers selection once the overlay is materialized.

use crate::host::{EditorLayers, ScrollSurface};
use crate::store::ParameterStore;

/// Scroll the container so the overlay sits in the middle of the viewport.
///
/// Returns the scroll target, or silently `None` when no record exists
/// for `id` or the target page is not mounted. If a live instance already
/// exists it is selected immediately; otherwise the id is parked in the
/// host's pending-selection slot for the materialization sweep to pick up.
pub fn jump<H>(store: &ParameterStore, host: &mut H, id: &str) -> Option<f32>
where
    H: EditorLayers + ScrollSurface,
{
    let record = store.get(id)?;
    let metrics = host.page_metrics(record.page_index)?;

    // Overlay top relative to the container, plus half the overlay height,
    // minus half the visible height: the overlay lands dead center.
    let overlay_y = record.y * metrics.scroll_height;
    let mut dest_y = metrics.offset_top + overlay_y
        + (record.height * metrics.scroll_height) / 2.0
        - host.viewport_height() / 2.0;
    if dest_y < 0.0 {
        dest_y = 0.0;
    }
    host.scroll_to(0.0, dest_y);

    if host.editor(id).is_some() {
        host.select_editor(id);
    } else {
        host.set_pending_selection(Some(id.to_owned()));
    }
    Some(dest_y)
}
