//! Collaborator contracts of the host rendering surface.
//!
//! The core never talks to concrete viewer objects; the host wires its page
//! layers, scroll container and persistence endpoint in through these traits
//! when it constructs the session.

use crate::editor::LiveEditor;
use overlay_model::{OverlayId, ParameterRecord};

/// Per-page editor-layer API of the host surface.
///
/// Live editor instances are owned by the host for as long as they are on
/// screen; the core only hands them over and addresses them by id.
pub trait EditorLayers {
    /// Whether the layer for `page_index` is currently mounted.
    fn layer_exists(&self, page_index: u16) -> bool;

    /// Page dimensions in document units.
    fn page_dimensions(&self, page_index: u16) -> (f32, f32);

    /// Render scale factor of the mounted page layer.
    fn render_scale(&self, page_index: u16) -> f32;

    /// Attach a live instance to its page's layer.
    fn add_editor(&mut self, editor: LiveEditor);

    fn editor(&self, id: &str) -> Option<&LiveEditor>;

    /// Detach and destroy a live instance. `direct` requests hard removal.
    /// Returns false if no instance existed for `id`.
    fn remove_editor(&mut self, id: &str, direct: bool) -> bool;

    fn select_editor(&mut self, id: &str);

    /// Overlay id queued for selection once its instance materializes.
    fn pending_selection(&self) -> Option<OverlayId>;

    fn set_pending_selection(&mut self, id: Option<OverlayId>);
}

/// Scroll metrics of one mounted page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMetrics {
    /// Offset of the page's top edge inside the scroll container.
    pub offset_top: f32,
    /// Full scrollable height of the page element.
    pub scroll_height: f32,
}

/// Scrollable container of the host surface.
pub trait ScrollSurface {
    /// Metrics for a mounted page, `None` when the page is not in the
    /// current page list.
    fn page_metrics(&self, page_index: u16) -> Option<PageMetrics>;

    /// Visible height of the scroll container.
    fn viewport_height(&self) -> f32;

    fn scroll_to(&mut self, x: f32, y: f32);
}

/// Persistence action attached to an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentAction {
    Add,
    Update,
    Delete,
}

/// Remote (or local) store of parameter records.
///
/// `load_all` is awaited once at bootstrap; `apply_intent` is fire-and-forget
/// from the core's perspective: failures are the endpoint's concern and are
/// neither retried nor surfaced here.
pub trait PersistenceEndpoint {
    fn load_all(&mut self) -> anyhow::Result<Vec<ParameterRecord>>;

    fn apply_intent(&mut self, action: IntentAction, record: &ParameterRecord);
}
