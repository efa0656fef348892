//! Session wiring.
//!
//! One `OverlaySession` per document session, constructed at setup time and
//! torn down with the document. It owns the parameter store, id allocator
//! and lifecycle bridge, and holds the host surface and persistence endpoint
//! the host wired in. All entry points run synchronously on the host's
//! callback thread.

use crate::editor::LiveEditor;
use crate::host::{EditorLayers, PersistenceEndpoint, ScrollSurface};
use crate::lifecycle::LifecycleBridge;
use crate::store::ParameterStore;
use crate::{materialize, position};
use overlay_model::{IdAllocator, OverlayId};

pub struct OverlaySession<H, P>
where
    H: EditorLayers + ScrollSurface,
    P: PersistenceEndpoint,
{
    store: ParameterStore,
    allocator: IdAllocator,
    bridge: LifecycleBridge,
    host: H,
    endpoint: P,
}

impl<H, P> OverlaySession<H, P>
where
    H: EditorLayers + ScrollSurface,
    P: PersistenceEndpoint,
{
    pub fn new(host: H, endpoint: P, allocator: IdAllocator) -> Self {
        Self {
            store: ParameterStore::new(),
            allocator,
            bridge: LifecycleBridge::new(),
            host,
            endpoint,
        }
    }

    /// Handle the host's setup event.
    ///
    /// Loads the full parameter set from the endpoint, derives the next-id
    /// counter and materializes the overlays of every mounted page. Nothing
    /// touches the store until the load has resolved; a failed load leaves
    /// the session empty and is the caller's to report.
    pub fn bootstrap(&mut self) -> anyhow::Result<()> {
        let records = self.endpoint.load_all()?;
        tracing::debug!(count = records.len(), "loaded overlay records");
        self.store.initialize(records, &mut self.allocator);
        materialize::render_relevant(&mut self.store, &mut self.host, None);
        Ok(())
    }

    /// Handle the host's per-page render event.
    pub fn page_rendered(&mut self, page_index: u16) {
        materialize::render_relevant(&mut self.store, &mut self.host, Some(page_index));
    }

    /// Lifecycle callback: a live instance finished constructing.
    pub fn editor_constructed(&mut self, editor: &LiveEditor) {
        self.bridge.editor_constructed(&mut self.store, &mut self.endpoint, editor);
    }

    /// Lifecycle callback: a deferred-commit instance settled its gesture.
    pub fn editor_initialized(&mut self, editor: &LiveEditor) {
        self.bridge.editor_initialized(&mut self.store, &mut self.endpoint, editor);
    }

    /// Lifecycle callback: a confirmed modification landed.
    pub fn editor_modified(&mut self, editor: &LiveEditor) {
        self.bridge.editor_modified(&mut self.store, &mut self.endpoint, editor);
    }

    /// Lifecycle callback: a live instance is about to be destroyed.
    pub fn editor_destroyed(&mut self, editor: &LiveEditor) {
        self.bridge.editor_destroyed(&mut self.store, &mut self.endpoint, editor);
    }

    pub fn show_overlay(&mut self, id: &str) {
        materialize::show(&mut self.store, &mut self.host, id);
    }

    pub fn hide_overlay(&mut self, id: &str) {
        materialize::hide(&mut self.store, &mut self.host, id);
    }

    pub fn remove_overlay(&mut self, id: &str, direct: bool) {
        materialize::remove(&mut self.store, &mut self.host, id, direct);
    }

    /// Scroll the host surface to `id` and select it once materialized.
    pub fn jump_to(&mut self, id: &str) -> Option<f32> {
        position::jump(&self.store, &mut self.host, id)
    }

    /// Mint the next overlay id, in step with the host's own counter.
    pub fn mint_id(&mut self) -> OverlayId {
        self.allocator.mint()
    }

    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    pub fn allocator(&self) -> &IdAllocator {
        &self.allocator
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
