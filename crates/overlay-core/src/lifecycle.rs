//! Lifecycle bridge.
//!
//! Routes host-surface lifecycle notifications into the parameter store and
//! forwards persistence intents to the endpoint. Commit timing differs per
//! variant: some editors are persisted the instant they are constructed,
//! others only once their initial gesture settles.

use crate::editor::{EditorKind, LiveEditor};
use crate::host::{IntentAction, PersistenceEndpoint};
use crate::store::ParameterStore;

/// Variants persisted the instant the live instance is constructed.
const COMMIT_ON_CONSTRUCT: &[EditorKind] = &[EditorKind::Highlight];

/// Variants persisted only after the initial gesture settles.
const COMMIT_ON_INITIALIZE: &[EditorKind] = &[EditorKind::Stamp, EditorKind::Ink];

/// Forwards store mutations as persistence intents.
///
/// Intents are fire-and-forget: the endpoint owns failure handling, nothing
/// is retried or surfaced here.
#[derive(Debug, Default)]
pub struct LifecycleBridge;

impl LifecycleBridge {
    pub fn new() -> Self {
        Self
    }

    /// A live instance finished constructing on the page.
    pub fn editor_constructed(
        &self,
        store: &mut ParameterStore,
        endpoint: &mut dyn PersistenceEndpoint,
        editor: &LiveEditor,
    ) {
        if !COMMIT_ON_CONSTRUCT.contains(&editor.kind()) {
            return;
        }
        if let Some(record) = store.create(editor) {
            endpoint.apply_intent(IntentAction::Add, record);
        }
    }

    /// A deferred-commit instance finished its initialization gesture.
    pub fn editor_initialized(
        &self,
        store: &mut ParameterStore,
        endpoint: &mut dyn PersistenceEndpoint,
        editor: &LiveEditor,
    ) {
        if !COMMIT_ON_INITIALIZE.contains(&editor.kind()) {
            return;
        }
        if let Some(record) = store.create(editor) {
            endpoint.apply_intent(IntentAction::Add, record);
        }
    }

    /// A confirmed modification landed on a live instance.
    ///
    /// A failed conversion or id mismatch aborts the update; no intent fires.
    pub fn editor_modified(
        &self,
        store: &mut ParameterStore,
        endpoint: &mut dyn PersistenceEndpoint,
        editor: &LiveEditor,
    ) {
        if let Some(record) = store.update(editor) {
            endpoint.apply_intent(IntentAction::Update, record);
        }
    }

    /// A live instance is about to be destroyed.
    ///
    /// Destruction of a never-persisted instance is silent.
    pub fn editor_destroyed(
        &self,
        store: &mut ParameterStore,
        endpoint: &mut dyn PersistenceEndpoint,
        editor: &LiveEditor,
    ) {
        if let Some(record) = store.remove(editor) {
            endpoint.apply_intent(IntentAction::Delete, &record);
        }
    }
}
