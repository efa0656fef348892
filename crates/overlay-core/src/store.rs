//! Parameter store.
//!
//! Owns the authoritative id → record map. Other components read through the
//! accessors and mutate only through the operations here; nothing else may
//! alias the map.

use crate::convert;
use crate::editor::LiveEditor;
use overlay_model::{id_suffix, IdAllocator, OverlayId, ParameterRecord};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct ParameterStore {
    map: HashMap<OverlayId, ParameterRecord>,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-load records and derive the allocator's next-id counter.
    ///
    /// Scans ids minted under the allocator's prefix and sets the counter to
    /// one past the highest numeric suffix. Records with foreign or
    /// unparseable ids are stored but do not influence the counter. Empty
    /// input is a no-op.
    pub fn initialize(&mut self, records: Vec<ParameterRecord>, allocator: &mut IdAllocator) {
        if records.is_empty() {
            return;
        }
        let mut max_suffix = None;
        for record in records {
            if let Some(suffix) = id_suffix(&record.id, allocator.prefix()) {
                max_suffix = Some(max_suffix.map_or(suffix, |m: u64| m.max(suffix)));
            }
            self.map.insert(record.id.clone(), record);
        }
        if let Some(max) = max_suffix {
            allocator.set_next(max + 1);
        }
    }

    /// Convert and insert a record for a newly observed live instance.
    ///
    /// Returns `None` when a record already exists for the id (duplicate
    /// creation notifications are routine) or when conversion fails.
    pub fn create(&mut self, editor: &LiveEditor) -> Option<&ParameterRecord> {
        if self.map.contains_key(&editor.id) {
            return None;
        }
        let Some(record) = convert::to_record(editor) else {
            tracing::warn!(id = %editor.id, kind = ?editor.kind(), "editor cannot be converted, dropping create");
            return None;
        };
        self.map.insert(editor.id.clone(), record);
        self.map.get(&editor.id)
    }

    /// Re-derive and overwrite the record for a modified live instance.
    ///
    /// A converted record whose id disagrees with the live instance's id is
    /// an invariant violation; the operation aborts and nothing is stored.
    pub fn update(&mut self, editor: &LiveEditor) -> Option<&ParameterRecord> {
        let Some(record) = convert::to_record(editor) else {
            tracing::warn!(id = %editor.id, kind = ?editor.kind(), "editor cannot be converted, dropping update");
            return None;
        };
        if record.id != editor.id {
            tracing::warn!(editor_id = %editor.id, record_id = %record.id, "id mismatch, dropping update");
            return None;
        }
        self.map.insert(editor.id.clone(), record);
        self.map.get(&editor.id)
    }

    /// Delete the record for a destroyed live instance, returning it so the
    /// lifecycle bridge can fire the delete intent. Absent ids are a no-op.
    pub fn remove(&mut self, editor: &LiveEditor) -> Option<ParameterRecord> {
        self.map.remove(&editor.id)
    }

    pub fn get(&self, id: &str) -> Option<&ParameterRecord> {
        self.map.get(id)
    }

    /// Flip a record's visibility flag. Returns false for absent ids.
    pub fn set_hidden(&mut self, id: &str, hidden: bool) -> bool {
        match self.map.get_mut(id) {
            Some(record) => {
                record.hidden = hidden;
                true
            }
            None => false,
        }
    }

    /// Read-only iteration over all records.
    pub fn iter(&self) -> impl Iterator<Item = &ParameterRecord> {
        self.map.values()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
