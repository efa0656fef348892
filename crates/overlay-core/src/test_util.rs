//! Shared test doubles: an in-memory host surface and a recording
//! persistence endpoint.

use crate::editor::LiveEditor;
use crate::host::{EditorLayers, IntentAction, PageMetrics, PersistenceEndpoint, ScrollSurface};
use overlay_model::{
    Color, InkPayload, InkStroke, OverlayId, OverlayPayload, ParameterRecord, SelectionBox,
};
use std::collections::HashMap;

/// In-memory host surface: editor layers plus scroll container.
pub struct MockSurface {
    pub mounted_pages: Vec<u16>,
    pub editors: HashMap<OverlayId, LiveEditor>,
    pub pending: Option<OverlayId>,
    pub selected: Vec<OverlayId>,
    pub removed: Vec<(OverlayId, bool)>,
    pub scrolled_to: Option<(f32, f32)>,
    pub page_height: f32,
    pub viewport_h: f32,
    pub scale: f32,
}

impl MockSurface {
    pub fn with_pages(pages: &[u16]) -> Self {
        Self {
            mounted_pages: pages.to_vec(),
            editors: HashMap::new(),
            pending: None,
            selected: Vec::new(),
            removed: Vec::new(),
            scrolled_to: None,
            page_height: 1000.0,
            viewport_h: 400.0,
            scale: 1.0,
        }
    }
}

impl EditorLayers for MockSurface {
    fn layer_exists(&self, page_index: u16) -> bool {
        self.mounted_pages.contains(&page_index)
    }

    fn page_dimensions(&self, _page_index: u16) -> (f32, f32) {
        (612.0, 792.0)
    }

    fn render_scale(&self, _page_index: u16) -> f32 {
        self.scale
    }

    fn add_editor(&mut self, editor: LiveEditor) {
        self.editors.insert(editor.id.clone(), editor);
    }

    fn editor(&self, id: &str) -> Option<&LiveEditor> {
        self.editors.get(id)
    }

    fn remove_editor(&mut self, id: &str, direct: bool) -> bool {
        let existed = self.editors.remove(id).is_some();
        if existed {
            self.removed.push((id.to_owned(), direct));
        }
        existed
    }

    fn select_editor(&mut self, id: &str) {
        self.selected.push(id.to_owned());
    }

    fn pending_selection(&self) -> Option<OverlayId> {
        self.pending.clone()
    }

    fn set_pending_selection(&mut self, id: Option<OverlayId>) {
        self.pending = id;
    }
}

impl ScrollSurface for MockSurface {
    fn page_metrics(&self, page_index: u16) -> Option<PageMetrics> {
        if !self.mounted_pages.contains(&page_index) {
            return None;
        }
        Some(PageMetrics {
            offset_top: f32::from(page_index) * self.page_height,
            scroll_height: self.page_height,
        })
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_h
    }

    fn scroll_to(&mut self, x: f32, y: f32) {
        self.scrolled_to = Some((x, y));
    }
}

/// Endpoint that replays `loaded` at bootstrap and records every intent.
#[derive(Default)]
pub struct RecordingEndpoint {
    pub loaded: Vec<ParameterRecord>,
    pub intents: Vec<(IntentAction, ParameterRecord)>,
}

impl PersistenceEndpoint for RecordingEndpoint {
    fn load_all(&mut self) -> anyhow::Result<Vec<ParameterRecord>> {
        Ok(self.loaded.clone())
    }

    fn apply_intent(&mut self, action: IntentAction, record: &ParameterRecord) {
        self.intents.push((action, record.clone()));
    }
}

pub fn highlight_record(id: &str, page_index: u16) -> ParameterRecord {
    ParameterRecord {
        id: id.to_owned(),
        page_index,
        x: 0.1,
        y: 0.1,
        width: 0.2,
        height: 0.05,
        is_centered: false,
        hidden: false,
        payload: OverlayPayload::Highlight {
            selected_text: "text".to_owned(),
            color: Color::YELLOW,
            boxes: vec![SelectionBox { x: 0.1, y: 0.1, width: 0.2, height: 0.05 }],
        },
    }
}

pub fn ink_record(id: &str, page_index: u16) -> ParameterRecord {
    ParameterRecord {
        id: id.to_owned(),
        page_index,
        x: 0.0,
        y: 0.0,
        width: 0.1,
        height: 0.1,
        is_centered: false,
        hidden: false,
        payload: OverlayPayload::Ink(InkPayload {
            color: Color::BLACK,
            thickness: 2.0,
            opacity: 1.0,
            strokes: vec![InkStroke {
                bezier: vec![
                    10.0, 10.0, 12.0, 14.0, 16.0, 14.0, 18.0, 10.0, 20.0, 6.0, 24.0, 6.0,
                    26.0, 10.0,
                ],
                points: vec![10.0, 10.0, 18.0, 10.0, 26.0, 10.0],
            }],
            rect: [8.0, 4.0, 26.0, 16.0],
            rotation: 0,
        }),
    }
}
