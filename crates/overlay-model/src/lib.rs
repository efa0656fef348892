//! Data model for persisted overlay annotations.
//!
//! A `ParameterRecord` is the durable, serializable description of one
//! overlay placed on a paginated document. Records double as the payload
//! schema of the persistence endpoint, so field names serialize in
//! camelCase to match the host surface's conventions.

use serde::{Deserialize, Serialize};

/// Unique identifier for an overlay.
///
/// Ids are strings of the form `<prefix><N>`; the numeric suffix drives
/// next-id derivation so bootstrap-loaded and newly created overlays never
/// collide.
pub type OverlayId = String;

/// Prefix used by [`IdAllocator::default`].
pub const DEFAULT_ID_PREFIX: &str = "viewer_editor_";

/// Parse the numeric suffix of an id minted under `prefix`.
///
/// Returns `None` for foreign prefixes or non-numeric suffixes; such ids are
/// still valid map keys, they just never influence the allocator counter.
pub fn id_suffix(id: &str, prefix: &str) -> Option<u64> {
    id.strip_prefix(prefix)?.parse().ok()
}

/// Mints `<prefix><N>` ids from a monotonically increasing counter.
///
/// The counter is kept compatible with the host surface's own allocator via
/// [`IdAllocator::next_id`] and [`IdAllocator::set_next`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    prefix: String,
    next: u64,
}

impl IdAllocator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), next: 0 }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Produce the next id and advance the counter.
    pub fn mint(&mut self) -> OverlayId {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }

    pub fn next_id(&self) -> u64 {
        self.next
    }

    pub fn set_next(&mut self, next: u64) {
        self.next = next;
    }

    /// Ensure the counter is past `suffix`, so a mint never reuses it.
    pub fn bump_past(&mut self, suffix: u64) {
        self.next = self.next.max(suffix + 1);
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_PREFIX)
    }
}

/// RGBA color carried by overlay payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const YELLOW: Color = Color { r: 255, g: 255, b: 0, a: 255 };
}

/// One rectangle of a text-selection based overlay (highlight).
///
/// Coordinates are normalized to the page, like the record's own rect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One committed free-hand stroke in document space.
///
/// `bezier` holds a start pair followed by sextets of cubic control
/// coordinates (`c1x, c1y, c2x, c2y, ex, ey`); `points` is the raw captured
/// point list the stroke was fitted from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InkStroke {
    pub bezier: Vec<f32>,
    pub points: Vec<f32>,
}

/// Persisted payload of an ink overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InkPayload {
    pub color: Color,
    pub thickness: f32,
    pub opacity: f32,
    pub strokes: Vec<InkStroke>,
    /// Bounding rectangle `[bl_x, bl_y, tr_x, tr_y]` in document space.
    pub rect: [f32; 4],
    /// Page rotation the strokes were captured under (0, 90, 180, 270).
    pub rotation: u16,
}

/// Overlay variant tag.
///
/// Decided once at record construction and never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverlayVariant {
    Highlight,
    FreeText,
    Ink,
    Arrow,
    Stamp,
}

/// Variant-specific payload of a [`ParameterRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum OverlayPayload {
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
    Ink(InkPayload),
    Arrow {
        /// Opaque arrow sub-type understood by the host surface.
        arrow_type: u32,
    },
    Stamp {
        img_base64: String,
    },
}

impl OverlayPayload {
    pub fn variant(&self) -> OverlayVariant {
        match self {
            OverlayPayload::Highlight { .. } => OverlayVariant::Highlight,
            OverlayPayload::FreeText { .. } => OverlayVariant::FreeText,
            OverlayPayload::Ink(_) => OverlayVariant::Ink,
            OverlayPayload::Arrow { .. } => OverlayVariant::Arrow,
            OverlayPayload::Stamp { .. } => OverlayVariant::Stamp,
        }
    }
}

/// The persisted, serializable representation of one overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterRecord {
    pub id: OverlayId,
    /// Page the overlay belongs to (0-based). Stable once assigned.
    pub page_index: u16,
    /// Geometry normalized (0..1) to the page dimensions.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub is_centered: bool,
    /// True when the record exists but no live instance should be shown.
    #[serde(default)]
    pub hidden: bool,
    #[serde(flatten)]
    pub payload: OverlayPayload,
}

impl ParameterRecord {
    pub fn variant(&self) -> OverlayVariant {
        self.payload.variant()
    }
}
