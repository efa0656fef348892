//! Overlay annotation core.
//!
//! Maintains a persistent, serializable record of annotation overlays on a
//! paginated document surface and reconciles it against the transient live
//! editor instances the host surface creates and destroys as pages scroll
//! into and out of view.

pub mod convert;
pub mod editor;
pub mod host;
pub mod ink_path;
pub mod lifecycle;
pub mod materialize;
pub mod position;
pub mod session;
pub mod store;

#[cfg(test)]
pub(crate) mod test_util;

pub use editor::{EditorKind, EditorState, InkState, LiveEditor};
pub use host::{
    EditorLayers, IntentAction, PageMetrics, PersistenceEndpoint, ScrollSurface,
};
pub use ink_path::{CubicSegment, DrawablePath, PathCommand, Point, StrokePath};
pub use lifecycle::LifecycleBridge;
pub use session::OverlaySession;
pub use store::ParameterStore;
