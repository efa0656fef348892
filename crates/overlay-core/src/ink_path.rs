//! Ink path reconstruction.
//!
//! Pure geometry: converts stored document-space bezier control points into
//! device-space drawable path segments for a live ink editor. Strokes are
//! stored as a start pair followed by sextets of cubic control coordinates
//! (see [`InkStroke`]); reconstruction maps them into the editor's local
//! frame, applies the render scale and half-thickness padding, and chains
//! them into segment quadruples whose endpoints connect exactly.

use overlay_model::InkStroke;

/// A 2-D point in device space.
pub type Point = [f32; 2];

/// One cubic bezier segment: start, two control points, end.
///
/// Segment `i`'s start point equals segment `i - 1`'s end point.
pub type CubicSegment = [Point; 4];

/// All segments of one reconstructed stroke.
pub type StrokePath = Vec<CubicSegment>;

/// Renderer-native path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    CurveTo(Point, Point, Point),
}

/// Renderer-native path built from one stroke.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawablePath(pub Vec<PathCommand>);

/// Map document-space coordinate pairs into the local frame of `rect`,
/// accounting for the page rotation the stroke was captured under.
///
/// `rect` is `[bl_x, bl_y, tr_x, tr_y]` in document space. Rotations other
/// than 90/180/270 are treated as 0.
pub fn to_local_frame(coords: &[f32], rect: [f32; 4], rotation: u16) -> Vec<f32> {
    let [bl_x, bl_y, tr_x, tr_y] = rect;
    let mut out = Vec::with_capacity(coords.len());
    for pair in coords.chunks_exact(2) {
        let (x, y) = (pair[0], pair[1]);
        let (lx, ly) = match rotation % 360 {
            90 => (y - bl_y, x - bl_x),
            180 => (tr_x - x, y - bl_y),
            270 => (tr_y - y, tr_x - x),
            _ => (x - bl_x, tr_y - y),
        };
        out.push(lx);
        out.push(ly);
    }
    out
}

/// Reconstruct the device-space segment list for every stroke.
///
/// Each control coordinate is offset by half the stroke thickness and scaled
/// by the current render scale factor; the start point of each segment is
/// carried over from the previous segment's end, so connectivity is exact by
/// construction.
pub fn reconstruct_strokes(
    strokes: &[InkStroke],
    rect: [f32; 4],
    rotation: u16,
    thickness: f32,
    scale: f32,
) -> Vec<StrokePath> {
    let padding = thickness / 2.0;
    let place = |c: f32| scale * (c - padding);

    let mut paths = Vec::with_capacity(strokes.len());
    for stroke in strokes {
        let local = to_local_frame(&stroke.bezier, rect, rotation);
        let mut path = StrokePath::new();
        if local.len() >= 8 {
            let mut p0 = [place(local[0]), place(local[1])];
            for sextet in local[2..].chunks_exact(6) {
                let c1 = [place(sextet[0]), place(sextet[1])];
                let c2 = [place(sextet[2]), place(sextet[3])];
                let end = [place(sextet[4]), place(sextet[5])];
                path.push([p0, c1, c2, end]);
                p0 = end;
            }
        }
        paths.push(path);
    }
    paths
}

/// Convert a reconstructed stroke into a renderer-native path.
pub fn build_drawable(path: &StrokePath) -> DrawablePath {
    let mut commands = Vec::with_capacity(path.len() + 1);
    if let Some(first) = path.first() {
        commands.push(PathCommand::MoveTo(first[0]));
        for segment in path {
            commands.push(PathCommand::CurveTo(segment[1], segment[2], segment[3]));
        }
    }
    DrawablePath(commands)
}

/// Convert a stored document-space rect into the page frame:
/// `(x, y, width, height)` with the origin at the page's top-left,
/// accounting for page rotation.
pub fn rect_in_page_coords(rect: [f32; 4], rotation: u16, page_height: f32) -> [f32; 4] {
    let [bl_x, bl_y, tr_x, tr_y] = rect;
    let width = tr_x - bl_x;
    let height = tr_y - bl_y;
    match rotation % 360 {
        90 => [bl_x, page_height - bl_y, height, width],
        180 => [tr_x, page_height - bl_y, width, height],
        270 => [tr_x, page_height - tr_y, height, width],
        _ => [bl_x, page_height - tr_y, width, height],
    }
}
