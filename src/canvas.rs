//! Drawing-context contract and raster backend.
//!
//! Shape layers draw through the [`Canvas`] trait: the host hands one in per
//! render call, the layer builds a path and issues fill/stroke commands.
//! [`PixmapCanvas`] is the built-in tiny-skia implementation used when no
//! host surface is available (previews, golden tests, headless export).
//!
//! Path construction helpers for the five shape silhouettes live here too,
//! so layers and backends agree on geometry exactly.

use tiny_skia::{
    Color, FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, StrokeDash, Transform,
};

use crate::geometry::{Bounds, Vertex};
use crate::style::LineCap;

// ============================================================================
// Canvas Contract
// ============================================================================

/// Stroke paint state for a single stroke call.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePaint {
    pub color: Color,
    pub width: f32,
    pub cap: LineCap,
    /// Dash segment lengths; empty means a solid stroke.
    pub dash: Vec<f64>,
}

impl StrokePaint {
    /// A solid, butt-capped stroke.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Butt,
            dash: Vec::new(),
        }
    }
}

/// A drawing surface that can paint already-constructed paths.
///
/// Implementations only change paint state and rasterize; they never build
/// or mutate paths. Render functions may be called repeatedly and from
/// independent calls — they read but never retain the canvas.
pub trait Canvas {
    fn fill_path(&mut self, path: &Path, color: Color);
    fn stroke_path(&mut self, path: &Path, stroke: &StrokePaint);
}

// ============================================================================
// Path Construction
// ============================================================================

/// An axis-aligned rectangle path matching the bounds exactly.
pub fn rect_path(bounds: &Bounds) -> Option<Path> {
    let rect = Rect::from_xywh(
        bounds.x as f32,
        bounds.y as f32,
        bounds.width as f32,
        bounds.height as f32,
    )?;
    Some(PathBuilder::from_rect(rect))
}

/// Cubic Bezier circle-arc constant, 4/3 · (√2 − 1).
const KAPPA: f32 = 0.552_284_75;

/// A rounded rectangle path. The caller supplies the effective radius.
pub fn rounded_rect_path(bounds: &Bounds, radius: f64) -> Option<Path> {
    if radius <= 0.0 {
        return rect_path(bounds);
    }
    // Same dimension validation as the plain rect.
    Rect::from_xywh(
        bounds.x as f32,
        bounds.y as f32,
        bounds.width as f32,
        bounds.height as f32,
    )?;

    let (x, y) = (bounds.x as f32, bounds.y as f32);
    let (w, h) = (bounds.width as f32, bounds.height as f32);
    let r = radius as f32;
    let k = r * KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(x + w - r, y);
    pb.cubic_to(x + w - r + k, y, x + w, y + r - k, x + w, y + r);
    pb.line_to(x + w, y + h - r);
    pb.cubic_to(x + w, y + h - r + k, x + w - r + k, y + h, x + w - r, y + h);
    pb.line_to(x + r, y + h);
    pb.cubic_to(x + r - k, y + h, x, y + h - r + k, x, y + h - r);
    pb.line_to(x, y + r);
    pb.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
    pb.close();
    pb.finish()
}

/// An ellipse path inscribed in the bounds.
pub fn ellipse_path(bounds: &Bounds) -> Option<Path> {
    let rect = Rect::from_xywh(
        bounds.x as f32,
        bounds.y as f32,
        bounds.width as f32,
        bounds.height as f32,
    )?;
    PathBuilder::from_oval(rect)
}

/// A closed path through the given vertices.
pub fn polygon_path(vertices: &[Vertex]) -> Option<Path> {
    let (first, rest) = vertices.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for vertex in rest {
        pb.line_to(vertex.x as f32, vertex.y as f32);
    }
    pb.close();
    pb.finish()
}

/// A single open segment.
pub fn line_path(x1: f64, y1: f64, x2: f64, y2: f64) -> Option<Path> {
    let mut pb = PathBuilder::new();
    pb.move_to(x1 as f32, y1 as f32);
    pb.line_to(x2 as f32, y2 as f32);
    pb.finish()
}

// ============================================================================
// PixmapCanvas
// ============================================================================

/// A tiny-skia pixmap implementing the [`Canvas`] contract.
pub struct PixmapCanvas {
    pixmap: Pixmap,
}

impl PixmapCanvas {
    /// Creates a transparent canvas. Returns `None` for zero dimensions.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(Self {
            pixmap: Pixmap::new(width, height)?,
        })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }
}

impl Canvas for PixmapCanvas {
    fn fill_path(&mut self, path: &Path, color: Color) {
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        self.pixmap
            .fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn stroke_path(&mut self, path: &Path, stroke: &StrokePaint) {
        let mut paint = Paint::default();
        paint.set_color(stroke.color);
        paint.anti_alias = true;
        let sk_stroke = Stroke {
            width: stroke.width,
            line_cap: match stroke.cap {
                LineCap::Butt => tiny_skia::LineCap::Butt,
                LineCap::Round => tiny_skia::LineCap::Round,
                LineCap::Square => tiny_skia::LineCap::Square,
            },
            dash: stroke_dash(&stroke.dash),
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &paint, &sk_stroke, Transform::identity(), None);
    }
}

/// Converts parsed dash segments to a tiny-skia dash.
///
/// Odd-length lists are doubled first, matching SVG dash semantics.
fn stroke_dash(dash: &[f64]) -> Option<StrokeDash> {
    if dash.is_empty() {
        return None;
    }
    let mut array: Vec<f32> = dash.iter().map(|v| *v as f32).collect();
    if array.len() % 2 != 0 {
        array.extend_from_slice(&array.clone());
    }
    StrokeDash::new(array, 0.0)
}

// ============================================================================
// Recording Canvas (test support)
// ============================================================================

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// One recorded draw command.
    #[derive(Debug, Clone)]
    pub enum DrawOp {
        Fill { path: Path, color: Color },
        Stroke { path: Path, paint: StrokePaint },
    }

    /// A canvas that records commands instead of rasterizing.
    #[derive(Debug, Default)]
    pub struct RecordingCanvas {
        pub ops: Vec<DrawOp>,
    }

    impl RecordingCanvas {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl Canvas for RecordingCanvas {
        fn fill_path(&mut self, path: &Path, color: Color) {
            self.ops.push(DrawOp::Fill {
                path: path.clone(),
                color,
            });
        }

        fn stroke_path(&mut self, path: &Path, stroke: &StrokePaint) {
            self.ops.push(DrawOp::Stroke {
                path: path.clone(),
                paint: stroke.clone(),
            });
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_skia::PathSegment;

    #[test]
    fn rect_path_matches_bounds() {
        let path = rect_path(&Bounds::new(5.0, 10.0, 40.0, 20.0)).unwrap();
        let b = path.bounds();
        assert_eq!(b.x(), 5.0);
        assert_eq!(b.y(), 10.0);
        assert_eq!(b.width(), 40.0);
        assert_eq!(b.height(), 20.0);
    }

    #[test]
    fn rect_path_rejects_negative_bounds() {
        assert!(rect_path(&Bounds::new(0.0, 0.0, -10.0, 10.0)).is_none());
        assert!(rect_path(&Bounds::new(0.0, 0.0, 10.0, -5.0)).is_none());
        assert!(rect_path(&Bounds::new(0.0, 0.0, f64::NAN, 10.0)).is_none());
    }

    #[test]
    fn rounded_rect_starts_after_the_corner() {
        let path = rounded_rect_path(&Bounds::new(0.0, 0.0, 100.0, 60.0), 8.0).unwrap();
        match path.segments().next() {
            Some(PathSegment::MoveTo(p)) => {
                assert_eq!(p.x, 8.0);
                assert_eq!(p.y, 0.0);
            }
            other => panic!("expected MoveTo, got {:?}", other),
        }
    }

    #[test]
    fn rounded_rect_with_zero_radius_is_plain() {
        let rounded = rounded_rect_path(&Bounds::new(0.0, 0.0, 10.0, 10.0), 0.0).unwrap();
        let plain = rect_path(&Bounds::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert_eq!(rounded.bounds(), plain.bounds());
    }

    #[test]
    fn polygon_path_closes() {
        let vertices = [
            Vertex::new(0.0, 0.0),
            Vertex::new(10.0, 0.0),
            Vertex::new(5.0, 8.0),
        ];
        let path = polygon_path(&vertices).unwrap();
        let segments: Vec<_> = path.segments().collect();
        assert!(matches!(segments.first(), Some(PathSegment::MoveTo(_))));
        assert!(matches!(segments.last(), Some(PathSegment::Close)));
        assert_eq!(segments.len(), 4);
    }

    #[test]
    fn polygon_path_needs_vertices() {
        assert!(polygon_path(&[]).is_none());
    }

    #[test]
    fn dash_doubling_for_odd_lengths() {
        // tiny-skia requires an even dash count; SVG doubles odd lists.
        assert!(stroke_dash(&[5.0]).is_some());
        assert!(stroke_dash(&[5.0, 3.0]).is_some());
        assert!(stroke_dash(&[]).is_none());
    }

    #[test]
    fn pixmap_canvas_fills_pixels() {
        let mut canvas = PixmapCanvas::new(10, 10).unwrap();
        let path = rect_path(&Bounds::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        canvas.fill_path(&path, Color::from_rgba8(255, 0, 0, 255));

        let pixel = canvas.pixmap().pixel(5, 5).unwrap();
        assert_eq!(pixel.red(), 255);
        assert_eq!(pixel.alpha(), 255);
    }

    #[test]
    fn pixmap_canvas_strokes_a_line() {
        let mut canvas = PixmapCanvas::new(20, 20).unwrap();
        let path = line_path(0.0, 10.0, 20.0, 10.0).unwrap();
        canvas.stroke_path(
            &path,
            &StrokePaint::solid(Color::from_rgba8(0, 255, 0, 255), 4.0),
        );

        let on_line = canvas.pixmap().pixel(10, 10).unwrap();
        assert!(on_line.green() > 0);
        let far_away = canvas.pixmap().pixel(10, 2).unwrap();
        assert_eq!(far_away.alpha(), 0);
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        assert!(PixmapCanvas::new(0, 10).is_none());
    }
}
