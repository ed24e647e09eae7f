//! Shared fill/stroke styling.
//!
//! This module holds the common paint state of the filled shapes
//! ([`FillStroke`]), the helpers that turn it into draw calls
//! ([`paint_shape`]) or SVG attributes ([`svg_paint_attrs`]), and the small
//! parsers the style fields need (hex colors, dash patterns).
//!
//! Color and width fallbacks are defensive: an unparseable color paints
//! with the schema default rather than failing the render.

use serde::{Deserialize, Serialize};
use tiny_skia::{Color, Path};

use crate::canvas::{Canvas, StrokePaint};
use crate::geometry::Vertex;

/// Schema default for fill colors.
pub const DEFAULT_FILL_COLOR: &str = "#ffffff";
/// Schema default for stroke colors on filled shapes.
pub const DEFAULT_STROKE_COLOR: &str = "#000000";

// ============================================================================
// FillStroke
// ============================================================================

/// The fill/stroke paint state shared by rectangle, ellipse, polygon, and
/// star layers. Fill and stroke are independent; both may apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FillStroke {
    pub fill_color: String,
    pub fill_enabled: bool,
    pub stroke_color: String,
    pub stroke_enabled: bool,
    pub stroke_width: f64,
}

impl Default for FillStroke {
    fn default() -> Self {
        Self {
            fill_color: DEFAULT_FILL_COLOR.to_string(),
            fill_enabled: true,
            stroke_color: DEFAULT_STROKE_COLOR.to_string(),
            stroke_enabled: false,
            stroke_width: 0.0,
        }
    }
}

/// Line cap style for stroked segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

impl LineCap {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses a `#rgb`, `#rrggbb`, or `#rrggbbaa` color string.
///
/// Returns `None` for anything else; callers fall back to the schema
/// default color.
pub fn parse_color(input: &str) -> Option<Color> {
    let hex = input.trim().strip_prefix('#')?;
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    let nibble = |index: usize| {
        u8::from_str_radix(&hex[index..index + 1], 16)
            .ok()
            .map(|v| v * 17)
    };
    let (r, g, b, a) = match hex.len() {
        3 => (nibble(0)?, nibble(1)?, nibble(2)?, 255),
        6 => (channel(0..2)?, channel(2..4)?, channel(4..6)?, 255),
        8 => (
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        ),
        _ => return None,
    };
    Some(Color::from_rgba8(r, g, b, a))
}

/// Parses a comma-separated dash pattern such as `"5,3"`.
///
/// Entries that are not numbers, not finite, or not greater than zero are
/// discarded. An empty result means the stroke stays solid.
pub fn parse_dash_pattern(input: &str) -> Vec<f64> {
    input
        .split(',')
        .filter_map(|entry| entry.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value > 0.0)
        .collect()
}

// ============================================================================
// Painting
// ============================================================================

/// Paints an already-constructed path with the given fill/stroke state.
///
/// Fill applies when `fill_enabled`; stroke applies when `stroke_enabled`
/// and the width is greater than zero. Path construction is the caller's
/// responsibility; this helper only issues paint calls.
pub fn paint_shape(style: &FillStroke, canvas: &mut dyn Canvas, path: &Path) {
    if style.fill_enabled {
        let color = parse_color(&style.fill_color).unwrap_or(Color::WHITE);
        canvas.fill_path(path, color);
    }
    if style.stroke_enabled && style.stroke_width > 0.0 {
        let color = parse_color(&style.stroke_color).unwrap_or(Color::BLACK);
        canvas.stroke_path(path, &StrokePaint::solid(color, style.stroke_width as f32));
    }
}

// ============================================================================
// SVG Emission
// ============================================================================

/// Formats a coordinate for SVG output, trimming to two decimals.
pub(crate) fn fmt_coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == rounded.trunc() && rounded.abs() < 1e15 {
        format!("{}", rounded as i64)
    } else {
        let text = format!("{:.2}", rounded);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// The `fill`/`stroke` attribute text for an SVG shape element.
pub fn svg_paint_attrs(style: &FillStroke) -> String {
    let mut attrs = if style.fill_enabled {
        format!(r#"fill="{}""#, style.fill_color)
    } else {
        r#"fill="none""#.to_string()
    };
    if style.stroke_enabled && style.stroke_width > 0.0 {
        attrs.push_str(&format!(
            r#" stroke="{}" stroke-width="{}""#,
            style.stroke_color,
            fmt_coord(style.stroke_width)
        ));
    }
    attrs
}

/// A space-separated `points` attribute value for `<polygon>` elements.
pub(crate) fn svg_point_list(vertices: &[Vertex]) -> String {
    vertices
        .iter()
        .map(|v| format!("{},{}", fmt_coord(v.x), fmt_coord(v.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wraps rendered elements into a standalone SVG document.
pub fn svg_document(body: &str, width: f64, height: f64) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">{}</svg>"#,
        fmt_coord(width),
        fmt_coord(height),
        fmt_coord(width),
        fmt_coord(height),
        body
    )
}

// ============================================================================
// Tests
// ============================================================================
