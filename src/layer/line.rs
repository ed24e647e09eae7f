//! Line layer type.
//!
//! A line has no interior, so it does not reuse the common fill/stroke set:
//! its schema is stroke-only, plus a cap style and an optional dash pattern.
//! The bounds are the segment itself — top-left corner to bottom-right
//! corner — not a containing box for a centered shape.

use serde::{Deserialize, Serialize};
use tiny_skia::Color;

use super::{ShapeDefinition, ShapeKind};
use crate::canvas::{Canvas, StrokePaint, line_path};
use crate::geometry::Bounds;
use crate::property::{
    PropertyGroup, PropertyKind, PropertySchema, PropertyValue, ValidationIssue,
};
use crate::style::{LineCap, fmt_coord, parse_color, parse_dash_pattern};

pub(crate) const LINE_PROPERTIES: &[PropertySchema] = &[
    PropertySchema {
        key: "strokeColor",
        label: "Color",
        kind: PropertyKind::Color,
        default: PropertyValue::Str("#ffffff"),
        group: PropertyGroup::Stroke,
    },
    PropertySchema {
        key: "strokeWidth",
        label: "Width",
        kind: PropertyKind::Number {
            min: 0.5,
            max: 100.0,
            step: 0.5,
        },
        default: PropertyValue::Number(2.0),
        group: PropertyGroup::Stroke,
    },
    PropertySchema {
        key: "lineCap",
        label: "Cap",
        kind: PropertyKind::Select {
            options: &["butt", "round", "square"],
        },
        default: PropertyValue::Str("round"),
        group: PropertyGroup::Stroke,
    },
    PropertySchema {
        key: "dashPattern",
        label: "Dash pattern",
        kind: PropertyKind::Text,
        default: PropertyValue::Str(""),
        group: PropertyGroup::Stroke,
    },
];

/// Properties of a line layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineProperties {
    pub stroke_color: String,
    pub stroke_width: f64,
    pub line_cap: LineCap,
    /// Comma-separated dash lengths; empty means solid.
    pub dash_pattern: String,
}

impl Default for LineProperties {
    fn default() -> Self {
        Self {
            stroke_color: "#ffffff".to_string(),
            stroke_width: 2.0,
            line_cap: LineCap::Round,
            dash_pattern: String::new(),
        }
    }
}

impl ShapeDefinition for LineProperties {
    const KIND: ShapeKind = ShapeKind::Line;

    fn schema() -> Vec<PropertySchema> {
        LINE_PROPERTIES.to_vec()
    }

    fn render(&self, canvas: &mut dyn Canvas, bounds: &Bounds) {
        let Some(path) = line_path(bounds.x, bounds.y, bounds.right(), bounds.bottom()) else {
            return;
        };
        let color = parse_color(&self.stroke_color).unwrap_or(Color::WHITE);
        canvas.stroke_path(
            &path,
            &StrokePaint {
                color,
                width: self.stroke_width as f32,
                cap: self.line_cap,
                dash: parse_dash_pattern(&self.dash_pattern),
            },
        );
    }

    fn render_svg(&self, bounds: &Bounds) -> String {
        let mut element = format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="{}""#,
            fmt_coord(bounds.x),
            fmt_coord(bounds.y),
            fmt_coord(bounds.right()),
            fmt_coord(bounds.bottom()),
            self.stroke_color,
            fmt_coord(self.stroke_width),
            self.line_cap.as_str()
        );
        let dash = parse_dash_pattern(&self.dash_pattern);
        if !dash.is_empty() {
            let list = dash.iter().map(|v| fmt_coord(*v)).collect::<Vec<_>>();
            element.push_str(&format!(r#" stroke-dasharray="{}""#, list.join(",")));
        }
        element.push_str("/>");
        element
    }

    fn validate(&self) -> Vec<ValidationIssue> {
        if self.stroke_width >= 0.5 {
            Vec::new()
        } else {
            vec![ValidationIssue::new(
                "strokeWidth",
                "must be a number of at least 0.5",
            )]
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recording::{DrawOp, RecordingCanvas};
    use tiny_skia::PathSegment;

    #[test]
    fn render_strokes_corner_to_corner() {
        let mut canvas = RecordingCanvas::new();
        LineProperties::default().render(&mut canvas, &Bounds::new(10.0, 20.0, 30.0, 40.0));

        assert_eq!(canvas.ops.len(), 1);
        let DrawOp::Stroke { path, paint } = &canvas.ops[0] else {
            panic!("expected a stroke");
        };
        let segments: Vec<_> = path.segments().collect();
        assert!(
            matches!(segments[0], PathSegment::MoveTo(p) if p.x == 10.0 && p.y == 20.0)
        );
        assert!(
            matches!(segments[1], PathSegment::LineTo(p) if p.x == 40.0 && p.y == 60.0)
        );
        assert_eq!(paint.width, 2.0);
        assert_eq!(paint.cap, LineCap::Round);
        assert!(paint.dash.is_empty());
    }

    #[test]
    fn negative_extent_keeps_direction() {
        // A line added right-to-left has negative width; the endpoints
        // must stay in caller order.
        let mut canvas = RecordingCanvas::new();
        LineProperties::default().render(&mut canvas, &Bounds::from_points(50.0, 50.0, 10.0, 30.0));

        let DrawOp::Stroke { path, .. } = &canvas.ops[0] else {
            panic!("expected a stroke");
        };
        let segments: Vec<_> = path.segments().collect();
        assert!(
            matches!(segments[0], PathSegment::MoveTo(p) if p.x == 50.0 && p.y == 50.0)
        );
        assert!(
            matches!(segments[1], PathSegment::LineTo(p) if p.x == 10.0 && p.y == 30.0)
        );
    }

    #[test]
    fn dash_pattern_applies_only_when_valid() {
        let dashed = LineProperties {
            dash_pattern: "5,3".to_string(),
            ..LineProperties::default()
        };
        let mut canvas = RecordingCanvas::new();
        dashed.render(&mut canvas, &Bounds::new(0.0, 0.0, 100.0, 0.0));
        let DrawOp::Stroke { paint, .. } = &canvas.ops[0] else {
            panic!("expected a stroke");
        };
        assert_eq!(paint.dash, vec![5.0, 3.0]);

        let filtered = LineProperties {
            dash_pattern: "0,-2,abc".to_string(),
            ..LineProperties::default()
        };
        let mut canvas = RecordingCanvas::new();
        filtered.render(&mut canvas, &Bounds::new(0.0, 0.0, 100.0, 0.0));
        let DrawOp::Stroke { paint, .. } = &canvas.ops[0] else {
            panic!("expected a stroke");
        };
        assert!(paint.dash.is_empty(), "all entries filtered, stroke stays solid");
    }

    #[test]
    fn svg_emits_endpoints_and_stroke() {
        let svg = LineProperties::default().render_svg(&Bounds::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(
            svg,
            r##"<line x1="0" y1="0" x2="100" y2="50" stroke="#ffffff" stroke-width="2" stroke-linecap="round"/>"##
        );
    }

    #[test]
    fn svg_includes_dasharray_when_present() {
        let line = LineProperties {
            dash_pattern: "4,2,nope".to_string(),
            ..LineProperties::default()
        };
        let svg = line.render_svg(&Bounds::new(0.0, 0.0, 10.0, 10.0));
        assert!(svg.contains(r#"stroke-dasharray="4,2""#));
    }

    #[test]
    fn thin_widths_fail_validation() {
        let line = LineProperties {
            stroke_width: 0.25,
            ..LineProperties::default()
        };
        let issues = line.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].property, "strokeWidth");

        assert!(LineProperties::default().validate().is_empty());
    }
}
