//! Rectangle layer type.

use serde::{Deserialize, Serialize};

use super::{ShapeDefinition, ShapeKind};
use crate::canvas::{Canvas, rect_path, rounded_rect_path};
use crate::geometry::Bounds;
use crate::property::{
    FILL_STROKE_PROPERTIES, PropertyGroup, PropertyKind, PropertySchema, PropertyValue,
    ValidationIssue,
};
use crate::style::{FillStroke, fmt_coord, paint_shape, svg_paint_attrs};

pub(crate) const RECT_PROPERTIES: &[PropertySchema] = &[PropertySchema {
    key: "cornerRadius",
    label: "Corner radius",
    kind: PropertyKind::Number {
        min: 0.0,
        max: 500.0,
        step: 1.0,
    },
    default: PropertyValue::Number(0.0),
    group: PropertyGroup::Shape,
}];

/// Properties of a rectangle layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RectProperties {
    #[serde(flatten)]
    pub style: FillStroke,
    pub corner_radius: f64,
}

impl Default for RectProperties {
    fn default() -> Self {
        Self {
            style: FillStroke::default(),
            corner_radius: 0.0,
        }
    }
}

impl ShapeDefinition for RectProperties {
    const KIND: ShapeKind = ShapeKind::Rect;

    fn schema() -> Vec<PropertySchema> {
        [FILL_STROKE_PROPERTIES, RECT_PROPERTIES].concat()
    }

    fn render(&self, canvas: &mut dyn Canvas, bounds: &Bounds) {
        // The effective radius never exceeds half of either dimension.
        let radius = self
            .corner_radius
            .min(bounds.width / 2.0)
            .min(bounds.height / 2.0);
        let path = if radius > 0.0 {
            rounded_rect_path(bounds, radius)
        } else {
            rect_path(bounds)
        };
        if let Some(path) = path {
            paint_shape(&self.style, canvas, &path);
        }
    }

    fn render_svg(&self, bounds: &Bounds) -> String {
        let mut element = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            fmt_coord(bounds.x),
            fmt_coord(bounds.y),
            fmt_coord(bounds.width),
            fmt_coord(bounds.height)
        );
        if self.corner_radius > 0.0 {
            element.push_str(&format!(r#" rx="{}""#, fmt_coord(self.corner_radius)));
        }
        format!("{} {}/>", element, svg_paint_attrs(&self.style))
    }

    fn validate(&self) -> Vec<ValidationIssue> {
        if self.corner_radius >= 0.0 {
            Vec::new()
        } else {
            vec![ValidationIssue::new(
                "cornerRadius",
                "must be a non-negative number",
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
    use tiny_skia::{Color, PathSegment};

    #[test]
    fn default_render_is_a_plain_white_rect() {
        let rect = RectProperties::default();
        let mut canvas = RecordingCanvas::new();
        rect.render(&mut canvas, &Bounds::new(0.0, 0.0, 200.0, 200.0));

        assert_eq!(canvas.ops.len(), 1, "default stroke is off");
        match &canvas.ops[0] {
            DrawOp::Fill { path, color } => {
                assert_eq!(*color, Color::WHITE);
                let b = path.bounds();
                assert_eq!(
                    (b.x(), b.y(), b.width(), b.height()),
                    (0.0, 0.0, 200.0, 200.0)
                );
            }
            other => panic!("expected a fill, got {:?}", other),
        }
    }

    #[test]
    fn corner_radius_is_clamped_to_half_the_smaller_dimension() {
        let rect = RectProperties {
            corner_radius: 100.0,
            ..RectProperties::default()
        };
        let mut canvas = RecordingCanvas::new();
        rect.render(&mut canvas, &Bounds::new(0.0, 0.0, 40.0, 100.0));

        let DrawOp::Fill { path, .. } = &canvas.ops[0] else {
            panic!("expected a fill");
        };
        // First path point sits at (x + effective radius, y).
        match path.segments().next() {
            Some(PathSegment::MoveTo(p)) => {
                assert_eq!(p.x, 20.0);
                assert_eq!(p.y, 0.0);
            }
            other => panic!("expected MoveTo, got {:?}", other),
        }
    }

    #[test]
    fn svg_keeps_the_raw_corner_radius() {
        let rect = RectProperties {
            corner_radius: 100.0,
            ..RectProperties::default()
        };
        let svg = rect.render_svg(&Bounds::new(0.0, 0.0, 40.0, 100.0));
        assert_eq!(
            svg,
            r##"<rect x="0" y="0" width="40" height="100" rx="100" fill="#ffffff"/>"##
        );
    }

    #[test]
    fn svg_omits_rx_for_sharp_corners() {
        let svg = RectProperties::default().render_svg(&Bounds::new(10.0, 20.0, 30.0, 40.0));
        assert!(!svg.contains("rx="));
        assert!(svg.starts_with(r#"<rect x="10" y="20" width="30" height="40""#));
    }

    #[test]
    fn negative_radius_fails_validation() {
        let rect = RectProperties {
            corner_radius: -1.0,
            ..RectProperties::default()
        };
        let issues = rect.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].property, "cornerRadius");
    }

    #[test]
    fn nan_radius_fails_validation() {
        let rect = RectProperties {
            corner_radius: f64::NAN,
            ..RectProperties::default()
        };
        assert!(!rect.validate().is_empty());
    }

    #[test]
    fn degenerate_bounds_draw_nothing() {
        let mut canvas = RecordingCanvas::new();
        RectProperties::default().render(&mut canvas, &Bounds::new(0.0, 0.0, -10.0, -10.0));
        assert!(canvas.ops.is_empty());
    }
}
