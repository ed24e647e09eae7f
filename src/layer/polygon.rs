//! Regular polygon layer type.

use serde::{Deserialize, Serialize};

use super::{ShapeDefinition, ShapeKind};
use crate::canvas::{Canvas, polygon_path};
use crate::geometry::{Bounds, Vertex, polygon_points};
use crate::property::{
    FILL_STROKE_PROPERTIES, PropertyGroup, PropertyKind, PropertySchema, PropertyValue,
    ValidationIssue,
};
use crate::style::{FillStroke, paint_shape, svg_paint_attrs, svg_point_list};

pub(crate) const POLYGON_PROPERTIES: &[PropertySchema] = &[
    PropertySchema {
        key: "sides",
        label: "Sides",
        kind: PropertyKind::Number {
            min: 3.0,
            max: 100.0,
            step: 1.0,
        },
        default: PropertyValue::Number(6.0),
        group: PropertyGroup::Shape,
    },
    PropertySchema {
        key: "rotation",
        label: "Rotation",
        kind: PropertyKind::Number {
            min: 0.0,
            max: 360.0,
            step: 1.0,
        },
        default: PropertyValue::Number(0.0),
        group: PropertyGroup::Shape,
    },
];

/// Properties of a regular polygon layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolygonProperties {
    #[serde(flatten)]
    pub style: FillStroke,
    pub sides: f64,
    /// Rotation of the first vertex in degrees, 0 = 12 o'clock.
    pub rotation: f64,
}

impl Default for PolygonProperties {
    fn default() -> Self {
        Self {
            style: FillStroke::default(),
            sides: 6.0,
            rotation: 0.0,
        }
    }
}

impl PolygonProperties {
    /// The vertex list for the given bounds: centered, with the radius set
    /// by the smaller dimension so the polygon fits without distortion.
    fn vertices(&self, bounds: &Bounds) -> Vec<Vertex> {
        let (cx, cy) = bounds.center();
        let radius = bounds.min_dimension() / 2.0;
        polygon_points(cx, cy, radius, self.sides.round() as u32, self.rotation)
    }
}

impl ShapeDefinition for PolygonProperties {
    const KIND: ShapeKind = ShapeKind::Polygon;

    fn schema() -> Vec<PropertySchema> {
        [FILL_STROKE_PROPERTIES, POLYGON_PROPERTIES].concat()
    }

    fn render(&self, canvas: &mut dyn Canvas, bounds: &Bounds) {
        if let Some(path) = polygon_path(&self.vertices(bounds)) {
            paint_shape(&self.style, canvas, &path);
        }
    }

    fn render_svg(&self, bounds: &Bounds) -> String {
        format!(
            r#"<polygon points="{}" {}/>"#,
            svg_point_list(&self.vertices(bounds)),
            svg_paint_attrs(&self.style)
        )
    }

    fn validate(&self) -> Vec<ValidationIssue> {
        if self.sides >= 3.0 && self.sides <= 100.0 {
            Vec::new()
        } else {
            vec![ValidationIssue::new("sides", "must be between 3 and 100")]
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
    fn render_uses_the_smaller_dimension() {
        let mut canvas = RecordingCanvas::new();
        PolygonProperties::default().render(&mut canvas, &Bounds::new(0.0, 0.0, 200.0, 100.0));

        let DrawOp::Fill { path, .. } = &canvas.ops[0] else {
            panic!("expected a fill");
        };
        let b = path.bounds();
        // Radius 50 around center (100, 50): never wider than the bounds'
        // smaller dimension.
        assert!(b.width() <= 100.0 + 1e-3);
        assert!(b.height() <= 100.0 + 1e-3);
        assert!((b.y() - 0.0).abs() < 1e-3, "first vertex at 12 o'clock");
    }

    #[test]
    fn render_emits_one_segment_per_side() {
        let polygon = PolygonProperties {
            sides: 8.0,
            ..PolygonProperties::default()
        };
        let mut canvas = RecordingCanvas::new();
        polygon.render(&mut canvas, &Bounds::new(0.0, 0.0, 100.0, 100.0));

        let DrawOp::Fill { path, .. } = &canvas.ops[0] else {
            panic!("expected a fill");
        };
        let moves = path
            .segments()
            .filter(|s| matches!(s, PathSegment::MoveTo(_)))
            .count();
        let lines = path
            .segments()
            .filter(|s| matches!(s, PathSegment::LineTo(_)))
            .count();
        assert_eq!(moves, 1);
        assert_eq!(lines, 7);
    }

    #[test]
    fn svg_lists_every_vertex() {
        let polygon = PolygonProperties {
            sides: 5.0,
            ..PolygonProperties::default()
        };
        let svg = polygon.render_svg(&Bounds::new(0.0, 0.0, 100.0, 100.0));
        assert!(svg.starts_with("<polygon points=\""));
        let points = svg.split('"').nth(1).unwrap();
        assert_eq!(points.split(' ').count(), 5);
    }

    #[test]
    fn too_few_sides_fail_validation() {
        let polygon = PolygonProperties {
            sides: 2.0,
            ..PolygonProperties::default()
        };
        let issues = polygon.validate();
        assert!(!issues.is_empty());
        assert_eq!(issues[0].property, "sides");
    }

    #[test]
    fn defaults_pass_validation() {
        assert!(PolygonProperties::default().validate().is_empty());
    }

    #[test]
    fn out_of_range_and_nan_sides_fail_validation() {
        for sides in [101.0, -3.0, f64::NAN] {
            let polygon = PolygonProperties {
                sides,
                ..PolygonProperties::default()
            };
            assert!(!polygon.validate().is_empty(), "sides {} should fail", sides);
        }
    }
}
