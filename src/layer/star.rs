//! Star layer type.

use serde::{Deserialize, Serialize};

use super::{ShapeDefinition, ShapeKind};
use crate::canvas::{Canvas, polygon_path};
use crate::geometry::{Bounds, Vertex, star_points};
use crate::property::{
    FILL_STROKE_PROPERTIES, PropertyGroup, PropertyKind, PropertySchema, PropertyValue,
    ValidationIssue,
};
use crate::style::{FillStroke, paint_shape, svg_paint_attrs, svg_point_list};

pub(crate) const STAR_PROPERTIES: &[PropertySchema] = &[
    PropertySchema {
        key: "points",
        label: "Points",
        kind: PropertyKind::Number {
            min: 3.0,
            max: 50.0,
            step: 1.0,
        },
        default: PropertyValue::Number(5.0),
        group: PropertyGroup::Shape,
    },
    PropertySchema {
        key: "innerRadius",
        label: "Inner radius",
        kind: PropertyKind::Number {
            min: 0.05,
            max: 0.95,
            step: 0.05,
        },
        default: PropertyValue::Number(0.4),
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

/// Properties of a star layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StarProperties {
    #[serde(flatten)]
    pub style: FillStroke,
    pub points: f64,
    /// Inner radius as a ratio of the outer radius.
    pub inner_radius: f64,
    /// Rotation of the first outer vertex in degrees, 0 = 12 o'clock.
    pub rotation: f64,
}

impl Default for StarProperties {
    fn default() -> Self {
        Self {
            style: FillStroke::default(),
            points: 5.0,
            inner_radius: 0.4,
            rotation: 0.0,
        }
    }
}

impl StarProperties {
    fn vertices(&self, bounds: &Bounds) -> Vec<Vertex> {
        let (cx, cy) = bounds.center();
        let outer_radius = bounds.min_dimension() / 2.0;
        star_points(
            cx,
            cy,
            outer_radius,
            self.inner_radius,
            self.points.round() as u32,
            self.rotation,
        )
    }
}

impl ShapeDefinition for StarProperties {
    const KIND: ShapeKind = ShapeKind::Star;

    fn schema() -> Vec<PropertySchema> {
        [FILL_STROKE_PROPERTIES, STAR_PROPERTIES].concat()
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
        let mut issues = Vec::new();
        if !(self.points >= 3.0 && self.points <= 50.0) {
            issues.push(ValidationIssue::new("points", "must be between 3 and 50"));
        }
        if !(self.inner_radius >= 0.05 && self.inner_radius <= 0.95) {
            issues.push(ValidationIssue::new(
                "innerRadius",
                "must be between 0.05 and 0.95",
            ));
        }
        issues
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
    fn render_alternates_twice_the_point_count() {
        let star = StarProperties {
            points: 8.0,
            ..StarProperties::default()
        };
        let mut canvas = RecordingCanvas::new();
        star.render(&mut canvas, &Bounds::new(0.0, 0.0, 100.0, 100.0));

        let DrawOp::Fill { path, .. } = &canvas.ops[0] else {
            panic!("expected a fill");
        };
        let lines = path
            .segments()
            .filter(|s| matches!(s, PathSegment::LineTo(_)))
            .count();
        // 16 vertices: one MoveTo plus fifteen LineTo before the close.
        assert_eq!(lines, 15);
    }

    #[test]
    fn render_reaches_the_top_of_the_bounds() {
        let mut canvas = RecordingCanvas::new();
        StarProperties::default().render(&mut canvas, &Bounds::new(0.0, 0.0, 120.0, 120.0));

        let DrawOp::Fill { path, .. } = &canvas.ops[0] else {
            panic!("expected a fill");
        };
        match path.segments().next() {
            Some(PathSegment::MoveTo(p)) => {
                assert!((p.x - 60.0).abs() < 1e-3);
                assert!(p.y.abs() < 1e-3);
            }
            other => panic!("expected MoveTo, got {:?}", other),
        }
    }

    #[test]
    fn svg_lists_alternating_vertices() {
        let svg = StarProperties::default().render_svg(&Bounds::new(0.0, 0.0, 100.0, 100.0));
        let points = svg.split('"').nth(1).unwrap();
        assert_eq!(points.split(' ').count(), 10);
    }

    #[test]
    fn both_range_checks_run() {
        let star = StarProperties {
            points: 2.0,
            inner_radius: 0.99,
            ..StarProperties::default()
        };
        let issues = star.validate();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].property, "points");
        assert_eq!(issues[1].property, "innerRadius");
    }

    #[test]
    fn defaults_pass_validation() {
        assert!(StarProperties::default().validate().is_empty());
    }

    #[test]
    fn inner_radius_bounds_are_inclusive() {
        for ratio in [0.05, 0.95] {
            let star = StarProperties {
                inner_radius: ratio,
                ..StarProperties::default()
            };
            assert!(star.validate().is_empty(), "ratio {} should pass", ratio);
        }
    }
}
