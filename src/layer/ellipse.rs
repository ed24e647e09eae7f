//! Ellipse layer type.

use serde::{Deserialize, Serialize};

use super::{ShapeDefinition, ShapeKind};
use crate::canvas::{Canvas, ellipse_path};
use crate::geometry::Bounds;
use crate::property::{FILL_STROKE_PROPERTIES, PropertySchema, ValidationIssue};
use crate::style::{FillStroke, fmt_coord, paint_shape, svg_paint_attrs};

/// Properties of an ellipse layer.
///
/// An ellipse has no shape-specific properties; it is fully described by
/// the common fill/stroke set and the bounds it is inscribed in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EllipseProperties {
    #[serde(flatten)]
    pub style: FillStroke,
}

impl ShapeDefinition for EllipseProperties {
    const KIND: ShapeKind = ShapeKind::Ellipse;

    fn schema() -> Vec<PropertySchema> {
        FILL_STROKE_PROPERTIES.to_vec()
    }

    fn render(&self, canvas: &mut dyn Canvas, bounds: &Bounds) {
        if let Some(path) = ellipse_path(bounds) {
            paint_shape(&self.style, canvas, &path);
        }
    }

    fn render_svg(&self, bounds: &Bounds) -> String {
        let (cx, cy) = bounds.center();
        format!(
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" {}/>"#,
            fmt_coord(cx),
            fmt_coord(cy),
            fmt_coord(bounds.width / 2.0),
            fmt_coord(bounds.height / 2.0),
            svg_paint_attrs(&self.style)
        )
    }

    fn validate(&self) -> Vec<ValidationIssue> {
        Vec::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
