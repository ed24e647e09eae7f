//! Shape layer type definitions.
//!
//! This module provides the five registered layer types and the contract
//! they share. Each shape kind has one concrete property struct
//! ([`RectProperties`], [`EllipseProperties`], [`LineProperties`],
//! [`PolygonProperties`], [`StarProperties`]) implementing
//! [`ShapeDefinition`]; [`ShapeProperties`] unifies them behind a tagged
//! variant and dispatches by pattern match.
//!
//! Layer types are stateless: rendering is a pure function of
//! (properties, bounds) → drawing commands, and validation never mutates
//! its input.

pub mod ellipse;
pub mod line;
pub mod polygon;
pub mod rect;
pub mod star;

pub use ellipse::EllipseProperties;
pub use line::LineProperties;
pub use polygon::PolygonProperties;
pub use rect::RectProperties;
pub use star::StarProperties;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::canvas::Canvas;
use crate::geometry::Bounds;
use crate::property::{PropertySchema, ValidationIssue};
use crate::style::FillStroke;

/// Namespace prefix shared by every layer type this plugin registers.
pub const TYPE_ID_PREFIX: &str = "shapes:";

// ============================================================================
// ShapeDefinition
// ============================================================================

/// The capability set every shape layer type implements.
///
/// `Default` plays the role of the default-property-bag constructor: the
/// default value of each struct matches its schema defaults exactly.
pub trait ShapeDefinition: Default {
    const KIND: ShapeKind;

    /// The full property-schema list for this shape.
    fn schema() -> Vec<PropertySchema>;

    /// Draws the shape into the given bounds.
    fn render(&self, canvas: &mut dyn Canvas, bounds: &Bounds);

    /// Renders the shape as a single self-closing SVG element.
    fn render_svg(&self, bounds: &Bounds) -> String;

    /// Checks the declared constraints. An empty list means valid.
    fn validate(&self) -> Vec<ValidationIssue>;
}

// ============================================================================
// ShapeKind
// ============================================================================

/// The registered shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rect,
    Ellipse,
    Line,
    Polygon,
    Star,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Rect,
        ShapeKind::Ellipse,
        ShapeKind::Line,
        ShapeKind::Polygon,
        ShapeKind::Star,
    ];

    /// Resolves a shape name as used in tool inputs.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rect" => Some(Self::Rect),
            "ellipse" => Some(Self::Ellipse),
            "line" => Some(Self::Line),
            "polygon" => Some(Self::Polygon),
            "star" => Some(Self::Star),
            _ => None,
        }
    }

    /// Resolves a namespaced layer type id such as `"shapes:star"`.
    pub fn from_type_id(type_id: &str) -> Option<Self> {
        Self::from_name(type_id.strip_prefix(TYPE_ID_PREFIX)?)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::Ellipse => "ellipse",
            Self::Line => "line",
            Self::Polygon => "polygon",
            Self::Star => "star",
        }
    }

    pub fn type_id(&self) -> &'static str {
        match self {
            Self::Rect => "shapes:rect",
            Self::Ellipse => "shapes:ellipse",
            Self::Line => "shapes:line",
            Self::Polygon => "shapes:polygon",
            Self::Star => "shapes:star",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Rect => "Rectangle",
            Self::Ellipse => "Ellipse",
            Self::Line => "Line",
            Self::Polygon => "Polygon",
            Self::Star => "Star",
        }
    }

    /// Icon tag the host's layer list shows next to the type.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Rect => "square",
            Self::Ellipse => "circle",
            Self::Line => "slash",
            Self::Polygon => "pentagon",
            Self::Star => "star",
        }
    }

    pub fn category(&self) -> &'static str {
        "shapes"
    }

    pub fn property_editor_id(&self) -> &'static str {
        "shape-properties"
    }

    /// The property-schema list this shape declares.
    pub fn schema(&self) -> Vec<PropertySchema> {
        match self {
            Self::Rect => RectProperties::schema(),
            Self::Ellipse => EllipseProperties::schema(),
            Self::Line => LineProperties::schema(),
            Self::Polygon => PolygonProperties::schema(),
            Self::Star => StarProperties::schema(),
        }
    }

    /// Constructs the default property set: exactly the declared schema
    /// keys, each at its schema default.
    pub fn default_properties(&self) -> ShapeProperties {
        match self {
            Self::Rect => ShapeProperties::Rect(RectProperties::default()),
            Self::Ellipse => ShapeProperties::Ellipse(EllipseProperties::default()),
            Self::Line => ShapeProperties::Line(LineProperties::default()),
            Self::Polygon => ShapeProperties::Polygon(PolygonProperties::default()),
            Self::Star => ShapeProperties::Star(StarProperties::default()),
        }
    }

    /// Merges caller-supplied fields onto the defaults.
    ///
    /// Only keys present in `value` override; everything else keeps its
    /// schema default. Unknown keys are ignored.
    pub fn properties_from_value(&self, value: &Value) -> Result<ShapeProperties, serde_json::Error> {
        match self {
            Self::Rect => serde_json::from_value(value.clone()).map(ShapeProperties::Rect),
            Self::Ellipse => serde_json::from_value(value.clone()).map(ShapeProperties::Ellipse),
            Self::Line => serde_json::from_value(value.clone()).map(ShapeProperties::Line),
            Self::Polygon => serde_json::from_value(value.clone()).map(ShapeProperties::Polygon),
            Self::Star => serde_json::from_value(value.clone()).map(ShapeProperties::Star),
        }
    }
}

// ============================================================================
// ShapeProperties
// ============================================================================

/// The property set of one shape layer instance.
///
/// Serializes untagged — a flat key/value map matching the shape's schema
/// keys, which is the form the host stores and the tools speak.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ShapeProperties {
    Rect(RectProperties),
    Ellipse(EllipseProperties),
    Line(LineProperties),
    Polygon(PolygonProperties),
    Star(StarProperties),
}

impl ShapeProperties {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Rect(_) => ShapeKind::Rect,
            Self::Ellipse(_) => ShapeKind::Ellipse,
            Self::Line(_) => ShapeKind::Line,
            Self::Polygon(_) => ShapeKind::Polygon,
            Self::Star(_) => ShapeKind::Star,
        }
    }

    /// Draws this shape into the given bounds.
    pub fn render(&self, canvas: &mut dyn Canvas, bounds: &Bounds) {
        match self {
            Self::Rect(p) => p.render(canvas, bounds),
            Self::Ellipse(p) => p.render(canvas, bounds),
            Self::Line(p) => p.render(canvas, bounds),
            Self::Polygon(p) => p.render(canvas, bounds),
            Self::Star(p) => p.render(canvas, bounds),
        }
    }

    /// Renders this shape as a single self-closing SVG element.
    pub fn render_svg(&self, bounds: &Bounds) -> String {
        match self {
            Self::Rect(p) => p.render_svg(bounds),
            Self::Ellipse(p) => p.render_svg(bounds),
            Self::Line(p) => p.render_svg(bounds),
            Self::Polygon(p) => p.render_svg(bounds),
            Self::Star(p) => p.render_svg(bounds),
        }
    }

    /// Checks the declared constraints. An empty list means valid.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        match self {
            Self::Rect(p) => p.validate(),
            Self::Ellipse(p) => p.validate(),
            Self::Line(p) => p.validate(),
            Self::Polygon(p) => p.validate(),
            Self::Star(p) => p.validate(),
        }
    }

    /// The shared fill/stroke state, for every shape that has one.
    pub fn fill_stroke_mut(&mut self) -> Option<&mut FillStroke> {
        match self {
            Self::Rect(p) => Some(&mut p.style),
            Self::Ellipse(p) => Some(&mut p.style),
            Self::Polygon(p) => Some(&mut p.style),
            Self::Star(p) => Some(&mut p.style),
            Self::Line(_) => None,
        }
    }

    /// The flat key/value form of this property set.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

// ============================================================================
// Tests
// ============================================================================
