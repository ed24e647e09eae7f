//! Property schema declarations.
//!
//! Each shape layer type publishes a list of [`PropertySchema`] records
//! describing its configurable attributes: the host uses them to build
//! property editors and to know every key's default. Schemas are immutable
//! process-wide constants, defined at plugin-load time.

use serde::Serialize;
use serde_json::{Value, json};

/// The value type of a property, with editor-facing constraints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyKind {
    /// A color string such as `"#ff8800"`.
    Color,
    Boolean,
    /// A numeric value with an editor range and step.
    Number { min: f64, max: f64, step: f64 },
    /// Free-form text.
    Text,
    /// One of a fixed set of options.
    Select { options: &'static [&'static str] },
}

impl PropertyKind {
    /// The host-facing name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Boolean => "boolean",
            Self::Number { .. } => "number",
            Self::Text => "string",
            Self::Select { .. } => "select",
        }
    }
}

/// A schema default value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Number(f64),
    Str(&'static str),
}

impl PropertyValue {
    pub fn as_json(&self) -> Value {
        match self {
            Self::Bool(value) => json!(value),
            Self::Number(value) => json!(value),
            Self::Str(value) => json!(value),
        }
    }
}

/// Grouping tag used by the host to organize property editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyGroup {
    Fill,
    Stroke,
    Shape,
}

impl PropertyGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Stroke => "stroke",
            Self::Shape => "shape",
        }
    }
}

/// Describes one configurable attribute of a layer type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertySchema {
    /// Unique key within the owning layer type, e.g. `"cornerRadius"`.
    pub key: &'static str,
    /// Editor label.
    pub label: &'static str,
    pub kind: PropertyKind,
    pub default: PropertyValue,
    pub group: PropertyGroup,
}

impl PropertySchema {
    /// The host-facing JSON form of this schema record.
    pub fn to_json(&self) -> Value {
        let mut record = json!({
            "key": self.key,
            "label": self.label,
            "type": self.kind.name(),
            "default": self.default.as_json(),
            "group": self.group.as_str(),
        });
        match self.kind {
            PropertyKind::Number { min, max, step } => {
                record["min"] = json!(min);
                record["max"] = json!(max);
                record["step"] = json!(step);
            }
            PropertyKind::Select { options } => {
                record["options"] = json!(options);
            }
            _ => {}
        }
        record
    }
}

/// The fill/stroke properties shared by every filled shape.
///
/// The line layer type does not use this set; a line has no interior.
pub const FILL_STROKE_PROPERTIES: &[PropertySchema] = &[
    PropertySchema {
        key: "fillColor",
        label: "Fill color",
        kind: PropertyKind::Color,
        default: PropertyValue::Str("#ffffff"),
        group: PropertyGroup::Fill,
    },
    PropertySchema {
        key: "fillEnabled",
        label: "Fill",
        kind: PropertyKind::Boolean,
        default: PropertyValue::Bool(true),
        group: PropertyGroup::Fill,
    },
    PropertySchema {
        key: "strokeColor",
        label: "Stroke color",
        kind: PropertyKind::Color,
        default: PropertyValue::Str("#000000"),
        group: PropertyGroup::Stroke,
    },
    PropertySchema {
        key: "strokeEnabled",
        label: "Stroke",
        kind: PropertyKind::Boolean,
        default: PropertyValue::Bool(false),
        group: PropertyGroup::Stroke,
    },
    PropertySchema {
        key: "strokeWidth",
        label: "Stroke width",
        kind: PropertyKind::Number {
            min: 0.0,
            max: 100.0,
            step: 0.5,
        },
        default: PropertyValue::Number(0.0),
        group: PropertyGroup::Stroke,
    },
];

// ============================================================================
// Validation
// ============================================================================

/// A field-scoped validation error.
///
/// Validation is advisory: an invalid property set still renders, with
/// out-of-range values coerced through defaults at draw time. The host
/// decides whether to surface or enforce these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// The property key the issue refers to.
    pub property: &'static str,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(property: &'static str, message: impl Into<String>) -> Self {
        Self {
            property,
            message: message.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_stroke_table_keys() {
        let keys: Vec<&str> = FILL_STROKE_PROPERTIES.iter().map(|p| p.key).collect();
        assert_eq!(
            keys,
            [
                "fillColor",
                "fillEnabled",
                "strokeColor",
                "strokeEnabled",
                "strokeWidth"
            ]
        );
    }

    #[test]
    fn fill_defaults_to_white_and_on() {
        let fill = &FILL_STROKE_PROPERTIES[0];
        assert_eq!(fill.default, PropertyValue::Str("#ffffff"));
        assert_eq!(FILL_STROKE_PROPERTIES[1].default, PropertyValue::Bool(true));
    }

    #[test]
    fn stroke_defaults_to_black_and_off() {
        assert_eq!(
            FILL_STROKE_PROPERTIES[2].default,
            PropertyValue::Str("#000000")
        );
        assert_eq!(
            FILL_STROKE_PROPERTIES[3].default,
            PropertyValue::Bool(false)
        );
        assert_eq!(
            FILL_STROKE_PROPERTIES[4].default,
            PropertyValue::Number(0.0)
        );
    }

    #[test]
    fn schema_json_carries_range() {
        let record = FILL_STROKE_PROPERTIES[4].to_json();
        assert_eq!(record["key"], "strokeWidth");
        assert_eq!(record["type"], "number");
        assert_eq!(record["min"], 0.0);
        assert_eq!(record["max"], 100.0);
        assert_eq!(record["step"], 0.5);
        assert_eq!(record["group"], "stroke");
    }

    #[test]
    fn schema_json_carries_select_options() {
        let schema = PropertySchema {
            key: "lineCap",
            label: "Line cap",
            kind: PropertyKind::Select {
                options: &["butt", "round", "square"],
            },
            default: PropertyValue::Str("round"),
            group: PropertyGroup::Stroke,
        };
        let record = schema.to_json();
        assert_eq!(record["type"], "select");
        assert_eq!(record["options"], json!(["butt", "round", "square"]));
        assert_eq!(record["default"], "round");
    }
}
