//! Tool handlers for programmatic shape manipulation.
//!
//! Each tool is a thin, synchronous wrapper over the layer-type definitions:
//! resolve the referenced layer or shape kind, merge caller-supplied fields
//! onto defaults, perform a single write through the host's accessor, emit
//! one change event, and answer with a text result. Failures surface
//! immediately as an error-flagged result; there is nothing to roll back
//! because no handler performs a multi-step mutation.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

use crate::geometry::Bounds;
use crate::host::{ChangeEvent, Layer, LayerContent, ToolContext, generate_layer_id};
use crate::layer::{LineProperties, ShapeKind, ShapeProperties};

// ============================================================================
// Errors
// ============================================================================

/// Everything a tool handler can fail with.
///
/// All of these are non-fatal and reported synchronously; retry and logging
/// policy belong to the host.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown shape kind \"{0}\"")]
    UnknownShapeKind(String),

    #[error("no layer with id \"{0}\"")]
    LayerNotFound(String),

    #[error("layer \"{id}\" is not a {expected} layer")]
    WrongLayerKind { id: String, expected: &'static str },

    #[error("update contains no recognized fields")]
    EmptyUpdate,

    #[error("missing required argument \"{0}\"")]
    MissingArgument(&'static str),

    #[error("invalid arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),
}

// ============================================================================
// Results
// ============================================================================

/// One piece of tool output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
}

/// The result of a tool invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(skip_serializing_if = "is_false")]
    pub is_error: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: true,
        }
    }
}

fn into_result(outcome: Result<String, ToolError>) -> ToolResult {
    match outcome {
        Ok(text) => ToolResult::text(text),
        Err(error) => ToolResult::error(error.to_string()),
    }
}

// ============================================================================
// Tool Descriptors
// ============================================================================

/// A handler takes the untyped input record and the host context.
pub type ToolHandler = fn(&Value, &mut ToolContext) -> ToolResult;

/// One tool in the host's tool-invocation surface.
#[derive(Debug, Clone)]
pub struct Tool {
    pub name: &'static str,
    pub description: &'static str,
    /// JSON-Schema-shaped description of the input record.
    pub input_schema: Value,
    pub handler: ToolHandler,
}

/// The five shape tools this plugin registers.
pub fn shape_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "add_shape",
            description: "Add a shape layer (rect, ellipse, line, polygon, or star)",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "shape": {
                        "type": "string",
                        "enum": ["rect", "ellipse", "line", "polygon", "star"],
                        "description": "Shape kind to add"
                    },
                    "name": { "type": "string", "description": "Layer name (defaults to the shape's display name)" },
                    "x": { "type": "number", "description": "Left edge (default 100)" },
                    "y": { "type": "number", "description": "Top edge (default 100)" },
                    "width": { "type": "number", "description": "Width (default 200)" },
                    "height": { "type": "number", "description": "Height (default 200)" },
                    "fillColor": { "type": "string" },
                    "fillEnabled": { "type": "boolean" },
                    "strokeColor": { "type": "string" },
                    "strokeEnabled": { "type": "boolean" },
                    "strokeWidth": { "type": "number" },
                    "cornerRadius": { "type": "number", "description": "Rectangles only" },
                    "sides": { "type": "number", "description": "Polygons only" },
                    "points": { "type": "number", "description": "Stars only" },
                    "innerRadius": { "type": "number", "description": "Stars only" },
                    "rotation": { "type": "number", "description": "Polygons and stars" },
                    "lineCap": { "type": "string", "enum": ["butt", "round", "square"], "description": "Lines only" },
                    "dashPattern": { "type": "string", "description": "Lines only" }
                },
                "required": ["shape"],
                "additionalProperties": false
            }),
            handler: add_shape,
        },
        Tool {
            name: "set_shape_style",
            description: "Update fill/stroke style on an existing shape layer",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "layerId": { "type": "string", "description": "Id of the shape layer to update" },
                    "fillColor": { "type": "string" },
                    "fillEnabled": { "type": "boolean" },
                    "strokeColor": { "type": "string" },
                    "strokeEnabled": { "type": "boolean" },
                    "strokeWidth": { "type": "number" }
                },
                "required": ["layerId"],
                "additionalProperties": false
            }),
            handler: set_shape_style,
        },
        Tool {
            name: "set_polygon",
            description: "Update sides/rotation on a polygon layer",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "layerId": { "type": "string", "description": "Id of the polygon layer" },
                    "sides": { "type": "number", "description": "Number of sides (3-100)" },
                    "rotation": { "type": "number", "description": "Rotation in degrees" }
                },
                "required": ["layerId"],
                "additionalProperties": false
            }),
            handler: set_polygon,
        },
        Tool {
            name: "add_line",
            description: "Add a line layer between two points",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "x1": { "type": "number" },
                    "y1": { "type": "number" },
                    "x2": { "type": "number" },
                    "y2": { "type": "number" },
                    "name": { "type": "string" },
                    "strokeColor": { "type": "string" },
                    "strokeWidth": { "type": "number" },
                    "lineCap": { "type": "string", "enum": ["butt", "round", "square"] },
                    "dashPattern": { "type": "string", "description": "Comma-separated dash lengths" }
                },
                "required": ["x1", "y1", "x2", "y2"],
                "additionalProperties": false
            }),
            handler: add_line,
        },
        Tool {
            name: "list_shapes",
            description: "List the registered shape kinds and their property keys",
            input_schema: json!({
                "type": "object",
                "properties": {},
                "additionalProperties": false
            }),
            handler: list_shapes,
        },
    ]
}

// ============================================================================
// Input Helpers
// ============================================================================

fn required_str<'a>(input: &'a Value, key: &'static str) -> Result<&'a str, ToolError> {
    input
        .get(key)
        .and_then(Value::as_str)
        .ok_or(ToolError::MissingArgument(key))
}

fn required_number(input: &Value, key: &'static str) -> Result<f64, ToolError> {
    input
        .get(key)
        .and_then(Value::as_f64)
        .ok_or(ToolError::MissingArgument(key))
}

fn number_or(input: &Value, key: &str, fallback: f64) -> f64 {
    input.get(key).and_then(Value::as_f64).unwrap_or(fallback)
}

// ============================================================================
// Handlers
// ============================================================================

/// `add_shape`: create a shape layer from defaults plus overrides.
pub fn add_shape(input: &Value, ctx: &mut ToolContext) -> ToolResult {
    into_result(add_shape_impl(input, ctx))
}

fn add_shape_impl(input: &Value, ctx: &mut ToolContext) -> Result<String, ToolError> {
    let shape = required_str(input, "shape")?;
    let kind = ShapeKind::from_name(shape)
        .ok_or_else(|| ToolError::UnknownShapeKind(shape.to_string()))?;
    let properties = kind.properties_from_value(input)?;

    let bounds = Bounds::new(
        number_or(input, "x", 100.0),
        number_or(input, "y", 100.0),
        number_or(input, "width", 200.0),
        number_or(input, "height", 200.0),
    );
    let name = input
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(kind.display_name());

    let id = generate_layer_id();
    debug!("adding {} layer {}", kind.name(), id);
    ctx.layers
        .add(Layer::shape(id.clone(), name, kind, bounds, properties));
    ctx.events.emit(ChangeEvent::LayerAdded { id: id.clone() });
    Ok(format!("Added {} layer \"{}\"", kind.display_name(), id))
}

/// Partial fill/stroke update. Absent fields never clear existing values.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StylePatch {
    fill_color: Option<String>,
    fill_enabled: Option<bool>,
    stroke_color: Option<String>,
    stroke_enabled: Option<bool>,
    stroke_width: Option<f64>,
}

fn apply_style_patch(properties: &mut ShapeProperties, patch: &StylePatch) -> usize {
    let mut applied = 0;
    if let Some(style) = properties.fill_stroke_mut() {
        if let Some(value) = &patch.fill_color {
            style.fill_color = value.clone();
            applied += 1;
        }
        if let Some(value) = patch.fill_enabled {
            style.fill_enabled = value;
            applied += 1;
        }
        if let Some(value) = &patch.stroke_color {
            style.stroke_color = value.clone();
            applied += 1;
        }
        if let Some(value) = patch.stroke_enabled {
            style.stroke_enabled = value;
            applied += 1;
        }
        if let Some(value) = patch.stroke_width {
            style.stroke_width = value;
            applied += 1;
        }
    } else if let ShapeProperties::Line(line) = properties {
        // A line has no fill; only the stroke fields are recognized.
        if let Some(value) = &patch.stroke_color {
            line.stroke_color = value.clone();
            applied += 1;
        }
        if let Some(value) = patch.stroke_width {
            line.stroke_width = value;
            applied += 1;
        }
    }
    applied
}

/// `set_shape_style`: fill/stroke updates on an existing shape layer.
pub fn set_shape_style(input: &Value, ctx: &mut ToolContext) -> ToolResult {
    into_result(set_shape_style_impl(input, ctx))
}

fn set_shape_style_impl(input: &Value, ctx: &mut ToolContext) -> Result<String, ToolError> {
    let id = required_str(input, "layerId")?;
    let patch: StylePatch = serde_json::from_value(input.clone())?;

    let layer = ctx
        .layers
        .get(id)
        .ok_or_else(|| ToolError::LayerNotFound(id.to_string()))?;
    if !layer.is_shape() {
        return Err(ToolError::WrongLayerKind {
            id: id.to_string(),
            expected: "shape",
        });
    }
    let Some(shape) = layer.properties.shape() else {
        return Err(ToolError::WrongLayerKind {
            id: id.to_string(),
            expected: "shape",
        });
    };

    let mut updated = shape.clone();
    let applied = apply_style_patch(&mut updated, &patch);
    if applied == 0 {
        return Err(ToolError::EmptyUpdate);
    }

    debug!("updating style on layer {} ({} fields)", id, applied);
    ctx.layers.update_properties(id, LayerContent::Shape(updated));
    ctx.events.emit(ChangeEvent::LayerUpdated { id: id.to_string() });
    Ok(format!("Updated {} style field(s) on layer \"{}\"", applied, id))
}

/// `set_polygon`: sides/rotation updates on a polygon layer.
pub fn set_polygon(input: &Value, ctx: &mut ToolContext) -> ToolResult {
    into_result(set_polygon_impl(input, ctx))
}

fn set_polygon_impl(input: &Value, ctx: &mut ToolContext) -> Result<String, ToolError> {
    let id = required_str(input, "layerId")?;
    let sides = input.get("sides").and_then(Value::as_f64);
    let rotation = input.get("rotation").and_then(Value::as_f64);

    let layer = ctx
        .layers
        .get(id)
        .ok_or_else(|| ToolError::LayerNotFound(id.to_string()))?;
    let Some(ShapeProperties::Polygon(polygon)) = layer.properties.shape() else {
        return Err(ToolError::WrongLayerKind {
            id: id.to_string(),
            expected: "polygon",
        });
    };

    if sides.is_none() && rotation.is_none() {
        return Err(ToolError::EmptyUpdate);
    }

    let mut updated = polygon.clone();
    if let Some(value) = sides {
        updated.sides = value;
    }
    if let Some(value) = rotation {
        updated.rotation = value;
    }

    ctx.layers
        .update_properties(id, LayerContent::Shape(ShapeProperties::Polygon(updated)));
    ctx.events.emit(ChangeEvent::LayerUpdated { id: id.to_string() });
    Ok(format!("Updated polygon layer \"{}\"", id))
}

/// `add_line`: create a line layer between two points.
pub fn add_line(input: &Value, ctx: &mut ToolContext) -> ToolResult {
    into_result(add_line_impl(input, ctx))
}

fn add_line_impl(input: &Value, ctx: &mut ToolContext) -> Result<String, ToolError> {
    let x1 = required_number(input, "x1")?;
    let y1 = required_number(input, "y1")?;
    let x2 = required_number(input, "x2")?;
    let y2 = required_number(input, "y2")?;
    let properties: LineProperties = serde_json::from_value(input.clone())?;

    // The first point becomes the bounds origin; width/height keep their
    // sign so the segment keeps its direction.
    let bounds = Bounds::from_points(x1, y1, x2, y2);
    let name = input
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(ShapeKind::Line.display_name());

    let id = generate_layer_id();
    debug!("adding line layer {}", id);
    ctx.layers.add(Layer::shape(
        id.clone(),
        name,
        ShapeKind::Line,
        bounds,
        ShapeProperties::Line(properties),
    ));
    ctx.events.emit(ChangeEvent::LayerAdded { id: id.clone() });
    Ok(format!("Added line layer \"{}\"", id))
}

/// `list_shapes`: enumerate the registered shape kinds.
pub fn list_shapes(input: &Value, ctx: &mut ToolContext) -> ToolResult {
    into_result(list_shapes_impl(input, ctx))
}

fn list_shapes_impl(_input: &Value, _ctx: &mut ToolContext) -> Result<String, ToolError> {
    let lines: Vec<String> = ShapeKind::ALL
        .iter()
        .map(|kind| {
            let keys: Vec<&str> = kind.schema().iter().map(|schema| schema.key).collect();
            format!("{} ({}): {}", kind.name(), kind.type_id(), keys.join(", "))
        })
        .collect();
    Ok(lines.join("\n"))
}

// ============================================================================
// Tests
// ============================================================================
