//! atelier-shapes: vector shape layer types for the Atelier design host.
//!
//! This crate registers five shape layer types — rectangle, ellipse, line,
//! polygon, and star — each with a property schema, canvas rendering, SVG
//! rendering, and validation, plus a set of tool handlers for programmatic
//! manipulation through the host's layer-stack accessor.
//!
//! Layer types are stateless: rendering is a pure function of
//! (properties, bounds) → drawing commands. The host owns persistence,
//! undo, compositing, and the layer stack itself.
//!
//! # Example
//!
//! ```
//! use atelier_shapes::{Bounds, PixmapCanvas, ShapeKind};
//!
//! let star = ShapeKind::Star.default_properties();
//! let bounds = Bounds::new(0.0, 0.0, 128.0, 128.0);
//!
//! // Raster rendering through the built-in canvas backend.
//! let mut canvas = PixmapCanvas::new(128, 128).unwrap();
//! star.render(&mut canvas, &bounds);
//!
//! // Or a single SVG element.
//! let svg = star.render_svg(&bounds);
//! assert!(svg.starts_with("<polygon"));
//! ```
//!
//! # Registration
//!
//! The host consumes [`descriptor()`], which aggregates the layer types and
//! the five tools (`add_shape`, `set_shape_style`, `set_polygon`,
//! `add_line`, `list_shapes`):
//!
//! ```
//! let plugin = atelier_shapes::descriptor();
//! assert_eq!(plugin.layer_types.len(), 5);
//! assert_eq!(plugin.tools.len(), 5);
//! ```

mod canvas;
mod geometry;
mod host;
mod layer;
mod plugin;
mod property;
mod style;
mod tools;

pub use canvas::{
    Canvas, PixmapCanvas, StrokePaint, ellipse_path, line_path, polygon_path, rect_path,
    rounded_rect_path,
};
pub use geometry::{Bounds, Vertex, polygon_points, star_points};
pub use host::{
    ChangeEvent, ChangeSink, Layer, LayerContent, LayerStack, MemoryLayerStack, ToolContext,
    generate_layer_id,
};
pub use layer::{
    EllipseProperties, LineProperties, PolygonProperties, RectProperties, ShapeDefinition,
    ShapeKind, ShapeProperties, StarProperties, TYPE_ID_PREFIX,
};
pub use plugin::{PLUGIN_ID, PLUGIN_NAME, PluginDescriptor, descriptor};
pub use property::{
    FILL_STROKE_PROPERTIES, PropertyGroup, PropertyKind, PropertySchema, PropertyValue,
    ValidationIssue,
};
pub use style::{
    DEFAULT_FILL_COLOR, DEFAULT_STROKE_COLOR, FillStroke, LineCap, paint_shape, parse_color,
    parse_dash_pattern, svg_document, svg_paint_attrs,
};
pub use tools::{
    Tool, ToolContent, ToolError, ToolHandler, ToolResult, add_line, add_shape, list_shapes,
    set_polygon, set_shape_style, shape_tools,
};
