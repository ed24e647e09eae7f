//! Host boundary collaborators.
//!
//! Everything the host owns and this plugin only talks to lives here: the
//! layer record and the [`LayerStack`] accessor, change notifications, and
//! the context handed to tool handlers. [`MemoryLayerStack`] is an
//! in-process accessor implementation for tests and headless embedding.

use rand::Rng;
use serde::Serialize;
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::geometry::Bounds;
use crate::layer::{ShapeKind, ShapeProperties, TYPE_ID_PREFIX};

// ============================================================================
// Layer Record
// ============================================================================

/// The property payload of a layer on the host's stack.
///
/// The stack holds layers from every registered plugin; kinds this plugin
/// does not own pass through verbatim as [`LayerContent::Foreign`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LayerContent {
    Shape(ShapeProperties),
    Foreign(Value),
}

impl LayerContent {
    /// The shape properties, if this is a shape layer.
    pub fn shape(&self) -> Option<&ShapeProperties> {
        match self {
            Self::Shape(properties) => Some(properties),
            Self::Foreign(_) => None,
        }
    }
}

/// One layer on the host's stack.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub id: String,
    #[serde(rename = "type")]
    pub type_id: String,
    pub name: String,
    pub bounds: Bounds,
    pub properties: LayerContent,
}

impl Layer {
    /// Creates a shape layer of the given kind.
    pub fn shape(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ShapeKind,
        bounds: Bounds,
        properties: ShapeProperties,
    ) -> Self {
        Self {
            id: id.into(),
            type_id: kind.type_id().to_string(),
            name: name.into(),
            bounds,
            properties: LayerContent::Shape(properties),
        }
    }

    /// Whether this layer belongs to the shape namespace.
    pub fn is_shape(&self) -> bool {
        self.type_id.starts_with(TYPE_ID_PREFIX)
    }
}

// ============================================================================
// Layer Stack Accessor
// ============================================================================

/// The host-provided view of its layer stack.
///
/// The host owns and serializes all mutation; handlers perform at most one
/// write per invocation through this accessor.
pub trait LayerStack {
    fn get(&self, id: &str) -> Option<&Layer>;
    fn add(&mut self, layer: Layer);
    /// Replaces a layer's properties. Returns false if the id is unknown.
    fn update_properties(&mut self, id: &str, properties: LayerContent) -> bool;
}

/// Notification that the layer stack changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    LayerAdded { id: String },
    LayerUpdated { id: String },
}

/// Receives change notifications, one per successful tool invocation.
pub trait ChangeSink {
    fn emit(&mut self, event: ChangeEvent);
}

/// Everything a tool handler gets from the host.
pub struct ToolContext<'a> {
    pub layers: &'a mut dyn LayerStack,
    pub events: &'a mut dyn ChangeSink,
}

// ============================================================================
// Layer Ids
// ============================================================================

const LAYER_ID_PREFIX: &str = "layer-";

/// Generates a probabilistically unique layer id.
///
/// The id combines a fixed prefix, the current time in base-36 milliseconds,
/// and a short random base-36 suffix. Collisions are possible in principle;
/// the host treats ids as opaque.
pub fn generate_layer_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let suffix = rand::thread_rng().gen_range(0..36u32.pow(4));
    format!(
        "{}{}{:0>4}",
        LAYER_ID_PREFIX,
        to_base36(millis),
        to_base36(suffix as u64)
    )
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

// ============================================================================
// MemoryLayerStack
// ============================================================================

/// An in-process layer stack for tests and headless embedding.
#[derive(Debug, Default)]
pub struct MemoryLayerStack {
    layers: Vec<Layer>,
}

impl MemoryLayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }
}

impl LayerStack for MemoryLayerStack {
    fn get(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    fn add(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    fn update_properties(&mut self, id: &str, properties: LayerContent) -> bool {
        match self.layers.iter_mut().find(|layer| layer.id == id) {
            Some(layer) => {
                layer.properties = properties;
                true
            }
            None => false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
