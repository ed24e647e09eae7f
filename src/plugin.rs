//! Plugin descriptor.
//!
//! Aggregates the five layer types and the tool set into the host's
//! registration contract. The descriptor is plain data; the host drives
//! everything after registration.

use crate::layer::ShapeKind;
use crate::tools::{Tool, shape_tools};

pub const PLUGIN_ID: &str = "vector-shapes";
pub const PLUGIN_NAME: &str = "Vector Shapes";

/// What the host registers: identity, layer types, and tools.
pub struct PluginDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub layer_types: Vec<ShapeKind>,
    pub tools: Vec<Tool>,
}

/// Builds the registration descriptor for this plugin.
pub fn descriptor() -> PluginDescriptor {
    PluginDescriptor {
        id: PLUGIN_ID,
        name: PLUGIN_NAME,
        version: env!("CARGO_PKG_VERSION"),
        layer_types: ShapeKind::ALL.to_vec(),
        tools: shape_tools(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_registers_five_layer_types_and_tools() {
        let descriptor = descriptor();
        assert_eq!(descriptor.id, "vector-shapes");
        assert_eq!(descriptor.layer_types.len(), 5);
        assert_eq!(descriptor.tools.len(), 5);
    }

    #[test]
    fn registered_names_are_unique() {
        let descriptor = descriptor();

        let mut type_ids: Vec<&str> = descriptor.layer_types.iter().map(|k| k.type_id()).collect();
        type_ids.sort_unstable();
        type_ids.dedup();
        assert_eq!(type_ids.len(), 5);

        let mut tool_names: Vec<&str> = descriptor.tools.iter().map(|t| t.name).collect();
        tool_names.sort_unstable();
        tool_names.dedup();
        assert_eq!(tool_names.len(), 5);
    }
}
