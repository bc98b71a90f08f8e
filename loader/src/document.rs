//! The schema document shape.

use serde::Deserialize;
use weft_schema::{ClassDef, EnumDef, SchemaGraph, SchemaMetadata, SlotDef, TypeDef};

/// A parsed schema document.
///
/// Every section is a sequence of named definitions rather than a mapping,
/// so declaration order survives into the graph. The definition shapes are
/// the `weft-schema` types themselves; documents and builder-made fixtures
/// deserialize to the same structs.
#[derive(Debug, Deserialize)]
pub struct SchemaDocument {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Dataset provenance block. Kept as a raw value here: a malformed block
    /// is dropped with a warning instead of failing the whole load.
    #[serde(default)]
    pub metadata: Option<serde_yaml::Value>,
    #[serde(default)]
    pub types: Vec<TypeDef>,
    #[serde(default)]
    pub enums: Vec<EnumDef>,
    #[serde(default)]
    pub slots: Vec<SlotDef>,
    #[serde(default)]
    pub classes: Vec<ClassDef>,
}

impl SchemaDocument {
    /// Consume the document and build the schema graph.
    pub fn into_graph(self) -> SchemaGraph {
        let mut graph = SchemaGraph::new(self.name.as_str());
        if let Some(version) = self.version {
            graph.set_version(version);
        }
        if let Some(description) = self.description {
            graph.set_description(description);
        }
        if let Some(value) = self.metadata {
            match serde_yaml::from_value::<SchemaMetadata>(value) {
                Ok(metadata) => graph.set_metadata(metadata),
                Err(err) => {
                    tracing::warn!(
                        schema = graph.name(),
                        %err,
                        "metadata block failed to parse, continuing without it"
                    );
                }
            }
        }
        for ty in self.types {
            graph.add_type(ty);
        }
        for en in self.enums {
            graph.add_enum(en);
        }
        for slot in self.slots {
            graph.add_slot(slot);
        }
        for class in self.classes {
            graph.add_class(class);
        }
        graph
    }
}
