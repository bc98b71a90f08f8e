//! Schema loading entry points.

use crate::{LoadError, LoadResult, SchemaDocument};
use std::path::Path;
use weft_schema::SchemaGraph;

/// Parse a schema document from a string.
pub fn load_str(source: &str) -> LoadResult<SchemaGraph> {
    let doc: SchemaDocument = serde_yaml::from_str(source)?;
    let graph = doc.into_graph();
    tracing::debug!(
        schema = graph.name(),
        classes = graph.classes().len(),
        slots = graph.slots().len(),
        "schema loaded"
    );
    Ok(graph)
}

/// Read and parse a schema document from a file.
pub fn load_path(path: impl AsRef<Path>) -> LoadResult<SchemaGraph> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
        .map_err(|e| LoadError::io(&path.display().to_string(), e))?;
    load_str(&source)
}
