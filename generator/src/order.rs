//! Emission ordering for class definitions.

use crate::{GeneratorError, GeneratorResult};
use weft_schema::{ClassDef, SchemaGraph};

/// Sort classes so that every class appears after its `is_a` parent and all
/// of its mixins.
///
/// Selection is first fit: each round places the earliest remaining class
/// whose parents are all already placed. Parentless classes therefore keep
/// their declaration order, and the whole ordering is stable for a given
/// graph. A round that places nothing means a cycle or a parent missing
/// from the graph; the error names every class left over.
pub fn sort_classes(graph: &SchemaGraph) -> GeneratorResult<Vec<&ClassDef>> {
    let mut remaining: Vec<&ClassDef> = graph.classes().iter().collect();
    let mut placed: Vec<&ClassDef> = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let next = remaining.iter().position(|candidate| {
            candidate
                .parent_names()
                .all(|parent| placed.iter().any(|p| p.name == parent))
        });
        match next {
            Some(i) => placed.push(remaining.remove(i)),
            None => {
                let names: Vec<&str> = remaining.iter().map(|c| c.name.as_str()).collect();
                return Err(GeneratorError::cyclic(&names));
            }
        }
    }

    Ok(placed)
}
