//! Predicate table extraction.

use weft_model::PredicateTable;
use weft_schema::{snake_case, SchemaGraph};

/// The relation root. Slots descending from it are predicates.
pub const RELATION_ROOT: &str = "related to";

/// Collect the predicate table: every slot whose ancestor closure reaches
/// the relation root, under its snake-cased raw name, sorted and
/// deduplicated. The closure walks slot `is_a` and mixins, so relation
/// mixins qualify their hosts too.
pub fn build_predicates(graph: &SchemaGraph, prefix: &str) -> PredicateTable {
    let mut names: Vec<String> = graph
        .slots()
        .iter()
        .filter(|slot| {
            graph
                .slot_ancestor_closure(&slot.name)
                .iter()
                .any(|ancestor| *ancestor == RELATION_ROOT)
        })
        .map(|slot| snake_case(&slot.name))
        .collect();
    names.sort();
    names.dedup();
    PredicateTable::new(prefix, names)
}
