//! Cardinality mapping from classified references to field types.

use crate::{classify, reference_path, GeneratorError, GeneratorResult};
use weft_model::{DefaultPolicy, FieldType};
use weft_schema::{ClassDef, SchemaGraph, SlotDef};

/// A slot resolved to its field type and default policy.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedSlot {
    pub field_type: FieldType,
    pub default: DefaultPolicy,
}

impl MappedSlot {
    fn new(field_type: FieldType, default: DefaultPolicy) -> Self {
        Self {
            field_type,
            default,
        }
    }
}

/// Map a slot owned by `class` to its field type and default policy.
///
/// The keyed-collection case is tried first; everything else follows the
/// plain cardinality table over the classified reference. Required fields
/// carry no default in any shape.
pub fn map_slot(
    graph: &SchemaGraph,
    class: &ClassDef,
    slot: &SlotDef,
) -> GeneratorResult<MappedSlot> {
    if let Some(mapped) = map_keyed_collection(graph, slot)? {
        return Ok(mapped);
    }

    let path = reference_path(graph, class, slot)
        .ok_or_else(|| GeneratorError::unknown_range(&slot.name, &slot.range))?;
    let base = classify(graph, slot, &path).field_type();

    Ok(match (slot.required, slot.multivalued) {
        (true, true) => MappedSlot::new(
            FieldType::union(vec![base.clone(), FieldType::sequence(base)]),
            DefaultPolicy::Mandatory,
        ),
        (false, true) => MappedSlot::new(
            FieldType::optional(FieldType::union(vec![
                base.clone(),
                FieldType::sequence(base),
            ])),
            DefaultPolicy::EmptyList,
        ),
        (true, false) => MappedSlot::new(base, DefaultPolicy::Mandatory),
        (false, false) => MappedSlot::new(FieldType::optional(base), DefaultPolicy::Absent),
    })
}

/// The inlined identified multivalued case: a slot holding a collection of
/// identified objects maps to a keyed collection instead of a plain list.
///
/// The key type is the range class's identifier path classified under the
/// owning slot's name, so fixed-name slots key by bare identifier. A range
/// class with a single attached slot degenerates to its keys; richer
/// classes keep full values on both collection arms.
fn map_keyed_collection(
    graph: &SchemaGraph,
    slot: &SlotDef,
) -> GeneratorResult<Option<MappedSlot>> {
    if !(slot.inlined && slot.multivalued) {
        return Ok(None);
    }
    let Some(range_class) = graph.class(&slot.range) else {
        return Ok(None);
    };
    if graph.identifier_slot(&range_class.name).is_none() {
        return Ok(None);
    }

    let key_path = graph.identifier_path(&range_class.name);
    let key = classify(graph, slot, &key_path).field_type();
    let value_path = graph
        .range_path(slot)
        .ok_or_else(|| GeneratorError::unknown_range(&slot.name, &slot.range))?;
    let value = classify(graph, slot, &value_path).field_type();

    let collection = if range_class.slots.len() == 1 {
        FieldType::union(vec![
            FieldType::sequence(key.clone()),
            FieldType::mapping(key, value),
        ])
    } else {
        FieldType::union(vec![
            FieldType::mapping(key, value.clone()),
            FieldType::sequence(value),
        ])
    };

    Ok(Some(if slot.required {
        MappedSlot::new(collection, DefaultPolicy::Mandatory)
    } else {
        MappedSlot::new(FieldType::optional(collection), DefaultPolicy::EmptyMap)
    }))
}
