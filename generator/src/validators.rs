//! Per-class validation rule emission.

use crate::OwnedSlots;
use weft_model::ValidatorRule;
use weft_schema::{snake_case, ClassDef, SchemaGraph, SlotDef, ENTITY_CLASS};

/// Emit the validation rules a class attaches to its instances.
///
/// The root entity class pins a namespace rule on its identifier field,
/// whatever prefixes the class allows (an empty prefix list still checks
/// curie shape). Every multivalued domain slot gets a scalar-to-sequence
/// coercion rule, including fixed-rooted refinements that emit no field of
/// their own. Coercion is idempotent; subclasses repeat inherited rules
/// through linearization at runtime.
pub fn emit_validators(
    graph: &SchemaGraph,
    class: &ClassDef,
    owned: &OwnedSlots<'_>,
) -> Vec<ValidatorRule> {
    let mut rules = Vec::new();

    if class.name == ENTITY_CLASS {
        if let Some(id_slot) = graph.identifier_slot(&class.name) {
            rules.push(ValidatorRule::curie_namespace(
                field_name(id_slot),
                class.id_prefixes.clone(),
            ));
        }
    }

    for slot in &owned.domain {
        if slot.multivalued {
            rules.push(ValidatorRule::coerce_to_list(field_name(slot)));
        }
    }

    rules
}

/// The emitted field name of a slot.
pub fn field_name(slot: &SlotDef) -> String {
    snake_case(slot.effective_name())
}
