//! Slot resolution: which fields a class contributes, in which group.

use crate::{GeneratorError, GeneratorResult};
use weft_schema::{snake_case, ClassDef, SchemaGraph, SlotDef, ENTITY_CLASS};

/// Slot names forming the fixed field group of the root entity class.
pub const FIXED_SLOTS: [&str; 3] = ["id", "type", "category"];

/// The slots a class contributes to its own emitted body, split into the
/// three field groups. Group order is fixed, required, optional; within a
/// group, attachment order.
#[derive(Debug, Default)]
pub struct OwnedSlots<'g> {
    /// Fixed-name slots. Only ever populated for the root entity class.
    pub fixed: Vec<&'g SlotDef>,
    /// Required domain slots outside the fixed group.
    pub required: Vec<&'g SlotDef>,
    /// Optional domain slots outside the fixed group.
    pub optional: Vec<&'g SlotDef>,
    /// Every domain slot in attachment order, including fixed-rooted ones
    /// the field groups exclude. Validator emission scans this list.
    pub domain: Vec<&'g SlotDef>,
}

impl<'g> OwnedSlots<'g> {
    /// All owned slots in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &'g SlotDef> + '_ {
        self.fixed
            .iter()
            .chain(self.required.iter())
            .chain(self.optional.iter())
            .copied()
    }
}

/// Resolve the slots attached to `class` into field groups.
///
/// Only domain slots of the class produce fields; inherited slots are never
/// re-emitted. Slots whose root name is one of the fixed three stay out of
/// the required and optional groups on every class, and surface in the
/// fixed group only on the root entity class itself.
pub fn resolve_slots<'g>(
    graph: &'g SchemaGraph,
    class: &'g ClassDef,
) -> GeneratorResult<OwnedSlots<'g>> {
    let mut attached = Vec::with_capacity(class.slots.len());
    for name in &class.slots {
        let slot = graph
            .slot(name)
            .ok_or_else(|| GeneratorError::unknown_slot(&class.name, name))?;
        attached.push(slot);
    }

    let mut owned = OwnedSlots::default();

    if class.name == ENTITY_CLASS {
        owned.fixed = attached
            .iter()
            .copied()
            .filter(|s| FIXED_SLOTS.contains(&s.name.as_str()))
            .collect();
    }

    for slot in attached {
        if !slot.has_domain(&class.name) {
            continue;
        }
        owned.domain.push(slot);
        let root = snake_case(graph.slot_root_name(slot));
        if FIXED_SLOTS.contains(&root.as_str()) {
            continue;
        }
        if slot.required {
            owned.required.push(slot);
        } else {
            owned.optional.push(slot);
        }
    }

    Ok(owned)
}
