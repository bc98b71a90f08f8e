//! Class emission: one schema class to one model class.

use crate::{emit_validators, field_name, map_slot, resolve_slots, GeneratorError, GeneratorResult};
use weft_model::{ClassModel, FieldDecl};
use weft_schema::{camel_case, ClassDef, SchemaGraph, ENTITY_CLASS};

/// Emit the model form of one class.
///
/// Fields follow the group order from slot resolution. The required
/// manifest walks the full linearization, so inherited required slots stay
/// checkable even where union-shaped field types erase requiredness. Only
/// the root entity class declares the category-inference hook; subtypes
/// reach it through their ancestry.
pub fn emit_class(graph: &SchemaGraph, class: &ClassDef) -> GeneratorResult<ClassModel> {
    let owned = resolve_slots(graph, class)?;

    let mut model = ClassModel::new(camel_case(&class.name));
    if let Some(description) = &class.description {
        model = model.with_description(description.clone());
    }
    for parent in class.parent_names() {
        model = model.with_parent(camel_case(parent));
    }
    if class.is_abstract {
        model = model.abstract_();
    }
    if class.is_mixin {
        model = model.mixin();
    }
    if class.is_concrete() {
        model = model.with_category(camel_case(&class.name));
    }

    for slot in owned.iter() {
        let mapped = map_slot(graph, class, slot)?;
        let name = field_name(slot);
        if model.field(&name).is_some() {
            return Err(GeneratorError::duplicate_field(&class.name, &name));
        }
        let mut decl = FieldDecl::new(name, mapped.field_type, mapped.default);
        if let Some(description) = &slot.description {
            decl = decl.with_description(description.clone());
        }
        model = model.with_field(decl);
    }

    for field in required_manifest(graph, class)? {
        model = model.with_required(field);
    }

    for rule in emit_validators(graph, class, &owned) {
        model = model.with_validator(rule);
    }

    let linearization = graph.linearization(&class.name);
    model = model.with_ancestors(
        linearization
            .iter()
            .map(|c| camel_case(&c.name))
            .collect(),
    );
    let mut ancestry = Vec::new();
    for ancestor in &linearization {
        if ancestor.is_concrete() {
            let tag = camel_case(&ancestor.name);
            if !ancestry.contains(&tag) {
                ancestry.push(tag);
            }
        }
    }
    model = model.with_category_ancestry(ancestry);

    if graph.entity_rooted(&class.name) {
        model = model.entity_rooted();
    }
    if class.name == ENTITY_CLASS {
        model = model.infers_category();
    }

    Ok(model)
}

/// Every required slot reachable by the class, by emitted field name,
/// most-derived first, first occurrence kept.
fn required_manifest(graph: &SchemaGraph, class: &ClassDef) -> GeneratorResult<Vec<String>> {
    let mut manifest = Vec::new();
    for ancestor in graph.linearization(&class.name) {
        for slot_name in &ancestor.slots {
            let slot = graph
                .slot(slot_name)
                .ok_or_else(|| GeneratorError::unknown_slot(&ancestor.name, slot_name))?;
            if slot.required {
                let field = field_name(slot);
                if !manifest.contains(&field) {
                    manifest.push(field);
                }
            }
        }
    }
    Ok(manifest)
}
