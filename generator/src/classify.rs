//! Reference classification: how a slot's range spells as a field type.

use weft_model::FieldType;
use weft_schema::{camel_case, snake_case, ClassDef, SchemaGraph, SlotDef};

/// Slot names whose references always collapse to the identifier primitive,
/// whatever their range path says.
pub const ALWAYS_IDENTIFIER_SLOTS: [&str; 9] = [
    "id",
    "provided_by",
    "has_qualitative_value",
    "category",
    "subclass_of",
    "has_input",
    "has_output",
    "has_constituent",
    "enabled_by",
];

/// Marker spelled by the generic identifier type inside a range path.
pub const GENERIC_ID_MARKER: &str = "UriOrCurie";
/// Marker spelled by the IRI refinement type.
pub const IRI_MARKER: &str = "Iri";
/// Marker spelled by the boolean builtin.
pub const BOOL_MARKER: &str = "Bool";
/// Marker the root entity class contributes to descendant identifier paths.
pub const ENTITY_MARKER: &str = "Entity";
/// The primitive every curie-shaped reference collapses to.
pub const IDENTIFIER_PRIMITIVE: &str = "Curie";

/// The classified shape of one slot reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceShape {
    /// Bare identifier primitive.
    Identifier,
    /// Identifier or the terminal class, for entity-rooted ranges.
    IdentifierOrObject(String),
    /// Base plus a terminal that names a class held inline.
    InlineObject(String, String),
    /// Plain boolean.
    Boolean,
    /// The IRI refinement wins over its base.
    Iri,
    /// Base plus terminal for refined scalar paths.
    BaseAndTerminal(String, String),
    /// Single-step path: the bare base type.
    Base(String),
}

impl ReferenceShape {
    /// Render the shape as a field type expression.
    pub fn field_type(&self) -> FieldType {
        match self {
            ReferenceShape::Identifier => FieldType::named(IDENTIFIER_PRIMITIVE),
            ReferenceShape::IdentifierOrObject(class) => FieldType::union(vec![
                FieldType::named(IDENTIFIER_PRIMITIVE),
                FieldType::named(class),
            ]),
            ReferenceShape::InlineObject(base, terminal)
            | ReferenceShape::BaseAndTerminal(base, terminal) => {
                FieldType::union(vec![FieldType::named(base), FieldType::named(terminal)])
            }
            ReferenceShape::Boolean => FieldType::named("bool"),
            ReferenceShape::Iri => FieldType::named(IRI_MARKER),
            ReferenceShape::Base(name) => FieldType::named(name),
        }
    }
}

/// The path a slot reference is classified against. Identifying slots spell
/// the owning class's identifier path; everything else uses the slot's own
/// range path. `None` when the range resolves to nothing known.
pub fn reference_path(
    graph: &SchemaGraph,
    class: &ClassDef,
    slot: &SlotDef,
) -> Option<Vec<String>> {
    if slot.is_identifying() {
        Some(graph.identifier_path(&class.name))
    } else {
        graph.range_path(slot)
    }
}

/// Classify a range path against the slot it types.
///
/// Precedence: fixed-name and generic-identifier collapse, then the entity
/// marker, then boolean and IRI terminals, finally the base-and-terminal
/// fallthrough. The first matching rule wins; an IRI terminal shields a
/// path from the generic-identifier collapse so the refinement survives.
pub fn classify(graph: &SchemaGraph, slot: &SlotDef, path: &[String]) -> ReferenceShape {
    let Some(terminal) = path.last() else {
        return ReferenceShape::Base("str".to_string());
    };
    let base = &path[0];
    let slot_name = snake_case(slot.effective_name());

    let fixed_name = ALWAYS_IDENTIFIER_SLOTS.contains(&slot_name.as_str());
    let generic_id = path.iter().any(|p| p == GENERIC_ID_MARKER) && terminal != IRI_MARKER;
    if fixed_name || generic_id {
        return ReferenceShape::Identifier;
    }

    if path.iter().any(|p| p == ENTITY_MARKER) {
        if path.len() > 1 {
            return ReferenceShape::IdentifierOrObject(terminal.clone());
        }
        return ReferenceShape::Base(base.clone());
    }

    if terminal == BOOL_MARKER {
        return ReferenceShape::Boolean;
    }

    if path.len() > 1 {
        if terminal == IRI_MARKER {
            return ReferenceShape::Iri;
        }
        let names_class = graph
            .classes()
            .iter()
            .any(|c| camel_case(&c.name) == *terminal);
        if names_class {
            return ReferenceShape::InlineObject(base.clone(), terminal.clone());
        }
        return ReferenceShape::BaseAndTerminal(base.clone(), terminal.clone());
    }

    ReferenceShape::Base(base.clone())
}
