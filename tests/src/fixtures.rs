//! Shared fixture schemas.

use weft_schema::{ClassDef, EnumDef, SchemaGraph, SlotDef, TypeDef, ENTITY_CLASS};

/// A small knowledge-graph schema exercising the whole pipeline: the entity
/// root with fixed slots, scalar type refinements, an enum range, class
/// references from an association, and a relation slot hierarchy. The YAML
/// mirror of this graph is `fixtures/knowledge-graph.yaml`.
pub fn knowledge_graph() -> SchemaGraph {
    SchemaGraph::new("knowledge-graph")
        .with_version("0.4.2")
        .with_type(TypeDef::new("UriOrCurie").with_parent("str"))
        .with_type(TypeDef::new("CategoryType").with_parent("UriOrCurie"))
        .with_type(TypeDef::new("PredicateType").with_parent("UriOrCurie"))
        .with_type(TypeDef::new("LabelType").with_parent("str"))
        .with_type(TypeDef::new("SymbolType").with_parent("str"))
        .with_enum(
            EnumDef::new("strand enum")
                .with_value("+")
                .with_value("-")
                .with_value("."),
        )
        .with_slot(
            SlotDef::new("id", "str")
                .identifier()
                .required()
                .owned_by(ENTITY_CLASS),
        )
        .with_slot(
            SlotDef::new("category", "CategoryType")
                .multivalued()
                .owned_by(ENTITY_CLASS),
        )
        .with_slot(SlotDef::new("name", "LabelType").owned_by(ENTITY_CLASS))
        .with_slot(SlotDef::new("symbol", "SymbolType").owned_by("gene"))
        .with_slot(SlotDef::new("synonym", "str").multivalued().owned_by("gene"))
        .with_slot(SlotDef::new("strand", "strand enum").owned_by("gene"))
        .with_slot(SlotDef::new("subject", "gene").required().owned_by("association"))
        .with_slot(
            SlotDef::new("predicate", "PredicateType")
                .required()
                .owned_by("association"),
        )
        .with_slot(
            SlotDef::new("object", "phenotypic feature")
                .required()
                .owned_by("association"),
        )
        .with_slot(
            SlotDef::new("publications", "publication")
                .multivalued()
                .owned_by("association"),
        )
        .with_slot(SlotDef::new("related to", "entity"))
        .with_slot(SlotDef::new("interacts with", "entity").with_parent("related to"))
        .with_slot(SlotDef::new("affects", "entity").with_parent("related to"))
        .with_slot(SlotDef::new("negatively regulates", "entity").with_parent("affects"))
        .with_class(
            ClassDef::new(ENTITY_CLASS)
                .abstract_()
                .with_slot("id")
                .with_slot("category")
                .with_slot("name")
                .with_id_prefix("HGNC")
                .with_id_prefix("MONDO")
                .with_id_prefix("HP")
                .with_id_prefix("PMID"),
        )
        .with_class(
            ClassDef::new("gene")
                .with_parent(ENTITY_CLASS)
                .with_slot("symbol")
                .with_slot("synonym")
                .with_slot("strand"),
        )
        .with_class(ClassDef::new("phenotypic feature").with_parent(ENTITY_CLASS))
        .with_class(ClassDef::new("publication").with_parent(ENTITY_CLASS))
        .with_class(
            ClassDef::new("association")
                .with_parent(ENTITY_CLASS)
                .with_slot("subject")
                .with_slot("predicate")
                .with_slot("object")
                .with_slot("publications"),
        )
}

/// The minimal four-class example: an abstract root, two entity leaves, and
/// an association pointing at them.
pub fn minimal_association() -> SchemaGraph {
    SchemaGraph::new("minimal")
        .with_slot(
            SlotDef::new("id", "str")
                .identifier()
                .required()
                .owned_by(ENTITY_CLASS),
        )
        .with_slot(SlotDef::new("subject", "gene").required().owned_by("association"))
        .with_slot(
            SlotDef::new("object", "phenotypic feature")
                .required()
                .owned_by("association"),
        )
        .with_class(ClassDef::new(ENTITY_CLASS).abstract_().with_slot("id"))
        .with_class(ClassDef::new("gene").with_parent(ENTITY_CLASS))
        .with_class(ClassDef::new("phenotypic feature").with_parent(ENTITY_CLASS))
        .with_class(
            ClassDef::new("association")
                .with_parent(ENTITY_CLASS)
                .with_slot("subject")
                .with_slot("object"),
        )
}
