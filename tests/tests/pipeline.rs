//! End-to-end pipeline tests over the knowledge-graph fixture.
//!
//! Every stage is covered in one pass: ordering, slot grouping, reference
//! classification, cardinality mapping, validators, manifests, predicates,
//! and the rendered text.

use pretty_assertions::assert_eq;
use weft_tests::prelude::*;

fn artifact() -> ModelArtifact {
    Generator::new()
        .generate(&fixtures::knowledge_graph())
        .unwrap()
}

fn field_line(artifact: &ModelArtifact, class: &str, name: &str) -> String {
    artifact
        .class(class)
        .unwrap()
        .field(name)
        .unwrap()
        .to_string()
}

#[test]
fn test_classes_emit_in_dependency_order() {
    let artifact = artifact();
    let names: Vec<&str> = artifact.classes().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Entity",
            "Gene",
            "PhenotypicFeature",
            "Publication",
            "Association"
        ]
    );
}

#[test]
fn test_entity_root_carries_the_fixed_group_and_the_hook() {
    let artifact = artifact();
    let entity = artifact.class("Entity").unwrap();

    let fields: Vec<&str> = entity.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(fields, vec!["id", "category", "name"]);
    assert_eq!(field_line(&artifact, "Entity", "id"), "id: Curie");
    assert_eq!(
        field_line(&artifact, "Entity", "category"),
        "category: Optional<Curie | Sequence<Curie>> = []"
    );
    assert_eq!(
        field_line(&artifact, "Entity", "name"),
        "name: Optional<str | LabelType> = null"
    );

    assert!(entity.is_abstract);
    assert!(entity.infers_category);
    assert_eq!(entity.category, None);
}

#[test]
fn test_references_classify_by_precedence() {
    let artifact = artifact();

    // Entity-rooted class ranges become identifier-or-object unions.
    assert_eq!(
        field_line(&artifact, "Association", "subject"),
        "subject: Curie | Gene"
    );
    assert_eq!(
        field_line(&artifact, "Association", "object"),
        "object: Curie | PhenotypicFeature"
    );
    // The generic-identifier marker in the range chain wins over everything.
    assert_eq!(
        field_line(&artifact, "Association", "predicate"),
        "predicate: Curie"
    );
    // Multivalued references keep the union inside the sequence shape.
    assert_eq!(
        field_line(&artifact, "Association", "publications"),
        "publications: Optional<Curie | Publication | Sequence<Curie | Publication>> = []"
    );
}

#[test]
fn test_scalar_refinements_union_with_their_root() {
    let artifact = artifact();

    assert_eq!(
        field_line(&artifact, "Gene", "symbol"),
        "symbol: Optional<str | SymbolType> = null"
    );
    assert_eq!(
        field_line(&artifact, "Gene", "synonym"),
        "synonym: Optional<str | Sequence<str>> = []"
    );
    assert_eq!(
        field_line(&artifact, "Gene", "strand"),
        "strand: Optional<StrandEnum> = null"
    );
}

#[test]
fn test_required_manifest_spans_inheritance() {
    let artifact = artifact();

    assert_eq!(
        artifact.class("Association").unwrap().required,
        vec!["subject", "predicate", "object", "id"]
    );
    assert_eq!(artifact.class("Gene").unwrap().required, vec!["id"]);
}

#[test]
fn test_category_tags_are_never_inherited() {
    let artifact = artifact();

    assert_eq!(artifact.class("Entity").unwrap().category, None);
    assert_eq!(
        artifact.class("Gene").unwrap().category.as_deref(),
        Some("Gene")
    );
    assert_eq!(
        artifact.class("Association").unwrap().category.as_deref(),
        Some("Association")
    );

    assert_eq!(
        artifact.class("Gene").unwrap().ancestors,
        vec!["Gene", "Entity"]
    );
    assert_eq!(artifact.class("Gene").unwrap().category_ancestry, vec!["Gene"]);
}

#[test]
fn test_validators_cover_namespaces_and_coercions() {
    let artifact = artifact();

    assert_eq!(
        artifact.class("Entity").unwrap().validators,
        vec![
            ValidatorRule::curie_namespace(
                "id",
                vec![
                    "HGNC".to_string(),
                    "MONDO".to_string(),
                    "HP".to_string(),
                    "PMID".to_string()
                ]
            ),
            ValidatorRule::coerce_to_list("category"),
        ]
    );
    assert_eq!(
        artifact.class("Gene").unwrap().validators,
        vec![ValidatorRule::coerce_to_list("synonym")]
    );
    assert_eq!(
        artifact.class("Association").unwrap().validators,
        vec![ValidatorRule::coerce_to_list("publications")]
    );
}

#[test]
fn test_aliases_and_enums_carry_through() {
    let artifact = artifact();

    assert_eq!(
        artifact.aliases(),
        &[
            TypeAlias::new("UriOrCurie", "str"),
            TypeAlias::new("CategoryType", "str"),
            TypeAlias::new("PredicateType", "str"),
            TypeAlias::new("LabelType", "str"),
            TypeAlias::new("SymbolType", "str"),
        ]
    );
    assert_eq!(
        artifact.enums(),
        &[EnumModel::new(
            "StrandEnum",
            vec!["+".to_string(), "-".to_string(), ".".to_string()]
        )]
    );
}

#[test]
fn test_predicates_form_a_sorted_namespaced_table() {
    let artifact = artifact();

    assert_eq!(
        artifact.predicates().names,
        vec![
            "affects",
            "interacts_with",
            "negatively_regulates",
            "related_to"
        ]
    );
    let curies: Vec<String> = artifact.predicates().curies().collect();
    assert_eq!(curies[0], "biolink:affects");
}

#[test]
fn test_rendering_is_deterministic() {
    let first = render(&artifact());
    let second = render(&artifact());
    assert_eq!(first, second);

    assert!(first.contains("class Gene : Entity"));
    assert!(first.contains("on_construct: infer_category"));
    assert!(first.contains("predicates {"));
    assert!(first.contains("// schema: knowledge-graph (0.4.2)"));
}

#[test]
fn test_minimal_association_compiles_end_to_end() {
    let artifact = Generator::new()
        .generate(&fixtures::minimal_association())
        .unwrap();

    let names: Vec<&str> = artifact.classes().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Entity", "Gene", "PhenotypicFeature", "Association"]
    );
    assert_eq!(
        field_line(&artifact, "Association", "subject"),
        "subject: Curie | Gene"
    );
    assert_eq!(
        field_line(&artifact, "Association", "object"),
        "object: Curie | PhenotypicFeature"
    );
}
