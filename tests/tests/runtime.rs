//! Instance construction against a generated model.
//!
//! The unit tests in weft-model hand-build class models; here the artifact
//! comes straight out of the generator, so inference, coercion and the
//! namespace check run over exactly what the pipeline emitted.

use pretty_assertions::assert_eq;
use weft_tests::prelude::*;

fn artifact() -> ModelArtifact {
    Generator::new()
        .generate(&fixtures::knowledge_graph())
        .unwrap()
}

#[test]
fn test_construction_coerces_and_infers() {
    // GIVEN a gene supplied with a scalar synonym and no category
    let artifact = artifact();

    // WHEN the instance is built
    let gene = artifact
        .build_instance(
            "Gene",
            attrs! { "id" => "HGNC:1100", "synonym" => "BRCA one" },
        )
        .unwrap();

    // THEN the synonym is wrapped and the category filled from ancestry
    assert_eq!(
        gene.get("synonym"),
        Some(&Value::List(vec![Value::from("BRCA one")]))
    );
    assert_eq!(
        gene.get("category"),
        Some(&Value::List(vec![Value::from("Gene")]))
    );
}

#[test]
fn test_coercion_is_idempotent() {
    let artifact = artifact();

    let supplied_as_list = artifact
        .build_instance(
            "Gene",
            attrs! { "id" => "HGNC:1100", "synonym" => vec!["BRCA one", "breast cancer 1"] },
        )
        .unwrap();
    assert_eq!(
        supplied_as_list.get("synonym"),
        Some(&Value::List(vec![
            Value::from("BRCA one"),
            Value::from("breast cancer 1")
        ]))
    );

    // Rebuilding from an already-validated attribute set changes nothing.
    let rebuilt = artifact
        .build_instance("Gene", supplied_as_list.attrs().clone())
        .unwrap();
    assert_eq!(rebuilt.attrs(), supplied_as_list.attrs());
}

#[test]
fn test_supplied_category_is_kept_and_coerced() {
    let artifact = artifact();

    let gene = artifact
        .build_instance(
            "Gene",
            attrs! { "id" => "HGNC:1100", "category" => "ProteinCodingGene" },
        )
        .unwrap();

    assert_eq!(
        gene.get("category"),
        Some(&Value::List(vec![Value::from("ProteinCodingGene")]))
    );
}

#[test]
fn test_namespace_violation_rejects_only_that_instance() {
    let artifact = artifact();

    let err = artifact
        .build_instance("Gene", attrs! { "id" => "FB:FBgn0000490" })
        .unwrap_err();
    assert!(matches!(err, ModelError::NamespaceViolation { .. }));

    // An unrelated instance still constructs against the same artifact.
    assert!(artifact
        .build_instance("Gene", attrs! { "id" => "HGNC:1100" })
        .is_ok());
}

#[test]
fn test_required_manifest_is_enforced_across_inheritance() {
    let artifact = artifact();

    // The association's own required slots come before the inherited id.
    let err = artifact
        .build_instance(
            "Association",
            attrs! {
                "id" => "PMID:123",
                "predicate" => "related_to",
                "object" => "HP:0003002",
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        ModelError::MissingRequired { ref field, .. } if field == "subject"
    ));

    let complete = artifact.build_instance(
        "Association",
        attrs! {
            "id" => "PMID:123",
            "subject" => "HGNC:1100",
            "predicate" => "related_to",
            "object" => "HP:0003002",
        },
    );
    assert!(complete.is_ok());
}

#[test]
fn test_abstract_root_cannot_be_instantiated() {
    let artifact = artifact();

    let err = artifact
        .build_instance("Entity", attrs! { "id" => "HGNC:1100" })
        .unwrap_err();
    assert!(matches!(err, ModelError::AbstractClass { .. }));
}

#[test]
fn test_undeclared_attributes_are_rejected() {
    let artifact = artifact();

    let err = artifact
        .build_instance(
            "Gene",
            attrs! { "id" => "HGNC:1100", "chromosome" => "17q21" },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        ModelError::UnknownField { ref field, .. } if field == "chromosome"
    ));
}
