//! Loader round trip: the YAML mirror of the builder fixture must generate
//! the identical model.

use pretty_assertions::assert_eq;
use weft_tests::prelude::*;

#[test]
fn test_yaml_mirror_matches_the_builder_fixture() {
    let from_disk = weft_loader::load_path("fixtures/knowledge-graph.yaml").unwrap();
    let built = fixtures::knowledge_graph();

    assert_eq!(from_disk.fingerprint(), built.fingerprint());

    let generator = Generator::new();
    let a = generator.generate(&from_disk).unwrap();
    let b = generator.generate(&built).unwrap();
    assert_eq!(render(&a), render(&b));
    assert_eq!(a, b);
}

#[test]
fn test_loaded_documents_feed_the_whole_pipeline() {
    let graph = weft_loader::load_path("fixtures/knowledge-graph.yaml").unwrap();
    let artifact = Generator::new().generate(&graph).unwrap();

    let gene = artifact
        .build_instance("Gene", attrs! { "id" => "HGNC:1100", "symbol" => "BRCA1" })
        .unwrap();
    assert_eq!(gene.get("symbol"), Some(&Value::from("BRCA1")));
    assert_eq!(
        gene.get("category"),
        Some(&Value::List(vec![Value::from("Gene")]))
    );
}
