//! Fingerprint-keyed caching across schema edits.

use std::sync::Arc;
use weft_tests::prelude::*;

#[test]
fn test_identical_graphs_share_one_cached_artifact() {
    let generator = Generator::new();
    let mut cache = ModelCache::new();

    let first = cache
        .get_or_generate(&generator, &fixtures::knowledge_graph())
        .unwrap();
    let second = cache
        .get_or_generate(&generator, &fixtures::knowledge_graph())
        .unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_metadata_edits_do_not_invalidate() {
    let generator = Generator::new();
    let mut cache = ModelCache::new();

    cache
        .get_or_generate(&generator, &fixtures::knowledge_graph())
        .unwrap();

    // The fingerprint tracks structure; a provenance-only edit hits.
    let retitled = fixtures::knowledge_graph().with_metadata(SchemaMetadata {
        title: Some("Monarch ingest".to_string()),
        ..Default::default()
    });
    cache.get_or_generate(&generator, &retitled).unwrap();

    assert_eq!(cache.len(), 1);
}

#[test]
fn test_structural_edits_miss() {
    let generator = Generator::new();
    let mut cache = ModelCache::new();

    let base = cache
        .get_or_generate(&generator, &fixtures::knowledge_graph())
        .unwrap();

    let reshaped = fixtures::knowledge_graph()
        .with_class(ClassDef::new("protein").with_parent(ENTITY_CLASS));
    let regenerated = cache.get_or_generate(&generator, &reshaped).unwrap();

    assert!(!Arc::ptr_eq(&base, &regenerated));
    assert_eq!(cache.len(), 2);
    assert!(regenerated.class("Protein").is_some());
    assert!(base.class("Protein").is_none());
}

#[test]
fn test_fingerprint_lands_in_the_rendered_header() {
    let graph = fixtures::knowledge_graph();
    let artifact = Generator::new().generate(&graph).unwrap();

    assert_eq!(artifact.fingerprint(), graph.fingerprint());
    assert!(render_body(&artifact).contains(&format!("// fingerprint: {}", graph.fingerprint())));
}
