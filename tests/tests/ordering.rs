//! Ordering guarantees over randomized class hierarchies.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use weft_generator::sort_classes;
use weft_tests::prelude::*;

/// Build an acyclic hierarchy with random parents and mixins, then shuffle
/// the declaration order so the sort has real work to do.
fn random_hierarchy(rng: &mut StdRng, count: usize) -> SchemaGraph {
    let mut defs: Vec<ClassDef> = Vec::new();
    let mut names: Vec<String> = Vec::new();
    for i in 0..count {
        let name = format!("c{i}");
        let mut class = ClassDef::new(name.as_str());
        if !names.is_empty() && rng.gen_bool(0.7) {
            class = class.with_parent(names.choose(rng).unwrap().as_str());
        }
        if names.len() > 1 && rng.gen_bool(0.4) {
            let amount = rng.gen_range(1..=2);
            for mixin in names.choose_multiple(rng, amount) {
                class = class.with_mixin(mixin.as_str());
            }
        }
        names.push(name);
        defs.push(class);
    }
    defs.shuffle(rng);

    let mut graph = SchemaGraph::new("random");
    for def in defs {
        graph.add_class(def);
    }
    graph
}

#[test]
fn test_every_class_follows_its_parents_and_mixins() {
    let mut rng = StdRng::seed_from_u64(42);

    for trial in 0..50 {
        let graph = random_hierarchy(&mut rng, 24);
        let sorted = sort_classes(&graph).unwrap();
        assert_eq!(sorted.len(), graph.classes().len());

        let position: HashMap<&str, usize> = sorted
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.as_str(), i))
            .collect();
        for class in &sorted {
            for parent in class.parent_names() {
                assert!(
                    position[parent] < position[class.name.as_str()],
                    "trial {}: '{}' sorted before its parent '{}'",
                    trial,
                    class.name,
                    parent
                );
            }
        }
    }
}

#[test]
fn test_unrelated_classes_keep_declaration_order() {
    let graph = SchemaGraph::new("flat")
        .with_class(ClassDef::new("zebra"))
        .with_class(ClassDef::new("aardvark"))
        .with_class(ClassDef::new("mongoose"));

    let sorted = sort_classes(&graph).unwrap();
    let names: Vec<&str> = sorted.iter().map(|c| c.name.as_str()).collect();
    // First-ready selection, not a lexical sort.
    assert_eq!(names, vec!["zebra", "aardvark", "mongoose"]);
}

#[test]
fn test_cycles_report_the_stuck_classes() {
    let graph = SchemaGraph::new("cyclic")
        .with_class(ClassDef::new("alpha").with_parent("beta"))
        .with_class(ClassDef::new("beta").with_parent("alpha"))
        .with_class(ClassDef::new("loner"));

    let err = sort_classes(&graph).unwrap_err();
    assert!(matches!(err, GeneratorError::CyclicHierarchy { .. }));
    let message = err.to_string();
    assert!(message.contains("alpha"));
    assert!(message.contains("beta"));
    assert!(!message.contains("loner"));
}

#[test]
fn test_a_missing_parent_is_unorderable() {
    let graph =
        SchemaGraph::new("dangling").with_class(ClassDef::new("orphan").with_parent("ghost"));

    let err = sort_classes(&graph).unwrap_err();
    assert!(matches!(err, GeneratorError::CyclicHierarchy { .. }));
}
