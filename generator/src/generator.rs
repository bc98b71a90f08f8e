//! Generator facade: schema graph in, model artifact out.

use crate::{
    build_predicates, emit_class, sort_classes, GeneratorResult, IDENTIFIER_PRIMITIVE, IRI_MARKER,
};
use std::collections::HashMap;
use std::sync::Arc;
use weft_model::{EnumModel, ModelArtifact, TypeAlias};
use weft_schema::{camel_case, SchemaGraph};

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Namespace prefix for predicate constants.
    pub predicate_prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            predicate_prefix: "biolink".to_string(),
        }
    }
}

/// The model generator.
///
/// Generation is a pure function of the schema graph: no step mutates the
/// graph or another step's output, and the same input always produces the
/// same artifact. That determinism is what makes fingerprint caching safe.
#[derive(Debug, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate the complete model artifact for a schema graph.
    pub fn generate(&self, graph: &SchemaGraph) -> GeneratorResult<ModelArtifact> {
        let fingerprint = graph.fingerprint();
        tracing::debug!(schema = graph.name(), %fingerprint, "generating model");

        let mut artifact = ModelArtifact::new(graph.name(), &fingerprint);
        if let Some(version) = graph.version() {
            artifact.set_version(version);
        }
        if let Some(title) = graph.metadata().and_then(|m| m.title.as_deref()) {
            artifact.set_metadata_title(title);
        }

        // Refined scalar types alias down to their root primitive. The
        // curie and IRI primitives come from the rendering prelude instead.
        for ty in graph.types() {
            if ty.typeof_.is_none() {
                continue;
            }
            if ty.name == IDENTIFIER_PRIMITIVE || ty.name == IRI_MARKER {
                continue;
            }
            let base = graph
                .type_chain(&ty.name)
                .into_iter()
                .next()
                .unwrap_or_else(|| "str".to_string());
            artifact.add_alias(TypeAlias::new(&ty.name, base));
        }

        for en in graph.enums() {
            artifact.add_enum(EnumModel::new(camel_case(&en.name), en.values.clone()));
        }

        let ordered = sort_classes(graph)?;
        for class in ordered {
            artifact.add_class(emit_class(graph, class)?);
        }
        artifact.set_predicates(build_predicates(graph, &self.config.predicate_prefix));

        tracing::debug!(
            classes = artifact.classes().len(),
            predicates = artifact.predicates().len(),
            "model generated"
        );
        Ok(artifact)
    }
}

/// Cache of generated artifacts keyed by schema fingerprint.
///
/// Generation is deterministic, so a hit needs no invalidation beyond the
/// hash comparison; a reshaped schema simply misses.
#[derive(Debug, Default)]
pub struct ModelCache {
    entries: HashMap<String, Arc<ModelArtifact>>,
}

impl ModelCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the artifact for `graph`, generating on first sight.
    pub fn get_or_generate(
        &mut self,
        generator: &Generator,
        graph: &SchemaGraph,
    ) -> GeneratorResult<Arc<ModelArtifact>> {
        let fingerprint = graph.fingerprint();
        if let Some(hit) = self.entries.get(&fingerprint) {
            tracing::debug!(%fingerprint, "model cache hit");
            return Ok(Arc::clone(hit));
        }
        let artifact = Arc::new(generator.generate(graph)?);
        self.entries.insert(fingerprint, Arc::clone(&artifact));
        Ok(artifact)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
