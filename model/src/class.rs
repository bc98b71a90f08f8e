//! Per-class model artifacts.

use crate::{FieldDecl, ValidatorRule};
use serde::Serialize;

/// One class in the generated model: declared fields, category tag,
/// required manifest, validators, and the precomputed ancestry the runtime
/// consults instead of live type introspection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassModel {
    /// Model-form name ("PhenotypicFeature").
    pub name: String,
    pub description: Option<String>,
    /// Parent names for the block header: `is_a` parent first, then mixins.
    pub parents: Vec<String>,
    pub is_abstract: bool,
    pub is_mixin: bool,
    /// Category tag. Present exactly on concrete classes, always the class's
    /// own name.
    pub category: Option<String>,
    /// Declared fields in emission order (fixed, required, optional).
    pub fields: Vec<FieldDecl>,
    /// Required manifest: every required field reachable by this class,
    /// inherited included. The authoritative runtime presence check.
    pub required: Vec<String>,
    pub validators: Vec<ValidatorRule>,
    /// Ancestor linearization, self first, most-derived to root.
    pub ancestors: Vec<String>,
    /// Category tags over the linearization, deduplicated, first occurrence
    /// kept. What the inference hook assigns.
    pub category_ancestry: Vec<String>,
    /// Whether this class descends from the root entity class.
    pub entity_rooted: bool,
    /// Whether this class declares the category-inference hook (root entity
    /// only; subtypes inherit the behavior through `entity_rooted`).
    pub infers_category: bool,
}

impl ClassModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            parents: Vec::new(),
            is_abstract: false,
            is_mixin: false,
            category: None,
            fields: Vec::new(),
            required: Vec::new(),
            validators: Vec::new(),
            ancestors: Vec::new(),
            category_ancestry: Vec::new(),
            entity_rooted: false,
            infers_category: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parents.push(parent.into());
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn mixin(mut self) -> Self {
        self.is_mixin = true;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_required(mut self, field: impl Into<String>) -> Self {
        self.required.push(field.into());
        self
    }

    pub fn with_validator(mut self, rule: ValidatorRule) -> Self {
        self.validators.push(rule);
        self
    }

    pub fn with_ancestors(mut self, ancestors: Vec<String>) -> Self {
        self.ancestors = ancestors;
        self
    }

    pub fn with_category_ancestry(mut self, tags: Vec<String>) -> Self {
        self.category_ancestry = tags;
        self
    }

    pub fn entity_rooted(mut self) -> Self {
        self.entity_rooted = true;
        self
    }

    pub fn infers_category(mut self) -> Self {
        self.infers_category = true;
        self
    }

    pub fn is_concrete(&self) -> bool {
        !self.is_abstract && !self.is_mixin
    }

    /// A field declared directly on this class (not inherited).
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }
}
