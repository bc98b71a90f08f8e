//! The assembled model artifact.

use crate::{ClassModel, FieldDecl, ValidatorRule};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// A schema type rendered as an alias of its base primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeAlias {
    pub name: String,
    pub base: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: base.into(),
        }
    }
}

/// An enum carried into the model as a closed value set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumModel {
    pub name: String,
    pub values: Vec<String>,
}

impl EnumModel {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// The flat enumeration of relation-like slots, exposed as namespaced
/// constants.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PredicateTable {
    /// Constant namespace marker prefixed to every name.
    pub prefix: String,
    /// Sorted, deduplicated predicate names (underscored).
    pub names: Vec<String>,
}

impl PredicateTable {
    pub fn new(prefix: impl Into<String>, names: Vec<String>) -> Self {
        Self {
            prefix: prefix.into(),
            names,
        }
    }

    /// The namespaced constants, in table order.
    pub fn curies(&self) -> impl Iterator<Item = String> + '_ {
        self.names.iter().map(|n| format!("{}:{}", self.prefix, n))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// The complete generated data model: classes in dependency-sorted order,
/// type aliases, enums, and the predicate table, plus the identity of the
/// schema it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelArtifact {
    schema_name: String,
    version: Option<String>,
    fingerprint: String,
    /// Dataset title from schema metadata, when present.
    metadata_title: Option<String>,
    aliases: Vec<TypeAlias>,
    enums: Vec<EnumModel>,
    classes: Vec<ClassModel>,
    #[serde(skip)]
    class_index: HashMap<String, usize>,
    predicates: PredicateTable,
}

impl ModelArtifact {
    pub fn new(schema_name: impl Into<String>, fingerprint: impl Into<String>) -> Self {
        Self {
            schema_name: schema_name.into(),
            version: None,
            fingerprint: fingerprint.into(),
            metadata_title: None,
            aliases: Vec::new(),
            enums: Vec::new(),
            classes: Vec::new(),
            class_index: HashMap::new(),
            predicates: PredicateTable::default(),
        }
    }

    // ==================== Construction ====================

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = Some(version.into());
    }

    pub fn set_metadata_title(&mut self, title: impl Into<String>) {
        self.metadata_title = Some(title.into());
    }

    pub fn add_alias(&mut self, alias: TypeAlias) {
        self.aliases.push(alias);
    }

    pub fn add_enum(&mut self, en: EnumModel) {
        self.enums.push(en);
    }

    pub fn add_class(&mut self, class: ClassModel) {
        self.class_index.insert(class.name.clone(), self.classes.len());
        self.classes.push(class);
    }

    pub fn set_predicates(&mut self, predicates: PredicateTable) {
        self.predicates = predicates;
    }

    // ==================== Lookups ====================

    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn metadata_title(&self) -> Option<&str> {
        self.metadata_title.as_deref()
    }

    pub fn aliases(&self) -> &[TypeAlias] {
        &self.aliases
    }

    pub fn enums(&self) -> &[EnumModel] {
        &self.enums
    }

    /// All classes in dependency-sorted order.
    pub fn classes(&self) -> &[ClassModel] {
        &self.classes
    }

    pub fn class(&self, name: &str) -> Option<&ClassModel> {
        self.class_index.get(name).map(|&i| &self.classes[i])
    }

    pub fn predicates(&self) -> &PredicateTable {
        &self.predicates
    }

    /// Every field visible on a class: declared plus inherited, most-derived
    /// declaration first, one entry per name.
    pub fn effective_fields(&self, name: &str) -> Vec<&FieldDecl> {
        let mut out = Vec::new();
        let mut seen = HashSet::new();
        for ancestor in self.linearized(name) {
            for field in &ancestor.fields {
                if seen.insert(field.name.as_str()) {
                    out.push(field);
                }
            }
        }
        out
    }

    /// Every validator that applies to a class, own rules first. Duplicate
    /// coercions over the same field are harmless; coercion is idempotent.
    pub fn effective_validators(&self, name: &str) -> Vec<&ValidatorRule> {
        self.linearized(name)
            .flat_map(|c| c.validators.iter())
            .collect()
    }

    fn linearized<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a ClassModel> {
        let ancestors: Vec<&ClassModel> = match self.class(name) {
            Some(class) => class
                .ancestors
                .iter()
                .filter_map(|a| self.class(a))
                .collect(),
            None => Vec::new(),
        };
        ancestors.into_iter()
    }
}
