//! Slot definitions.

use serde::{Deserialize, Serialize};

/// A named, typed attribute defined once at schema level and attached to
/// classes via `domain_of`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotDef {
    /// Slot name as written in the schema (may contain spaces).
    pub name: String,
    /// Emitted name override. When present, fields render under this name.
    #[serde(default)]
    pub alias: Option<String>,
    /// Human-readable description, carried into the emitted field.
    #[serde(default)]
    pub description: Option<String>,
    /// Parent slot name (slot-level inheritance).
    #[serde(default)]
    pub is_a: Option<String>,
    /// Additional parent-like slots contributing to the ancestor closure.
    #[serde(default)]
    pub mixins: Vec<String>,
    /// Names of the classes that own this slot as a domain slot.
    #[serde(default)]
    pub domain_of: Vec<String>,
    /// Range name: a type, enum, or class defined in the same schema.
    pub range: String,
    /// Whether a value must be supplied at construction.
    #[serde(default)]
    pub required: bool,
    /// Whether the slot may hold more than one value.
    #[serde(default)]
    pub multivalued: bool,
    /// Whether a class-valued range renders its full structure rather than
    /// a reference.
    #[serde(default)]
    pub inlined: bool,
    /// Whether this slot uniquely names instances of its owning class.
    #[serde(default)]
    pub identifier: bool,
    /// Alternative unique-key marker, treated like `identifier`.
    #[serde(default)]
    pub key: bool,
}

impl SlotDef {
    pub fn new(name: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            description: None,
            is_a: None,
            mixins: Vec::new(),
            domain_of: Vec::new(),
            range: range.into(),
            required: false,
            multivalued: false,
            inlined: false,
            identifier: false,
            key: false,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.is_a = Some(parent.into());
        self
    }

    pub fn with_mixin(mut self, mixin: impl Into<String>) -> Self {
        self.mixins.push(mixin.into());
        self
    }

    pub fn owned_by(mut self, class: impl Into<String>) -> Self {
        self.domain_of.push(class.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn multivalued(mut self) -> Self {
        self.multivalued = true;
        self
    }

    pub fn inlined(mut self) -> Self {
        self.inlined = true;
        self
    }

    pub fn identifier(mut self) -> Self {
        self.identifier = true;
        self
    }

    pub fn key(mut self) -> Self {
        self.key = true;
        self
    }

    /// The name this slot is emitted under: the alias when present, else the
    /// slot's own name. Still in schema form; callers snake_case it.
    pub fn effective_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// Whether this slot names instances (identifier or key marker).
    pub fn is_identifying(&self) -> bool {
        self.identifier || self.key
    }

    /// Whether the given class is a declared domain owner of this slot.
    pub fn has_domain(&self, class: &str) -> bool {
        self.domain_of.iter().any(|c| c == class)
    }
}
