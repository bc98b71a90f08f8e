//! Class definitions.

use serde::{Deserialize, Serialize};

/// A class in the schema: single `is_a` parent, ordered mixins, and an
/// ordered list of attached slot names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDef {
    /// Class name as written in the schema (may contain spaces).
    pub name: String,
    /// Human-readable description, carried into the emitted class block.
    #[serde(default)]
    pub description: Option<String>,
    /// Single inheritance parent.
    #[serde(default)]
    pub is_a: Option<String>,
    /// Mixin parents, in declaration order.
    #[serde(default)]
    pub mixins: Vec<String>,
    /// Abstract classes are never instantiated and carry no category tag.
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    /// Mixin classes contribute slots to others and carry no category tag.
    #[serde(default, rename = "mixin")]
    pub is_mixin: bool,
    /// Attached slot names, in declaration order. Attachment is not
    /// ownership; ownership is the slot's `domain_of`.
    #[serde(default)]
    pub slots: Vec<String>,
    /// Allowed identifier namespace prefixes, in priority order.
    #[serde(default)]
    pub id_prefixes: Vec<String>,
}

impl ClassDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            is_a: None,
            mixins: Vec::new(),
            is_abstract: false,
            is_mixin: false,
            slots: Vec::new(),
            id_prefixes: Vec::new(),
        }
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

    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slots.push(slot.into());
        self
    }

    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefixes.push(prefix.into());
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

    /// Parent and mixins together, parent first. The orderer requires every
    /// name yielded here to precede this class.
    pub fn parent_names(&self) -> impl Iterator<Item = &str> {
        self.is_a
            .as_deref()
            .into_iter()
            .chain(self.mixins.iter().map(|m| m.as_str()))
    }

    /// Concrete classes get a category tag; abstract and mixin classes do not.
    pub fn is_concrete(&self) -> bool {
        !self.is_abstract && !self.is_mixin
    }
}
