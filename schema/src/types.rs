//! Scalar type and enum definitions.

use serde::{Deserialize, Serialize};

/// A scalar type. `typeof_` chains refinements down from a builtin
/// primitive: `Iri -> UriOrCurie -> str`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDef {
    /// Type name, already in model form ("str", "UriOrCurie", "LabelType").
    pub name: String,
    /// Parent type in the refinement chain. Builtin primitives have none.
    #[serde(default, rename = "typeof")]
    pub typeof_: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl TypeDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            typeof_: None,
            description: None,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.typeof_ = Some(parent.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The primitives every schema starts from.
    pub fn builtins() -> Vec<TypeDef> {
        ["str", "int", "float", "Bool"]
            .into_iter()
            .map(TypeDef::new)
            .collect()
    }
}

/// An enumeration range: a closed set of permissible values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Permissible values, in declaration order.
    #[serde(default)]
    pub values: Vec<String>,
}

impl EnumDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: Vec::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
