//! Field declarations: type expressions and default policies.

use serde::Serialize;
use std::fmt;

/// A rendered field type expression.
///
/// The generator composes these from classified ranges; rendering is the
/// only consumer of the structure, but tests and tooling match on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldType {
    /// A bare type name ("str", "Curie", "Gene").
    Named(String),
    /// Value may be absent.
    Optional(Box<FieldType>),
    /// One of several alternatives, in declaration order.
    Union(Vec<FieldType>),
    /// Ordered collection.
    Sequence(Box<FieldType>),
    /// Keyed collection.
    Mapping(Box<FieldType>, Box<FieldType>),
}

impl FieldType {
    pub fn named(name: impl Into<String>) -> Self {
        FieldType::Named(name.into())
    }

    pub fn optional(inner: FieldType) -> Self {
        FieldType::Optional(Box::new(inner))
    }

    pub fn union(parts: Vec<FieldType>) -> Self {
        FieldType::Union(parts)
    }

    pub fn sequence(inner: FieldType) -> Self {
        FieldType::Sequence(Box::new(inner))
    }

    pub fn mapping(key: FieldType, value: FieldType) -> Self {
        FieldType::Mapping(Box::new(key), Box::new(value))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Named(name) => write!(f, "{}", name),
            FieldType::Optional(inner) => write!(f, "Optional<{}>", inner),
            FieldType::Union(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{}", part)?;
                }
                Ok(())
            }
            FieldType::Sequence(inner) => write!(f, "Sequence<{}>", inner),
            FieldType::Mapping(key, value) => write!(f, "Mapping<{}, {}>", key, value),
        }
    }
}

/// What a field holds when construction supplies no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DefaultPolicy {
    /// No default: the value must be supplied.
    Mandatory,
    /// Absent value (null).
    Absent,
    /// Fresh empty sequence per instance.
    EmptyList,
    /// Fresh empty mapping per instance.
    EmptyMap,
}

impl DefaultPolicy {
    /// The rendered ` = ...` suffix; mandatory fields have none.
    pub fn suffix(&self) -> &'static str {
        match self {
            DefaultPolicy::Mandatory => "",
            DefaultPolicy::Absent => " = null",
            DefaultPolicy::EmptyList => " = []",
            DefaultPolicy::EmptyMap => " = {}",
        }
    }
}

/// One emitted field: name, type expression, default policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDecl {
    /// Emitted snake_case name.
    pub name: String,
    pub field_type: FieldType,
    pub default: DefaultPolicy,
    /// Schema description, kept for tooling; not rendered.
    pub description: Option<String>,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, field_type: FieldType, default: DefaultPolicy) -> Self {
        Self {
            name: name.into(),
            field_type,
            default,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl fmt::Display for FieldDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}{}", self.name, self.field_type, self.default.suffix())
    }
}
