//! Model runtime error types.

use thiserror::Error;

/// Result type for model runtime operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while constructing instances against a generated model.
/// Each failure is local to one instance; the artifact itself stays valid.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Unknown class: {name}")]
    UnknownClass { name: String },

    #[error("Cannot instantiate abstract or mixin class: {name}")]
    AbstractClass { name: String },

    #[error("Unknown field: {field} on class {class}")]
    UnknownField { class: String, field: String },

    #[error("Missing required field: {field} on class {class}")]
    MissingRequired { class: String, field: String },

    #[error("Identifier {field} value {value} is not in an allowed namespace (allowed: {allowed})")]
    NamespaceViolation {
        field: String,
        value: String,
        allowed: String,
    },

    #[error("Identifier {field} value {value} is not a namespaced identifier")]
    InvalidIdentifier { field: String, value: String },
}

impl ModelError {
    pub fn unknown_class(name: impl Into<String>) -> Self {
        Self::UnknownClass { name: name.into() }
    }

    pub fn abstract_class(name: impl Into<String>) -> Self {
        Self::AbstractClass { name: name.into() }
    }

    pub fn unknown_field(class: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            class: class.into(),
            field: field.into(),
        }
    }

    pub fn missing_required(class: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingRequired {
            class: class.into(),
            field: field.into(),
        }
    }

    pub fn namespace_violation(
        field: impl Into<String>,
        value: impl Into<String>,
        allowed: impl Into<String>,
    ) -> Self {
        Self::NamespaceViolation {
            field: field.into(),
            value: value.into(),
            allowed: allowed.into(),
        }
    }

    pub fn invalid_identifier(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            field: field.into(),
            value: value.into(),
        }
    }
}
