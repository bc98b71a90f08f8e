//! Value normalization and validation rules.
//!
//! The generator emits `ValidatorRule`s per class; instance construction
//! applies them (coercion first, then identifier checks).

use crate::{ModelError, ModelResult, Value};
use serde::Serialize;
use std::fmt;

/// Shape of a compact namespaced identifier: optional prefix, separator,
/// local part.
pub const CURIE_PATTERN: &str =
    "^[a-zA-Z_]?[a-zA-Z_0-9-]*:[A-Za-z0-9_][A-Za-z0-9_.-]*[A-Za-z0-9_]*$";

/// A per-field rule attached to a class model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ValidatorRule {
    /// Scalar values wrap into a one-element sequence; sequences pass
    /// through.
    CoerceToList { field: String },
    /// The value must be curie-shaped and, when `prefixes` is non-empty,
    /// begin with one of them followed by the separator.
    CurieNamespace { field: String, prefixes: Vec<String> },
}

impl ValidatorRule {
    pub fn coerce_to_list(field: impl Into<String>) -> Self {
        ValidatorRule::CoerceToList { field: field.into() }
    }

    pub fn curie_namespace(field: impl Into<String>, prefixes: Vec<String>) -> Self {
        ValidatorRule::CurieNamespace {
            field: field.into(),
            prefixes,
        }
    }

    /// The field this rule applies to.
    pub fn field(&self) -> &str {
        match self {
            ValidatorRule::CoerceToList { field } => field,
            ValidatorRule::CurieNamespace { field, .. } => field,
        }
    }
}

impl fmt::Display for ValidatorRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidatorRule::CoerceToList { field } => {
                write!(f, "validate {}: coerce_to_list", field)
            }
            ValidatorRule::CurieNamespace { field, prefixes } => {
                write!(f, "validate {}: namespace({})", field, prefixes.join(", "))
            }
        }
    }
}

/// Wrap a scalar into a one-element sequence. Sequences pass through, so
/// the coercion is idempotent. Null stays null; absence is the required
/// manifest's concern, not this rule's.
pub fn coerce_to_list(value: Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::List(items) => Value::List(items),
        other => Value::List(vec![other]),
    }
}

/// Whether a string is shaped like a compact namespaced identifier.
pub fn is_curie(s: &str) -> bool {
    regex_lite::Regex::new(CURIE_PATTERN)
        .map(|re| re.is_match(s))
        .unwrap_or(false)
}

/// Check an identifier value: curie shape always, namespace prefix when a
/// prefix list is configured. Null passes; presence is checked elsewhere.
pub fn check_identifier(field: &str, value: &Value, prefixes: &[String]) -> ModelResult<()> {
    if value.is_null() {
        return Ok(());
    }
    let Some(s) = value.as_str() else {
        return Err(ModelError::invalid_identifier(field, value.to_string()));
    };
    if !is_curie(s) {
        return Err(ModelError::invalid_identifier(field, s));
    }
    if prefixes.is_empty() {
        return Ok(());
    }
    let namespace = s.split_once(':').map(|(ns, _)| ns).unwrap_or("");
    if prefixes.iter().any(|p| p == namespace) {
        Ok(())
    } else {
        Err(ModelError::namespace_violation(field, s, prefixes.join(", ")))
    }
}
