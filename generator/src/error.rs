//! Error types for model generation.

use thiserror::Error;

/// Errors that can occur while generating a model from a schema graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    /// The class hierarchy could not be linearized: either a cycle, or a
    /// parent that is not defined anywhere in the graph.
    #[error("class hierarchy cannot be ordered, remaining: {classes}")]
    CyclicHierarchy { classes: String },

    /// A class lists a slot name with no definition.
    #[error("class '{class}' lists unknown slot '{slot}'")]
    UnknownSlot { class: String, slot: String },

    /// A slot's range resolves to no class, type or enum.
    #[error("slot '{slot}' has unknown range '{range}'")]
    UnknownRange { slot: String, range: String },

    /// Two attached slots collapse to the same emitted field name.
    #[error("class '{class}' emits field '{field}' more than once")]
    DuplicateField { class: String, field: String },
}

impl GeneratorError {
    /// Create a CyclicHierarchy error from the classes left unplaced.
    pub fn cyclic(remaining: &[&str]) -> Self {
        GeneratorError::CyclicHierarchy {
            classes: remaining.join(", "),
        }
    }

    /// Create an UnknownSlot error.
    pub fn unknown_slot(class: &str, slot: &str) -> Self {
        GeneratorError::UnknownSlot {
            class: class.to_string(),
            slot: slot.to_string(),
        }
    }

    /// Create an UnknownRange error.
    pub fn unknown_range(slot: &str, range: &str) -> Self {
        GeneratorError::UnknownRange {
            slot: slot.to_string(),
            range: range.to_string(),
        }
    }

    /// Create a DuplicateField error.
    pub fn duplicate_field(class: &str, field: &str) -> Self {
        GeneratorError::DuplicateField {
            class: class.to_string(),
            field: field.to_string(),
        }
    }
}

/// Result type for generator operations.
pub type GeneratorResult<T> = Result<T, GeneratorError>;
