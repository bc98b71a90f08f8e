//! Weft Model
//!
//! The output side of the compiler: the typed data-model artifact the
//! generator produces and the runtime that consumes it. This crate provides:
//! - Field declarations (type expressions, default policies)
//! - Class models (category tags, required manifests, validators,
//!   precomputed ancestor lists)
//! - The assembled `ModelArtifact` with flattened lookups
//! - Runtime instance construction with normalization and validation
//! - Deterministic text rendering with the fixed support prelude
//!
//! Nothing here depends on the schema crate; the generator hands over
//! fully formatted names.

mod artifact;
mod class;
mod error;
mod field;
mod instance;
mod render;
mod validate;
mod value;

pub use artifact::*;
pub use class::*;
pub use error::*;
pub use field::*;
pub use instance::*;
pub use render::*;
pub use validate::*;
pub use value::*;
