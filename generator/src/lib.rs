//! Weft Generator
//!
//! The compiler core: turns a `SchemaGraph` into a `ModelArtifact`. The
//! pipeline runs in fixed stages: classes are dependency-sorted, each class
//! resolves its slots into fixed, required and optional groups, every slot's
//! range resolves to a reference path and a reference shape, shapes map to
//! field types with cardinality applied, validators and the predicate table
//! come last. The `Generator` facade drives the stages; `ModelCache` memoizes
//! whole artifacts by schema fingerprint.

mod classify;
mod emit;
mod error;
mod generator;
mod order;
mod predicates;
mod slots;
mod typemap;
mod validators;

pub use classify::*;
pub use emit::*;
pub use error::{GeneratorError, GeneratorResult};
pub use generator::{Generator, GeneratorConfig, ModelCache};
pub use order::*;
pub use predicates::*;
pub use slots::*;
pub use typemap::*;
pub use validators::*;
