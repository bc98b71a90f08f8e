//! Weft Schema
//!
//! The input side of the compiler: class, slot, type and enum definitions
//! plus the read-only `SchemaGraph` container they live in. The graph exposes
//! the ancestry walks the generator leans on (is-a chains, linearization,
//! slot ancestor closures, identifier and range paths) and a content
//! fingerprint used for caching. Nothing in this crate performs I/O.

mod class;
mod graph;
mod naming;
mod slot;
mod types;

pub use class::*;
pub use graph::*;
pub use naming::*;
pub use slot::*;
pub use types::*;
