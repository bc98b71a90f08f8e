//! Weft Loader
//!
//! Reads YAML schema documents into a `SchemaGraph`. Documents are
//! sequence-shaped: classes, slots, types and enums are listed in order, and
//! that order is what the generator's dependency sort and field emission
//! stages see. Loading is the only I/O in the workspace besides the CLI.

mod document;
mod error;
mod loader;

pub use document::SchemaDocument;
pub use error::{LoadError, LoadResult};
pub use loader::{load_path, load_str};
