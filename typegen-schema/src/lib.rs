// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod options;
pub mod raw;
mod snapshot;

pub use config::{InputConfig, OutputConfig, TypegenToml};
pub use error::{Error, Result, SourceContext};
pub use options::{DeclarationStyle, GenerateOptions};
pub use raw::{DirectusCollection, DirectusField, DirectusRelation};
pub use snapshot::{SchemaSnapshot, parse_snapshot};
