//! Core utilities for the Directus TypeScript type generator.
//!
//! This crate provides the string helpers and file output primitives used
//! across the generator crates.

mod file;
mod inflect;
mod utils;

// File operations
pub use file::{File, Overwrite, WriteResult};
// Inflection
pub use inflect::singularize;
// String utilities
pub use utils::{is_identifier, quote_property, quote_string, sanitize_type_name, to_pascal_case};
