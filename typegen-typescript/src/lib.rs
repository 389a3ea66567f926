//! TypeScript declaration emitter for Directus schema snapshots.
//!
//! Turns a [`SchemaSnapshot`] into a single declaration file: an optional
//! `@directus/sdk` type import, the aggregate schema type, one declaration
//! per non-empty collection, and the GeoJSON shapes geometry fields refer to.
//!
//! # Usage
//!
//! ```ignore
//! use directus_typegen_schema::{GenerateOptions, SchemaSnapshot};
//! use directus_typegen_typescript::generate_types;
//!
//! let snapshot = SchemaSnapshot::from_file("snapshot.json")?;
//! let declarations = generate_types(snapshot, GenerateOptions::default())?;
//! ```
//!
//! The pipeline can also be driven step by step, which keeps the
//! diagnostics around:
//!
//! ```ignore
//! use directus_typegen_codegen::{language::LanguageCodegen, pipeline::Pipeline};
//! use directus_typegen_typescript::Generator;
//!
//! let ctx = Pipeline::new().run(snapshot, options)?;
//! let generator = Generator::from_context(ctx)?;
//! let declarations = generator.compile()?;
//! ```

mod code_file;
mod generator;
mod geojson;
mod naming;
mod type_mapper;

pub mod ast;

pub use code_file::CodeFile;
pub use directus_typegen_codegen::language::{LanguageCodegen, TypeMapper};
use directus_typegen_codegen::pipeline::Pipeline;
use directus_typegen_schema::{GenerateOptions, SchemaSnapshot};
use eyre::Result;
pub use generator::Generator;
pub use geojson::geojson_declarations;
pub use naming::{SYSTEM_TYPES, TypeNamer, reserved_type_name};
pub use type_mapper::TypeScriptTypeMapper;

/// Generate TypeScript declarations for `snapshot`.
///
/// # Errors
///
/// Fails before doing any work if `options` hold values that would produce
/// invalid identifiers, or if a pipeline phase fails fatally.
pub fn generate_types(snapshot: SchemaSnapshot, options: GenerateOptions) -> Result<String> {
    options.validate()?;
    let ctx = Pipeline::new().run(snapshot, options)?;
    Generator::from_context(ctx)?.compile()
}
