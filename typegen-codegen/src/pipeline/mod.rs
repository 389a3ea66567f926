//! Compilation pipeline from schema snapshot to resolved schema.
//!
//! The [`Pipeline`] runs the phases in a fixed order:
//!
//! - validate: lint the raw records and collect diagnostics
//! - normalize: fold the records into a [`SchemaGraph`]
//! - resolve: classify every field into a [`ResolvedSchema`]
//!
//! An emitter is then built from the finished [`CompilationContext`].
//!
//! # Example
//!
//! ```ignore
//! use directus_typegen_codegen::pipeline::{Pipeline, Severity};
//!
//! let ctx = Pipeline::new().run(snapshot, options)?;
//!
//! for diag in ctx.diagnostics_at_least(Severity::Warning) {
//!     eprintln!("{diag}");
//! }
//! ```
//!
//! [`SchemaGraph`]: directus_typegen_ir::SchemaGraph
//! [`ResolvedSchema`]: directus_typegen_ir::ResolvedSchema

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use runner::Pipeline;
