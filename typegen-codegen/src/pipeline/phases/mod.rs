//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - lints the raw snapshot
//! - [`NormalizePhase`] - builds the schema graph
//! - [`ResolvePhase`] - classifies every field of the graph

mod normalize;
mod resolve;
mod validate;

pub use normalize::{NormalizePhase, normalize};
pub use resolve::{ResolvePhase, resolve};
pub use validate::{
    DanglingRelationLint, DuplicateRelationLint, Lint, LintInfo, OrphanFieldLint, ValidatePhase,
};
