//! Language-agnostic code generation for directus-typegen.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`pipeline`] - Snapshot compilation: validate, normalize and resolve phases
//! - [`language`] - Traits implemented by language backends (LanguageCodegen, TypeMapper)
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod language;
pub mod pipeline;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
