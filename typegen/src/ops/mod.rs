//! Core operations.
//!
//! This module contains the business logic for the commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::generate;

use directus_typegen_codegen::pipeline::Diagnostic;

/// One diagnostic as a message with its location on a second line.
fn describe(diagnostic: &Diagnostic) -> String {
    match &diagnostic.location {
        Some(loc) => format!("{}\n  --> {}", diagnostic.message, loc),
        None => diagnostic.message.clone(),
    }
}
