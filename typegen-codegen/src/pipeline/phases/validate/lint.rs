//! Lint trait for snapshot validation.

use directus_typegen_schema::SchemaSnapshot;

use crate::pipeline::Diagnostic;

#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A lint that checks the raw snapshot for issues.
pub trait Lint: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check the snapshot and add any diagnostics.
    fn check(&self, snapshot: &SchemaSnapshot, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
