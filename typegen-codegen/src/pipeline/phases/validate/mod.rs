//! Validate phase - runs lints on the raw snapshot.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{DanglingRelationLint, DuplicateRelationLint, OrphanFieldLint};
use tracing::debug;

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the snapshot using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(OrphanFieldLint),
                Box::new(DanglingRelationLint),
                Box::new(DuplicateRelationLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check snapshot integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            let before = ctx.diagnostics.len();
            lint.check(&ctx.snapshot, &mut ctx.diagnostics);
            debug!(lint = lint.name(), found = ctx.diagnostics.len() - before, "lint ran");
        }

        // Warnings are allowed; the affected records degrade later
        if ctx.has_errors() {
            bail!("Validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use directus_typegen_schema::{GenerateOptions, SchemaSnapshot};

    use super::*;
    use crate::{pipeline::Diagnostic, testing::SnapshotBuilder};

    #[test]
    fn test_with_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(&self, _snapshot: &SchemaSnapshot, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error("test", "forced error"));
            }
        }

        let mut ctx = CompilationContext::new(SchemaSnapshot::default(), GenerateOptions::default());

        let phase = ValidatePhase::empty().with_lint(AlwaysErrorLint);
        let result = phase.run(&mut ctx);

        assert!(result.is_err());
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_warnings_allowed() {
        let snapshot = SnapshotBuilder::new().field("ghosts", "id", "integer").build();
        let mut ctx = CompilationContext::new(snapshot, GenerateOptions::default());

        let result = ValidatePhase::new().run(&mut ctx);

        assert!(result.is_ok());
        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_default_lints() {
        assert_eq!(
            ValidatePhase::new().lint_names(),
            ["orphan-field", "dangling-relation", "duplicate-relation"]
        );
    }
}
