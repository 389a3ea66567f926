//! Compilation context passed through pipeline phases.

use directus_typegen_ir::{ResolvedSchema, SchemaGraph};
use directus_typegen_schema::{GenerateOptions, SchemaSnapshot};
use eyre::{Result, eyre};

use super::diagnostic::{Diagnostic, Severity};

/// State carried through every phase of a run.
///
/// Each phase fills in its own stage; nothing is shared between runs.
#[derive(Debug)]
pub struct CompilationContext {
    /// The raw snapshot being compiled.
    pub snapshot: SchemaSnapshot,
    pub options: GenerateOptions,
    /// The normalized graph (populated by NormalizePhase).
    pub graph: Option<SchemaGraph>,
    /// The resolved schema (populated by ResolvePhase).
    pub resolved: Option<ResolvedSchema>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(snapshot: SchemaSnapshot, options: GenerateOptions) -> Self {
        Self {
            snapshot,
            options,
            graph: None,
            resolved: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Diagnostics at or above `severity` (errors rank highest).
    pub fn diagnostics_at_least(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.severity <= severity)
    }

    /// The normalized graph, or an error if NormalizePhase has not run.
    pub fn graph(&self) -> Result<&SchemaGraph> {
        self.graph
            .as_ref()
            .ok_or_else(|| eyre!("schema graph not built - did NormalizePhase run?"))
    }

    /// The resolved schema, or an error if ResolvePhase has not run.
    pub fn resolved(&self) -> Result<&ResolvedSchema> {
        self.resolved
            .as_ref()
            .ok_or_else(|| eyre!("resolved schema missing - did ResolvePhase run?"))
    }

    /// Take the resolved schema out of the context.
    pub fn take_resolved(&mut self) -> Result<ResolvedSchema> {
        self.resolved
            .take()
            .ok_or_else(|| eyre!("resolved schema missing - did ResolvePhase run?"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_context() -> CompilationContext {
        CompilationContext::new(SchemaSnapshot::default(), GenerateOptions::default())
    }

    #[test]
    fn test_context_creation() {
        let ctx = make_context();

        assert!(ctx.graph.is_none());
        assert!(ctx.resolved.is_none());
        assert!(ctx.diagnostics.is_empty());
        assert!(ctx.graph().is_err());
        assert!(ctx.resolved().is_err());
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = make_context();

        ctx.add_error("test", "test error");
        ctx.add_warning("test", "test warning");
        ctx.add_info("test", "test info");

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
        assert_eq!(ctx.diagnostics_at_least(Severity::Warning).count(), 2);
        assert_eq!(ctx.diagnostics_at_least(Severity::Info).count(), 3);
    }

    #[test]
    fn test_take_resolved() {
        let mut ctx = make_context();
        ctx.resolved = Some(ResolvedSchema::new());

        assert!(ctx.take_resolved().is_ok());
        assert!(ctx.take_resolved().is_err());
    }
}
