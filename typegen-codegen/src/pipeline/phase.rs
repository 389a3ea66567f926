//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

#[derive(Debug, Clone)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A phase in the compilation pipeline.
///
/// Phases run in order and each reads and extends the context.
///
/// Built-in phases:
/// - `ValidatePhase` - lints the raw snapshot
/// - `NormalizePhase` - builds the schema graph
/// - `ResolvePhase` - classifies every field
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics).
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
