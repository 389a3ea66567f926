//! Pipeline orchestrator.

use directus_typegen_schema::{GenerateOptions, SchemaSnapshot};
use eyre::Result;
use tracing::debug;

use super::{
    CompilationContext, Phase, PhaseInfo,
    phases::{NormalizePhase, ResolvePhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, normalize, resolve) followed by any
/// extra phases.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new().run(snapshot, options)?;
/// let resolved = ctx.resolved()?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline on a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(
        &self,
        snapshot: SchemaSnapshot,
        options: GenerateOptions,
    ) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(snapshot, options);

        for phase in builtin_phases().iter().chain(self.phases.iter()) {
            let before = ctx.diagnostics.len();
            phase.run(&mut ctx)?;
            debug!(
                phase = phase.name(),
                diagnostics = ctx.diagnostics.len() - before,
                "phase finished"
            );
        }

        Ok(ctx)
    }

    /// Every phase `run` executes, in order.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        builtin_phases()
            .iter()
            .chain(self.phases.iter())
            .map(|phase| phase.info())
            .collect()
    }
}

fn builtin_phases() -> Vec<Box<dyn Phase>> {
    vec![
        Box::new(ValidatePhase::new()),
        Box::new(NormalizePhase),
        Box::new(ResolvePhase),
    ]
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
