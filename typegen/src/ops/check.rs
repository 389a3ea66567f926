//! Check operation - snapshot validation.

use std::path::Path;

use directus_typegen_codegen::pipeline::{Pipeline, Severity, phases::ValidatePhase};
use directus_typegen_schema::{GenerateOptions, SchemaSnapshot};
use directus_typegen_typescript::TypeNamer;
use eyre::{Context, Result};

use super::describe;
use crate::reports::{CheckReport, CollectionSummary};

/// Execute the check operation.
///
/// Runs the pipeline over the snapshot and returns diagnostics plus a
/// summary of what would be declared. With `explain`, the phases and lints
/// that ran are listed too.
pub fn check(
    snapshot: SchemaSnapshot,
    options: GenerateOptions,
    snapshot_path: &Path,
    explain: bool,
) -> Result<CheckReport> {
    let namer = TypeNamer::new(&options);
    let pipeline = Pipeline::new();
    let ctx = pipeline
        .run(snapshot, options)
        .wrap_err("Validation failed")?;

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = describe(diag);
        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    let collections = ctx
        .resolved()?
        .collections()
        .filter(|c| !c.is_empty())
        .map(|c| CollectionSummary {
            name: c.name.clone(),
            type_name: namer.collection(&c.name, c.singleton),
            fields: c.fields.len(),
            singleton: c.singleton,
            system: c.system,
        })
        .collect();

    let (phases, lints) = if explain {
        (pipeline.phase_info(), ValidatePhase::new().lint_info())
    } else {
        (Vec::new(), Vec::new())
    };

    Ok(CheckReport {
        snapshot_path: snapshot_path.to_path_buf(),
        errors,
        warnings,
        infos,
        collections,
        phases,
        lints,
    })
}
