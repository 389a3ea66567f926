//! Check command report data structures.

use std::path::PathBuf;

use directus_typegen_codegen::pipeline::{PhaseInfo, phases::LintInfo};

use super::output::{Output, Report};

/// One declared collection as seen by the check command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSummary {
    pub name: String,
    /// Type name the collection is declared under.
    pub type_name: String,
    pub fields: usize,
    pub singleton: bool,
    pub system: bool,
}

/// Report data from snapshot validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the snapshot file.
    pub snapshot_path: PathBuf,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    pub collections: Vec<CollectionSummary>,
    /// Pipeline phases, listed with `--explain`.
    pub phases: Vec<PhaseInfo>,
    /// Validation lints, listed with `--explain`.
    pub lints: Vec<LintInfo>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn field_count(&self) -> usize {
        self.collections.iter().map(|c| c.fields).sum()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.diagnostic(&format!("error: {}", error));
        }

        for warning in &self.warnings {
            out.diagnostic(&format!("warning: {}", warning));
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.is_valid() {
            return;
        }

        if !self.infos.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.snapshot_path.display()));
        out.newline();

        out.section(&format!(
            "{} collection{}, {} field{}",
            self.collections.len(),
            plural(self.collections.len()),
            self.field_count(),
            plural(self.field_count())
        ));
        for collection in &self.collections {
            let mut tags = Vec::new();
            if collection.singleton {
                tags.push("singleton");
            }
            if collection.system {
                tags.push("system");
            }
            let tags = if tags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", tags.join(", "))
            };

            out.list_item(&format!(
                "{} -> {} ({} field{}){}",
                collection.name,
                collection.type_name,
                collection.fields,
                plural(collection.fields),
                tags
            ));
        }

        if !self.phases.is_empty() {
            out.newline();
            out.section("Phases");
            for phase in &self.phases {
                out.list_item(&format!("{}: {}", phase.name, phase.description));
            }
        }

        if !self.lints.is_empty() {
            out.newline();
            out.section("Lints");
            for lint in &self.lints {
                out.list_item(&format!("{}: {}", lint.name, lint.description));
            }
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
