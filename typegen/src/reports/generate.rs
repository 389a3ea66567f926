//! Generate command report data structures.

use std::path::PathBuf;

use directus_typegen_core::WriteResult;

use super::output::{Output, Report};

/// Where the declarations went.
#[derive(Debug)]
pub enum Destination {
    Stdout(String),
    File { path: PathBuf, result: WriteResult },
}

/// Report data from one generation run.
#[derive(Debug)]
pub struct GenerateReport {
    pub destination: Destination,
    /// Number of collections in the resolved schema.
    pub collections: usize,
    pub warnings: Vec<String>,
}

impl GenerateReport {
    /// The output file existed and overwriting was refused.
    pub fn refused(&self) -> bool {
        matches!(
            self.destination,
            Destination::File {
                result: WriteResult::Skipped,
                ..
            }
        )
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.diagnostic(&format!("warning: {}", warning));
        }

        match &self.destination {
            Destination::Stdout(declarations) => out.code(declarations),
            Destination::File {
                path,
                result: WriteResult::Written,
            } => out.preformatted(&format!(
                "Generated: {} ({} collection{})",
                path.display(),
                self.collections,
                if self.collections == 1 { "" } else { "s" }
            )),
            Destination::File {
                path,
                result: WriteResult::Skipped,
            } => out.diagnostic(&format!(
                "error: {} already exists; not overwriting",
                path.display()
            )),
        }
    }
}
