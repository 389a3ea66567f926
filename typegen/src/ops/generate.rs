//! Generate operation - compile a snapshot to TypeScript declarations.

use directus_typegen_codegen::{
    language::LanguageCodegen,
    pipeline::{Pipeline, Severity},
};
use directus_typegen_core::{File, Overwrite};
use directus_typegen_schema::SchemaSnapshot;
use directus_typegen_typescript::Generator;
use eyre::{Context, Result};
use tracing::info;

use super::describe;
use crate::{
    config::Settings,
    reports::{Destination, GenerateReport},
};

/// Execute the generate operation.
///
/// Declarations are written to the configured output path, or handed back
/// for stdout when there is none.
pub fn generate(
    snapshot: SchemaSnapshot,
    settings: &Settings,
    no_overwrite: bool,
) -> Result<GenerateReport> {
    let ctx = Pipeline::new()
        .run(snapshot, settings.options.clone())
        .wrap_err("Pipeline failed")?;

    let warnings = ctx
        .diagnostics_at_least(Severity::Warning)
        .map(describe)
        .collect();

    let generator = Generator::from_context(ctx)?;
    let collections = generator.schema().len();
    let declarations = generator.compile()?;

    let destination = match &settings.output {
        Some(path) => {
            let overwrite = if no_overwrite {
                Overwrite::IfMissing
            } else {
                Overwrite::Always
            };
            let result = File::new(path, declarations)
                .overwrite(overwrite)
                .write()
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), ?result, "declarations written");
            Destination::File {
                path: path.clone(),
                result,
            }
        }
        None => Destination::Stdout(declarations),
    };

    Ok(GenerateReport {
        destination,
        collections,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use directus_typegen_codegen::testing::SnapshotBuilder;
    use directus_typegen_core::WriteResult;
    use directus_typegen_schema::GenerateOptions;
    use tempfile::TempDir;

    use super::*;

    fn snapshot() -> SchemaSnapshot {
        SnapshotBuilder::new()
            .collection("posts")
            .primary_key("posts", "id", "integer")
            .build()
    }

    fn settings(output: Option<std::path::PathBuf>) -> Settings {
        Settings {
            snapshot: "snapshot.json".into(),
            output,
            options: GenerateOptions::default(),
        }
    }

    #[test]
    fn test_generate_to_stdout() {
        let report = generate(snapshot(), &settings(None), false).unwrap();
        let Destination::Stdout(declarations) = &report.destination else {
            panic!("expected stdout destination");
        };
        assert!(declarations.starts_with("export interface Schema {\n  posts: Post[];\n}\n"));
        assert_eq!(report.collections, 1);
    }

    #[test]
    fn test_generate_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("types").join("directus.ts");

        let report = generate(snapshot(), &settings(Some(path.clone())), false).unwrap();

        assert!(matches!(
            report.destination,
            Destination::File {
                result: WriteResult::Written,
                ..
            }
        ));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("export interface Post {\n  id: number;\n}\n"));
    }

    #[test]
    fn test_no_overwrite_keeps_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("directus.ts");
        std::fs::write(&path, "// hand written\n").unwrap();

        let report = generate(snapshot(), &settings(Some(path.clone())), true).unwrap();

        assert!(report.refused());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "// hand written\n");
    }
}
