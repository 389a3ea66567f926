//! Lint for fields whose collection is missing or not table-backed.

use std::collections::HashSet;

use directus_typegen_schema::SchemaSnapshot;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns about fields that normalization will skip.
pub struct OrphanFieldLint;

impl Lint for OrphanFieldLint {
    fn name(&self) -> &'static str {
        "orphan-field"
    }

    fn description(&self) -> &'static str {
        "Detect fields whose collection is unknown or has no table"
    }

    fn check(&self, snapshot: &SchemaSnapshot, diagnostics: &mut Vec<Diagnostic>) {
        let known: HashSet<&str> = snapshot
            .collections
            .iter()
            .filter(|c| c.has_schema())
            .map(|c| c.collection_name())
            .collect();

        for field in &snapshot.fields {
            if known.contains(field.collection.as_str()) {
                continue;
            }

            let reason = match snapshot.collection(&field.collection) {
                Some(_) => "is a folder without a table",
                None => "does not exist",
            };
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!(
                        "field '{}' is skipped because collection '{}' {}",
                        field.field, field.collection, reason
                    ),
                )
                .at(format!("{}.{}", field.collection, field.field)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SnapshotBuilder;

    #[test]
    fn test_no_orphans() {
        let snapshot = SnapshotBuilder::new()
            .collection("posts")
            .primary_key("posts", "id", "integer")
            .build();

        let mut diagnostics = Vec::new();
        OrphanFieldLint.check(&snapshot, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_and_folder_collections() {
        let snapshot = SnapshotBuilder::new()
            .folder("content")
            .field("content", "note", "string")
            .field("ghosts", "id", "integer")
            .build();

        let mut diagnostics = Vec::new();
        OrphanFieldLint.check(&snapshot, &mut diagnostics);

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].message.contains("folder"));
        assert_eq!(diagnostics[1].location.as_deref(), Some("ghosts.id"));
        assert!(diagnostics.iter().all(|d| d.severity.is_warning()));
    }
}
