//! Lint for fields governed by more than one relation record.

use std::collections::HashMap;

use directus_typegen_schema::SchemaSnapshot;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns when several relation records attach to the same field.
///
/// The last record processed wins during normalization.
pub struct DuplicateRelationLint;

impl Lint for DuplicateRelationLint {
    fn name(&self) -> &'static str {
        "duplicate-relation"
    }

    fn description(&self) -> &'static str {
        "Detect fields that more than one relation record attaches to"
    }

    fn check(&self, snapshot: &SchemaSnapshot, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<(&str, &str), usize> = HashMap::new();

        for (index, relation) in snapshot.relations.iter().enumerate() {
            let many_collection = relation.many_collection();
            let endpoints = [
                many_collection.zip(relation.many_field()),
                many_collection.zip(relation.one_collection_field()),
                relation.one_collection().zip(relation.one_field()),
            ];

            for (collection, field) in endpoints.into_iter().flatten() {
                if let Some(first) = seen.insert((collection, field), index)
                    && first != index
                {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "relations[{index}] replaces relations[{first}] on '{collection}.{field}'"
                            ),
                        )
                        .at(format!("{collection}.{field}")),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SnapshotBuilder;

    #[test]
    fn test_distinct_relations() {
        let snapshot = SnapshotBuilder::new()
            .m2o_with_reverse("posts", "author", "users", "id", "posts")
            .m2o("posts", "editor", "users", "id")
            .build();

        let mut diagnostics = Vec::new();
        DuplicateRelationLint.check(&snapshot, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_same_foreign_key_twice() {
        let snapshot = SnapshotBuilder::new()
            .m2o("posts", "author", "users", "id")
            .m2o("posts", "author", "authors", "id")
            .build();

        let mut diagnostics = Vec::new();
        DuplicateRelationLint.check(&snapshot, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("posts.author"));
        assert!(diagnostics[0].message.contains("relations[1] replaces relations[0]"));
    }
}
