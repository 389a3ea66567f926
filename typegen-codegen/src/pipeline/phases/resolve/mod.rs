//! Resolve phase - classifies every field of the schema graph.

mod relation;
mod structured;

use directus_typegen_ir::{
    Collection, Field, FieldKind, RelationKind, ResolvedCollection, ResolvedField, ResolvedSchema,
    SchemaGraph,
};
use directus_typegen_schema::GenerateOptions;
use eyre::Result;
use relation::resolve_relation;
use structured::resolve_structured;
use tracing::{debug, info};

use crate::pipeline::{CompilationContext, Diagnostic, Phase};

const PHASE: &str = "resolve";

/// Phase that turns the [`SchemaGraph`] into a [`ResolvedSchema`].
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        PHASE
    }

    fn description(&self) -> &'static str {
        "Classify fields and resolve relation targets"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let graph = ctx.graph()?;
        let mut diagnostics = Vec::new();
        let resolved = resolve(graph, &ctx.options, &mut diagnostics);

        info!(
            collections = resolved.len(),
            degraded = diagnostics.len(),
            "schema resolved"
        );
        ctx.diagnostics.extend(diagnostics);
        ctx.resolved = Some(resolved);
        Ok(())
    }
}

/// Resolve every collection of `graph`.
///
/// Never fails: relations that cannot be resolved are reported as info
/// diagnostics and the field is deflated to its scalar or dropped.
pub fn resolve(
    graph: &SchemaGraph,
    options: &GenerateOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> ResolvedSchema {
    let mut resolved = ResolvedSchema::new();
    for collection in graph.collections() {
        resolved.insert(resolve_collection(graph, collection, options, diagnostics));
    }
    resolved
}

fn resolve_collection(
    graph: &SchemaGraph,
    collection: &Collection,
    options: &GenerateOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> ResolvedCollection {
    let fields = collection
        .fields
        .values()
        .filter_map(|field| resolve_field(graph, field, options, diagnostics))
        .collect();

    ResolvedCollection {
        name: collection.name.clone(),
        singleton: collection.singleton,
        system: collection.system,
        primary_key: collection.primary_key.clone(),
        fields,
    }
}

fn resolve_field(
    graph: &SchemaGraph,
    field: &Field,
    options: &GenerateOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<ResolvedField> {
    if field.is_presentational() {
        debug!(field = %field.location(), "skipping presentational field");
        return None;
    }
    if field.system && options.suppress_system_fields {
        debug!(field = %field.location(), "skipping system field");
        return None;
    }

    let kind = if field.is_alias() {
        let Some(relation) = relation_of(graph, field, diagnostics) else {
            debug!(field = %field.location(), "dropping alias without relation");
            if field.relation.is_some() {
                diagnostics.push(
                    Diagnostic::info(PHASE, "alias field dropped").at(field.location()),
                );
            }
            return None;
        };
        FieldKind::Alias { relation }
    } else if field.is_serialized()
        || field.interface.as_ref().is_some_and(|i| i.is_structured())
    {
        FieldKind::Structured {
            ty: field.ty.clone(),
            shape: resolve_structured(field.interface.as_ref()),
        }
    } else {
        let relation = relation_of(graph, field, diagnostics);
        if relation.is_none() && field.relation.is_some() {
            diagnostics.push(
                Diagnostic::info(PHASE, "relation deflated to scalar").at(field.location()),
            );
        }
        FieldKind::Primitive {
            ty: field.ty.clone(),
            relation,
        }
    };

    Some(ResolvedField {
        name: field.name.clone(),
        nullable: is_nullable(field, options.required_not_nullable),
        system: field.system,
        kind,
    })
}

/// Resolve the attached relation, reporting why it failed if it did.
fn relation_of(
    graph: &SchemaGraph,
    field: &Field,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<RelationKind> {
    let relation = field.relation.as_ref()?;
    match resolve_relation(graph, field, relation) {
        Ok(resolution) => {
            for target in &resolution.excluded {
                diagnostics.push(
                    Diagnostic::info(
                        PHASE,
                        format!("polymorphic target '{target}' has no primary key"),
                    )
                    .at(field.location()),
                );
            }
            Some(resolution.kind)
        }
        Err(unresolved) => {
            debug!(field = %field.location(), reason = %unresolved.message(), "relation unresolved");
            diagnostics.push(Diagnostic::info(PHASE, unresolved.message()).at(field.location()));
            None
        }
    }
}

/// With `required_not_nullable`, a required field is never nullable.
fn is_nullable(field: &Field, required_not_nullable: bool) -> bool {
    let nullable = field.nullable.unwrap_or(false);
    if required_not_nullable {
        nullable && !field.required
    } else {
        nullable
    }
}

#[cfg(test)]
mod tests {
    use directus_typegen_ir::{AnyTarget, StructuredKind};
    use directus_typegen_schema::SchemaSnapshot;

    use super::*;
    use crate::{pipeline::phases::normalize, testing::SnapshotBuilder};

    fn run(snapshot: &SchemaSnapshot, options: &GenerateOptions) -> (ResolvedSchema, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let resolved = resolve(&normalize(snapshot), options, &mut diagnostics);
        (resolved, diagnostics)
    }

    fn blog() -> SchemaSnapshot {
        SnapshotBuilder::new()
            .collection("posts")
            .collection("users")
            .primary_key("posts", "id", "integer")
            .primary_key("users", "id", "integer")
            .nullable_field("posts", "author", "integer")
            .alias("users", "posts", "list-o2m")
            .m2o_with_reverse("posts", "author", "users", "id", "posts")
            .build()
    }

    #[test]
    fn test_relation_symmetry() {
        let (resolved, diagnostics) = run(&blog(), &GenerateOptions::default());

        assert_eq!(
            resolved.field("posts", "author").and_then(|f| f.relation()),
            Some(&RelationKind::ManyToOne {
                collection: "users".into(),
                field: "id".into(),
            })
        );
        assert_eq!(
            resolved.field("users", "posts").and_then(|f| f.relation()),
            Some(&RelationKind::OneToMany {
                collection: "posts".into(),
                field: "author".into(),
            })
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unresolved_relations_degrade() {
        let snapshot = SnapshotBuilder::new()
            .collection("posts")
            .nullable_field("posts", "author", "integer")
            .alias("posts", "comments", "list-o2m")
            .m2o("posts", "author", "users", "id")
            .m2o_with_reverse("comments", "post", "posts", "id", "comments")
            .build();

        let (resolved, diagnostics) = run(&snapshot, &GenerateOptions::default());

        let author = resolved.field("posts", "author").unwrap();
        assert_eq!(
            author.kind,
            FieldKind::Primitive {
                ty: "integer".into(),
                relation: None,
            }
        );
        assert!(resolved.field("posts", "comments").is_none());
        assert!(diagnostics.iter().all(|d| d.severity.is_info()));
        assert!(diagnostics.iter().any(|d| d.message == "relation deflated to scalar"));
        assert!(diagnostics.iter().any(|d| d.message == "alias field dropped"));
    }

    #[test]
    fn test_alias_without_relation_is_dropped_silently() {
        let snapshot = SnapshotBuilder::new()
            .collection("posts")
            .alias("posts", "notice", "input")
            .build();

        let (resolved, diagnostics) = run(&snapshot, &GenerateOptions::default());

        assert!(resolved.collection("posts").unwrap().is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_presentational_and_system_fields() {
        let snapshot = SnapshotBuilder::new()
            .collection("posts")
            .alias("posts", "divider", "presentation-divider")
            .alias("posts", "meta", "group-detail")
            .field("posts", "title", "string")
            .system_field("posts", "sort", "integer")
            .build();

        let (resolved, _) = run(&snapshot, &GenerateOptions::default());
        let names: Vec<_> = resolved.collection("posts").unwrap().fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["title", "sort"]);

        let options = GenerateOptions {
            suppress_system_fields: true,
            ..Default::default()
        };
        let (resolved, _) = run(&snapshot, &options);
        let names: Vec<_> = resolved.collection("posts").unwrap().fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["title"]);
    }

    #[test]
    fn test_nullability_law() {
        let snapshot = SnapshotBuilder::new()
            .collection("posts")
            .nullable_field("posts", "subtitle", "string")
            .required_nullable_field("posts", "slug", "string")
            .field("posts", "title", "string")
            .build();

        let (resolved, _) = run(&snapshot, &GenerateOptions::default());
        assert!(resolved.field("posts", "subtitle").unwrap().nullable);
        assert!(resolved.field("posts", "slug").unwrap().nullable);
        assert!(!resolved.field("posts", "title").unwrap().nullable);

        let options = GenerateOptions {
            required_not_nullable: true,
            ..Default::default()
        };
        let (resolved, _) = run(&snapshot, &options);
        assert!(resolved.field("posts", "subtitle").unwrap().nullable);
        assert!(!resolved.field("posts", "slug").unwrap().nullable);
        assert!(!resolved.field("posts", "title").unwrap().nullable);
    }

    #[test]
    fn test_polymorphic_targets() {
        let snapshot = SnapshotBuilder::new()
            .collection("blocks")
            .collection("bodies")
            .collection("folder_like")
            .primary_key("bodies", "uid", "uuid")
            .nullable_field("blocks", "item", "string")
            .nullable_field("blocks", "collection", "string")
            .m2a("blocks", "item", "collection", &["bodies", "folder_like", "missing"])
            .build();

        let (resolved, diagnostics) = run(&snapshot, &GenerateOptions::default());

        assert_eq!(
            resolved.field("blocks", "item").and_then(|f| f.relation()),
            Some(&RelationKind::ManyToAny {
                targets: vec![AnyTarget {
                    collection: "bodies".into(),
                    primary_key: "uid".into(),
                }],
            })
        );
        assert_eq!(
            resolved.field("blocks", "collection").and_then(|f| f.relation()),
            Some(&RelationKind::ManyToAnyDiscriminator {
                collections: vec!["bodies".into(), "folder_like".into(), "missing".into()],
            })
        );
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].location.as_deref(), Some("blocks.item"));
    }

    #[test]
    fn test_structured_fields() {
        let snapshot = SnapshotBuilder::new()
            .collection("posts")
            .nullable_field("posts", "payload", "json")
            .interface_field(
                "posts",
                "status",
                "string",
                "select-dropdown",
                serde_json::json!({ "choices": [{ "value": "draft" }], "allowNone": true }),
            )
            .build();

        let (resolved, _) = run(&snapshot, &GenerateOptions::default());

        assert_eq!(
            resolved.field("posts", "payload").unwrap().kind,
            FieldKind::Structured {
                ty: "json".into(),
                shape: StructuredKind::Unknown,
            }
        );
        let status = resolved.field("posts", "status").unwrap();
        assert_eq!(status.scalar(), Some("string"));
        assert!(matches!(
            status.kind,
            FieldKind::Structured {
                shape: StructuredKind::SingleChoice { allow_none: true, .. },
                ..
            }
        ));
    }

    #[test]
    fn test_phase_requires_graph() {
        let mut ctx = CompilationContext::new(SchemaSnapshot::default(), GenerateOptions::default());
        assert!(ResolvePhase.run(&mut ctx).is_err());
    }
}
