//! Normalize phase - folds raw snapshot records into a schema graph.

mod interface;

use directus_typegen_ir::{Collection, Field, Relation, SchemaGraph};
use directus_typegen_schema::{DirectusField, DirectusRelation, SchemaSnapshot};
use eyre::Result;
pub use interface::decode_interface;
use tracing::{debug, info};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that builds the [`SchemaGraph`] from the snapshot.
pub struct NormalizePhase;

impl Phase for NormalizePhase {
    fn name(&self) -> &'static str {
        "normalize"
    }

    fn description(&self) -> &'static str {
        "Fold collections, fields and relations into a schema graph"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let graph = normalize(&ctx.snapshot);
        info!(
            collections = graph.len(),
            fields = graph.field_count(),
            "schema graph built"
        );
        ctx.graph = Some(graph);
        Ok(())
    }
}

/// Build the schema graph.
///
/// Runs in two passes: every collection and field is indexed first, then
/// each relation is attached to the fields it governs by lookup.
pub fn normalize(snapshot: &SchemaSnapshot) -> SchemaGraph {
    let mut graph = SchemaGraph::new();

    for collection in &snapshot.collections {
        if !collection.has_schema() {
            debug!(collection = collection.collection_name(), "skipping folder");
            continue;
        }
        graph.insert(
            Collection::new(collection.collection_name())
                .singleton(collection.is_singleton())
                .system(collection.is_system()),
        );
    }

    for raw in &snapshot.fields {
        match graph.collection_mut(&raw.collection) {
            Some(collection) => collection.insert_field(normalize_field(raw)),
            None => debug!(
                collection = %raw.collection,
                field = %raw.field,
                "skipping field of unknown collection"
            ),
        }
    }

    for raw in &snapshot.relations {
        attach_relation(&mut graph, normalize_relation(raw));
    }

    graph
}

fn normalize_field(raw: &DirectusField) -> Field {
    Field {
        name: raw.field.clone(),
        collection: raw.collection.clone(),
        ty: raw.ty.clone(),
        data_type: raw.data_type().map(str::to_string),
        primary_key: raw.is_primary_key(),
        nullable: raw.is_nullable(),
        required: raw.is_required(),
        interface: raw
            .interface_name()
            .map(|name| decode_interface(name, raw.interface_options())),
        relation: None,
        system: raw.is_system(),
    }
}

fn normalize_relation(raw: &DirectusRelation) -> Relation {
    Relation {
        many_collection: raw.many_collection().map(str::to_string),
        many_field: raw.many_field().map(str::to_string),
        one_collection: raw.one_collection().map(str::to_string),
        one_field: raw.one_field().map(str::to_string),
        one_key_column: raw.one_key_column().map(str::to_string),
        one_collection_field: raw.one_collection_field().map(str::to_string),
        one_allowed_collections: raw.one_allowed_collections().map(<[String]>::to_vec),
    }
}

/// Attach a relation to its foreign key field, its discriminator field and
/// its reverse alias field. Endpoints that are absent from the graph are
/// ignored; a later relation replaces an earlier one on the same field.
fn attach_relation(graph: &mut SchemaGraph, relation: Relation) {
    let endpoints = [
        relation.many_collection.as_ref().zip(relation.many_field.as_ref()),
        relation
            .many_collection
            .as_ref()
            .zip(relation.one_collection_field.as_ref()),
        relation.one_collection.as_ref().zip(relation.one_field.as_ref()),
    ];

    for (collection, field) in endpoints.into_iter().flatten() {
        match graph.field_mut(collection, field) {
            Some(target) => target.relation = Some(relation.clone()),
            None => debug!(%collection, %field, "relation endpoint not in graph"),
        }
    }
}
