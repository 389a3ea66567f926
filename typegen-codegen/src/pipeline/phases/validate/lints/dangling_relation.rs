//! Lint for relation endpoints that point at nothing.

use directus_typegen_schema::{DirectusRelation, SchemaSnapshot};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns about relation endpoints naming unknown collections or fields.
///
/// Such relations are dropped or deflated to their scalar during
/// resolution.
pub struct DanglingRelationLint;

impl Lint for DanglingRelationLint {
    fn name(&self) -> &'static str {
        "dangling-relation"
    }

    fn description(&self) -> &'static str {
        "Detect relation endpoints that reference missing collections or fields"
    }

    fn check(&self, snapshot: &SchemaSnapshot, diagnostics: &mut Vec<Diagnostic>) {
        for (index, relation) in snapshot.relations.iter().enumerate() {
            let location = relation_location(index, relation);
            let mut warn = |message: String| {
                diagnostics.push(Diagnostic::warning("validate", message).at(location.clone()));
            };

            if let (Some(collection), Some(field)) =
                (relation.many_collection(), relation.many_field())
                &&snapshot.field(collection, field).is_none()
            {
                warn(format!("foreign key field '{collection}.{field}' does not exist"));
            }

            if let Some(collection) = relation.one_collection() {
                if snapshot.collection(collection).is_none() {
                    warn(format!("related collection '{collection}' does not exist"));
                } else {
                    if let Some(key) = relation.one_key_column()
                        && snapshot.field(collection, key).is_none()
                    {
                        warn(format!("related key '{collection}.{key}' does not exist"));
                    }
                    if let Some(field) = relation.one_field()
                        && snapshot.field(collection, field).is_none()
                    {
                        warn(format!("reverse field '{collection}.{field}' does not exist"));
                    }
                }
            }

            for allowed in relation.one_allowed_collections().unwrap_or_default() {
                if snapshot.collection(allowed).is_none() {
                    warn(format!("allowed collection '{allowed}' does not exist"));
                }
            }
        }
    }
}

fn relation_location(index: usize, relation: &DirectusRelation) -> String {
    match (relation.many_collection(), relation.many_field()) {
        (Some(collection), Some(field)) => format!("{collection}.{field}"),
        _ => format!("relations[{index}]"),
    }
}
