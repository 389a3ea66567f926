//! Relation kind disambiguation.

use directus_typegen_ir::{AnyTarget, Field, Relation, RelationKind, SchemaGraph};

/// Why a field's relation could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unresolved {
    /// The relation names a target that is not in the graph.
    MissingTarget(String),
    /// None of the relation's endpoints describe this field.
    NoMatchingEndpoint,
}

impl Unresolved {
    pub fn message(&self) -> String {
        match self {
            Unresolved::MissingTarget(target) => {
                format!("relation target '{target}' does not exist")
            }
            Unresolved::NoMatchingEndpoint => {
                "relation endpoints do not match this field".to_string()
            }
        }
    }
}

/// Outcome of resolving one field's relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub kind: RelationKind,
    /// Allowed polymorphic targets left out for lack of a primary key.
    pub excluded: Vec<String>,
}

impl From<RelationKind> for Resolution {
    fn from(kind: RelationKind) -> Self {
        Self {
            kind,
            excluded: Vec::new(),
        }
    }
}

/// Classify `relation` from the point of view of `field`.
///
/// Tests run in a fixed order: many-to-one, one-to-many, then the
/// polymorphic pair. A side whose endpoints match but whose target is
/// missing ends the search.
pub fn resolve_relation(
    graph: &SchemaGraph,
    field: &Field,
    relation: &Relation,
) -> Result<Resolution, Unresolved> {
    let (collection, name) = (field.collection.as_str(), field.name.as_str());

    if relation.is_many_side(collection, name)
        && let (Some(target), Some(key)) = (&relation.one_collection, &relation.one_key_column)
    {
        if !graph.has_field(target, key) {
            return Err(Unresolved::MissingTarget(format!("{target}.{key}")));
        }
        return Ok(RelationKind::ManyToOne {
            collection: target.clone(),
            field: key.clone(),
        }
        .into());
    }

    if relation.is_one_side(collection, name)
        && let (Some(target), Some(foreign_key)) = (&relation.many_collection, &relation.many_field)
    {
        if !graph.has_field(target, foreign_key) {
            return Err(Unresolved::MissingTarget(format!("{target}.{foreign_key}")));
        }
        return Ok(RelationKind::OneToMany {
            collection: target.clone(),
            field: foreign_key.clone(),
        }
        .into());
    }

    if relation.many_collection.as_deref() == Some(collection)
        && let Some(allowed) = &relation.one_allowed_collections
    {
        if relation.many_field.as_deref() == Some(name) {
            let mut excluded = Vec::new();
            let targets = allowed
                .iter()
                .filter_map(|target| {
                    let primary_key = graph.collection(target).and_then(|c| c.primary_key());
                    if primary_key.is_none() {
                        excluded.push(target.clone());
                    }
                    Some(AnyTarget {
                        collection: target.clone(),
                        primary_key: primary_key?.name.clone(),
                    })
                })
                .collect();
            return Ok(Resolution {
                kind: RelationKind::ManyToAny { targets },
                excluded,
            });
        }

        if relation.one_collection_field.as_deref() == Some(name) {
            return Ok(RelationKind::ManyToAnyDiscriminator {
                collections: allowed.clone(),
            }
            .into());
        }
    }

    Err(Unresolved::NoMatchingEndpoint)
}
