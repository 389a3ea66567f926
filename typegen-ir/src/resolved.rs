//! Resolved schema: every field classified into a closed set of kinds.

use indexmap::IndexMap;

use crate::Literal;

/// Resolved collections keyed by name, in snapshot order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedSchema {
    collections: IndexMap<String, ResolvedCollection>,
}

impl ResolvedSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, collection: ResolvedCollection) {
        self.collections.insert(collection.name.clone(), collection);
    }

    pub fn collection(&self, name: &str) -> Option<&ResolvedCollection> {
        self.collections.get(name)
    }

    pub fn collections(&self) -> impl Iterator<Item = &ResolvedCollection> {
        self.collections.values()
    }

    pub fn field(&self, collection: &str, field: &str) -> Option<&ResolvedField> {
        self.collection(collection)?.field(field)
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedCollection {
    pub name: String,
    pub singleton: bool,
    pub system: bool,
    /// Name of the primary key field, if any.
    pub primary_key: Option<String>,
    /// Resolved fields in declaration order.
    pub fields: Vec<ResolvedField>,
}

impl ResolvedCollection {
    pub fn field(&self, name: &str) -> Option<&ResolvedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields added by the project rather than shipped by the CMS.
    pub fn custom_fields(&self) -> impl Iterator<Item = &ResolvedField> {
        self.fields.iter().filter(|f| !f.system)
    }

    pub fn has_custom_fields(&self) -> bool {
        self.custom_fields().next().is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedField {
    pub name: String,
    pub nullable: bool,
    pub system: bool,
    pub kind: FieldKind,
}

impl ResolvedField {
    /// CMS type id of the stored value; `None` for aliases.
    pub fn scalar(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::Primitive { ty, .. } | FieldKind::Structured { ty, .. } => Some(ty),
            FieldKind::Alias { .. } => None,
        }
    }

    pub fn relation(&self) -> Option<&RelationKind> {
        match &self.kind {
            FieldKind::Primitive { relation, .. } => relation.as_ref(),
            FieldKind::Alias { relation } => Some(relation),
            FieldKind::Structured { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// A stored scalar, optionally holding a foreign key.
    Primitive {
        ty: String,
        relation: Option<RelationKind>,
    },
    /// A virtual field that only exposes a relation.
    Alias { relation: RelationKind },
    /// Serialized or choice-driven data.
    Structured { ty: String, shape: StructuredKind },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationKind {
    /// Foreign key pointing at `collection.field`.
    ManyToOne { collection: String, field: String },
    /// Reverse side; `field` is the foreign key on `collection`.
    OneToMany { collection: String, field: String },
    /// Polymorphic foreign key over resolvable targets only.
    ManyToAny { targets: Vec<AnyTarget> },
    /// Companion field naming the target collection of a polymorphic key.
    ManyToAnyDiscriminator { collections: Vec<String> },
}

impl RelationKind {
    pub fn kind_name(&self) -> &'static str {
        match self {
            RelationKind::ManyToOne { .. } => "m2o",
            RelationKind::OneToMany { .. } => "o2m",
            RelationKind::ManyToAny { .. } => "m2a",
            RelationKind::ManyToAnyDiscriminator { .. } => "m2a-discriminator",
        }
    }

    /// Collections whose types the relation refers to.
    pub fn target_collections(&self) -> Vec<&str> {
        match self {
            RelationKind::ManyToOne { collection, .. }
            | RelationKind::OneToMany { collection, .. } => vec![collection.as_str()],
            RelationKind::ManyToAny { targets } => {
                targets.iter().map(|t| t.collection.as_str()).collect()
            }
            RelationKind::ManyToAnyDiscriminator { .. } => Vec::new(),
        }
    }
}

/// One allowed target of a polymorphic relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnyTarget {
    pub collection: String,
    pub primary_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuredKind {
    /// Repeater of locally shaped records.
    List(Vec<ListItem>),
    /// One value out of `choices`.
    SingleChoice {
        choices: Vec<Literal>,
        allow_other: bool,
        allow_none: bool,
    },
    /// Any subset of `choices`.
    MultiChoice {
        choices: Vec<Literal>,
        allow_other: bool,
        allow_none: bool,
    },
    /// Subset of a choice hierarchy, flattened in pre-order.
    MultiChoiceTree { choices: Vec<Literal> },
    Tags {
        presets: Vec<String>,
        allow_custom: bool,
    },
    Unknown,
}

/// A subfield of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub name: String,
    pub ty: String,
    /// Present when the subfield is itself serialized data.
    pub shape: Option<Box<StructuredKind>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primitive(name: &str, system: bool) -> ResolvedField {
        ResolvedField {
            name: name.to_string(),
            nullable: false,
            system,
            kind: FieldKind::Primitive {
                ty: "integer".into(),
                relation: None,
            },
        }
    }

    #[test]
    fn test_custom_fields() {
        let users = ResolvedCollection {
            name: "directus_users".into(),
            system: true,
            fields: vec![primitive("id", true), primitive("score", false)],
            ..Default::default()
        };

        assert!(users.has_custom_fields());
        let names: Vec<_> = users.custom_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["score"]);
    }

    #[test]
    fn test_field_accessors() {
        let alias = ResolvedField {
            name: "posts".into(),
            nullable: false,
            system: false,
            kind: FieldKind::Alias {
                relation: RelationKind::OneToMany {
                    collection: "posts".into(),
                    field: "author".into(),
                },
            },
        };

        assert_eq!(alias.scalar(), None);
        assert_eq!(alias.relation().map(RelationKind::kind_name), Some("o2m"));
        assert_eq!(primitive("id", false).scalar(), Some("integer"));
    }

    #[test]
    fn test_target_collections() {
        let m2a = RelationKind::ManyToAny {
            targets: vec![
                AnyTarget {
                    collection: "bodies".into(),
                    primary_key: "id".into(),
                },
                AnyTarget {
                    collection: "images".into(),
                    primary_key: "id".into(),
                },
            ],
        };
        assert_eq!(m2a.target_collections(), ["bodies", "images"]);

        let discriminator = RelationKind::ManyToAnyDiscriminator {
            collections: vec!["bodies".into()],
        };
        assert!(discriminator.target_collections().is_empty());
    }
}
