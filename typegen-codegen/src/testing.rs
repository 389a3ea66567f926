//! Test utilities for building schema snapshots in code.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use directus_typegen_schema::{
    DirectusCollection, DirectusField, DirectusRelation, SchemaSnapshot,
    raw::{CollectionMeta, FieldMeta, FieldSchema, RelationMeta, RelationSchema},
};
use serde_json::{Value, json};

/// Fluent builder for [`SchemaSnapshot`]s.
///
/// # Example
///
/// ```ignore
/// let snapshot = SnapshotBuilder::new()
///     .collection("posts")
///     .primary_key("posts", "id", "integer")
///     .nullable_field("posts", "author", "integer")
///     .collection("users")
///     .primary_key("users", "id", "integer")
///     .m2o("posts", "author", "users", "id")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    snapshot: SchemaSnapshot,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_collection(mut self, name: &str, singleton: bool, system: bool, schema: bool) -> Self {
        self.snapshot.collections.push(DirectusCollection {
            collection: name.to_string(),
            meta: Some(CollectionMeta {
                singleton: Some(singleton),
                system: Some(system),
            }),
            schema: schema.then(|| json!({ "name": name })),
        });
        self
    }

    /// A regular table-backed collection.
    pub fn collection(self, name: &str) -> Self {
        self.push_collection(name, false, false, true)
    }

    pub fn singleton(self, name: &str) -> Self {
        self.push_collection(name, true, false, true)
    }

    /// A CMS builtin collection.
    pub fn system_collection(self, name: &str) -> Self {
        self.push_collection(name, false, true, true)
    }

    /// A UI-only folder without a table.
    pub fn folder(self, name: &str) -> Self {
        self.push_collection(name, false, false, false)
    }

    /// Append a raw field record.
    pub fn raw_field(mut self, field: DirectusField) -> Self {
        self.snapshot.fields.push(field);
        self
    }

    /// Append a raw relation record.
    pub fn raw_relation(mut self, relation: DirectusRelation) -> Self {
        self.snapshot.relations.push(relation);
        self
    }

    pub fn primary_key(self, collection: &str, name: &str, ty: &str) -> Self {
        let mut field = column(collection, name, ty, false);
        if let Some(schema) = field.schema.as_mut() {
            schema.is_primary_key = Some(true);
        }
        field.meta = Some(FieldMeta {
            required: Some(true),
            ..Default::default()
        });
        self.raw_field(field)
    }

    /// A non-nullable column.
    pub fn field(self, collection: &str, name: &str, ty: &str) -> Self {
        self.raw_field(column(collection, name, ty, false))
    }

    pub fn nullable_field(self, collection: &str, name: &str, ty: &str) -> Self {
        self.raw_field(column(collection, name, ty, true))
    }

    /// A nullable column that the CMS marks as required.
    pub fn required_nullable_field(self, collection: &str, name: &str, ty: &str) -> Self {
        let mut field = column(collection, name, ty, true);
        field.meta = Some(FieldMeta {
            required: Some(true),
            ..Default::default()
        });
        self.raw_field(field)
    }

    /// A CMS builtin column of a system collection.
    pub fn system_field(self, collection: &str, name: &str, ty: &str) -> Self {
        let mut field = column(collection, name, ty, true);
        field.meta = Some(FieldMeta {
            system: Some(true),
            ..Default::default()
        });
        self.raw_field(field)
    }

    /// A column with an input interface and its options.
    pub fn interface_field(
        self,
        collection: &str,
        name: &str,
        ty: &str,
        interface: &str,
        options: Value,
    ) -> Self {
        let mut field = column(collection, name, ty, true);
        field.meta = Some(FieldMeta {
            interface: Some(interface.to_string()),
            options: Some(options),
            ..Default::default()
        });
        self.raw_field(field)
    }

    /// A virtual field without storage.
    pub fn alias(self, collection: &str, name: &str, interface: &str) -> Self {
        self.raw_field(DirectusField {
            collection: collection.to_string(),
            field: name.to_string(),
            ty: "alias".to_string(),
            schema: None,
            meta: Some(FieldMeta {
                interface: Some(interface.to_string()),
                ..Default::default()
            }),
        })
    }

    /// Foreign key `many_collection.many_field` pointing at `one_collection.one_key`.
    pub fn m2o(
        self,
        many_collection: &str,
        many_field: &str,
        one_collection: &str,
        one_key: &str,
    ) -> Self {
        self.relation(many_collection, many_field, one_collection, one_key, None)
    }

    /// A many-to-one whose target also exposes the reverse alias `one_field`.
    pub fn m2o_with_reverse(
        self,
        many_collection: &str,
        many_field: &str,
        one_collection: &str,
        one_key: &str,
        one_field: &str,
    ) -> Self {
        self.relation(
            many_collection,
            many_field,
            one_collection,
            one_key,
            Some(one_field),
        )
    }

    fn relation(
        self,
        many_collection: &str,
        many_field: &str,
        one_collection: &str,
        one_key: &str,
        one_field: Option<&str>,
    ) -> Self {
        self.raw_relation(DirectusRelation {
            collection: Some(many_collection.to_string()),
            field: Some(many_field.to_string()),
            related_collection: Some(one_collection.to_string()),
            meta: Some(RelationMeta {
                many_collection: Some(many_collection.to_string()),
                many_field: Some(many_field.to_string()),
                one_collection: Some(one_collection.to_string()),
                one_field: one_field.map(str::to_string),
                ..Default::default()
            }),
            schema: Some(RelationSchema {
                foreign_key_table: Some(one_collection.to_string()),
                foreign_key_column: Some(one_key.to_string()),
            }),
        })
    }

    /// Polymorphic relation on `many_collection.many_field` with its discriminator.
    pub fn m2a(
        self,
        many_collection: &str,
        many_field: &str,
        discriminator: &str,
        allowed: &[&str],
    ) -> Self {
        self.raw_relation(DirectusRelation {
            collection: Some(many_collection.to_string()),
            field: Some(many_field.to_string()),
            related_collection: None,
            meta: Some(RelationMeta {
                many_collection: Some(many_collection.to_string()),
                many_field: Some(many_field.to_string()),
                one_collection_field: Some(discriminator.to_string()),
                one_allowed_collections: Some(allowed.iter().map(|c| c.to_string()).collect()),
                ..Default::default()
            }),
            schema: None,
        })
    }

    pub fn build(self) -> SchemaSnapshot {
        self.snapshot
    }
}

fn column(collection: &str, name: &str, ty: &str, nullable: bool) -> DirectusField {
    DirectusField {
        collection: collection.to_string(),
        field: name.to_string(),
        ty: ty.to_string(),
        schema: Some(FieldSchema {
            data_type: Some(ty.to_string()),
            is_nullable: Some(nullable),
            is_primary_key: Some(false),
        }),
        meta: None,
    }
}
