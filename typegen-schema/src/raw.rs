//! Raw Directus metadata records, as returned by the `/collections`,
//! `/fields` and `/relations` endpoints.
//!
//! Every nested object is optional because the CMS omits `meta` or `schema`
//! for virtual and system entries. Accessors expose the values the
//! normalizer needs with their defaults applied.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A record from `/collections`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DirectusCollection {
    pub collection: String,
    #[serde(default)]
    pub meta: Option<CollectionMeta>,
    /// Database table information; `null` for folders.
    #[serde(default)]
    pub schema: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CollectionMeta {
    #[serde(default)]
    pub singleton: Option<bool>,
    #[serde(default)]
    pub system: Option<bool>,
}

impl DirectusCollection {
    pub fn collection_name(&self) -> &str {
        &self.collection
    }

    pub fn is_singleton(&self) -> bool {
        self.meta.as_ref().and_then(|m| m.singleton).unwrap_or(false)
    }

    pub fn is_system(&self) -> bool {
        self.meta.as_ref().and_then(|m| m.system).unwrap_or(false)
    }

    /// Whether the collection is backed by a database table.
    ///
    /// Collections without a schema are UI-only folders.
    pub fn has_schema(&self) -> bool {
        self.schema.as_ref().is_some_and(|s| !s.is_null())
    }
}

/// A record from `/fields`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DirectusField {
    pub collection: String,
    pub field: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub schema: Option<FieldSchema>,
    #[serde(default)]
    pub meta: Option<FieldMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FieldSchema {
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub is_nullable: Option<bool>,
    #[serde(default)]
    pub is_primary_key: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FieldMeta {
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub system: Option<bool>,
    #[serde(default)]
    pub interface: Option<String>,
    /// Interface specific options; the shape depends on `interface`.
    #[serde(default)]
    pub options: Option<Value>,
}

impl DirectusField {
    pub fn data_type(&self) -> Option<&str> {
        self.schema.as_ref().and_then(|s| s.data_type.as_deref())
    }

    /// `None` when the field has no database column.
    pub fn is_nullable(&self) -> Option<bool> {
        self.schema.as_ref().and_then(|s| s.is_nullable)
    }

    /// `None` when the field has no database column.
    pub fn is_primary_key(&self) -> Option<bool> {
        self.schema.as_ref().and_then(|s| s.is_primary_key)
    }

    pub fn is_required(&self) -> bool {
        self.meta.as_ref().and_then(|m| m.required).unwrap_or(false)
    }

    pub fn is_system(&self) -> bool {
        self.meta.as_ref().and_then(|m| m.system).unwrap_or(false)
    }

    pub fn interface_name(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.interface.as_deref())
    }

    pub fn interface_options(&self) -> Option<&Value> {
        self.meta
            .as_ref()
            .and_then(|m| m.options.as_ref())
            .filter(|v| !v.is_null())
    }
}

/// A record from `/relations`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DirectusRelation {
    #[serde(default)]
    pub collection: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub related_collection: Option<String>,
    #[serde(default)]
    pub meta: Option<RelationMeta>,
    #[serde(default)]
    pub schema: Option<RelationSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RelationMeta {
    #[serde(default)]
    pub many_collection: Option<String>,
    #[serde(default)]
    pub many_field: Option<String>,
    #[serde(default)]
    pub one_collection: Option<String>,
    #[serde(default)]
    pub one_field: Option<String>,
    #[serde(default)]
    pub one_collection_field: Option<String>,
    #[serde(default)]
    pub one_allowed_collections: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RelationSchema {
    #[serde(default)]
    pub foreign_key_table: Option<String>,
    #[serde(default)]
    pub foreign_key_column: Option<String>,
}

impl DirectusRelation {
    fn meta_value<'a>(
        &'a self,
        f: impl FnOnce(&'a RelationMeta) -> Option<&'a String>,
    ) -> Option<&'a str> {
        self.meta.as_ref().and_then(f).map(String::as_str)
    }

    pub fn many_collection(&self) -> Option<&str> {
        self.meta_value(|m| m.many_collection.as_ref())
    }

    pub fn many_field(&self) -> Option<&str> {
        self.meta_value(|m| m.many_field.as_ref())
    }

    pub fn one_collection(&self) -> Option<&str> {
        self.meta_value(|m| m.one_collection.as_ref())
    }

    pub fn one_field(&self) -> Option<&str> {
        self.meta_value(|m| m.one_field.as_ref())
    }

    /// Primary key column on the "one" side of the relation.
    pub fn one_key_column(&self) -> Option<&str> {
        self.schema
            .as_ref()
            .and_then(|s| s.foreign_key_column.as_deref())
    }

    pub fn one_collection_field(&self) -> Option<&str> {
        self.meta_value(|m| m.one_collection_field.as_ref())
    }

    pub fn one_allowed_collections(&self) -> Option<&[String]> {
        self.meta
            .as_ref()
            .and_then(|m| m.one_allowed_collections.as_deref())
    }
}
