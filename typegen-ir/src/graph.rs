//! Normalized schema graph.
//!
//! Built once per run from the raw snapshot records and never mutated after
//! normalization finishes.

use indexmap::IndexMap;

use crate::FieldInterface;

/// Every schema-backed collection, keyed by name in snapshot order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaGraph {
    collections: IndexMap<String, Collection>,
}

impl SchemaGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a collection, replacing any previous one with the same name.
    pub fn insert(&mut self, collection: Collection) {
        self.collections.insert(collection.name.clone(), collection);
    }

    pub fn collection(&self, name: &str) -> Option<&Collection> {
        self.collections.get(name)
    }

    pub fn collection_mut(&mut self, name: &str) -> Option<&mut Collection> {
        self.collections.get_mut(name)
    }

    pub fn collections(&self) -> impl Iterator<Item = &Collection> {
        self.collections.values()
    }

    pub fn field(&self, collection: &str, field: &str) -> Option<&Field> {
        self.collection(collection)?.field(field)
    }

    pub fn field_mut(&mut self, collection: &str, field: &str) -> Option<&mut Field> {
        self.collection_mut(collection)?.fields.get_mut(field)
    }

    /// Whether both the collection and the named field exist.
    pub fn has_field(&self, collection: &str, field: &str) -> bool {
        self.field(collection, field).is_some()
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Total number of fields across all collections.
    pub fn field_count(&self) -> usize {
        self.collections.values().map(|c| c.fields.len()).sum()
    }
}

/// A schema-backed collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    pub name: String,
    pub singleton: bool,
    /// CMS builtin collection (`directus_*`).
    pub system: bool,
    /// Fields in declaration order.
    pub fields: IndexMap<String, Field>,
    /// Name of the primary key field, if the collection has one.
    pub primary_key: Option<String>,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn singleton(mut self, singleton: bool) -> Self {
        self.singleton = singleton;
        self
    }

    pub fn system(mut self, system: bool) -> Self {
        self.system = system;
        self
    }

    /// Insert a field and index it as the primary key when flagged as one.
    pub fn insert_field(&mut self, field: Field) {
        if field.is_primary_key() {
            self.primary_key = Some(field.name.clone());
        }
        self.fields.insert(field.name.clone(), field);
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// The primary key field, independent of its declared name.
    pub fn primary_key(&self) -> Option<&Field> {
        self.primary_key.as_deref().and_then(|name| self.field(name))
    }
}

/// A single field of a collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Field {
    pub name: String,
    pub collection: String,
    /// CMS type id such as `string`, `integer`, `json` or `alias`.
    pub ty: String,
    /// Database column type; advisory only.
    pub data_type: Option<String>,
    /// `None` when the field has no column.
    pub primary_key: Option<bool>,
    /// `None` when the field has no column.
    pub nullable: Option<bool>,
    pub required: bool,
    pub interface: Option<FieldInterface>,
    pub relation: Option<Relation>,
    pub system: bool,
}

impl Field {
    pub fn new(
        collection: impl Into<String>,
        name: impl Into<String>,
        ty: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            collection: collection.into(),
            ty: ty.into(),
            ..Default::default()
        }
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key.unwrap_or(false)
    }

    /// Virtual field without storage.
    pub fn is_alias(&self) -> bool {
        self.ty == "alias"
    }

    /// Presentation-only or grouping-only fields.
    pub fn is_presentational(&self) -> bool {
        self.interface
            .as_ref()
            .is_some_and(FieldInterface::is_presentational)
    }

    /// Raw serialized data (`json` or `csv`).
    pub fn is_serialized(&self) -> bool {
        matches!(self.ty.as_str(), "json" | "csv")
    }

    /// `collection.name`, for diagnostics.
    pub fn location(&self) -> String {
        format!("{}.{}", self.collection, self.name)
    }
}

/// A relation record as attached to the fields it governs.
///
/// The same record reads differently depending on which side of it a field
/// sits on; interpretation happens during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relation {
    /// Collection holding the foreign key.
    pub many_collection: Option<String>,
    pub many_field: Option<String>,
    /// Collection holding the reverse alias field.
    pub one_collection: Option<String>,
    pub one_field: Option<String>,
    /// Primary key column on the "one" side.
    pub one_key_column: Option<String>,
    /// Polymorphic discriminator field on the many side.
    pub one_collection_field: Option<String>,
    /// Closed set of polymorphic targets.
    pub one_allowed_collections: Option<Vec<String>>,
}

impl Relation {
    /// Whether `(collection, field)` is the foreign key side.
    pub fn is_many_side(&self, collection: &str, field: &str) -> bool {
        self.many_collection.as_deref() == Some(collection)
            && self.many_field.as_deref() == Some(field)
    }

    /// Whether `(collection, field)` is the reverse alias side.
    pub fn is_one_side(&self, collection: &str, field: &str) -> bool {
        self.one_collection.as_deref() == Some(collection)
            && self.one_field.as_deref() == Some(field)
    }

    pub fn is_polymorphic(&self) -> bool {
        self.one_allowed_collections.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pk(collection: &str, name: &str) -> Field {
        Field {
            primary_key: Some(true),
            ..Field::new(collection, name, "integer")
        }
    }

    #[test]
    fn test_primary_key_lookup_is_name_independent() {
        let mut collection = Collection::new("posts");
        collection.insert_field(Field::new("posts", "title", "string"));
        collection.insert_field(pk("posts", "post_uid"));

        assert_eq!(collection.primary_key().map(|f| f.name.as_str()), Some("post_uid"));
        assert_eq!(collection.fields.len(), 2);
    }

    #[test]
    fn test_collection_without_primary_key() {
        let mut collection = Collection::new("junction");
        collection.insert_field(Field::new("junction", "a", "integer"));
        assert!(collection.primary_key().is_none());
    }

    #[test]
    fn test_graph_preserves_insertion_order() {
        let mut graph = SchemaGraph::new();
        graph.insert(Collection::new("zebras"));
        graph.insert(Collection::new("apples"));

        let names: Vec<_> = graph.collections().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["zebras", "apples"]);
    }

    #[test]
    fn test_field_lookup() {
        let mut graph = SchemaGraph::new();
        let mut posts = Collection::new("posts");
        posts.insert_field(pk("posts", "id"));
        graph.insert(posts);

        assert!(graph.has_field("posts", "id"));
        assert!(!graph.has_field("posts", "missing"));
        assert!(!graph.has_field("missing", "id"));
        assert_eq!(graph.field_count(), 1);
    }

    #[test]
    fn test_relation_sides() {
        let relation = Relation {
            many_collection: Some("posts".into()),
            many_field: Some("author".into()),
            one_collection: Some("users".into()),
            one_field: Some("posts".into()),
            ..Default::default()
        };

        assert!(relation.is_many_side("posts", "author"));
        assert!(!relation.is_many_side("users", "posts"));
        assert!(relation.is_one_side("users", "posts"));
        assert!(!relation.is_polymorphic());
    }

    #[test]
    fn test_field_flags() {
        let alias = Field::new("posts", "comments", "alias");
        assert!(alias.is_alias());
        assert!(!alias.is_serialized());

        let json = Field::new("posts", "meta", "json");
        assert!(json.is_serialized());
        assert_eq!(json.location(), "posts.meta");

        let divider = Field {
            interface: Some(FieldInterface::Presentation("presentation-divider".into())),
            ..Field::new("posts", "divider", "alias")
        };
        assert!(divider.is_presentational());
    }
}
