//! Schema snapshot parsing from files and strings.

use std::{path::Path, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    Error, Result,
    error::SourceContext,
    raw::{DirectusCollection, DirectusField, DirectusRelation},
};

/// A point-in-time export of a Directus schema.
///
/// Holds the three record lists the generator consumes, in the order the
/// CMS returned them. That order is preserved all the way to the output.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SchemaSnapshot {
    #[serde(default, deserialize_with = "deserialize_records")]
    pub collections: Vec<DirectusCollection>,
    #[serde(default, deserialize_with = "deserialize_records")]
    pub fields: Vec<DirectusField>,
    #[serde(default, deserialize_with = "deserialize_records")]
    pub relations: Vec<DirectusRelation>,
}

/// Accept either a bare array or the `{ "data": [...] }` envelope of the REST API.
fn deserialize_records<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Records<T> {
        Bare(Vec<T>),
        Envelope { data: Vec<T> },
    }

    Ok(match Records::deserialize(deserializer)? {
        Records::Bare(records) => records,
        Records::Envelope { data } => data,
    })
}

impl SchemaSnapshot {
    pub fn new(
        collections: Vec<DirectusCollection>,
        fields: Vec<DirectusField>,
        relations: Vec<DirectusRelation>,
    ) -> Self {
        Self {
            collections,
            fields,
            relations,
        }
    }

    /// Parse a snapshot file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_snapshot(&content, &path.display().to_string())
    }

    /// Parse a snapshot from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_snapshot(content, filename)
    }

    /// Look up a collection record by name.
    pub fn collection(&self, name: &str) -> Option<&DirectusCollection> {
        self.collections.iter().find(|c| c.collection == name)
    }

    /// Look up a field record by collection and field name.
    pub fn field(&self, collection: &str, field: &str) -> Option<&DirectusField> {
        self.fields
            .iter()
            .find(|f| f.collection == collection && f.field == field)
    }
}

impl FromStr for SchemaSnapshot {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_snapshot(s, "snapshot.json")
    }
}

/// Parse a snapshot from content with the given filename for error reporting.
pub fn parse_snapshot(content: &str, filename: &str) -> Result<SchemaSnapshot> {
    let source_ctx = SourceContext::new(content, filename);
    serde_json::from_str(content).map_err(|e| source_ctx.snapshot_error(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_arrays() {
        let snapshot: SchemaSnapshot = r#"{
            "collections": [{ "collection": "posts", "meta": null, "schema": {} }],
            "fields": [{ "collection": "posts", "field": "id", "type": "integer" }],
            "relations": []
        }"#
        .parse()
        .unwrap();

        assert_eq!(snapshot.collections.len(), 1);
        assert_eq!(snapshot.fields.len(), 1);
        assert!(snapshot.relations.is_empty());
        assert!(snapshot.field("posts", "id").is_some());
    }

    #[test]
    fn test_parse_api_envelopes() {
        let snapshot: SchemaSnapshot = r#"{
            "collections": { "data": [{ "collection": "posts", "schema": {} }] },
            "fields": { "data": [] },
            "relations": { "data": [] }
        }"#
        .parse()
        .unwrap();

        assert_eq!(snapshot.collections.len(), 1);
        assert!(snapshot.collection("posts").is_some());
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let snapshot: SchemaSnapshot = "{}".parse().unwrap();
        assert_eq!(snapshot, SchemaSnapshot::default());
    }

    #[test]
    fn test_parse_error_reports_filename() {
        let err = SchemaSnapshot::from_str_with_filename("{ \"fields\": 3 }", "broken.json")
            .unwrap_err();

        match *err {
            Error::SnapshotParse { ref src, .. } => assert_eq!(src.name(), "broken.json"),
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = SchemaSnapshot::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
