//! Intermediate representation for the Directus type generator.
//!
//! Two stages live here, each produced fresh per run:
//!
//! ```text
//! snapshot records → SchemaGraph (normalized) → ResolvedSchema (classified) → emitter
//! ```
//!
//! The IR is target-language agnostic; scalar mapping and naming belong to
//! the emitter.

mod graph;
mod interface;
mod resolved;

pub use graph::{Collection, Field, Relation, SchemaGraph};
pub use interface::{ChoiceNode, ChoiceOptions, FieldInterface, ListField, Literal, TagOptions};
pub use resolved::{
    AnyTarget, FieldKind, ListItem, RelationKind, ResolvedCollection, ResolvedField,
    ResolvedSchema, StructuredKind,
};
