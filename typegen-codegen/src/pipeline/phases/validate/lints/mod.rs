//! Built-in lints for snapshot validation.

mod dangling_relation;
mod duplicate_relation;
mod orphan_field;

pub use dangling_relation::DanglingRelationLint;
pub use duplicate_relation::DuplicateRelationLint;
pub use orphan_field::OrphanFieldLint;
