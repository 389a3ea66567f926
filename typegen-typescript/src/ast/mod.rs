//! TypeScript AST builders for declarations, members, imports and type
//! expressions.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod imports;
mod interface;
mod types;

pub use imports::Import;
pub use interface::{Interface, Member};
pub use types::{Declaration, ObjectType, Union, array_of, list_of};
