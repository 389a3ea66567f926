//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for declaration emitters
//! - [`TypeMapper`] - Trait for mapping CMS scalar type ids to language types

mod traits;

pub use traits::{LanguageCodegen, TypeMapper};
