//! TypeScript interface builder.

use directus_typegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};
use directus_typegen_core::quote_property;

/// A member of an interface or object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    /// `name: ty;`
    Property { name: String, ty: String },
    /// `name: Array<` followed by one `| variant` line per variant, then `>;`
    UnionArray { name: String, variants: Vec<String> },
}

impl Member {
    /// A single-line property. Names that are not identifiers are quoted.
    pub fn property(name: impl AsRef<str>, ty: impl Into<String>) -> Self {
        Self::Property {
            name: quote_property(name.as_ref()),
            ty: ty.into(),
        }
    }

    pub fn union_array(name: impl AsRef<str>, variants: Vec<String>) -> Self {
        Self::UnionArray {
            name: quote_property(name.as_ref()),
            variants,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Member::Property { name, .. } | Member::UnionArray { name, .. } => name,
        }
    }

    pub(crate) fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Member::Property { name, ty } => vec![CodeFragment::Line(format!("{name}: {ty};"))],
            Member::UnionArray { name, variants } => vec![
                CodeFragment::Line(format!("{name}: Array<")),
                CodeFragment::Indent(
                    variants
                        .iter()
                        .map(|v| CodeFragment::Line(format!("| {v}")))
                        .collect(),
                ),
                CodeFragment::line(">;"),
            ],
        }
    }
}

/// Builder for TypeScript interfaces (`export interface Foo { ... }`).
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    members: Vec<Member>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn members(mut self, members: impl IntoIterator<Item = Member>) -> Self {
        self.members.extend(members);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.members.is_empty() {
            return vec![CodeFragment::Line(format!("export interface {} {{}}", self.name))];
        }

        vec![CodeFragment::Block {
            header: format!("export interface {} {{", self.name),
            body: self.members.iter().flat_map(Member::to_fragments).collect(),
            close: Some("}".to_string()),
        }]
    }
}
