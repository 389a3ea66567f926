//! TypeScript object types, declaration selection and union expressions.

use directus_typegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};
use directus_typegen_schema::DeclarationStyle;

use super::{Interface, Member};

/// Builder for TypeScript object types (`export type Foo = { ... };`).
#[derive(Debug, Clone)]
pub struct ObjectType {
    name: String,
    members: Vec<Member>,
}

impl ObjectType {
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

    /// Build the object type as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for ObjectType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.members.is_empty() {
            return vec![CodeFragment::Line(format!("export type {} = {{}};", self.name))];
        }

        vec![CodeFragment::Block {
            header: format!("export type {} = {{", self.name),
            body: self.members.iter().flat_map(Member::to_fragments).collect(),
            close: Some("};".to_string()),
        }]
    }
}

/// A named record declaration in the configured style.
#[derive(Debug, Clone)]
pub enum Declaration {
    Interface(Interface),
    Object(ObjectType),
}

impl Declaration {
    pub fn new(
        style: DeclarationStyle,
        name: impl Into<String>,
        members: impl IntoIterator<Item = Member>,
    ) -> Self {
        match style {
            DeclarationStyle::Interface => {
                Declaration::Interface(Interface::new(name).members(members))
            }
            DeclarationStyle::Type => Declaration::Object(ObjectType::new(name).members(members)),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Declaration::Interface(i) => i.name(),
            Declaration::Object(o) => o.name(),
        }
    }
}

impl Renderable for Declaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Declaration::Interface(i) => i.to_fragments(),
            Declaration::Object(o) => o.to_fragments(),
        }
    }
}

/// Union type expression builder.
///
/// Members keep insertion order and are added at most once. An empty union
/// renders as `never`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Union {
    members: Vec<String>,
}

impl Union {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn member(mut self, member: impl Into<String>) -> Self {
        self.push(member);
        self
    }

    pub fn members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for member in members {
            self.push(member);
        }
        self
    }

    pub fn push(&mut self, member: impl Into<String>) {
        let member = member.into();
        if !self.members.contains(&member) {
            self.members.push(member);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn build(&self) -> String {
        if self.members.is_empty() {
            return "never".to_string();
        }
        self.members.join(" | ")
    }
}

/// `Array<ty>`
pub fn array_of(ty: &str) -> String {
    format!("Array<{ty}>")
}

/// `ty[]`
pub fn list_of(ty: &str) -> String {
    format!("{ty}[]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_type_empty() {
        let t = ObjectType::new("Empty").build();
        assert_eq!(t, "export type Empty = {};\n");
    }

    #[test]
    fn test_object_type_with_fields() {
        let t = ObjectType::new("Post")
            .members([
                Member::property("id", "number"),
                Member::property("title", "string | null"),
            ])
            .build();
        assert_eq!(
            t,
            "export type Post = {\n  id: number;\n  title: string | null;\n};\n"
        );
    }

    #[test]
    fn test_declaration_styles() {
        let members = || vec![Member::property("id", "number")];

        let interface = Declaration::new(DeclarationStyle::Interface, "Post", members());
        let object = Declaration::new(DeclarationStyle::Type, "Post", members());

        let render = |d: &Declaration| {
            let mut builder = CodeBuilder::typescript();
            builder.emit(d);
            builder.build()
        };
        assert_eq!(render(&interface), "export interface Post {\n  id: number;\n}\n");
        assert_eq!(render(&object), "export type Post = {\n  id: number;\n};\n");
        assert_eq!(interface.name(), "Post");
    }

    #[test]
    fn test_union_dedupes_in_order() {
        let u = Union::new()
            .member("number")
            .members(["Body", "Image", "number"])
            .member("null")
            .member("null");
        assert_eq!(u.build(), "number | Body | Image | null");
        assert_eq!(u.len(), 4);
    }

    #[test]
    fn test_empty_union_is_never() {
        assert_eq!(Union::new().build(), "never");
        assert_eq!(array_of(&Union::new().build()), "Array<never>");
    }

    #[test]
    fn test_array_forms() {
        assert_eq!(array_of("\"a\" | \"b\""), "Array<\"a\" | \"b\">");
        assert_eq!(list_of("Post"), "Post[]");
    }
}
