//! TypeScript import builder.

use directus_typegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for named import statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    from: String,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty()
    }

    fn statement(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };
        format!(
            "import {}{{ {} }} from \"{}\";",
            type_kw,
            self.named.join(", "),
            self.from
        )
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.is_empty() {
            return Vec::new();
        }
        vec![CodeFragment::Line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_import() {
        let i = Import::new("@directus/sdk")
            .named("DirectusUser")
            .named("DirectusFile")
            .build();
        assert_eq!(
            i,
            "import { DirectusUser, DirectusFile } from \"@directus/sdk\";\n"
        );
    }

    #[test]
    fn test_type_only_import() {
        let i = Import::new("@directus/sdk")
            .named("DirectusRole")
            .type_only()
            .build();
        assert_eq!(i, "import type { DirectusRole } from \"@directus/sdk\";\n");
    }

    #[test]
    fn test_empty_import_renders_nothing() {
        assert_eq!(Import::new("@directus/sdk").type_only().build(), "");
    }
}
