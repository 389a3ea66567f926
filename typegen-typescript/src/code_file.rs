//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Organizes a declaration file into an import section followed by body
//! blocks, each separated by one blank line.

use directus_typegen_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::Import;

/// A structured representation of a TypeScript declaration file.
///
/// # Example
///
/// ```ignore
/// let file = CodeFile::new()
///     .import(Import::new("@directus/sdk").named("DirectusUser").type_only())
///     .add(schema_declaration)
///     .render();
/// ```
#[derive(Debug, Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import statement. Empty imports are ignored.
    pub fn import(mut self, import: Import) -> Self {
        if !import.is_empty() {
            self.imports.push(import);
        }
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Add a `// text` line as its own body element.
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.body.push(vec![CodeFragment::Comment(text.into())]);
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        for import in &self.imports {
            builder.emit(import);
        }

        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty()
    }
}
