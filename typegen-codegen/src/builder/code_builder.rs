//! Code builder for properly indented declaration text.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building indented text.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) for incremental emission.
///
/// # Example
///
/// ```
/// use directus_typegen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .line("export interface Post {")
///     .indent()
///     .line("id: number;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "export interface Post {\n  id: number;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a `// text` comment line.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Consume the builder and return the generated text.
    pub fn build(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        let width = self.indent_level * self.indent.width();
        self.buffer.extend(std::iter::repeat_n(' ', width));
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}
