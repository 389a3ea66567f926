//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Declaration nodes describe themselves as fragments; only [`CodeBuilder`]
//! knows about indentation and line endings.
//!
//! [`CodeBuilder`]: super::CodeBuilder

/// A fragment of generated declaration text.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line (a newline is appended).
    Line(String),
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments.
    Indent(Vec<CodeFragment>),
    /// A `// ...` line comment.
    Comment(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }
}

/// Types that can be rendered to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_fragment_constructors() {
        assert_eq!(
            CodeFragment::line("posts: Post[];"),
            CodeFragment::Line("posts: Post[];".to_string())
        );
        assert_eq!(
            CodeFragment::comment("GeoJSON Types"),
            CodeFragment::Comment("GeoJSON Types".to_string())
        );
    }

    #[test]
    fn test_block_fragment() {
        let block = CodeFragment::block(
            "export interface Post {",
            vec![CodeFragment::line("id: number;")],
            Some("}".to_string()),
        );
        match block {
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                assert_eq!(header, "export interface Post {");
                assert_eq!(body.len(), 1);
                assert_eq!(close, Some("}".to_string()));
            }
            _ => panic!("Expected Block variant"),
        }
    }
}
