use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema loading operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "snapshot.json");
/// ctx.snapshot_error(err);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a snapshot parse error from a serde_json error.
    pub fn snapshot_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = line_col_to_offset(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from(offset..offset));
        Box::new(Error::SnapshotParse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a config parse error from a toml error.
    pub fn config_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            src: self.named_source(),
            span,
            source,
        })
    }
}

/// Convert a 1-based line/column pair reported by serde_json into a byte offset.
fn line_col_to_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (index, text) in src.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            return Some(offset + column.saturating_sub(1).min(text.len()));
        }
        offset += text.len();
    }
    Some(src.len())
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help(
        "export the collections, fields and relations of your Directus instance into a JSON snapshot"
    ))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema snapshot")]
    #[diagnostic(
        code(typegen::snapshot_parse_error),
        help("a snapshot is an object with `collections`, `fields` and `relations` arrays")
    )]
    SnapshotParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse typegen.toml")]
    #[diagnostic(code(typegen::config_parse_error))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value '{value}' for option '{option}'")]
    #[diagnostic(code(typegen::invalid_option), help("{reason}"))]
    InvalidOption {
        option: String,
        value: String,
        reason: String,
    },
}

impl Error {
    /// Create an invalid option error
    pub fn invalid_option(
        option: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::InvalidOption {
            option: option.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_to_offset() {
        let src = "{\n  \"a\": 1,\n  oops\n}";
        assert_eq!(line_col_to_offset(src, 1, 1), Some(0));
        assert_eq!(line_col_to_offset(src, 3, 3), Some(14));
        assert_eq!(line_col_to_offset(src, 0, 0), None);
    }

    #[test]
    fn test_snapshot_error_has_span() {
        let src = "{ \"collections\": [ }";
        let err = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        let ctx = SourceContext::new(src, "snapshot.json");

        match *ctx.snapshot_error(err) {
            Error::SnapshotParse { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_option_message() {
        let err = Error::invalid_option("name_prefix", "my-prefix", "use letters only");
        assert_eq!(
            err.to_string(),
            "invalid value 'my-prefix' for option 'name_prefix'"
        );
    }
}
