//! Diagnostics collected while compiling a snapshot.
//!
//! Malformed input never aborts a run; it is reported here instead and the
//! affected field degrades.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Prevents further processing.
    Error,
    /// Input that is probably wrong; output is still produced.
    Warning,
    /// A degradation decision, e.g. a relation that could not be resolved.
    Info,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }

    pub fn is_info(&self) -> bool {
        matches!(self, Severity::Info)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A message from a pipeline phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// The phase that produced this diagnostic.
    pub phase: String,
    pub message: String,
    /// Where in the schema, e.g. `posts.author`.
    pub location: Option<String>,
}

impl Diagnostic {
    fn new(severity: Severity, phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            phase: phase.into(),
            message: message.into(),
            location: None,
        }
    }

    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, phase, message)
    }

    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, phase, message)
    }

    pub fn info(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, phase, message)
    }

    /// Attach a schema location.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}
