//! `typegen.toml` project configuration.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, GenerateOptions, Result, error::SourceContext};

/// Root of a `typegen.toml` file.
///
/// ```toml
/// [input]
/// snapshot = "schema/snapshot.json"
///
/// [output]
/// path = "src/types/directus.ts"
/// name_prefix = "Cms"
/// declaration_style = "type"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TypegenToml {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InputConfig {
    /// Path to the schema snapshot JSON file.
    pub snapshot: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OutputConfig {
    /// Where the declarations are written. Stdout when absent.
    pub path: Option<PathBuf>,
    #[serde(flatten)]
    pub options: GenerateOptions,
}

impl FromStr for TypegenToml {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "typegen.toml")
    }
}

impl TypegenToml {
    /// Parse a typegen.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a typegen.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Self = toml::from_str(content).map_err(|e| ctx.config_error(e))?;
        config.output.options.validate()?;
        Ok(config)
    }
}
