//! Settings merged from `typegen.toml`, command-line flags and the environment.

use std::path::{Path, PathBuf};

use clap::Args;
use directus_typegen_schema::{DeclarationStyle, GenerateOptions, TypegenToml};
use eyre::{Result, eyre};
use tracing::debug;

pub const DEFAULT_CONFIG: &str = "typegen.toml";

/// Where the snapshot comes from and which config file to read.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Path to the schema snapshot JSON file
    #[arg(short, long, env = "DIRECTUS_TYPEGEN_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// Path to typegen.toml (defaults to ./typegen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Flags overriding the `[output]` table of typegen.toml.
#[derive(Debug, Clone, Default, Args)]
pub struct OptionArgs {
    /// Prepended to every generated type name
    #[arg(long)]
    pub name_prefix: Option<String>,

    /// Appended to every generated type name
    #[arg(long)]
    pub name_suffix: Option<String>,

    /// Declare collections as `interface` or `type`
    #[arg(long, value_name = "STYLE")]
    pub declaration_style: Option<DeclarationStyle>,

    /// Name of the aggregate schema declaration
    #[arg(long)]
    pub schema_type_name: Option<String>,

    /// Treat required fields as non-nullable
    #[arg(long)]
    pub required_not_nullable: bool,

    /// Do not import the SDK's system collection types
    #[arg(long)]
    pub no_system_types: bool,

    /// Leave out fields the CMS marks as system fields
    #[arg(long)]
    pub suppress_system_fields: bool,
}

impl OptionArgs {
    /// Apply the flags that were given on top of `options`.
    pub fn apply(&self, options: &mut GenerateOptions) {
        if let Some(prefix) = &self.name_prefix {
            options.name_prefix = prefix.clone();
        }
        if let Some(suffix) = &self.name_suffix {
            options.name_suffix = suffix.clone();
        }
        if let Some(style) = self.declaration_style {
            options.declaration_style = style;
        }
        if let Some(name) = &self.schema_type_name {
            options.schema_type_name = name.clone();
        }
        if self.required_not_nullable {
            options.required_not_nullable = true;
        }
        if self.no_system_types {
            options.include_system_types = false;
        }
        if self.suppress_system_fields {
            options.suppress_system_fields = true;
        }
    }
}

/// Fully merged settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub snapshot: PathBuf,
    pub output: Option<PathBuf>,
    pub options: GenerateOptions,
}

impl Settings {
    /// Merge the config file with flags. Flags win; a flag left unset falls
    /// back to its environment variable before the file is consulted.
    pub fn merge(
        file: TypegenToml,
        source: &SourceArgs,
        flags: &OptionArgs,
        output: Option<&Path>,
    ) -> Result<Self> {
        let TypegenToml {
            input,
            output: file_output,
        } = file;

        let snapshot = source
            .snapshot
            .clone()
            .or(input.snapshot)
            .ok_or_else(|| eyre!("no snapshot given; pass --snapshot or set [input] snapshot"))?;

        let mut options = file_output.options;
        flags.apply(&mut options);
        options.validate()?;

        Ok(Self {
            snapshot,
            output: output.map(Path::to_path_buf).or(file_output.path),
            options,
        })
    }
}

/// Read the config file. An explicit path must exist; the default one is optional.
pub fn load_config(path: Option<&Path>) -> directus_typegen_schema::Result<TypegenToml> {
    match path {
        Some(path) => TypegenToml::from_file(path),
        None if Path::new(DEFAULT_CONFIG).exists() => {
            debug!(path = DEFAULT_CONFIG, "using config file");
            TypegenToml::from_file(DEFAULT_CONFIG)
        }
        None => Ok(TypegenToml::default()),
    }
}
