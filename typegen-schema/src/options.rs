//! Options controlling the shape of the generated declarations.

use std::{fmt, str::FromStr};

use directus_typegen_core::is_identifier;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How each collection type is declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationStyle {
    /// `export interface Post { ... }`
    #[default]
    Interface,
    /// `export type Post = { ... };`
    Type,
}

impl DeclarationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationStyle::Interface => "interface",
            DeclarationStyle::Type => "type",
        }
    }
}

impl fmt::Display for DeclarationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeclarationStyle {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "interface" => Ok(DeclarationStyle::Interface),
            "type" => Ok(DeclarationStyle::Type),
            _ => Err(Error::invalid_option(
                "declaration_style",
                s,
                "expected 'interface' or 'type'",
            )),
        }
    }
}

/// Generation options.
///
/// Every field has a default, so a partial `[output]` table or an empty
/// struct literal with `..Default::default()` is enough.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Prepended to every synthesized type name.
    pub name_prefix: String,
    /// Appended to every synthesized type name.
    pub name_suffix: String,
    pub declaration_style: DeclarationStyle,
    /// Treat required fields as non-nullable.
    pub required_not_nullable: bool,
    /// Import the SDK's system collection types.
    pub include_system_types: bool,
    /// Name of the aggregate schema declaration.
    pub schema_type_name: String,
    /// Prefix of declarations holding custom fields of system collections.
    pub system_type_prefix: String,
    /// Drop fields the CMS marks as system fields.
    pub suppress_system_fields: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            name_prefix: String::new(),
            name_suffix: String::new(),
            declaration_style: DeclarationStyle::default(),
            required_not_nullable: false,
            include_system_types: true,
            schema_type_name: "Schema".to_string(),
            system_type_prefix: "Custom".to_string(),
            suppress_system_fields: false,
        }
    }
}

impl GenerateOptions {
    /// Check that every name fragment yields valid TypeScript identifiers.
    pub fn validate(&self) -> Result<()> {
        if !self.name_prefix.is_empty() && !is_identifier(&self.name_prefix) {
            return Err(Error::invalid_option(
                "name_prefix",
                &self.name_prefix,
                "the prefix must start with a letter, '_' or '$' and contain only letters, digits, '_' or '$'",
            ));
        }

        if !self.name_suffix.is_empty() && !is_identifier(&format!("_{}", self.name_suffix)) {
            return Err(Error::invalid_option(
                "name_suffix",
                &self.name_suffix,
                "the suffix may contain only letters, digits, '_' or '$'",
            ));
        }

        if !is_identifier(&self.schema_type_name) {
            return Err(Error::invalid_option(
                "schema_type_name",
                &self.schema_type_name,
                "the aggregate schema name must be a valid identifier",
            ));
        }

        if !is_identifier(&self.system_type_prefix) {
            return Err(Error::invalid_option(
                "system_type_prefix",
                &self.system_type_prefix,
                "the prefix must be a non-empty identifier so custom system types do not shadow SDK imports",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GenerateOptions::default();
        assert_eq!(options.declaration_style, DeclarationStyle::Interface);
        assert_eq!(options.schema_type_name, "Schema");
        assert_eq!(options.system_type_prefix, "Custom");
        assert!(options.include_system_types);
        assert!(!options.required_not_nullable);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_declaration_style_from_str() {
        assert_eq!(
            "interface".parse::<DeclarationStyle>().unwrap(),
            DeclarationStyle::Interface
        );
        assert_eq!(
            "type".parse::<DeclarationStyle>().unwrap(),
            DeclarationStyle::Type
        );

        let err = "class".parse::<DeclarationStyle>().unwrap_err();
        assert!(matches!(*err, Error::InvalidOption { .. }));
    }

    #[test]
    fn test_declaration_style_display() {
        assert_eq!(DeclarationStyle::Type.to_string(), "type");
        assert_eq!(DeclarationStyle::Interface.to_string(), "interface");
    }

    #[test]
    fn test_validate_prefix_and_suffix() {
        let options = GenerateOptions {
            name_prefix: "Cms".to_string(),
            name_suffix: "2".to_string(),
            ..Default::default()
        };
        assert!(options.validate().is_ok());

        let options = GenerateOptions {
            name_prefix: "my-".to_string(),
            ..Default::default()
        };
        assert!(options.validate().is_err());

        let options = GenerateOptions {
            name_prefix: "1st".to_string(),
            ..Default::default()
        };
        assert!(options.validate().is_err());

        let options = GenerateOptions {
            name_suffix: " Type".to_string(),
            ..Default::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_validate_names() {
        let options = GenerateOptions {
            schema_type_name: String::new(),
            ..Default::default()
        };
        assert!(options.validate().is_err());

        let options = GenerateOptions {
            system_type_prefix: String::new(),
            ..Default::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let options: GenerateOptions =
            toml::from_str("name_prefix = \"Cms\"\ndeclaration_style = \"type\"").unwrap();
        assert_eq!(options.name_prefix, "Cms");
        assert_eq!(options.declaration_style, DeclarationStyle::Type);
        assert_eq!(options.schema_type_name, "Schema");
    }
}
