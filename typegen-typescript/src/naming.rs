//! Type naming for collections.

use directus_typegen_core::{sanitize_type_name, singularize, to_pascal_case};
use directus_typegen_schema::GenerateOptions;

/// Type names exported by `@directus/sdk` for the builtin collections.
pub const SYSTEM_TYPES: &[(&str, &str)] = &[
    ("directus_users", "DirectusUser"),
    ("directus_roles", "DirectusRole"),
    ("directus_permissions", "DirectusPermission"),
    ("directus_settings", "DirectusSettings"),
    ("directus_files", "DirectusFile"),
    ("directus_folders", "DirectusFolder"),
    ("directus_activity", "DirectusActivity"),
    ("directus_notifications", "DirectusNotification"),
    ("directus_shares", "DirectusShare"),
    ("directus_flows", "DirectusFlow"),
    ("directus_operations", "DirectusOperation"),
    ("directus_panels", "DirectusPanel"),
    ("directus_dashboards", "DirectusDashboard"),
    ("directus_translations", "DirectusTranslation"),
    ("directus_versions", "DirectusVersion"),
    ("directus_revisions", "DirectusRevision"),
    ("directus_webhooks", "DirectusWebhook"),
    ("directus_presets", "DirectusPreset"),
    ("directus_relations", "DirectusRelation"),
    ("directus_fields", "DirectusField"),
    ("directus_collections", "DirectusCollection"),
];

/// The SDK type name of a builtin collection.
pub fn reserved_type_name(collection: &str) -> Option<&'static str> {
    SYSTEM_TYPES
        .iter()
        .find(|(name, _)| *name == collection)
        .map(|(_, ty)| *ty)
}

/// Naming policy for generated collection types.
#[derive(Debug, Clone, Default)]
pub struct TypeNamer {
    prefix: String,
    suffix: String,
    system_prefix: String,
}

impl TypeNamer {
    pub fn new(options: &GenerateOptions) -> Self {
        Self {
            prefix: options.name_prefix.clone(),
            suffix: options.name_suffix.clone(),
            system_prefix: options.system_type_prefix.clone(),
        }
    }

    /// Type name of a user collection.
    ///
    /// Each `_`-delimited token is singularized unless the collection is a
    /// singleton or the token ends in "data", then pascal-cased.
    pub fn collection(&self, name: &str, singleton: bool) -> String {
        let base: String = sanitize_type_name(name)
            .split('_')
            .map(|token| {
                if singleton || token.to_lowercase().ends_with("data") {
                    token.to_string()
                } else {
                    singularize(token)
                }
            })
            .map(|token| to_pascal_case(&token))
            .collect();

        // A leading digit would not be a valid identifier
        let base = if base.starts_with(|c: char| c.is_ascii_digit()) {
            format!("_{base}")
        } else {
            base
        };

        format!("{}{}{}", self.prefix, base, self.suffix)
    }

    /// Declaration name for the custom fields of a builtin collection,
    /// e.g. `CustomDirectusUser`.
    pub fn custom_system(&self, reserved: &str) -> String {
        format!("{}{}", self.system_prefix, reserved)
    }
}
