//! Language-agnostic code generation traits.

use eyre::Result;

/// Trait for language-specific declaration emitters.
///
/// An emitter is built from a finished
/// [`CompilationContext`](crate::pipeline::CompilationContext) and turns the
/// resolved schema into source text.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated files (e.g., "ts")
    fn file_extension(&self) -> &'static str;

    /// Render every declaration into a single source string.
    fn compile(&self) -> Result<String>;
}

/// Trait for mapping CMS scalar type ids to language-specific type strings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a CMS type id (`string`, `integer`, `geometry.Point`, ...).
    ///
    /// Unrecognized ids map to the language's open type.
    fn map_scalar(&self, ty: &str) -> &'static str;

    /// The language's open type, used where nothing more precise is known.
    fn unknown(&self) -> &'static str;

    /// Whether `ty` maps to something other than the open type.
    fn is_known(&self, ty: &str) -> bool {
        self.map_scalar(ty) != self.unknown()
    }
}
