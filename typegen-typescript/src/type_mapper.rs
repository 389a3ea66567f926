//! TypeScript type mapper implementation.

use directus_typegen_codegen::language::TypeMapper;

/// Maps CMS scalar type ids to TypeScript types.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_scalar(&self, ty: &str) -> &'static str {
        match ty {
            "string" | "text" | "uuid" | "hash" => "string",
            // Directus SDK marker for temporal values
            "date" | "time" | "dateTime" | "timestamp" => "\"datetime\"",
            "integer" | "bigInteger" | "float" | "decimal" => "number",
            "boolean" => "boolean",
            "geometry" => "GeoJSONGeometryCollection",
            "geometry.Point" => "GeoJSONPoint",
            "geometry.LineString" => "GeoJSONLineString",
            "geometry.Polygon" => "GeoJSONPolygon",
            "geometry.MultiPoint" => "GeoJSONMultiPoint",
            "geometry.MultiLineString" => "GeoJSONMultiLineString",
            "geometry.MultiPolygon" => "GeoJSONMultiPolygon",
            _ => self.unknown(),
        }
    }

    fn unknown(&self) -> &'static str {
        "unknown"
    }
}
