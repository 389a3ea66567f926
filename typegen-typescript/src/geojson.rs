//! The fixed GeoJSON shape declarations referenced by geometry fields.

use directus_typegen_schema::DeclarationStyle;

use crate::ast::{Declaration, Member};

pub const GEOJSON_COMMENT: &str = "GeoJSON Types";

const POSITION: &str = "[number, number]";

/// Single geometry shapes as `(type name, discriminator, coordinates)`.
const SHAPES: &[(&str, &str, &str)] = &[
    ("GeoJSONPoint", "Point", POSITION),
    ("GeoJSONLineString", "LineString", "Array<[number, number]>"),
    ("GeoJSONPolygon", "Polygon", "Array<Array<[number, number]>>"),
    ("GeoJSONMultiPoint", "MultiPoint", "Array<[number, number]>"),
    (
        "GeoJSONMultiLineString",
        "MultiLineString",
        "Array<Array<[number, number]>>",
    ),
    (
        "GeoJSONMultiPolygon",
        "MultiPolygon",
        "Array<Array<Array<[number, number]>>>",
    ),
];

/// All seven declarations, the geometry collection last.
pub fn geojson_declarations(style: DeclarationStyle) -> Vec<Declaration> {
    let mut declarations: Vec<Declaration> = SHAPES
        .iter()
        .map(|(name, kind, coordinates)| {
            Declaration::new(
                style,
                *name,
                [
                    Member::property("type", format!("\"{kind}\"")),
                    Member::property("coordinates", *coordinates),
                ],
            )
        })
        .collect();

    declarations.push(Declaration::new(
        style,
        "GeoJSONGeometryCollection",
        [
            Member::property("type", "\"GeometryCollection\""),
            Member::union_array(
                "geometries",
                SHAPES.iter().map(|(name, _, _)| name.to_string()).collect(),
            ),
        ],
    ));

    declarations
}
