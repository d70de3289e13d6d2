use num_enum::{IntoPrimitive, TryFromPrimitive};
use phf::phf_map;
use serde::Serialize;

/// The geometry variants a WKT literal can describe.
///
/// Discriminants are the 2D ISO WKB geometry type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, Serialize)]
#[repr(u32)]
pub enum GeometryKind {
    /// Fallback for keywords the registry does not recognize.
    Geometry = 0,
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

impl GeometryKind {
    /// The canonical WKT keyword for this variant.
    pub fn keyword(&self) -> &'static str {
        match self {
            GeometryKind::Geometry => "GEOMETRY",
            GeometryKind::Point => "POINT",
            GeometryKind::LineString => "LINESTRING",
            GeometryKind::Polygon => "POLYGON",
            GeometryKind::MultiPoint => "MULTIPOINT",
            GeometryKind::MultiLineString => "MULTILINESTRING",
            GeometryKind::MultiPolygon => "MULTIPOLYGON",
            GeometryKind::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }

    /// Whether this variant is a sequence of child geometries rather than a list of points.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            GeometryKind::MultiPoint
                | GeometryKind::MultiLineString
                | GeometryKind::MultiPolygon
                | GeometryKind::GeometryCollection
        )
    }

    /// The variant of members that a multi-geometry holds without repeating their keyword.
    pub fn member_kind(&self) -> Option<GeometryKind> {
        match self {
            GeometryKind::MultiPoint => Some(GeometryKind::Point),
            GeometryKind::MultiLineString => Some(GeometryKind::LineString),
            GeometryKind::MultiPolygon => Some(GeometryKind::Polygon),
            _ => None,
        }
    }
}

/// Resolves an uppercase type keyword to the geometry variant it names.
///
/// A registry never consumes tokens. Returning `None` makes the parser fall back to
/// [`GeometryKind::Geometry`].
pub trait TypeRegistry {
    fn resolve(&self, keyword: &str) -> Option<GeometryKind>;
}

static STANDARD_KEYWORDS: phf::Map<&'static str, GeometryKind> = phf_map! {
    "POINT" => GeometryKind::Point,
    "LINESTRING" => GeometryKind::LineString,
    "LINEARRING" => GeometryKind::LineString,
    "POLYGON" => GeometryKind::Polygon,
    "MULTIPOINT" => GeometryKind::MultiPoint,
    "MULTILINESTRING" => GeometryKind::MultiLineString,
    "MULTIPOLYGON" => GeometryKind::MultiPolygon,
    "GEOMETRYCOLLECTION" => GeometryKind::GeometryCollection,
};

/// The registry of the seven Simple Features geometry keywords.
///
/// `LINEARRING`, as written by some producers, resolves to a line string.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRegistry;

impl TypeRegistry for StandardRegistry {
    fn resolve(&self, keyword: &str) -> Option<GeometryKind> {
        STANDARD_KEYWORDS.get(keyword).copied()
    }
}
