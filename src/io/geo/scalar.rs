use crate::error::{Result, WktError};
use crate::io::wkt::reader::{GeometryKind, GeometryObject};

fn expect_kind(geom: &GeometryObject, expected: GeometryKind) -> Result<()> {
    match geom.geometry_type() {
        Some(kind) if kind == expected => Ok(()),
        other => Err(WktError::IncorrectGeometryType(format!(
            "expected {expected:?}, found {other:?}"
        ))),
    }
}

/// Convert a point to a [`geo::Point`], or `None` for `POINT EMPTY`.
///
/// Only the first two dimensions will be kept.
pub fn point_to_geo(geom: &GeometryObject) -> Result<Option<geo::Point>> {
    expect_kind(geom, GeometryKind::Point)?;
    Ok(geom.points().first().map(|coord| geo::Point((*coord).into())))
}

/// Convert a line string to a [`geo::LineString`].
///
/// Only the first two dimensions will be kept.
pub fn line_string_to_geo(geom: &GeometryObject) -> Result<geo::LineString> {
    expect_kind(geom, GeometryKind::LineString)?;
    Ok(geom.points().iter().map(|coord| geo::Coord::from(*coord)).collect())
}

/// Convert a polygon to a [`geo::Polygon`]. The first ring is the exterior.
///
/// Only the first two dimensions will be kept.
pub fn polygon_to_geo(geom: &GeometryObject) -> Result<geo::Polygon> {
    expect_kind(geom, GeometryKind::Polygon)?;
    let mut rings = geom.parts().into_iter().map(|ring| {
        ring.iter()
            .map(|coord| geo::Coord::from(*coord))
            .collect::<geo::LineString>()
    });
    let exterior = rings.next().unwrap_or_else(|| geo::LineString::new(vec![]));
    Ok(geo::Polygon::new(exterior, rings.collect()))
}

/// Convert a multi point to a [`geo::MultiPoint`], skipping empty members.
///
/// Only the first two dimensions will be kept.
pub fn multi_point_to_geo(geom: &GeometryObject) -> Result<geo::MultiPoint> {
    expect_kind(geom, GeometryKind::MultiPoint)?;
    let mut points = Vec::with_capacity(geom.children().len());
    for child in geom.children() {
        if let Some(point) = point_to_geo(child)? {
            points.push(point);
        }
    }
    Ok(geo::MultiPoint::new(points))
}

/// Convert a multi line string to a [`geo::MultiLineString`].
///
/// Only the first two dimensions will be kept.
pub fn multi_line_string_to_geo(geom: &GeometryObject) -> Result<geo::MultiLineString> {
    expect_kind(geom, GeometryKind::MultiLineString)?;
    let lines = geom
        .children()
        .iter()
        .map(line_string_to_geo)
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::MultiLineString::new(lines))
}

/// Convert a multi polygon to a [`geo::MultiPolygon`].
///
/// Only the first two dimensions will be kept.
pub fn multi_polygon_to_geo(geom: &GeometryObject) -> Result<geo::MultiPolygon> {
    expect_kind(geom, GeometryKind::MultiPolygon)?;
    let polygons = geom
        .children()
        .iter()
        .map(polygon_to_geo)
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::MultiPolygon::new(polygons))
}

/// Convert a geometry collection to a [`geo::GeometryCollection`].
///
/// Only the first two dimensions will be kept.
pub fn geometry_collection_to_geo(geom: &GeometryObject) -> Result<geo::GeometryCollection> {
    expect_kind(geom, GeometryKind::GeometryCollection)?;
    let geometries = geom
        .children()
        .iter()
        .map(geometry_to_geo)
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::GeometryCollection::new_from(geometries))
}

/// Convert any finished geometry to a [`geo::Geometry`].
///
/// `geo` has no empty point, so `POINT EMPTY` becomes an empty [`geo::MultiPoint`]. Generic
/// geometries with unrecognized keywords cannot be converted.
///
/// Only the first two dimensions will be kept.
pub fn geometry_to_geo(geom: &GeometryObject) -> Result<geo::Geometry> {
    if !geom.is_finished() {
        return Err(WktError::NotFinished);
    }

    let geometry = match geom.geometry_type() {
        Some(GeometryKind::Point) => match point_to_geo(geom)? {
            Some(point) => geo::Geometry::Point(point),
            None => geo::Geometry::MultiPoint(geo::MultiPoint::new(vec![])),
        },
        Some(GeometryKind::LineString) => geo::Geometry::LineString(line_string_to_geo(geom)?),
        Some(GeometryKind::Polygon) => geo::Geometry::Polygon(polygon_to_geo(geom)?),
        Some(GeometryKind::MultiPoint) => geo::Geometry::MultiPoint(multi_point_to_geo(geom)?),
        Some(GeometryKind::MultiLineString) => {
            geo::Geometry::MultiLineString(multi_line_string_to_geo(geom)?)
        }
        Some(GeometryKind::MultiPolygon) => {
            geo::Geometry::MultiPolygon(multi_polygon_to_geo(geom)?)
        }
        Some(GeometryKind::GeometryCollection) => {
            geo::Geometry::GeometryCollection(geometry_collection_to_geo(geom)?)
        }
        Some(GeometryKind::Geometry) | None => {
            return Err(WktError::IncorrectGeometryType(format!(
                "cannot convert {} to geo",
                geom.keyword().unwrap_or("untyped geometry")
            )))
        }
    };
    Ok(geometry)
}

impl GeometryObject {
    /// Hand a finished geometry over for rendering, as a [`geo::Geometry`].
    pub fn shapes(&self) -> Result<geo::Geometry> {
        geometry_to_geo(self)
    }
}

impl TryFrom<&GeometryObject> for geo::Geometry {
    type Error = WktError;

    fn try_from(value: &GeometryObject) -> Result<Self> {
        geometry_to_geo(value)
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use geo::{coord, line_string, point, polygon, Area};

    use super::*;
    use crate::test::parse_wkt;
    use crate::token::Token;

    #[test]
    fn point() {
        let geom = parse_wkt("POINT Z (1 2 3)");
        assert_eq!(geom.shapes().unwrap(), geo::Geometry::Point(point!(x: 1., y: 2.)));
    }

    #[test]
    fn empty_point() {
        let geom = parse_wkt("POINT EMPTY");
        assert_eq!(
            geometry_to_geo(&geom).unwrap(),
            geo::Geometry::MultiPoint(geo::MultiPoint::new(vec![]))
        );
    }

    #[test]
    fn line_string() {
        let geom = parse_wkt("LINESTRING (0 0, 1 1, 2 2)");
        assert_eq!(
            line_string_to_geo(&geom).unwrap(),
            line_string![(x: 0., y: 0.), (x: 1., y: 1.), (x: 2., y: 2.)]
        );
    }

    #[test]
    fn polygon_with_hole() {
        let geom = parse_wkt("POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0), (1 1, 2 1, 2 2, 1 2, 1 1))");
        let polygon = polygon_to_geo(&geom).unwrap();
        assert_eq!(polygon.interiors().len(), 1);
        assert_relative_eq!(polygon.unsigned_area(), 15.);
        assert_eq!(
            polygon.exterior().0[1],
            coord! { x: 4., y: 0. }
        );
    }

    #[test]
    fn multi_polygon() {
        let geom = parse_wkt("MULTIPOLYGON (((0 0, 1 0, 1 1, 0 1, 0 0)), ((5 5, 7 5, 7 7, 5 7, 5 5)))");
        let multi = multi_polygon_to_geo(&geom).unwrap();
        assert_eq!(multi.0.len(), 2);
        assert_relative_eq!(multi.unsigned_area(), 5.);
        assert_eq!(
            multi.0[0],
            polygon![(x: 0., y: 0.), (x: 1., y: 0.), (x: 1., y: 1.), (x: 0., y: 1.), (x: 0., y: 0.)]
        );
    }

    #[test]
    fn multi_point_skips_empty() {
        let geom = parse_wkt("MULTIPOINT (EMPTY, (1 2), 3 4)");
        let multi = multi_point_to_geo(&geom).unwrap();
        assert_eq!(multi.0, vec![point!(x: 1., y: 2.), point!(x: 3., y: 4.)]);
    }

    #[test]
    fn collection() {
        let geom = parse_wkt("GEOMETRYCOLLECTION (POINT (1 1), MULTILINESTRING ((0 0, 1 1)))");
        let geo::Geometry::GeometryCollection(collection) = geom.shapes().unwrap() else {
            panic!("expected a geometry collection");
        };
        assert_eq!(collection.0.len(), 2);
        assert!(matches!(collection.0[1], geo::Geometry::MultiLineString(_)));
    }

    #[test]
    fn unfinished() {
        let mut geom = GeometryObject::new();
        geom.handle_token(Token::Text("POINT")).unwrap();
        geom.handle_token(Token::LeftParen).unwrap();
        assert_eq!(geom.shapes(), Err(WktError::NotFinished));
    }

    #[test]
    fn generic_geometry() {
        let geom = parse_wkt("CIRCULARSTRING (0 0, 1 1, 2 0)");
        assert!(matches!(
            geo::Geometry::try_from(&geom),
            Err(WktError::IncorrectGeometryType(_))
        ));
    }

    #[test]
    fn wrong_member_type() {
        let geom = parse_wkt("MULTILINESTRING (POINT (1 2))");
        assert!(matches!(
            multi_line_string_to_geo(&geom),
            Err(WktError::IncorrectGeometryType(_))
        ));
    }
}
