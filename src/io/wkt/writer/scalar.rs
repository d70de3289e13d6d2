use std::fmt;

use itertools::Itertools;

use crate::coord::Coord;
use crate::io::wkt::reader::{GeometryKind, GeometryObject};

/// Writes the geometry as WKT, e.g. `POINT Z (1 2 3)`.
impl fmt::Display for GeometryObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = self.keyword().unwrap_or(GeometryKind::Geometry.keyword());
        write!(f, "{keyword}{} {}", self.dim().wkt_suffix(), Body(self))
    }
}

/// The tagged text of a geometry without its keyword, as nested in a multi-geometry.
struct Body<'a>(&'a GeometryObject);

impl fmt::Display for Body<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let geom = self.0;
        if geom.points().is_empty() && geom.children().is_empty() {
            return f.write_str("EMPTY");
        }

        match geom.geometry_type() {
            Some(
                kind @ (GeometryKind::MultiPoint
                | GeometryKind::MultiLineString
                | GeometryKind::MultiPolygon),
            ) => {
                let members = geom.children().iter().format_with(", ", |child, g| {
                    if is_bare_member(geom, kind, child) {
                        g(&Body(child))
                    } else {
                        g(child)
                    }
                });
                write!(f, "({members})")
            }
            Some(GeometryKind::GeometryCollection) => {
                write!(f, "({})", geom.children().iter().format(", "))
            }
            Some(GeometryKind::Polygon) => write_parts(f, &geom.parts()),
            _ => {
                let parts = geom.parts();
                if parts.len() > 1 {
                    write_parts(f, &parts)
                } else {
                    write_coords(f, geom.points())
                }
            }
        }
    }
}

/// Whether a member reads back unchanged without its keyword, i.e. it is the implicit member
/// kind with the parent's dimensionality.
fn is_bare_member(parent: &GeometryObject, kind: GeometryKind, member: &GeometryObject) -> bool {
    let implicit = kind.member_kind();
    member.geometry_type() == implicit
        && member.keyword() == implicit.map(|kind| kind.keyword())
        && member.dim() == parent.dim()
}

fn write_coords(f: &mut fmt::Formatter<'_>, coords: &[Coord]) -> fmt::Result {
    write!(f, "({})", coords.iter().format(", "))
}

fn write_parts(f: &mut fmt::Formatter<'_>, parts: &[&[Coord]]) -> fmt::Result {
    write!(
        f,
        "({})",
        parts
            .iter()
            .format_with(", ", |part, g| g(&format_args!("({})", part.iter().format(", "))))
    )
}
