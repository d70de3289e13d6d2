use std::fmt::Display;

use serde::Serialize;

/// The coordinate dimension of a geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Dimension {
    /// Two-dimensional.
    #[default]
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    pub fn from_flags(has_altitude: bool, has_measure: bool) -> Self {
        match (has_altitude, has_measure) {
            (false, false) => Dimension::XY,
            (true, false) => Dimension::XYZ,
            (false, true) => Dimension::XYM,
            (true, true) => Dimension::XYZM,
        }
    }

    /// Parse a standalone dimensionality suffix token such as `Z`, `M` or `ZM`.
    ///
    /// Matching is case-insensitive and `MZ` is accepted as a synonym of `ZM`. An empty suffix
    /// parses as [`Dimension::XY`], which sets no flags.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        if suffix.len() > 2 {
            return None;
        }
        match suffix.to_ascii_uppercase().as_str() {
            "" => Some(Dimension::XY),
            "Z" => Some(Dimension::XYZ),
            "M" => Some(Dimension::XYM),
            "ZM" | "MZ" => Some(Dimension::XYZM),
            _ => None,
        }
    }

    /// Split a trailing dimensionality suffix off a type keyword, e.g. `POINTZM` into `POINT`
    /// and [`Dimension::XYZM`].
    ///
    /// The keyword is expected to be uppercase already. A suffix is only split off when at least
    /// one character of the keyword remains.
    pub fn split_keyword(keyword: &str) -> (&str, Self) {
        for (suffix, dim) in [
            ("ZM", Dimension::XYZM),
            ("MZ", Dimension::XYZM),
            ("Z", Dimension::XYZ),
            ("M", Dimension::XYM),
        ] {
            if let Some(stem) = keyword.strip_suffix(suffix) {
                if !stem.is_empty() {
                    return (stem, dim);
                }
            }
        }
        (keyword, Dimension::XY)
    }

    pub fn has_altitude(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    pub fn has_measure(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }

    /// Returns the number of dimensions.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    /// The suffix written after a type keyword in WKT, including its leading space.
    pub(crate) fn wkt_suffix(&self) -> &'static str {
        match self {
            Dimension::XY => "",
            Dimension::XYZ => " Z",
            Dimension::XYM => " M",
            Dimension::XYZM => " ZM",
        }
    }

    /// Offset added to the 2D ISO WKB type code for this dimension.
    pub(crate) fn iso_offset(&self) -> u32 {
        match self {
            Dimension::XY => 0,
            Dimension::XYZ => 1000,
            Dimension::XYM => 2000,
            Dimension::XYZM => 3000,
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_suffix() {
        assert_eq!(Dimension::from_suffix("z"), Some(Dimension::XYZ));
        assert_eq!(Dimension::from_suffix("M"), Some(Dimension::XYM));
        assert_eq!(Dimension::from_suffix("zm"), Some(Dimension::XYZM));
        assert_eq!(Dimension::from_suffix("MZ"), Some(Dimension::XYZM));
        assert_eq!(Dimension::from_suffix(""), Some(Dimension::XY));
        assert_eq!(Dimension::from_suffix("ZZ"), None);
        assert_eq!(Dimension::from_suffix("EMPTY"), None);
    }

    #[test]
    fn split_keyword() {
        assert_eq!(Dimension::split_keyword("POINTZ"), ("POINT", Dimension::XYZ));
        assert_eq!(Dimension::split_keyword("POINTM"), ("POINT", Dimension::XYM));
        assert_eq!(
            Dimension::split_keyword("MULTIPOLYGONZM"),
            ("MULTIPOLYGON", Dimension::XYZM)
        );
        assert_eq!(Dimension::split_keyword("POLYGON"), ("POLYGON", Dimension::XY));
        assert_eq!(Dimension::split_keyword("Z"), ("Z", Dimension::XY));
    }

    #[test]
    fn flags_round_trip() {
        for dim in [
            Dimension::XY,
            Dimension::XYZ,
            Dimension::XYM,
            Dimension::XYZM,
        ] {
            assert_eq!(
                Dimension::from_flags(dim.has_altitude(), dim.has_measure()),
                dim
            );
        }
        assert_eq!(Dimension::XYZM.size(), 4);
        assert_eq!(Dimension::XYM.to_string(), "XYM");
    }
}
