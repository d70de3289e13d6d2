//! Coordinate tuples stored by a parsed geometry.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::dimension::Dimension;

/// A single coordinate tuple.
///
/// `z` is `Some` exactly when the owning geometry has altitude and `m` is `Some` exactly when it
/// has a measure, so every coordinate of one geometry has the same arity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m: Option<f64>,
}

impl Coord {
    /// Build a coordinate from ordinates in WKT order: `x y [z] [m]`.
    ///
    /// Returns `None` when fewer than two ordinates are given. A missing altitude or measure
    /// defaults to 0, and ordinates beyond the dimension are dropped.
    pub fn from_ordinates(ordinates: &[f64], dim: Dimension) -> Option<Self> {
        let [x, y, rest @ ..] = ordinates else {
            return None;
        };
        let mut rest = rest.iter().copied();
        let z = dim.has_altitude().then(|| rest.next().unwrap_or(0.0));
        let m = dim.has_measure().then(|| rest.next().unwrap_or(0.0));

        let dropped = rest.count();
        if dropped > 0 {
            debug!(dropped, %dim, "dropping ordinates beyond coordinate dimension");
        }

        Some(Self {
            x: *x,
            y: *y,
            z,
            m,
        })
    }

    pub fn dim(&self) -> Dimension {
        Dimension::from_flags(self.z.is_some(), self.m.is_some())
    }
}

impl From<Coord> for geo::Coord {
    fn from(value: Coord) -> Self {
        geo::Coord {
            x: value.x,
            y: value.y,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)?;
        if let Some(z) = self.z {
            write!(f, " {z}")?;
        }
        if let Some(m) = self.m {
            write!(f, " {m}")?;
        }
        Ok(())
    }
}
