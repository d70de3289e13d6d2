//! Reading WKT token streams, writing WKT text, and interoperability with the `geo` crate.

pub mod geo;
pub mod wkt;
