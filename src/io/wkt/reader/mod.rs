//! Rebuild a geometry tree from a stream of WKT tokens.

mod accumulator;
mod api;
mod geometry;
mod r#type;

pub use api::{parse_tokens, ParseOptions, WktStreamReader};
pub use geometry::GeometryObject;
pub use r#type::{GeometryKind, StandardRegistry, TypeRegistry};
