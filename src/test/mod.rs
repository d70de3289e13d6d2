pub(crate) mod tokens;

use crate::io::wkt::reader::{parse_tokens, GeometryObject, ParseOptions};

/// Parse WKT text that is known to describe one complete geometry.
pub(crate) fn parse_wkt(text: &str) -> GeometryObject {
    parse_tokens(tokens::tokenize(text), &ParseOptions::default()).unwrap()
}
