use tracing::{debug, trace};

use crate::error::{Result, WktError};
use crate::io::wkt::reader::geometry::GeometryObject;
use crate::io::wkt::reader::r#type::{StandardRegistry, TypeRegistry};
use crate::token::Token;

/// Options for reading a complete WKT token stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject trees containing keywords the type registry does not recognize, instead of keeping
    /// them as generic geometries.
    pub reject_unknown_types: bool,

    /// Silently skip tokens that follow the end of the root geometry.
    pub allow_trailing_tokens: bool,
}

impl ParseOptions {
    pub fn with_reject_unknown_types(mut self, reject_unknown_types: bool) -> Self {
        self.reject_unknown_types = reject_unknown_types;
        self
    }

    pub fn with_allow_trailing_tokens(mut self, allow_trailing_tokens: bool) -> Self {
        self.allow_trailing_tokens = allow_trailing_tokens;
        self
    }
}

/// Incrementally reads one WKT geometry from tokens pushed by an external scanner.
///
/// Dropping the reader before [`finish`][Self::finish] cancels the parse and discards the
/// partial tree.
pub struct WktStreamReader<'r> {
    root: GeometryObject,
    options: ParseOptions,
    registry: &'r dyn TypeRegistry,
}

impl WktStreamReader<'static> {
    pub fn new(options: ParseOptions) -> Self {
        Self::with_registry(options, &StandardRegistry)
    }
}

impl<'r> WktStreamReader<'r> {
    pub fn with_registry(options: ParseOptions, registry: &'r dyn TypeRegistry) -> Self {
        Self {
            root: GeometryObject::new(),
            options,
            registry,
        }
    }

    /// Feed the next token to the geometry under construction.
    pub fn push(&mut self, token: Token<'_>) -> Result<()> {
        if self.root.is_finished() {
            if self.options.allow_trailing_tokens {
                trace!(%token, "skipping trailing token");
                return Ok(());
            }
            return Err(WktError::TrailingToken(token.to_string()));
        }
        self.root.handle_token_with(token, self.registry)
    }

    pub fn is_finished(&self) -> bool {
        self.root.is_finished()
    }

    /// The geometry read so far, finished or not.
    pub fn geometry(&self) -> &GeometryObject {
        &self.root
    }

    /// End the stream and return the finished root geometry.
    pub fn finish(self) -> Result<GeometryObject> {
        if !self.root.is_finished() {
            let (open, close) = self.root.paren_counts();
            debug!(open, close, "token stream ended before geometry was finished");
            return Err(WktError::Incomplete { open, close });
        }
        if self.options.reject_unknown_types {
            if let Some(keyword) = self.root.find_unknown_keyword() {
                return Err(WktError::UnknownType(keyword.to_string()));
            }
        }
        Ok(self.root)
    }
}

/// Parse a complete token stream into a finished geometry.
pub fn parse_tokens<'a>(
    tokens: impl IntoIterator<Item = Token<'a>>,
    options: &ParseOptions,
) -> Result<GeometryObject> {
    let mut reader = WktStreamReader::new(*options);
    for token in tokens {
        reader.push(token)?;
    }
    reader.finish()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::wkt::reader::GeometryKind;
    use crate::test::tokens::tokenize;

    #[test]
    fn parse_point() {
        let geom = parse_tokens(tokenize("POINT (1 2)"), &Default::default()).unwrap();
        assert_eq!(geom.geometry_type(), Some(GeometryKind::Point));
        assert_eq!(geom.points().len(), 1);
    }

    #[test]
    fn incomplete() {
        let err = parse_tokens(tokenize("POLYGON ((0 0, 1 0, 1 1, 0 0)"), &Default::default())
            .unwrap_err();
        assert_eq!(err, WktError::Incomplete { open: 2, close: 1 });

        let err = parse_tokens(tokenize("POINT"), &Default::default()).unwrap_err();
        assert_eq!(err, WktError::Incomplete { open: 0, close: 0 });
    }

    #[test]
    fn trailing_tokens() {
        let err = parse_tokens(tokenize("POINT (1 2) )"), &Default::default()).unwrap_err();
        assert_eq!(err, WktError::TrailingToken(")".to_string()));

        let options = ParseOptions::default().with_allow_trailing_tokens(true);
        let geom = parse_tokens(tokenize("POINT (1 2) , 3"), &options).unwrap();
        assert_eq!(geom.points().len(), 1);
    }

    #[test]
    fn strict_unknown_types() {
        let text = "GEOMETRYCOLLECTION (TRIANGLE ((0 0, 1 0, 0 1, 0 0)))";
        let geom = parse_tokens(tokenize(text), &Default::default()).unwrap();
        assert_eq!(geom.children()[0].geometry_type(), Some(GeometryKind::Geometry));

        let options = ParseOptions::default().with_reject_unknown_types(true);
        let err = parse_tokens(tokenize(text), &options).unwrap_err();
        assert_eq!(err, WktError::UnknownType("TRIANGLE".to_string()));
    }

    #[test]
    fn incremental_reader() {
        let mut reader = WktStreamReader::new(ParseOptions::default());
        let tokens = tokenize("MULTILINESTRING ((0 0, 1 1), (2 2, 3 3))");
        let last = tokens.len() - 1;
        for (i, token) in tokens.into_iter().enumerate() {
            reader.push(token).unwrap();
            if i < last {
                assert!(!reader.is_finished(), "finished early at token {i}");
            }
        }
        assert!(reader.is_finished());
        let geom = reader.finish().unwrap();
        assert_eq!(geom.children().len(), 2);
    }
}
