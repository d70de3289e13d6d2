//! An incremental, token-driven parser for [Well-Known Text][wkt] geometry literals.
//!
//! A lexical scanner (not part of this crate) classifies WKT text into [`Token`]s. Feeding those
//! tokens one at a time to a [`GeometryObject`] rebuilds the nested geometry tree in a single
//! forward pass:
//!
//! ```
//! use wkt_stream::{GeometryKind, GeometryObject, Token};
//!
//! let mut geom = GeometryObject::new();
//! for token in [
//!     Token::Text("POINT"),
//!     Token::Text("Z"),
//!     Token::LeftParen,
//!     Token::Number(1.0),
//!     Token::Number(2.0),
//!     Token::Number(3.0),
//!     Token::RightParen,
//! ] {
//!     geom.handle_token(token).unwrap();
//! }
//!
//! assert!(geom.is_finished());
//! assert_eq!(geom.geometry_type(), Some(GeometryKind::Point));
//! assert_eq!(geom.to_string(), "POINT Z (1 2 3)");
//! ```
//!
//! [wkt]: https://www.ogc.org/standard/sfa/

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use coord::Coord;
pub use dimension::Dimension;
pub use error::{Result, WktError};
pub use io::wkt::reader::{
    parse_tokens, GeometryKind, GeometryObject, ParseOptions, StandardRegistry, TypeRegistry,
    WktStreamReader,
};
pub use token::{Token, TokenKind};

pub mod coord;
pub mod dimension;
pub mod error;
pub mod io;
#[cfg(test)]
pub(crate) mod test;
pub mod token;
