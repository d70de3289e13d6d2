use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::coord::Coord;
use crate::dimension::Dimension;
use crate::error::{Result, WktError};
use crate::io::wkt::reader::accumulator::CoordAccumulator;
use crate::io::wkt::reader::r#type::{GeometryKind, StandardRegistry, TypeRegistry};
use crate::token::Token;

/// A geometry under construction from a WKT token stream.
///
/// A fresh object from [`GeometryObject::new`] is an untyped shell: its first type keyword gives
/// it a [`GeometryKind`]. Tokens are then fed through [`handle_token`][Self::handle_token] until
/// [`is_finished`][Self::is_finished] reports that every opened parenthesis has been closed.
///
/// Leaf variants (points, line strings, polygons) collect coordinates in [`points`][Self::points],
/// split into [`parts`][Self::parts] such as polygon rings. Container variants (multi-geometries
/// and collections) own an ordered list of [`children`][Self::children] instead.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GeometryObject {
    #[serde(rename = "type")]
    kind: Option<GeometryKind>,
    keyword: Option<String>,
    has_altitude: bool,
    has_measure: bool,
    points: Vec<Coord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    part_offsets: Vec<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<GeometryObject>,
    #[serde(skip)]
    open_count: usize,
    #[serde(skip)]
    close_count: usize,
    #[serde(skip)]
    pending: CoordAccumulator,
}

impl GeometryObject {
    /// Create an untyped root, waiting for its type keyword.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a geometry of a known variant, waiting for its opening parenthesis.
    pub fn with_kind(kind: GeometryKind) -> Self {
        Self::typed(kind, kind.keyword().to_string())
    }

    fn typed(kind: GeometryKind, keyword: String) -> Self {
        Self {
            kind: Some(kind),
            keyword: Some(keyword),
            has_altitude: false,
            has_measure: false,
            points: vec![],
            part_offsets: vec![],
            children: vec![],
            open_count: 0,
            close_count: 0,
            pending: CoordAccumulator::default(),
        }
    }

    /// The geometry variant, or `None` while no type keyword has been seen.
    pub fn geometry_type(&self) -> Option<GeometryKind> {
        self.kind
    }

    /// The type keyword this geometry was created from, without any dimensionality suffix.
    ///
    /// For [`GeometryKind::Geometry`] this is the unrecognized keyword itself.
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn has_altitude(&self) -> bool {
        self.has_altitude
    }

    pub fn has_measure(&self) -> bool {
        self.has_measure
    }

    pub fn dim(&self) -> Dimension {
        Dimension::from_flags(self.has_altitude, self.has_measure)
    }

    /// The ISO WKB type code, including the Z/M offset, e.g. 1001 for `POINT Z`.
    pub fn iso_type_code(&self) -> Option<u32> {
        self.kind.map(|kind| u32::from(kind) + self.dim().iso_offset())
    }

    /// All coordinates of a leaf geometry, in source order.
    pub fn points(&self) -> &[Coord] {
        &self.points
    }

    /// Coordinates split at structural commas, e.g. the rings of a polygon.
    pub fn parts(&self) -> Vec<&[Coord]> {
        if self.points.is_empty() && self.part_offsets.is_empty() {
            return vec![];
        }

        let mut parts = Vec::with_capacity(self.part_offsets.len() + 1);
        let mut start = 0;
        for &end in self
            .part_offsets
            .iter()
            .chain(std::iter::once(&self.points.len()))
        {
            parts.push(&self.points[start..end]);
            start = end;
        }
        parts
    }

    pub fn children(&self) -> &[GeometryObject] {
        &self.children
    }

    /// Whether this is a finished geometry without any coordinates or children.
    pub fn is_empty(&self) -> bool {
        self.is_finished() && self.points.is_empty() && self.children.is_empty()
    }

    /// Whether every opened parenthesis has been closed.
    ///
    /// Once true this never becomes false again, and no more tokens may be routed here.
    pub fn is_finished(&self) -> bool {
        self.open_count > 0 && self.open_count == self.close_count
    }

    pub(crate) fn paren_counts(&self) -> (usize, usize) {
        (self.open_count, self.close_count)
    }

    /// The first keyword anywhere in this tree that fell back to [`GeometryKind::Geometry`].
    pub fn find_unknown_keyword(&self) -> Option<&str> {
        if self.kind == Some(GeometryKind::Geometry) {
            return self.keyword();
        }
        self.children
            .iter()
            .find_map(|child| child.find_unknown_keyword())
    }

    /// Mark this geometry as having an altitude ordinate.
    ///
    /// Idempotent. The flag can only be set before any coordinate has been read and before the
    /// geometry is finished; later calls are ignored so that all coordinates keep the same arity.
    pub fn set_altitude_flag(&mut self) {
        if self.has_altitude {
            return;
        }
        if self.is_finished() {
            warn!("ignoring altitude flag on finished geometry");
            return;
        }
        if self.has_coordinates() {
            warn!("ignoring altitude flag after coordinates were read");
            return;
        }
        self.has_altitude = true;
    }

    /// Mark this geometry as having a linear referencing measure.
    ///
    /// Idempotent, with the same restriction as [`set_altitude_flag`][Self::set_altitude_flag].
    pub fn set_measure_flag(&mut self) {
        if self.has_measure {
            return;
        }
        if self.is_finished() {
            warn!("ignoring measure flag on finished geometry");
            return;
        }
        if self.has_coordinates() {
            warn!("ignoring measure flag after coordinates were read");
            return;
        }
        self.has_measure = true;
    }

    fn set_options(&mut self, dim: Dimension) {
        if dim.has_altitude() {
            self.set_altitude_flag();
        }
        if dim.has_measure() {
            self.set_measure_flag();
        }
    }

    fn has_coordinates(&self) -> bool {
        !self.points.is_empty() || !self.pending.is_empty() || !self.children.is_empty()
    }

    /// Append a coordinate built from `x y [z] [m]` ordinates.
    ///
    /// A flat `MULTIPOINT` stores the coordinate as a new finished point child. Returns `false`
    /// when no coordinate was stored: the geometry is already finished, fewer than two ordinates
    /// were given, or this variant holds no coordinates of its own.
    pub fn add_point(&mut self, ordinates: &[f64]) -> bool {
        if self.is_finished() {
            debug!("discarding coordinate for finished geometry");
            return false;
        }
        match Coord::from_ordinates(ordinates, self.dim()) {
            Some(coord) => self.push_coord(coord),
            None => {
                debug!(count = ordinates.len(), "discarding incomplete coordinate");
                false
            }
        }
    }

    fn push_coord(&mut self, coord: Coord) -> bool {
        match self.kind {
            Some(GeometryKind::MultiPoint) => {
                let mut point = self.member(GeometryKind::Point);
                point.points.push(coord);
                point.open_count = 1;
                point.close_count = 1;
                self.children.push(point);
                true
            }
            Some(kind) if kind.is_container() => {
                debug!(?kind, "discarding coordinate outside of a member geometry");
                false
            }
            _ => {
                self.points.push(coord);
                true
            }
        }
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let dim = self.dim();
        match self.pending.flush(dim) {
            Some(coord) => {
                self.push_coord(coord);
            }
            None => debug!("discarding incomplete coordinate"),
        }
    }

    /// Number of parentheses opened here and not yet closed.
    fn depth(&self) -> usize {
        self.open_count - self.close_count
    }

    /// A new child that inherits this geometry's dimensionality.
    fn member(&self, kind: GeometryKind) -> GeometryObject {
        let mut child = GeometryObject::with_kind(kind);
        child.has_altitude = self.has_altitude;
        child.has_measure = self.has_measure;
        child
    }

    /// Feed the next token, resolving type keywords with the [`StandardRegistry`].
    ///
    /// Returns [`WktError::Finished`] if this geometry is already finished. Malformed input never
    /// fails here; it leaves the geometry unfinished or degrades the tree instead.
    pub fn handle_token(&mut self, token: Token<'_>) -> Result<()> {
        self.handle_token_with(token, &StandardRegistry)
    }

    /// Feed the next token, resolving type keywords with `registry`.
    pub fn handle_token_with(
        &mut self,
        token: Token<'_>,
        registry: &dyn TypeRegistry,
    ) -> Result<()> {
        if self.is_finished() {
            return Err(WktError::Finished);
        }

        // An unfinished last child receives every token until it completes. Walk down in a loop so
        // that nesting depth is not bounded by the call stack.
        let mut target = self;
        while target.has_open_child() {
            let last = target.children.len() - 1;
            target = &mut target.children[last];
        }
        target.dispatch(token, registry);
        Ok(())
    }

    fn has_open_child(&self) -> bool {
        self.children.last().is_some_and(|child| !child.is_finished())
    }

    fn dispatch(&mut self, token: Token<'_>, registry: &dyn TypeRegistry) {
        trace!(%token, depth = self.depth(), "handling token");
        match token {
            Token::Text(text) => self.on_text(text, registry),
            _ if self.kind.is_none() => {
                debug!(%token, "ignoring token before geometry type");
            }
            Token::LeftParen => self.on_left_paren(),
            Token::RightParen => self.on_right_paren(),
            Token::Number(value) => self.on_number(value),
            Token::Comma => self.on_comma(),
        }
    }

    fn on_text(&mut self, text: &str, registry: &dyn TypeRegistry) {
        if let Some(dim) = Dimension::from_suffix(text) {
            self.set_options(dim);
            return;
        }

        let keyword = text.to_ascii_uppercase();
        if keyword == "EMPTY" {
            self.on_empty();
            return;
        }

        let (kind, stem, dim) = resolve_keyword(&keyword, registry);
        match self.kind {
            None => {
                self.kind = Some(kind);
                self.keyword = Some(stem);
                self.set_options(dim);
            }
            Some(parent) if parent.is_container() && self.depth() > 0 => {
                if !self.pending.is_empty() {
                    debug!("discarding numbers before nested geometry");
                    self.pending.clear();
                }
                let mut child = self.member(kind);
                child.keyword = Some(stem);
                child.set_options(dim);
                debug!(?parent, child = ?kind, "opening child geometry");
                self.children.push(child);
            }
            Some(kind) => {
                debug!(?kind, %keyword, "ignoring unexpected type keyword");
            }
        }
    }

    fn on_empty(&mut self) {
        let Some(kind) = self.kind else {
            debug!("ignoring EMPTY before geometry type");
            return;
        };

        if self.open_count == 0 {
            self.open_count = 1;
            self.close_count = 1;
            debug!(?kind, "empty geometry");
        } else if let Some(member) = kind.member_kind().filter(|_| self.depth() == 1) {
            let mut child = self.member(member);
            child.open_count = 1;
            child.close_count = 1;
            self.children.push(child);
        } else {
            debug!(?kind, "ignoring EMPTY inside coordinate list");
        }
    }

    fn on_left_paren(&mut self) {
        let member = self.kind.and_then(|kind| kind.member_kind());
        match member {
            // A multi-geometry member that does not repeat its keyword.
            Some(member) if self.depth() == 1 && self.pending.is_empty() => {
                let mut child = self.member(member);
                child.on_left_paren();
                self.children.push(child);
            }
            _ => self.open_count += 1,
        }
    }

    fn on_right_paren(&mut self) {
        if self.depth() == 0 {
            debug!("ignoring unmatched right parenthesis");
            return;
        }
        self.close_count += 1;
        self.flush();

        if self.is_finished() {
            debug!(
                kind = ?self.kind,
                points = self.points.len(),
                children = self.children.len(),
                "geometry finished"
            );
        }
    }

    fn on_number(&mut self, value: f64) {
        if self.depth() == 0 {
            debug!(value, "ignoring number outside parentheses");
            return;
        }
        self.pending.push(value);
    }

    fn on_comma(&mut self) {
        if self.depth() == 0 {
            debug!("ignoring comma outside parentheses");
            return;
        }
        if self.pending.is_empty() {
            self.on_structural_comma();
        } else {
            self.flush();
        }
    }

    /// A comma between rings or members rather than between coordinates.
    fn on_structural_comma(&mut self) {
        match self.kind {
            Some(kind) if kind.is_container() => {
                trace!(children = self.children.len(), "member boundary");
            }
            _ => self.part_offsets.push(self.points.len()),
        }
    }
}

/// Structural equality: variant, flags, coordinates, parts and children. Parse progress is
/// ignored.
impl PartialEq for GeometryObject {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.keyword == other.keyword
            && self.has_altitude == other.has_altitude
            && self.has_measure == other.has_measure
            && self.points == other.points
            && self.part_offsets == other.part_offsets
            && self.children == other.children
    }
}

// Children are torn down with an explicit stack, as deeply nested collections would otherwise
// recurse once per level.
impl Drop for GeometryObject {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut child) = stack.pop() {
            stack.append(&mut child.children);
        }
    }
}

/// Look up a keyword, stripping a trailing dimensionality suffix if the whole keyword is not
/// registered.
fn resolve_keyword(
    keyword: &str,
    registry: &dyn TypeRegistry,
) -> (GeometryKind, String, Dimension) {
    if let Some(kind) = registry.resolve(keyword) {
        return (kind, keyword.to_string(), Dimension::XY);
    }

    let (stem, dim) = Dimension::split_keyword(keyword);
    match registry.resolve(stem) {
        Some(kind) => (kind, stem.to_string(), dim),
        None => {
            warn!(keyword, "unknown geometry type, falling back to generic geometry");
            (GeometryKind::Geometry, stem.to_string(), dim)
        }
    }
}
