use crate::coord::Coord;
use crate::dimension::Dimension;

/// Numbers read since the last coordinate boundary.
#[derive(Debug, Clone, Default)]
pub(crate) struct CoordAccumulator {
    ordinates: Vec<f64>,
}

impl CoordAccumulator {
    pub(crate) fn push(&mut self, value: f64) {
        self.ordinates.push(value);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.ordinates.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.ordinates.clear();
    }

    /// Empty the buffer into a coordinate of the given dimension.
    ///
    /// The buffer is cleared even when it holds too few numbers to form a coordinate.
    pub(crate) fn flush(&mut self, dim: Dimension) -> Option<Coord> {
        let coord = Coord::from_ordinates(&self.ordinates, dim);
        self.ordinates.clear();
        coord
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn flush_clears_buffer() {
        let mut acc = CoordAccumulator::default();
        acc.push(1.);
        acc.push(2.);
        acc.push(3.);
        assert!(!acc.is_empty());

        let coord = acc.flush(Dimension::XYZ).unwrap();
        assert_eq!(coord.z, Some(3.));
        assert!(acc.is_empty());
    }

    #[test]
    fn flush_discards_partial_coordinate() {
        let mut acc = CoordAccumulator::default();
        acc.push(1.);
        assert!(acc.flush(Dimension::XY).is_none());
        assert!(acc.is_empty());
    }
}
