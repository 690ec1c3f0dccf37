//! Closed one-dimensional ranges, the atomic unit every box operation reduces to.

use crate::error::Result;
use crate::r#type::GeomNum;
use crate::GeoBoxError;

/// A closed range `[begin, end]` along a single axis.
///
/// The invariant `begin <= end` is checked at construction; no interval with inverted bounds can
/// be created through [`Interval::new`]. The one deliberate exception is the empty sentinel from
/// [`Interval::empty`], which inverts the bounds to the representable extremes so that the first
/// [`Interval::merge`] establishes real bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Interval<N: GeomNum> {
    begin: N,
    end: N,
}

impl<N: GeomNum> Interval<N> {
    /// Create an interval from its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`GeoBoxError::InvalidInterval`] when `end < begin`.
    pub fn new(begin: N, end: N) -> Result<Self> {
        if end < begin {
            return Err(GeoBoxError::InvalidInterval(format!(
                "begin ({:?}) must be lower or equal than end ({:?})",
                begin, end
            )));
        }
        Ok(Self { begin, end })
    }

    /// The empty sentinel: `begin` at the type maximum, `end` at the type minimum.
    ///
    /// Merging any real interval into the sentinel yields that interval unchanged.
    pub fn empty() -> Self {
        Self {
            begin: N::max_value(),
            end: N::min_value(),
        }
    }

    /// Lower bound.
    #[inline]
    pub fn begin(&self) -> N {
        self.begin
    }

    /// Upper bound.
    #[inline]
    pub fn end(&self) -> N {
        self.end
    }

    /// Mutable access to the lower bound.
    ///
    /// Writing through this can transiently break `begin <= end`; the caller must restore the
    /// invariant before the interval is next observed by a predicate.
    #[inline]
    pub fn begin_mut(&mut self) -> &mut N {
        &mut self.begin
    }

    /// Mutable access to the upper bound. Same caveat as [`Interval::begin_mut`].
    #[inline]
    pub fn end_mut(&mut self) -> &mut N {
        &mut self.end
    }

    /// The extent `end - begin`. Non-negative whenever the invariant holds.
    #[inline]
    pub fn range(&self) -> N {
        self.end - self.begin
    }

    /// Whether this is the empty sentinel (or otherwise has inverted bounds).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end < self.begin
    }

    /// Closed-range membership: `begin <= value <= end`.
    #[inline]
    pub fn contains_value(&self, value: N) -> bool {
        self.begin <= value && value <= self.end
    }

    /// Open-interior intersection test.
    ///
    /// Two intervals that merely touch at an endpoint do NOT overlap; R-tree search relies on this
    /// exact boundary behavior when pruning.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        other.begin < self.end && self.begin < other.end
    }

    /// The amount this interval's range must grow to fully contain `other`.
    ///
    /// Contributions from both ends are summed; the result is zero exactly when `other` is already
    /// contained. This is the per-axis unit of the R-tree least-enlargement insertion heuristic.
    #[inline]
    pub fn enlargement(&self, other: &Self) -> N {
        let mut total = N::zero();
        if self.end < other.end {
            total = total + (other.end - self.end);
        }
        if other.begin < self.begin {
            total = total + (self.begin - other.begin);
        }
        total
    }

    /// Grow in place to the minimal interval covering both `self` and `other`.
    ///
    /// Monotonic: bounds only ever move outward.
    #[inline]
    pub fn merge(&mut self, other: &Self) {
        if other.begin < self.begin {
            self.begin = other.begin;
        }
        if self.end < other.end {
            self.end = other.end;
        }
    }
}

impl<N: GeomNum> Default for Interval<N> {
    /// The empty sentinel. There is no uninitialized interval state.
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_construction() {
        let interval = Interval::new(1.5f64, 4.0).unwrap();
        assert_eq!(interval.begin(), 1.5);
        assert_eq!(interval.end(), 4.0);
        assert_eq!(interval.range(), 2.5);
    }

    #[test]
    fn degenerate_interval_is_valid() {
        let interval = Interval::new(3.0f32, 3.0).unwrap();
        assert_eq!(interval.range(), 0.0);
    }

    #[test]
    fn inverted_bounds_rejected() {
        let err = Interval::new(2.0f64, 1.0).unwrap_err();
        assert!(matches!(err, GeoBoxError::InvalidInterval(_)));
    }

    #[test]
    fn empty_sentinel() {
        let interval = Interval::<f64>::empty();
        assert!(interval.is_empty());
        assert_eq!(interval.begin(), f64::MAX);
        assert_eq!(interval.end(), f64::MIN);
    }

    #[test]
    fn overlap_is_symmetric() {
        let cases = [
            ((0.0f64, 5.0), (4.0, 10.0)),
            ((0.0, 5.0), (5.0, 10.0)),
            ((0.0, 1.0), (2.0, 3.0)),
            ((0.0, 10.0), (2.0, 3.0)),
        ];
        for ((a0, a1), (b0, b1)) in cases {
            let a = Interval::new(a0, a1).unwrap();
            let b = Interval::new(b0, b1).unwrap();
            assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }

    #[test]
    fn touching_endpoints_do_not_overlap() {
        let a = Interval::new(0.0f64, 5.0).unwrap();
        let b = Interval::new(5.0, 10.0).unwrap();
        assert!(!a.overlaps(&b));

        let c = Interval::new(4.0, 10.0).unwrap();
        assert!(a.overlaps(&c));
    }

    #[test]
    fn contained_interval_overlaps() {
        let outer = Interval::new(0.0f64, 10.0).unwrap();
        let inner = Interval::new(2.0, 3.0).unwrap();
        assert!(outer.overlaps(&inner));
    }

    #[test]
    fn enlargement_zero_when_contained() {
        let outer = Interval::new(0.0f64, 10.0).unwrap();
        let inner = Interval::new(2.0, 3.0).unwrap();
        assert_eq!(outer.enlargement(&inner), 0.0);
        assert_eq!(outer.enlargement(&outer), 0.0);
    }

    #[test]
    fn enlargement_sums_both_ends() {
        let a = Interval::new(2.0f64, 5.0).unwrap();
        let b = Interval::new(0.0, 8.0).unwrap();
        // 2 below, 3 above
        assert_eq!(a.enlargement(&b), 5.0);

        // one-sided growth
        let c = Interval::new(2.0, 9.0).unwrap();
        assert_eq!(a.enlargement(&c), 4.0);
    }

    #[test]
    fn merge_grows_monotonically() {
        let mut a = Interval::new(2.0f64, 5.0).unwrap();
        let b = Interval::new(0.0, 4.0).unwrap();
        a.merge(&b);
        assert_eq!(a.begin(), 0.0);
        assert_eq!(a.end(), 5.0);

        // idempotent
        a.merge(&b);
        assert_eq!(a.begin(), 0.0);
        assert_eq!(a.end(), 5.0);
    }

    #[test]
    fn merge_from_sentinel_establishes_bounds() {
        let mut empty = Interval::<f64>::empty();
        let real = Interval::new(-1.0, 2.0).unwrap();
        empty.merge(&real);
        assert_eq!(empty, real);
    }

    #[test]
    fn contains_value_is_closed() {
        let interval = Interval::new(0.0f64, 5.0).unwrap();
        assert!(interval.contains_value(0.0));
        assert!(interval.contains_value(5.0));
        assert!(interval.contains_value(2.5));
        assert!(!interval.contains_value(5.1));
    }

    #[test]
    fn integer_coordinates() {
        let a = Interval::new(0i32, 5).unwrap();
        let b = Interval::new(3, 9).unwrap();
        assert!(a.overlaps(&b));
        assert_eq!(a.enlargement(&b), 4);
    }
}
