//! Axis-aligned bounding boxes of fixed dimensionality.

use std::ops::{Index, IndexMut};

use geo_traits::{CoordTrait, RectTrait};

use crate::error::Result;
use crate::interval::Interval;
use crate::r#type::GeomNum;
use crate::GeoBoxError;

/// An axis-aligned box over `D` dimensions: one [`Interval`] per axis.
///
/// The dimensionality is a const generic, so operations between boxes of different dimensions are
/// rejected at compile time. A box is a plain value type; copying it copies its intervals.
///
/// A box is either *established* (every axis holds real bounds) or *empty* (every axis at the
/// sentinel, see [`BoundingBox::empty`]). [`BoundingBox::adjust`] moves an empty box to
/// established and only ever grows an established one; the only way back to empty is an explicit
/// [`BoundingBox::reset`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct BoundingBox<N: GeomNum, const D: usize> {
    intervals: [Interval<N>; D],
}

impl<N: GeomNum, const D: usize> BoundingBox<N, D> {
    /// Create a box directly from one interval per axis.
    pub fn new(intervals: [Interval<N>; D]) -> Self {
        Self { intervals }
    }

    /// Create a box from `(begin, end)` bounds per axis.
    ///
    /// # Errors
    ///
    /// Returns [`GeoBoxError::InvalidInterval`] if any axis has `end < begin`.
    pub fn from_bounds(bounds: [(N, N); D]) -> Result<Self> {
        let mut intervals = [Interval::empty(); D];
        for (axis, (begin, end)) in bounds.into_iter().enumerate() {
            intervals[axis] = Interval::new(begin, end)?;
        }
        Ok(Self { intervals })
    }

    /// The empty box: every axis at the sentinel, ready to be grown via [`BoundingBox::adjust`].
    pub fn empty() -> Self {
        Self {
            intervals: [Interval::empty(); D],
        }
    }

    /// Checked access to the interval for one axis.
    ///
    /// # Errors
    ///
    /// Returns [`GeoBoxError::AxisOutOfBounds`] when `axis >= D`.
    pub fn interval(&self, axis: usize) -> Result<&Interval<N>> {
        self.intervals
            .get(axis)
            .ok_or(GeoBoxError::AxisOutOfBounds { axis, dim: D })
    }

    /// Checked mutable access to the interval for one axis.
    ///
    /// # Errors
    ///
    /// Returns [`GeoBoxError::AxisOutOfBounds`] when `axis >= D`.
    pub fn interval_mut(&mut self, axis: usize) -> Result<&mut Interval<N>> {
        self.intervals
            .get_mut(axis)
            .ok_or(GeoBoxError::AxisOutOfBounds { axis, dim: D })
    }

    /// The intervals, one per axis.
    pub fn intervals(&self) -> &[Interval<N>; D] {
        &self.intervals
    }

    /// Iterate the intervals in axis order.
    pub fn iter(&self) -> std::slice::Iter<'_, Interval<N>> {
        self.intervals.iter()
    }

    /// Iterate the intervals mutably, in axis order.
    ///
    /// Yields references into the box's own storage, so in-place per-axis updates are visible to
    /// subsequent reads.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Interval<N>> {
        self.intervals.iter_mut()
    }

    /// Whether any axis is still at (or past) the sentinel ordering.
    pub fn is_empty(&self) -> bool {
        self.intervals.iter().any(|interval| interval.is_empty())
    }

    /// The hyper-volume: the product of per-axis ranges.
    ///
    /// The empty product for `D = 0` is one; any degenerate axis makes the area zero. The product
    /// is unguarded: float coordinates overflow to infinity per IEEE-754 for extreme ranges.
    pub fn area(&self) -> N {
        self.intervals
            .iter()
            .fold(N::one(), |area, interval| area * interval.range())
    }

    /// The sum of per-axis ranges (the perimeter-style metric R*-tree splits minimize).
    pub fn margin(&self) -> N {
        self.intervals
            .iter()
            .fold(N::zero(), |margin, interval| margin + interval.range())
    }

    /// Drive every axis back to the empty sentinel, in place.
    pub fn reset(&mut self) {
        for interval in self.iter_mut() {
            *interval = Interval::empty();
        }
    }

    /// Grow this box, per axis, to the minimal box containing both `self` and `other`.
    ///
    /// Monotonic: the box never shrinks, and adjusting by the same box twice is a no-op. This is
    /// how a tree propagates a child's bounds up into its parent.
    pub fn adjust(&mut self, other: &Self) {
        for (interval, other_interval) in self.iter_mut().zip(other.iter()) {
            interval.merge(other_interval);
        }
    }

    /// Separating-axis intersection test.
    ///
    /// True iff every axis pair overlaps under the open-interior [`Interval::overlaps`] test;
    /// returns false as soon as one axis is disjoint. Boxes touching at a face do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.overlaps(b))
    }

    /// The total cost of growing this box to contain `other`: the sum of per-axis
    /// [`Interval::enlargement`] contributions.
    ///
    /// An R-tree insertion descends into the child minimizing this value.
    pub fn enlargement(&self, other: &Self) -> N {
        self.iter()
            .zip(other.iter())
            .fold(N::zero(), |total, (a, b)| total + a.enlargement(b))
    }

    /// Whether `other` lies fully inside this box on every axis (closed bounds).
    pub fn contains(&self, other: &Self) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| {
            a.contains_value(b.begin()) && a.contains_value(b.end())
        })
    }

    /// Whether the point lies inside this box on every axis (closed bounds).
    pub fn contains_point(&self, point: [N; D]) -> bool {
        self.iter()
            .zip(point)
            .all(|(interval, value)| interval.contains_value(value))
    }
}

impl<N: GeomNum> BoundingBox<N, 2> {
    /// Create a 2D box from anything implementing [`RectTrait`], e.g. a `geo_types::Rect`.
    ///
    /// # Errors
    ///
    /// Returns [`GeoBoxError::InvalidInterval`] if the rect's min exceeds its max on an axis.
    pub fn from_rect(rect: &impl RectTrait<T = N>) -> Result<Self> {
        Ok(Self::new([
            Interval::new(rect.min().x(), rect.max().x())?,
            Interval::new(rect.min().y(), rect.max().y())?,
        ]))
    }
}

impl<N: GeomNum, const D: usize> Default for BoundingBox<N, D> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<N: GeomNum, const D: usize> Index<usize> for BoundingBox<N, D> {
    type Output = Interval<N>;

    fn index(&self, axis: usize) -> &Self::Output {
        &self.intervals[axis]
    }
}

impl<N: GeomNum, const D: usize> IndexMut<usize> for BoundingBox<N, D> {
    fn index_mut(&mut self, axis: usize) -> &mut Self::Output {
        &mut self.intervals[axis]
    }
}

impl<'a, N: GeomNum, const D: usize> IntoIterator for &'a BoundingBox<N, D> {
    type Item = &'a Interval<N>;
    type IntoIter = std::slice::Iter<'a, Interval<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, N: GeomNum, const D: usize> IntoIterator for &'a mut BoundingBox<N, D> {
    type Item = &'a mut Interval<N>;
    type IntoIter = std::slice::IterMut<'a, Interval<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
