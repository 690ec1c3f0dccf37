//! Zero-copy views between flat coordinate buffers and typed boxes.
//!
//! Spatial indexes keep their node boxes in flat numeric buffers. The impls here let such a
//! buffer be viewed as `[BoundingBox]` (and back) without copying. The flat layout is axis-major
//! `begin, end` pairs: `x_begin, x_end, y_begin, y_end, ...` per box.

use bytemuck::{Pod, Zeroable};

use crate::bbox::BoundingBox;
use crate::error::Result;
use crate::interval::Interval;
use crate::r#type::GeomNum;
use crate::GeoBoxError;

// repr(C) over two N fields, no padding.
unsafe impl<N: GeomNum> Zeroable for Interval<N> {}
unsafe impl<N: GeomNum> Pod for Interval<N> {}

// repr(transparent) over [Interval<N>; D].
unsafe impl<N: GeomNum, const D: usize> Zeroable for BoundingBox<N, D> {}
unsafe impl<N: GeomNum, const D: usize> Pod for BoundingBox<N, D> {}

/// View a flat coordinate slice as a slice of `D`-dimensional boxes.
///
/// No bound ordering is validated: sentinel or otherwise inverted intervals in the buffer are the
/// caller's contract, as with any not-yet-established box.
///
/// # Errors
///
/// Returns [`GeoBoxError::General`] when the slice length is not a multiple of `2 * D` (or `D` is
/// zero).
pub fn boxes_from_coords<N: GeomNum, const D: usize>(coords: &[N]) -> Result<&[BoundingBox<N, D>]> {
    bytemuck::try_cast_slice(coords)
        .map_err(|err| GeoBoxError::General(format!("Cannot view coords as boxes: {err}")))
}

/// Mutable form of [`boxes_from_coords`].
///
/// # Errors
///
/// Returns [`GeoBoxError::General`] when the slice length is not a multiple of `2 * D` (or `D` is
/// zero).
pub fn boxes_from_coords_mut<N: GeomNum, const D: usize>(
    coords: &mut [N],
) -> Result<&mut [BoundingBox<N, D>]> {
    bytemuck::try_cast_slice_mut(coords)
        .map_err(|err| GeoBoxError::General(format!("Cannot view coords as boxes: {err}")))
}

impl<N: GeomNum, const D: usize> BoundingBox<N, D> {
    /// The box viewed as its `2 * D` flat bounds, axis-major.
    pub fn as_coords(&self) -> &[N] {
        bytemuck::cast_slice(self.intervals().as_slice())
    }
}
