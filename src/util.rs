//! Precision utilities for boxes.

use float_next_after::NextAfter;

use crate::bbox::BoundingBox;

/// Narrow a box with `f64` precision to `f32` precision. This uses the [`float_next_after`]
/// crate to ensure the resulting box is no smaller than the `f64` box.
pub fn f64_box_to_f32<const D: usize>(bbox: &BoundingBox<f64, D>) -> BoundingBox<f32, D> {
    let mut out = BoundingBox::<f32, D>::empty();
    for (axis, interval) in bbox.iter().enumerate() {
        let mut new_begin = interval.begin() as f32;
        let mut new_end = interval.end() as f32;

        if (new_begin as f64) > interval.begin() {
            new_begin = new_begin.next_after(f32::NEG_INFINITY);
        }
        if (new_end as f64) < interval.end() {
            new_end = new_end.next_after(f32::INFINITY);
        }

        debug_assert!((new_begin as f64) <= interval.begin());
        debug_assert!((new_end as f64) >= interval.end());

        *out[axis].begin_mut() = new_begin;
        *out[axis].end_mut() = new_end;
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn f32_box_never_shrinks() {
        let bbox =
            BoundingBox::<f64, 2>::from_bounds([(1.2, 2.4), (1.3, 2.5)]).unwrap();
        let narrowed = f64_box_to_f32(&bbox);
        for axis in 0..2 {
            assert!((narrowed[axis].begin() as f64) <= bbox[axis].begin());
            assert!((narrowed[axis].end() as f64) >= bbox[axis].end());
            assert!(!narrowed[axis].is_empty());
        }
    }

    #[test]
    fn exact_values_pass_through() {
        let bbox = BoundingBox::<f64, 2>::from_bounds([(1., 2.), (-4., 0.5)]).unwrap();
        let narrowed = f64_box_to_f32(&bbox);
        assert_eq!(narrowed[0].begin(), 1.0f32);
        assert_eq!(narrowed[0].end(), 2.0f32);
        assert_eq!(narrowed[1].begin(), -4.0f32);
        assert_eq!(narrowed[1].end(), 0.5f32);
    }
}
