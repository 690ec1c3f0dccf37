use std::fmt::Debug;

use num_traits::{Bounded, Num, NumCast};

/// A trait for numeric types that can be used as box coordinates.
///
/// This trait is sealed and cannot be implemented for external types. The set of implementations
/// matches the coordinate types a flat-buffer spatial index stores, so boxes built here can view
/// an index's buffers without conversion.
///
/// [`Bounded`] supplies the representable extremes used for the empty sentinel: an empty interval
/// has `begin` at the type maximum and `end` at the type minimum, so the first merge establishes
/// real bounds.
pub trait GeomNum:
    private::Sealed + Num + NumCast + PartialOrd + Debug + Send + Sync + bytemuck::Pod + Bounded
{
}

impl GeomNum for i8 {}
impl GeomNum for u8 {}
impl GeomNum for i16 {}
impl GeomNum for u16 {}
impl GeomNum for i32 {}
impl GeomNum for u32 {}
impl GeomNum for f32 {}
impl GeomNum for f64 {}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for u8 {}
    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
