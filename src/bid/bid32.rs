use super::{arith::arith32, base::impl_dec};
use crate::util::const_assert;

/// A 32-bit decimal floating point number.
///
/// (–1)^sign × coefficient × 10^exp
///
/// The coefficient has at most 7 decimal digits and the adjusted
/// exponent is in `[-95, 96]`.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Decimal32(
    /// ## Form 1
    ///
    /// s 00eeeeee   (0)ttt tttttttttt tttttttttt
    /// s 01eeeeee   (0)ttt tttttttttt tttttttttt
    /// s 10eeeeee   (0)ttt tttttttttt tttttttttt
    ///
    /// ## Form 2
    ///
    /// s 1100eeeeee (100)t tttttttttt tttttttttt
    /// s 1101eeeeee (100)t tttttttttt tttttttttt
    /// s 1110eeeeee (100)t tttttttttt tttttttttt
    u32,
);
const_assert!(size_of::<Decimal32>() == 32 / 8);

impl_dec! {
    name = Decimal32,
    ucoeff = u32,
    icoeff = i32,
    arith = arith32,
    max_chars = 15,
}

macro_rules! from_unsigned_impl {
    ($($ty:ty)*) => ($(
        impl From<$ty> for Decimal32 {
            #[inline]
            fn from(coeff: $ty) -> Self {
                Self::from_parts(false, u32::from(coeff), 0)
            }
        }
    )*)
}
from_unsigned_impl!(u8 u16 u32);

macro_rules! from_signed_impl {
    ($($ty:ty)*) => ($(
        impl From<$ty> for Decimal32 {
            #[inline]
            fn from(coeff: $ty) -> Self {
                Self::new(i32::from(coeff), 0)
            }
        }
    )*)
}
from_signed_impl!(i8 i16 i32);
