use super::{arith::arith128, base::impl_dec};
use crate::util::const_assert;

/// A 128-bit decimal floating point number.
///
/// (–1)^sign × coefficient × 10^exp
///
/// The coefficient has at most 34 decimal digits and the
/// adjusted exponent is in `[-6143, 6144]`.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Decimal128(
    /// ## Form 1
    ///
    /// s 00eeeeeeeeeeeeee (0)ttt ... tttttttttt
    /// s 01eeeeeeeeeeeeee (0)ttt ... tttttttttt
    /// s 10eeeeeeeeeeeeee (0)ttt ... tttttttttt
    ///
    /// Form two is never produced: every 34-digit coefficient
    /// fits in the 113-bit form one window.
    u128,
);
const_assert!(size_of::<Decimal128>() == 128 / 8);

impl_dec! {
    name = Decimal128,
    ucoeff = u128,
    icoeff = i128,
    arith = arith128,
    max_chars = 41,
}

macro_rules! from_unsigned_impl {
    ($($ty:ty)*) => ($(
        impl From<$ty> for Decimal128 {
            #[inline]
            fn from(coeff: $ty) -> Self {
                Self::from_parts(false, u128::from(coeff), 0)
            }
        }
    )*)
}
from_unsigned_impl!(u8 u16 u32 u64 u128);

macro_rules! from_signed_impl {
    ($($ty:ty)*) => ($(
        impl From<$ty> for Decimal128 {
            #[inline]
            fn from(coeff: $ty) -> Self {
                Self::new(i128::from(coeff), 0)
            }
        }
    )*)
}
from_signed_impl!(i8 i16 i32 i64 i128);
