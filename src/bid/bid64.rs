use super::{arith::arith64, base::impl_dec};
use crate::util::const_assert;

/// A 64-bit decimal floating point number.
///
/// (–1)^sign × coefficient × 10^exp
///
/// The coefficient has at most 16 decimal digits and the
/// adjusted exponent is in `[-383, 384]`.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Decimal64(
    /// ## Form 1
    ///
    /// s 00eeeeeeeeee (0)ttt ... tttttttttt
    /// s 01eeeeeeeeee (0)ttt ... tttttttttt
    /// s 10eeeeeeeeee (0)ttt ... tttttttttt
    ///
    /// ## Form 2
    ///
    /// s 1100eeeeeeeeee (100)t ... tttttttttt
    /// s 1101eeeeeeeeee (100)t ... tttttttttt
    /// s 1110eeeeeeeeee (100)t ... tttttttttt
    u64,
);
const_assert!(size_of::<Decimal64>() == 64 / 8);

impl_dec! {
    name = Decimal64,
    ucoeff = u64,
    icoeff = i64,
    arith = arith64,
    max_chars = 25,
}

macro_rules! from_unsigned_impl {
    ($($ty:ty)*) => ($(
        impl From<$ty> for Decimal64 {
            #[inline]
            fn from(coeff: $ty) -> Self {
                Self::from_parts(false, u64::from(coeff), 0)
            }
        }
    )*)
}
from_unsigned_impl!(u8 u16 u32 u64);

macro_rules! from_signed_impl {
    ($($ty:ty)*) => ($(
        impl From<$ty> for Decimal64 {
            #[inline]
            fn from(coeff: $ty) -> Self {
                Self::new(i64::from(coeff), 0)
            }
        }
    )*)
}
from_signed_impl!(i8 i16 i32 i64);

#[cfg(test)]
mod tests {
    use core::str;

    use super::*;
    use crate::conv::{Errc, Format};

    #[test]
    fn test_consts() {
        assert_eq!(Decimal64::DIGITS, 16);
        assert_eq!(Decimal64::MAX_EXP, 384);
        assert_eq!(Decimal64::BIAS, 398);
        assert_eq!(Decimal64::ETINY, -398);
        assert_eq!(Decimal64::MAX_UNBIASED_EXP, 369);
        assert_eq!(Decimal64::MAX_COEFF, 9_999_999_999_999_999);
        assert_eq!(Decimal64::EXP_BITS, 10);
        assert_eq!(Decimal64::COEFF_MASK, (1 << 50) - 1);
    }

    #[test]
    fn test_exp() {
        for exp in Decimal64::MIN_UNBIASED_EXP..=Decimal64::MAX_UNBIASED_EXP {
            let d = Decimal64::pack(false, exp, 0);
            assert_eq!(d.unbiased_exp(), exp, "coeff=0 exp={exp}");
            assert_eq!(d.coeff(), 0, "#{exp}");

            let d = Decimal64::pack(true, exp, Decimal64::MAX_COEFF as u64);
            assert_eq!(d.unbiased_exp(), exp, "coeff=max exp={exp}");
            assert_eq!(d.coeff(), Decimal64::MAX_COEFF as u64, "#{exp}");
            assert!(d.is_sign_negative());
        }
    }

    static STR_TESTS: &[(Decimal64, &str)] = &[
        (Decimal64::ZERO, "0.0e+00"),
        (Decimal64::pack(false, 0, 1), "1"),
        (Decimal64::pack(false, -1, 21), "2.1"),
        (Decimal64::pack(false, 1, 42), "4.2e+02"),
        (
            Decimal64::pack(false, 0, 9_999_999_999_999_999),
            "9999999999999999",
        ),
        (
            Decimal64::pack(true, -15, 9_999_999_999_999_999),
            "-9.999999999999999",
        ),
        (
            Decimal64::pack(false, 369, 9_999_999_999_999_999),
            "9.999999999999999e+384",
        ),
        (Decimal64::pack(true, -398, 1), "-1e-398"),
    ];

    #[test]
    fn test_to_chars_shortest() {
        let mut buf = [0u8; 64];
        for (i, &(input, want)) in STR_TESTS.iter().enumerate() {
            let n = input.to_chars(&mut buf).unwrap();
            assert_eq!(str::from_utf8(&buf[..n]).unwrap(), want, "#{i}");
        }
    }

    #[test]
    fn test_parse() {
        for (i, &(want, output)) in STR_TESTS.iter().enumerate() {
            let got: Decimal64 = output.parse().unwrap();
            if want.is_zero() {
                assert!(got.is_zero(), "#{i}");
            } else {
                assert_eq!(got.to_bits(), want.to_bits(), "#{i}: parse({output:?})");
            }
        }
    }

    #[test]
    fn test_from_chars_rounds_excess_digits() {
        // A 17th digit folds into the exponent.
        let r = Decimal64::from_chars_general(b"99999999999999995");
        assert_eq!(
            r.value.to_bits(),
            Decimal64::new(1_000_000_000_000_000, 2).to_bits(),
        );

        let r = Decimal64::from_chars_general(b"12345678901234565000");
        assert_eq!(
            r.value.to_bits(),
            Decimal64::new(1_234_567_890_123_456, 4).to_bits(),
        );
    }

    #[test]
    fn test_from_chars_overflow() {
        let r = Decimal64::from_chars_general(b"1e385");
        assert!(r.value.is_infinite());
        assert_eq!(r.ec, Some(Errc::ResultOutOfRange));

        let r = Decimal64::from_chars_general(b"1e384");
        assert!(!r.value.is_infinite());
        assert!(r.ec.is_none());
    }

    #[test]
    fn test_to_chars_precision() {
        let mut buf = [0u8; 64];
        let d = Decimal64::new(1_234_567_890_123_456, -15);
        let n = d
            .to_chars_prec(&mut buf, Format::Scientific, 6)
            .unwrap();
        assert_eq!(&buf[..n], b"1.234568e+00");

        let n = d.to_chars_prec(&mut buf, Format::Fixed, 3).unwrap();
        assert_eq!(&buf[..n], b"1.235");
    }

    #[test]
    fn test_round_trip_random() {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        let mut buf = [0u8; 64];
        for _ in 0..100_000 {
            let d = Decimal64::from_bits(rng.gen());
            if !d.is_finite() || d.is_zero() {
                continue;
            }
            let n = d.to_chars(&mut buf).unwrap();
            let r = Decimal64::from_chars_general(&buf[..n]);
            assert!(r.ec.is_none(), "{d:?}");
            assert_eq!(r.consumed, n, "{d:?}");
            assert_eq!(
                r.value.to_bits(),
                d.to_bits(),
                "{d:?} -> {:?}",
                str::from_utf8(&buf[..n]),
            );
        }
    }
}
