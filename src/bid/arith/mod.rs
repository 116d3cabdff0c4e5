//! Integer arithmetic on coefficient-sized words.

pub(crate) mod arith128;
pub(crate) mod arith32;
pub(crate) mod arith64;
pub(crate) mod uint256;

macro_rules! impl_basic {
    ($word:ty) => {
        /// Returns the minimum number of bits required to
        /// represent `x`.
        ///
        /// It returns 0 for `x == 0`.
        pub(crate) const fn bitlen(x: $word) -> u32 {
            <$word>::BITS - x.leading_zeros()
        }

        /// Returns the number of decimal digits in `x`.
        ///
        /// The result will be in `[1, digits(<$word>::MAX)]`.
        pub(crate) const fn digits(mut x: $word) -> u32 {
            // Ensure that `x` is non-zero so that `digits(0) ==
            // 1`.
            //
            // This cannot cause an incorrect result because:
            //
            // - `x|1` sets the lowest bit, so it cannot increase
            //   the bit length for a non-zero `x`.
            // - `x >= p` remains correct because the largest
            //   integer less than `p` is 999...999, which is
            //   odd, meaning `x|1` is a no-op.
            x |= 1;

            let r = ((bitlen(x) + 1) * 1233) / 4096;
            // `r` is in [0, digits(<$word>::MAX)], so it cannot
            // panic.
            let p = pow10(r);
            r + (x >= p) as u32
        }

        /// Returns 10^n.
        ///
        /// # Panics
        ///
        /// Panics if `10^n` does not fit in the word.
        pub(crate) const fn pow10(n: u32) -> $word {
            #[allow(
                clippy::indexing_slicing,
                reason = "This is a const initializer, so panicking is okay."
            )]
            const TABLE: [$word; NUM_POW10] = {
                let mut table = [0; NUM_POW10];
                let mut i = 0;
                while i < table.len() {
                    table[i] = <$word>::pow(10, i as u32);
                    i += 1;
                }
                table
            };

            #[allow(
                clippy::indexing_slicing,
                reason = "Calling code always checks that `n` is in range"
            )]
            let p = TABLE[n as usize];
            p
        }

        /// The maximum shift that does not overflow the word.
        pub(crate) const MAX_SHIFT: u32 = (NUM_POW10 - 1) as u32;

        const NUM_POW10: usize = {
            let mut n = 0;
            while (10 as $word).checked_pow(n).is_some() {
                n += 1
            }
            n as usize
        };

        /// Returns `(lo, hi) = x * 10^n`.
        ///
        /// # Panics
        ///
        /// Panics if `n > MAX_SHIFT`.
        pub(crate) const fn shl(x: $word, n: u32) -> ($word, $word) {
            widening_mul(x, pow10(n))
        }

        /// Returns the quotient and remainder `(q, r)` such that
        ///
        /// ```text
        /// q = x / (10^n)
        /// r = x % (10^n)
        /// ```
        ///
        /// Shifts past the width of the word return `(0, x)`.
        pub(crate) const fn shr(x: $word, n: u32) -> ($word, $word) {
            if n == 0 {
                (x, 0)
            } else if n > MAX_SHIFT {
                (0, x)
            } else {
                let p = pow10(n);
                (x / p, x % p)
            }
        }

        /// Removes the low `n` decimal digits of `x`, rounding
        /// per the ambient mode.
        ///
        /// `sticky` records nonzero digits already discarded
        /// below the dropped block. The returned flag is set
        /// when rounding up pushed the result to a power of ten
        /// with one more digit than the truncated quotient, i.e.
        /// the caller's exponent must absorb an extra digit.
        pub(crate) fn round_drop(sign: bool, x: $word, n: u32, sticky: bool) -> ($word, bool) {
            use $crate::fenv::{self, RoundingMode};

            if n == 0 {
                debug_assert!(!sticky);
                return (x, false);
            }

            let (q, r) = shr(x, n);
            // The first dropped digit decides the half-way
            // comparison; everything below it only breaks ties.
            let (first, rest) = if n - 1 <= MAX_SHIFT {
                let p = pow10(n - 1);
                (r / p, r % p)
            } else {
                (0, r)
            };
            let inexact = first != 0 || rest != 0 || sticky;

            let up = match fenv::rounding_mode() {
                RoundingMode::ToNearestEven => {
                    first > 5 || (first == 5 && (rest != 0 || sticky || q % 2 != 0))
                }
                RoundingMode::ToNearestAway => first >= 5,
                RoundingMode::ToZero => false,
                RoundingMode::ToPositiveInf => inexact && !sign,
                RoundingMode::ToNegativeInf => inexact && sign,
            };

            // `q <= x/10`, so the increment cannot wrap.
            let q = if up { q + 1 } else { q };
            let carry = up && q == pow10(digits(x).saturating_sub(n));
            (q, carry)
        }

    };
}
pub(crate) use impl_basic;
