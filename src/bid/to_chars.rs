use crate::conv::Errc;

/// A bounds-checked cursor over a caller-provided byte range.
///
/// Every write is checked against the end of the buffer, so no
/// formatter path can touch bytes at or past `dst.len()`. On
/// [`Errc::ValueTooLarge`] the bytes already written are left in
/// place; callers treat the buffer as unspecified on failure.
pub(crate) struct Sink<'a> {
    dst: &'a mut [u8],
    len: usize,
}

impl<'a> Sink<'a> {
    pub fn new(dst: &'a mut [u8]) -> Self {
        Self { dst, len: 0 }
    }

    /// Returns the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn push(&mut self, c: u8) -> Result<(), Errc> {
        match self.dst.get_mut(self.len) {
            Some(b) => {
                *b = c;
                self.len += 1;
                Ok(())
            }
            None => Err(Errc::ValueTooLarge),
        }
    }

    pub fn extend(&mut self, src: &[u8]) -> Result<(), Errc> {
        match self.dst.get_mut(self.len..self.len + src.len()) {
            Some(dst) => {
                dst.copy_from_slice(src);
                self.len += src.len();
                Ok(())
            }
            None => Err(Errc::ValueTooLarge),
        }
    }

    pub fn pad(&mut self, c: u8, n: usize) -> Result<(), Errc> {
        match self.dst.get_mut(self.len..self.len + n) {
            Some(dst) => {
                dst.fill(c);
                self.len += n;
                Ok(())
            }
            None => Err(Errc::ValueTooLarge),
        }
    }

    /// Writes `marker`, an explicit sign, and `exp` with at
    /// least two digits (`e+05`, not `e+5`).
    ///
    /// `|exp|` must be below 10 000.
    pub fn exponent(&mut self, marker: u8, exp: i32) -> Result<(), Errc> {
        self.push(marker)?;
        self.push(if exp < 0 { b'-' } else { b'+' })?;

        let abs = exp.unsigned_abs();
        debug_assert!(abs < 10_000);

        if abs < 10 {
            self.push(b'0')?;
            self.push(b'0' + abs as u8)
        } else {
            let s = crate::util::itoa4(abs as u16);
            let bytes = s.to_bytes();
            self.extend(bytes.get(..s.digits()).unwrap_or_default())
        }
    }
}

macro_rules! impl_to_chars {
    ($name:ident, $ucoeff:ty, $arith:ident $(,)?) => {
        impl $name {
            /// Writes the shortest round-trippable representation
            /// of the value to `dst` and returns the number of
            /// bytes written.
            ///
            /// Parsing the output with
            /// [`from_chars_general`][Self::from_chars_general]
            /// reproduces the value bit for bit.
            ///
            /// # Errors
            ///
            /// Returns [`Errc::ValueTooLarge`] if `dst` is too
            /// small, in which case the buffer contents are
            /// unspecified. A buffer of
            /// [`MAX_CHARS`][Self::MAX_CHARS] bytes holds any
            /// non-negative value; the widest negative spellings
            /// of the 128-bit format need one byte more for the
            /// sign.
            pub fn to_chars(self, dst: &mut [u8]) -> Result<usize, $crate::conv::Errc> {
                self.to_chars_impl(dst, $crate::conv::Format::General, -1)
            }

            /// Like [`to_chars`][Self::to_chars], with an
            /// explicit presentation.
            ///
            /// # Errors
            ///
            /// Returns [`Errc::ValueTooLarge`] if `dst` is too
            /// small.
            pub fn to_chars_fmt(
                self,
                dst: &mut [u8],
                fmt: $crate::conv::Format,
            ) -> Result<usize, $crate::conv::Errc> {
                self.to_chars_impl(dst, fmt, -1)
            }

            /// Like [`to_chars_fmt`][Self::to_chars_fmt], with
            /// an explicit precision.
            ///
            /// A negative precision is remapped to 6, matching
            /// the `printf` default.
            ///
            /// # Errors
            ///
            /// Returns [`Errc::ValueTooLarge`] if `dst` is too
            /// small for the requested precision.
            pub fn to_chars_prec(
                self,
                dst: &mut [u8],
                fmt: $crate::conv::Format,
                precision: i32,
            ) -> Result<usize, $crate::conv::Errc> {
                let precision = if precision < 0 { 6 } else { precision };
                self.to_chars_impl(dst, fmt, precision)
            }

            /// `precision < 0` selects the shortest form.
            fn to_chars_impl(
                self,
                dst: &mut [u8],
                fmt: $crate::conv::Format,
                precision: i32,
            ) -> Result<usize, $crate::conv::Errc> {
                use $crate::{bid::to_chars::Sink, conv::Errc, conv::Format};

                if dst.is_empty() {
                    return Err(Errc::ValueTooLarge);
                }
                let mut w = Sink::new(dst);

                if fmt == Format::Hex {
                    self.wr_hex(&mut w, precision)?;
                    return Ok(w.len());
                }

                if self.signbit() {
                    w.push(b'-')?;
                }
                if self.is_special() || self.is_zero() {
                    self.wr_nonfinite(&mut w, fmt, precision)?;
                    return Ok(w.len());
                }

                let adjusted = self.adjusted_exp();
                let in_range = |lo: i32| adjusted >= lo && adjusted < Self::DIGITS as i32;
                let fixed = if precision < 0 {
                    match fmt {
                        Format::Fixed => in_range(0),
                        // The fixed spelling reproduces the
                        // stored cohort member only when the
                        // exponent is non-positive; otherwise
                        // scientific keeps the round trip
                        // bit-exact.
                        Format::General => in_range(0) && self.unbiased_exp() <= 0,
                        _ => false,
                    }
                } else {
                    match fmt {
                        Format::Fixed => true,
                        Format::General => in_range(-4),
                        _ => false,
                    }
                };

                if precision < 0 {
                    if fixed {
                        self.wr_fixed_shortest(&mut w)?;
                    } else {
                        self.wr_scientific_shortest(&mut w)?;
                    }
                } else if fixed {
                    self.wr_fixed_prec(&mut w, fmt, precision)?;
                } else {
                    self.wr_scientific_prec(&mut w, fmt, precision)?;
                }
                Ok(w.len())
            }

            /// Writes infinities, NaNs, and zeros.
            ///
            /// The sign has already been written.
            fn wr_nonfinite(
                self,
                w: &mut $crate::bid::to_chars::Sink<'_>,
                fmt: $crate::conv::Format,
                precision: i32,
            ) -> Result<(), $crate::conv::Errc> {
                use $crate::conv::Format;

                if self.is_infinite() {
                    return w.extend(b"inf");
                }
                if self.is_nan() {
                    return if self.is_snan() {
                        w.extend(b"nan(snan)")
                    } else if self.signbit() {
                        w.extend(b"nan(ind)")
                    } else {
                        w.extend(b"nan")
                    };
                }
                debug_assert!(self.is_zero());

                match fmt {
                    Format::General => w.extend(b"0.0e+00"),
                    Format::Scientific | Format::Hex => {
                        if precision == 0 {
                            w.push(b'0')?;
                        } else {
                            w.extend(b"0.0")?;
                            if precision > 1 {
                                w.pad(b'0', (precision - 1) as usize)?;
                            }
                        }
                        let marker = if fmt == Format::Hex { b'p' } else { b'e' };
                        w.push(marker)?;
                        w.extend(b"+00")
                    }
                    Format::Fixed => {
                        w.push(b'0')?;
                        if precision > 0 {
                            w.push(b'.')?;
                            w.pad(b'0', precision as usize)?;
                        }
                        Ok(())
                    }
                }
            }

            /// Fixed presentation of the stored `(coeff, exp)`
            /// pair.
            ///
            /// The sign has already been written.
            fn wr_fixed_shortest(
                self,
                w: &mut $crate::bid::to_chars::Sink<'_>,
            ) -> Result<(), $crate::conv::Errc> {
                let coeff = self.coeff();
                let exp = self.unbiased_exp();

                let mut tmp = ::itoa::Buffer::new();
                let digits = tmp.format(coeff).as_bytes();

                if exp >= 0 {
                    // Only the `Fixed` selector reaches this with
                    // a positive exponent.
                    w.extend(digits)?;
                    w.pad(b'0', exp as usize)
                } else {
                    // The dispatch guarantees at least one digit
                    // before the point.
                    let frac = exp.unsigned_abs() as usize;
                    debug_assert!(digits.len() > frac);

                    let (int, fract) = digits.split_at(digits.len().saturating_sub(frac));
                    w.extend(int)?;
                    w.push(b'.')?;
                    w.extend(fract)
                }
            }

            /// Scientific presentation of the stored
            /// `(coeff, exp)` pair.
            ///
            /// The sign has already been written.
            fn wr_scientific_shortest(
                self,
                w: &mut $crate::bid::to_chars::Sink<'_>,
            ) -> Result<(), $crate::conv::Errc> {
                let coeff = self.coeff();
                let exp = self.unbiased_exp();

                let mut tmp = ::itoa::Buffer::new();
                let digits = tmp.format(coeff).as_bytes();
                let reported = exp + digits.len() as i32 - 1;

                if let Some((&first, rest)) = digits.split_first() {
                    w.push(first)?;
                    if !rest.is_empty() {
                        w.push(b'.')?;
                        w.extend(rest)?;
                    }
                }
                w.exponent(b'e', reported)
            }

            /// Fixed presentation with `precision` fractional
            /// digits.
            ///
            /// The sign has already been written.
            fn wr_fixed_prec(
                self,
                w: &mut $crate::bid::to_chars::Sink<'_>,
                fmt: $crate::conv::Format,
                precision: i32,
            ) -> Result<(), $crate::conv::Errc> {
                use $crate::conv::Format;

                debug_assert!(precision >= 0);

                let sign = self.signbit();
                let (mut sig, mut exp) = self.frexp10();

                let frac = if exp < 0 { -exp } else { 0 };
                if frac > precision {
                    let n = (frac - precision) as u32;
                    let (q, _) = $arith::round_drop(sign, sig, n, false);
                    sig = q;
                    exp += n as i32;
                }
                if fmt == Format::General {
                    // General formatting removes trailing
                    // fractional zeros.
                    while sig != 0 && sig % 10 == 0 && exp < 0 {
                        sig /= 10;
                        exp += 1;
                    }
                }

                if sig == 0 {
                    // The value rounded away entirely.
                    w.push(b'0')?;
                    if fmt != Format::General && precision > 0 {
                        w.push(b'.')?;
                        w.pad(b'0', precision as usize)?;
                    }
                    return Ok(());
                }

                let mut tmp = ::itoa::Buffer::new();
                let digits = tmp.format(sig).as_bytes();

                if exp >= 0 {
                    w.extend(digits)?;
                    w.pad(b'0', exp as usize)?;
                    if fmt != Format::General && precision > 0 {
                        w.push(b'.')?;
                        w.pad(b'0', precision as usize)?;
                    }
                    return Ok(());
                }

                let frac = exp.unsigned_abs() as usize;
                if digits.len() > frac {
                    let (int, fract) = digits.split_at(digits.len().saturating_sub(frac));
                    w.extend(int)?;
                    w.push(b'.')?;
                    w.extend(fract)?;
                } else {
                    w.extend(b"0.")?;
                    w.pad(b'0', frac.saturating_sub(digits.len()))?;
                    w.extend(digits)?;
                }
                if fmt != Format::General && (frac as i32) < precision {
                    w.pad(b'0', (precision - frac as i32) as usize)?;
                }
                Ok(())
            }

            /// Scientific presentation with `precision` mantissa
            /// digits after the point.
            ///
            /// The sign has already been written.
            fn wr_scientific_prec(
                self,
                w: &mut $crate::bid::to_chars::Sink<'_>,
                fmt: $crate::conv::Format,
                precision: i32,
            ) -> Result<(), $crate::conv::Errc> {
                use $crate::conv::Format;

                debug_assert!(precision >= 0);

                let sign = self.signbit();
                let (mut sig, exp) = self.frexp10();

                let d = $arith::digits(sig) as i32;
                let mut reported = exp + d - 1;

                if d > precision + 1 {
                    // A single sticky-aware drop, so digits past
                    // the half-way point break ties correctly.
                    let n = (d - (precision + 1)) as u32;
                    let (q, carry) = $arith::round_drop(sign, sig, n, false);
                    sig = q;
                    if carry && $arith::digits(sig) as i32 > precision + 1 {
                        // Rounding up reached the next decade.
                        sig /= 10;
                        reported += 1;
                    }
                }
                if fmt == Format::General {
                    // General formatting removes trailing zeros.
                    while sig >= 10 && sig % 10 == 0 {
                        sig /= 10;
                    }
                }

                let mut tmp = ::itoa::Buffer::new();
                let digits = tmp.format(sig).as_bytes();

                if let Some((&first, rest)) = digits.split_first() {
                    w.push(first)?;
                    let have = rest.len() as i32;
                    let pad = fmt != Format::General && have < precision;
                    if !rest.is_empty() || (pad && precision > 0) {
                        w.push(b'.')?;
                    }
                    w.extend(rest)?;
                    if pad {
                        w.pad(b'0', (precision - have) as usize)?;
                    }
                }
                w.exponent(b'e', reported)
            }

            /// Hexadecimal presentation.
            ///
            /// Writes the sign itself since the top-level
            /// dispatch hands the whole buffer over.
            #[allow(
                clippy::indexing_slicing,
                reason = "The scratch index is bounded by the digit count"
            )]
            fn wr_hex(
                self,
                w: &mut $crate::bid::to_chars::Sink<'_>,
                precision: i32,
            ) -> Result<(), $crate::conv::Errc> {
                use $crate::conv::Format;

                if self.signbit() {
                    w.push(b'-')?;
                }
                if self.is_special() || self.is_zero() {
                    return self.wr_nonfinite(w, Format::Hex, precision);
                }

                let (mut sig, mut exp) = self.frexp10();

                // `frexp10` normalizes in base 10, so strip its
                // trailing zeros before switching radix.
                while sig % 10 == 0 {
                    sig /= 10;
                    exp += 1;
                }

                let mut hexd = (($arith::bitlen(sig) + 3) / 4) as i32;
                if precision >= 0 && hexd > precision + 1 {
                    // Dropped hex digits round at the fixed
                    // half-point of 8, not the ambient mode.
                    while hexd > precision + 2 {
                        sig /= 16;
                        hexd -= 1;
                        exp += 1;
                    }
                    let trailing = sig % 16;
                    sig /= 16;
                    exp += 1;
                    if trailing >= 8 {
                        sig += 1;
                    }
                }

                const HEX: &[u8; 16] = b"0123456789abcdef";
                let mut scratch = [0u8; (<$name>::K / 4) as usize];
                let mut i = scratch.len();
                let mut x = sig;
                loop {
                    i -= 1;
                    scratch[i] = HEX[(x % 16) as usize];
                    x /= 16;
                    if x == 0 {
                        break;
                    }
                }
                let digits = &scratch[i..];

                // The reported exponent absorbs the mantissa
                // digits after the point.
                exp += digits.len() as i32 - 1;

                if let Some((&first, rest)) = digits.split_first() {
                    w.push(first)?;
                    let have = rest.len() as i32;
                    let pad = precision >= 0 && have < precision;
                    if !rest.is_empty() || (pad && precision > 0) {
                        w.push(b'.')?;
                    }
                    w.extend(rest)?;
                    if pad {
                        w.pad(b'0', (precision - have) as usize)?;
                    }
                }
                w.exponent(b'p', exp)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let mut buf = $crate::conv::Buffer::new();
                let str = buf.format(*self, $crate::conv::Format::General);
                write!(f, "{str}")
            }
        }

        impl ::core::fmt::LowerExp for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let mut buf = $crate::conv::Buffer::new();
                let str = buf.format(*self, $crate::conv::Format::Scientific);
                write!(f, "{str}")
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let sign = self.signbit() as u8;
                if self.is_nan() {
                    if self.is_snan() {
                        write!(f, "[{sign},sNaN,{}]", self.payload())
                    } else {
                        write!(f, "[{sign},qNaN,{}]", self.payload())
                    }
                } else if self.is_infinite() {
                    write!(f, "[{sign},inf]")
                } else {
                    write!(
                        f,
                        "[{sign},{},{},form={}]",
                        self.coeff(),
                        self.unbiased_exp(),
                        (!self.is_form1() as u8) + 1,
                    )
                }
            }
        }

        impl ::core::fmt::Binary for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Binary::fmt(&self.to_bits(), f)
            }
        }
    };
}
pub(crate) use impl_to_chars;
