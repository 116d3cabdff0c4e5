macro_rules! impl_from_chars {
    ($name:ident, $ucoeff:ty, $arith:ident $(,)?) => {
        impl $name {
            /// Parses a decimal from the start of `s` using the
            /// `General` grammar.
            pub fn from_chars_general(s: &[u8]) -> $crate::conv::FromCharsResult<Self> {
                Self::from_chars(s, $crate::conv::Format::General)
            }

            /// Parses a decimal from the start of `s`.
            ///
            /// The parser is case-insensitive, accepts no
            /// leading whitespace, and stops at the first byte
            /// that cannot extend the number. `fmt` selects the
            /// grammar: `General` takes an optional exponent,
            /// `Fixed` none, `Scientific` a mandatory one, and
            /// `Hex` the hexadecimal-significand grammar.
            ///
            /// Digits beyond the precision of the format are
            /// consumed, folded into the exponent, and rounded
            /// per the ambient mode; excess `Hex` digits round
            /// at the grammar's fixed half-point of 8 instead.
            /// `nan`, `nan(...)`, `inf`,
            /// and `infinity` tokens are materialized into the
            /// value: a payload of `snan` or a nonzero number
            /// produces a signaling NaN, anything else a quiet
            /// one, and infinity reports `ResultOutOfRange`
            /// exactly like a finite overflow does.
            pub fn from_chars(
                s: &[u8],
                fmt: $crate::conv::Format,
            ) -> $crate::conv::FromCharsResult<Self> {
                use $crate::conv::{Errc, FromCharsResult};

                let (consumed, sign, coeff, exp, ec) = Self::parse_parts(s, fmt);
                match ec {
                    None => {
                        let value = Self::maybe_rounded(sign, exp, coeff);
                        let ec = if value.is_infinite() {
                            // The finite input overflowed.
                            Some(Errc::ResultOutOfRange)
                        } else {
                            None
                        };
                        FromCharsResult { value, consumed, ec }
                    }
                    Some(Errc::NotSupported) => {
                        // A NaN token. The payload rides the
                        // coefficient channel; nonzero means
                        // signaling.
                        let payload = coeff & Self::PAYLOAD_MASK;
                        let value = if coeff != 0 {
                            Self::snan(sign, payload)
                        } else {
                            Self::nan(sign, 0)
                        };
                        FromCharsResult {
                            value,
                            consumed,
                            ec: None,
                        }
                    }
                    Some(Errc::ValueTooLarge) => FromCharsResult {
                        value: Self::inf(sign),
                        consumed,
                        ec: Some(Errc::ResultOutOfRange),
                    },
                    Some(ec) => FromCharsResult {
                        value: Self::nan(false, 0),
                        consumed: 0,
                        ec: Some(ec),
                    },
                }
            }

            /// Walks the byte range once and returns
            /// `(consumed, sign, coeff, exp, ec)`.
            ///
            /// Special tokens report through `ec`:
            /// `ValueTooLarge` for infinity and `NotSupported`
            /// for NaN, with the payload in the coefficient.
            #[allow(clippy::cast_possible_wrap, reason = "Lengths fit an i64")]
            fn parse_parts(
                s: &[u8],
                fmt: $crate::conv::Format,
            ) -> (usize, bool, $ucoeff, i32, Option<$crate::conv::Errc>) {
                use $crate::conv::{Errc, Format};

                const INVALID: (usize, bool, $ucoeff, i32, Option<Errc>) =
                    (0, false, 0, 0, Some(Errc::InvalidArgument));

                if s.is_empty() {
                    return INVALID;
                }

                let mut rest = s;
                let mut sign = false;
                if let Some((&c, r)) = rest.split_first() {
                    if matches!(c, b'-' | b'+') {
                        sign = c == b'-';
                        rest = r;
                    }
                }

                match rest.first() {
                    Some(b'i' | b'I' | b'n' | b'N') => {
                        return Self::parse_special(s, rest, sign);
                    }
                    Some(_) => {}
                    None => return INVALID,
                }

                let hex = fmt == Format::Hex;
                // One digit more than the precision, so the last
                // kept digit can be rounded with a sticky bit.
                // Hex digits fill the word four bits at a time.
                let max_sig = if hex {
                    Self::K / 4 - 1
                } else {
                    Self::DIGITS + 1
                };

                let mut coeff: $ucoeff = 0;
                let mut sig_digits: u32 = 0;
                let mut any_digits = false;
                let mut seen_point = false;
                // Counted in i64 so absurdly long inputs cannot
                // wrap the exponent.
                let mut frac: i64 = 0;
                let mut dropped: i64 = 0;
                let mut sticky = false;
                let mut hex_round_up = false;

                loop {
                    let Some((&c, r)) = rest.split_first() else {
                        break;
                    };
                    let digit = if hex {
                        match c {
                            b'0'..=b'9' => Some(c - b'0'),
                            b'a'..=b'f' => Some(c - b'a' + 10),
                            b'A'..=b'F' => Some(c - b'A' + 10),
                            _ => None,
                        }
                    } else {
                        match c {
                            b'0'..=b'9' => Some(c - b'0'),
                            _ => None,
                        }
                    };

                    match digit {
                        Some(d) => {
                            any_digits = true;
                            if seen_point {
                                frac += 1;
                            }
                            if coeff == 0 && d == 0 {
                                // Leading zeros consume no
                                // precision.
                            } else if sig_digits < max_sig {
                                let radix: $ucoeff = if hex { 16 } else { 10 };
                                coeff = coeff * radix + d as $ucoeff;
                                sig_digits += 1;
                            } else {
                                if hex && dropped == 0 {
                                    // The first dropped hex
                                    // digit rounds at the fixed
                                    // half-point of 8, like the
                                    // formatter.
                                    hex_round_up = d >= 8;
                                }
                                dropped += 1;
                                if d != 0 {
                                    sticky = true;
                                }
                            }
                        }
                        None if c == b'.' && !seen_point => {
                            seen_point = true;
                        }
                        None => break,
                    }
                    rest = r;
                }

                if !any_digits {
                    return INVALID;
                }

                // The exponent part. `Fixed` never takes one,
                // `Scientific` must, and a dangling marker
                // ("1e+") is rolled back rather than consumed.
                let marker_at = |c: u8| {
                    if hex {
                        c == b'p' || c == b'P'
                    } else {
                        c == b'e' || c == b'E'
                    }
                };
                let mut e: i64 = 0;
                if fmt != Format::Fixed {
                    let mut cursor = rest;
                    let mut ok = false;
                    if let Some((&c, r)) = cursor.split_first() {
                        if marker_at(c) {
                            cursor = r;
                            let mut neg = false;
                            if let Some((&c, r)) = cursor.split_first() {
                                if matches!(c, b'-' | b'+') {
                                    neg = c == b'-';
                                    cursor = r;
                                }
                            }
                            while let Some((&c, r)) = cursor.split_first() {
                                if !c.is_ascii_digit() {
                                    break;
                                }
                                ok = true;
                                e = e.saturating_mul(10).saturating_add((c - b'0') as i64);
                                cursor = r;
                            }
                            if neg {
                                e = -e;
                            }
                        }
                    }
                    if ok {
                        rest = cursor;
                    } else if fmt == Format::Scientific {
                        // The grammar requires an exponent.
                        return INVALID;
                    }
                }

                let consumed = s.len() - rest.len();

                // value = coeff * 10^(e - frac + dropped)
                let exp = {
                    let exp = e.saturating_sub(frac).saturating_add(dropped);
                    // Exponents beyond this window saturate the
                    // same way during construction.
                    const LO: i64 = -(1 << 28);
                    const HI: i64 = 1 << 28;
                    exp.clamp(LO, HI) as i32
                };

                let (coeff, exp) = if !hex && sig_digits > Self::DIGITS {
                    debug_assert!(sig_digits == Self::DIGITS + 1);
                    Self::round_excess(sign, coeff, exp, sticky)
                } else if hex_round_up {
                    // Hex digits past the coefficient's window
                    // round in base 16, not through
                    // `round_excess`: the dropped positions are
                    // already folded into `exp` one for one, the
                    // same way the formatter's `sig /= 16; exp
                    // += 1` step counts them. The increment
                    // cannot overflow a coefficient of at most
                    // `K/4 - 1` hex digits.
                    (coeff + 1, exp)
                } else {
                    (coeff, exp)
                };

                (consumed, sign, coeff, exp, None)
            }

            /// Rounds a coefficient holding one digit more than
            /// the precision, folding the digit into `exp`.
            fn round_excess(
                sign: bool,
                coeff: $ucoeff,
                exp: i32,
                sticky: bool,
            ) -> ($ucoeff, i32) {
                let (mut coeff, carry) = $arith::round_drop(sign, coeff, 1, sticky);
                let mut exp = exp.saturating_add(1);
                if carry && $arith::digits(coeff) > Self::DIGITS {
                    // Rounding up produced 10^DIGITS. The
                    // division is exact.
                    coeff /= 10;
                    exp += 1;
                }
                (coeff, exp)
            }

            /// Parses `inf`, `infinity`, and `nan` tokens.
            ///
            /// `s` is the full input (for the consumed count)
            /// and `rest` the input past the sign.
            fn parse_special(
                s: &[u8],
                rest: &[u8],
                sign: bool,
            ) -> (usize, bool, $ucoeff, i32, Option<$crate::conv::Errc>) {
                use $crate::conv::{equal_fold, Errc};

                let offset = s.len() - rest.len();

                if let Some(chunk) = rest.first_chunk::<8>() {
                    if equal_fold(chunk, b"infinity") {
                        return (offset + 8, sign, 0, 0, Some(Errc::ValueTooLarge));
                    }
                }
                if let Some(chunk) = rest.first_chunk::<3>() {
                    if equal_fold(chunk, b"inf") {
                        return (offset + 3, sign, 0, 0, Some(Errc::ValueTooLarge));
                    }
                    if equal_fold(chunk, b"nan") {
                        let body = rest.get(3..).unwrap_or_default();
                        let (extra, payload) = Self::parse_payload(body);
                        return (offset + 3 + extra, sign, payload, 0, Some(Errc::NotSupported));
                    }
                }

                (0, false, 0, 0, Some(Errc::InvalidArgument))
            }

            /// Parses an optional `(payload)` after a NaN token.
            ///
            /// Returns the consumed length and the payload
            /// carried through the coefficient channel: the
            /// spelling `snan` or any nonzero number marks
            /// a signaling NaN; anything else is quiet. An
            /// unterminated payload is not consumed.
            fn parse_payload(s: &[u8]) -> (usize, $ucoeff) {
                use $crate::conv::equal_fold;

                let Some((&b'(', body)) = s.split_first() else {
                    return (0, 0);
                };

                let mut i = 0;
                loop {
                    match body.get(i) {
                        Some(&b')') => break,
                        Some(&c) if c.is_ascii_alphanumeric() || c == b'_' => i += 1,
                        _ => return (0, 0),
                    }
                }

                let text = body.get(..i).unwrap_or_default();
                let payload = if equal_fold(text, b"snan") {
                    1
                } else {
                    let mut n: $ucoeff = 0;
                    let mut digits_only = !text.is_empty();
                    for &c in text {
                        if c.is_ascii_digit() {
                            n = n
                                .wrapping_mul(10)
                                .wrapping_add((c - b'0') as $ucoeff);
                        } else {
                            digits_only = false;
                            break;
                        }
                    }
                    if digits_only {
                        // Oversized payloads are truncated to
                        // the payload field.
                        n & Self::PAYLOAD_MASK
                    } else {
                        0
                    }
                };
                (i + 2, payload)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::conv::ParseError;

            /// Parses with the `General` grammar, requiring the
            /// entire string to be consumed.
            ///
            /// Out-of-range values saturate (to ±infinity or
            /// zero) rather than failing, the way `strtod`
            /// behaves.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                use $crate::conv::{Errc, ParseError};

                let bytes = s.as_bytes();
                if bytes.is_empty() {
                    return Err(ParseError::empty());
                }
                let r = Self::from_chars_general(bytes);
                if matches!(r.ec, Some(Errc::InvalidArgument)) {
                    return Err(ParseError::invalid("expected a decimal literal"));
                }
                if r.consumed != bytes.len() {
                    return Err(ParseError::invalid("trailing characters"));
                }
                Ok(r.value)
            }
        }
    };
}
pub(crate) use impl_from_chars;
