//! The ambient floating-point environment.
//!
//! The only piece of environment state the crate reads is the
//! rounding mode. It is queried at each rounding point and never
//! captured in a value, so installing a mode affects every
//! subsequent operation until the mode is changed again.
//!
//! With the `std` feature the mode is thread local, mirroring the
//! per-thread floating-point environment of C's `<fenv.h>`.
//! Without `std` it is a single process-wide atomic.

/// An IEEE 754-2019 rounding mode.
///
/// The default mode is [`ToNearestEven`][RoundingMode::ToNearestEven].
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq)]
pub enum RoundingMode {
    /// IEEE 754-2019 roundTiesToEven.
    ///
    /// - Under 0.5 rounds down.
    /// - Over 0.5 rounds up.
    /// - Exactly 0.5 rounds to the nearest even.
    #[default]
    ToNearestEven,
    /// IEEE 754-2019 roundTowardZero.
    ///
    /// AKA truncation.
    ToZero,
    /// IEEE 754-2019 roundTowardPositive.
    ///
    /// AKA ceiling.
    ToPositiveInf,
    /// IEEE 754-2019 roundTowardNegative.
    ///
    /// AKA floor.
    ToNegativeInf,
    /// IEEE 754-2019 roundTiesToAway.
    ///
    /// Like [`ToNearestEven`][Self::ToNearestEven], except that
    /// 0.5 rounds away from zero.
    ToNearestAway,
}

#[cfg_attr(feature = "std", allow(dead_code, reason = "Used by the atomic fallback"))]
impl RoundingMode {
    const fn to_bits(self) -> u8 {
        match self {
            Self::ToNearestEven => 0,
            Self::ToZero => 1,
            Self::ToPositiveInf => 2,
            Self::ToNegativeInf => 3,
            Self::ToNearestAway => 4,
        }
    }

    const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::ToZero,
            2 => Self::ToPositiveInf,
            3 => Self::ToNegativeInf,
            4 => Self::ToNearestAway,
            _ => Self::ToNearestEven,
        }
    }
}

#[cfg(feature = "std")]
mod imp {
    use core::cell::Cell;

    use super::RoundingMode;

    std::thread_local! {
        static ROUNDING: Cell<RoundingMode> =
            const { Cell::new(RoundingMode::ToNearestEven) };
    }

    pub fn rounding_mode() -> RoundingMode {
        ROUNDING.with(Cell::get)
    }

    pub fn set_rounding_mode(mode: RoundingMode) {
        ROUNDING.with(|cell| cell.set(mode));
    }
}

#[cfg(not(feature = "std"))]
mod imp {
    use core::sync::atomic::{AtomicU8, Ordering};

    use super::RoundingMode;

    static ROUNDING: AtomicU8 = AtomicU8::new(0);

    pub fn rounding_mode() -> RoundingMode {
        RoundingMode::from_bits(ROUNDING.load(Ordering::Relaxed))
    }

    pub fn set_rounding_mode(mode: RoundingMode) {
        ROUNDING.store(mode.to_bits(), Ordering::Relaxed);
    }
}

/// Returns the ambient rounding mode.
pub fn rounding_mode() -> RoundingMode {
    imp::rounding_mode()
}

/// Installs `mode` as the ambient rounding mode.
///
/// Callers that need deterministic results must install the
/// desired mode before invoking any operation that rounds.
pub fn set_rounding_mode(mode: RoundingMode) {
    imp::set_rounding_mode(mode)
}

/// Runs `f` under `mode`, restoring the previous mode after.
#[cfg(test)]
pub(crate) fn with_mode<R>(mode: RoundingMode, f: impl FnOnce() -> R) -> R {
    let old = rounding_mode();
    set_rounding_mode(mode);
    let r = f();
    set_rounding_mode(old);
    r
}
