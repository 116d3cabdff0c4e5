//! IEEE 754-2019 decimal interchange formats with binary
//! integer significands.
//!
//! The crate implements the three interchange formats
//! [`Decimal32`], [`Decimal64`], and [`Decimal128`] together
//! with the machinery needed to round-trip them through text:
//! a `charconv`-style formatter ([`to_chars`][Decimal64::to_chars]
//! and friends), the matching parser
//! ([`from_chars`][Decimal64::from_chars]), and the
//! [`frexp10`][Decimal64::frexp10]/[`ldexp10`][Decimal64::ldexp10]
//! normalization layer in between.
//!
//! Nothing allocates; every output goes to a caller-provided
//! byte range or a stack [`Buffer`]. Rounding consults the
//! ambient mode in [`fenv`] at each rounding point.
//!
//! ```
//! use bidec::{Decimal64, Format};
//!
//! let mut buf = [0u8; Decimal64::MAX_CHARS];
//! let d = Decimal64::new(1234567, -2); // 12345.67
//! let n = d.to_chars(&mut buf).unwrap();
//! assert_eq!(&buf[..n], b"12345.67");
//!
//! let r = Decimal64::from_chars(&buf[..n], Format::General);
//! assert!(r.ec.is_none());
//! assert_eq!(r.value.to_bits(), d.to_bits());
//! ```

#![allow(clippy::unusual_byte_groupings)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(feature = "std", test)), deny(clippy::std_instead_of_core))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(clippy::alloc_instead_of_core)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::cast_precision_loss)]
#![deny(clippy::cast_sign_loss)]
#![deny(clippy::expect_used)]
#![deny(clippy::implicit_saturating_sub)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::panic)]
#![deny(clippy::ptr_as_ptr)]
#![deny(clippy::string_slice)]
#![deny(clippy::transmute_ptr_to_ptr)]
#![deny(clippy::undocumented_unsafe_blocks)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::wildcard_imports)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(unused_lifetimes)]
#![deny(unused_qualifications)]

mod bid;
mod conv;
pub mod fenv;
mod util;

pub use bid::{Decimal128, Decimal32, Decimal64};
pub use conv::{Buffer, Errc, Format, FromCharsResult, Number, ParseError};
