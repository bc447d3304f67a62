#![cfg_attr(not(test), no_std)]
//! Decimal text to `f64`, without locale, allocation or big integers.
//!
//! The digits are scanned into a [`FixedDecimal`] of at most [`DIGITS`]
//! significant digits, which is then accumulated and scaled by powers of ten
//! in [`DoubleDouble`] arithmetic, so that only the final conversion to `f64`
//! rounds.
//!
//! ```
//! let parsed = strtod_dd::parse(b"+123.45 abc").unwrap();
//! assert_eq!(parsed.value, 123.45);
//! assert_eq!(parsed.len, 7);
//!
//! assert!(strtod_dd::parse(b"aboba").is_err());
//! ```

#[macro_use]
extern crate delog;
generate_macros!();

mod arithmetic;
pub use arithmetic::{split, two_product, two_sum, two_sum_known_order};
mod convert;
mod digit;
pub use digit::{Digit, DIGITS};
mod error;
pub use error::{Error, Result};
#[cfg(feature = "ffi")]
pub mod ffi;
mod numbers;
pub use numbers::{DoubleDouble, FixedDecimal};
mod parse;
pub use parse::{parse, parse_complete, parse_str, Parsed};
pub mod scanner;
pub mod special;
mod text;
pub use text::Text;

#[cfg(test)]
mod fixtures;
