//! Decimal numerals into [`FixedDecimal`].
//!
//! The accepted pattern is
//!
//! ```text
//! [+-] digits [. digits] [(e|E) [+-] digit digits]
//! ```
//!
//! where either digit run may be empty, but not both. Scanning stops at the
//! first byte that cannot extend the numeral; what has been read up to there
//! is the result. In particular:
//!
//! - a second decimal point ends the numeral, `"1..2"` reads as `1.`;
//! - an exponent marker without digits is not part of the numeral, `"1.5e"`
//!   and `"1.5e+"` read as `1.5`, leaving the `e` unconsumed.
//!
//! Leading whitespace is not skipped.

use crate::digit::from_ascii;
use crate::text::Text;
use crate::{Error, FixedDecimal, Result};

/// Decimal exponents are clamped to `±EXPONENT_CLAMP` while scanning.
///
/// Far beyond the range of `f64` (±324), yet it bounds the work of scaling.
pub const EXPONENT_CLAMP: i32 = 1_000_000;

/// Reads a decimal numeral at the start of `text`.
///
/// Returns the decimal and the number of bytes consumed.
///
/// Fails iff there is no digit before the first byte that does not fit the
/// pattern, i.e. there is no numeral. Nothing is consumed in that case.
pub fn read_fixed_decimal(text: &Text) -> Result<(FixedDecimal, usize)> {
    let mut cursor = text.cursor();
    let mut decimal = FixedDecimal::default();
    decimal.negative = cursor.eat_sign();

    // mantissa
    let mut has_digit = false;
    let mut has_point = false;
    loop {
        let byte = cursor.peek();
        if let Some(digit) = from_ascii(byte) {
            if decimal.count != 0 || digit != 0 {
                if !decimal.push(digit) {
                    trace!("scanner: digit buffer full, dropping {}", digit);
                }
                if !has_point && decimal.exponent < EXPONENT_CLAMP {
                    decimal.exponent += 1;
                }
            } else if has_point && decimal.exponent > -EXPONENT_CLAMP {
                // leading zero of the fraction
                decimal.exponent -= 1;
            }
            has_digit = true;
        } else if byte == b'.' && !has_point {
            has_point = true;
        } else if byte == b'.' {
            debug!("scanner: second decimal point at {}", cursor.position());
            return if has_digit {
                Ok((decimal, cursor.position()))
            } else {
                Err(Error)
            };
        } else {
            break;
        }
        cursor.bump();
    }

    if !has_digit {
        return Err(Error);
    }

    // exponent
    if let b'e' | b'E' = cursor.peek() {
        let marker = cursor;
        cursor.bump();
        let negative = cursor.eat_sign();

        if from_ascii(cursor.peek()).is_none() {
            debug!("scanner: exponent marker without digits at {}", marker.position());
            return Ok((decimal, marker.position()));
        }

        let mut exponent: i32 = 0;
        while let Some(digit) = from_ascii(cursor.peek()) {
            exponent = (exponent * 10 + i32::from(digit)).min(EXPONENT_CLAMP);
            cursor.bump();
        }
        if exponent == EXPONENT_CLAMP {
            trace!("scanner: exponent clamped");
        }

        if negative {
            decimal.exponent -= exponent;
        } else {
            decimal.exponent += exponent;
        }
    }

    Ok((decimal, cursor.position()))
}
