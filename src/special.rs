//! All things `inf` and `nan`.
//!
//! Accepted, after an optional sign and in any letter case: `infinity`, its
//! abbreviation `inf`, and `nan`. Partial words such as `infin` are not
//! accepted; neither are NaN payloads such as `nan(123)`, which simply end
//! after `nan`.

use crate::text::{Cursor, Text};

const INFINITY: &[u8] = b"infinity";
const INF: usize = 3;
const NAN: &[u8] = b"nan";

/// Length of the common prefix of the text at `cursor` and the lowercase `word`,
/// ignoring the case of the text.
fn common_prefix_length(mut cursor: Cursor<'_>, word: &[u8]) -> usize {
    let mut length = 0;
    for &letter in word {
        if cursor.peek().to_ascii_lowercase() != letter {
            break;
        }
        cursor.bump();
        length += 1;
    }
    length
}

/// Reads a signed infinity or a NaN at the start of `text`.
///
/// Returns the value and the number of bytes consumed, or `None` if the text
/// does not start with one of the special words. This is not an error; the
/// text may well start with a decimal numeral instead.
///
/// NaN always comes with a clear sign bit, whatever sign was written.
pub fn read_special(text: &Text) -> Option<(f64, usize)> {
    let mut cursor = text.cursor();
    let negative = cursor.eat_sign();

    match cursor.peek() {
        b'i' | b'I' => {
            let length = common_prefix_length(cursor, INFINITY);
            if length == INF || length == INFINITY.len() {
                trace!("special: infinity ({} letters)", length);
                let value = if negative { f64::NEG_INFINITY } else { f64::INFINITY };
                return Some((value, cursor.position() + length));
            }
        }
        b'n' | b'N' => {
            if common_prefix_length(cursor, NAN) == NAN.len() {
                trace!("special: nan");
                return Some((f64::NAN, cursor.position() + NAN.len()));
            }
        }
        _ => {}
    }

    None
}
