/// A single decimal digit, `0..=9`. [`FixedDecimal`][crate::FixedDecimal] is composed of
/// up to [`DIGITS`] of them.
pub type Digit = u8;

/// Capacity of the digit buffer.
///
/// 17 significant digits identify any `f64`; we keep twice as many, so that
/// the digits that do get dropped can no longer move the result.
pub const DIGITS: usize = 2 * 17;

/// The value of an ASCII digit.
#[inline]
pub(crate) fn from_ascii(byte: u8) -> Option<Digit> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        _ => None,
    }
}
