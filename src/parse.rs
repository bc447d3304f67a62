use crate::scanner::read_fixed_decimal;
use crate::special::read_special;
use crate::{Error, Result, Text};

/// Result of a successful [`parse`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parsed {
    pub value: f64,
    /// Number of bytes consumed from the start of the text.
    pub len: usize,
}

impl Parsed {
    /// The part of `text` that was not consumed.
    pub fn remainder<'a>(&self, text: &'a [u8]) -> &'a [u8] {
        text.get(self.len..).unwrap_or(&[])
    }
}

/// Parses the longest prefix of `text` that reads as a number.
///
/// Accepts, without any leading whitespace, decimal numerals such as `1984`,
/// `-.5` or `+123.45e-22`, as well as `inf`, `infinity` and `nan` in any case
/// and with optional sign. The decimal point is always `.`.
///
/// A zero byte ends the text just like the end of the slice does. Anything
/// after the number is left alone; `"500e"` is 500, consuming three bytes.
///
/// Fails iff the text does not start with a number.
pub fn parse(text: &[u8]) -> Result<Parsed> {
    let text = Text::new(text);

    if let Some((value, len)) = read_special(text) {
        return Ok(Parsed { value, len });
    }

    let (decimal, len) = read_fixed_decimal(text)?;
    trace!("parse: {:?}", &decimal);

    Ok(Parsed {
        value: decimal.to_f64(),
        len,
    })
}

pub fn parse_str(text: &str) -> Result<Parsed> {
    parse(text.as_bytes())
}

/// Parses `text` as a whole; trailing bytes are an error.
pub fn parse_complete(text: &[u8]) -> Result<f64> {
    let parsed = parse(text)?;
    if parsed.len == text.len() {
        Ok(parsed.value)
    } else {
        Err(Error)
    }
}
