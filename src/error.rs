/// There is but one failure: the text does not start with a numeral.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Error;

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("no decimal numeral, infinity or nan found")
    }
}
