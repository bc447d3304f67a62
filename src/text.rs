use ref_cast::RefCast;

/// Borrowed input text, as the scanners see it.
///
/// Both the end of the slice and a zero byte terminate the text: reading at
/// or beyond the end gives `0`, the same as reading an actual NUL. This makes
/// NUL-terminated and length-framed buffers behave identically.
#[derive(RefCast)]
#[repr(transparent)]
pub struct Text([u8]);

impl Text {
    pub fn new(bytes: &[u8]) -> &Self {
        Self::ref_cast(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Byte at position `i`, or `0` past the end.
    #[inline]
    pub fn get(&self, i: usize) -> u8 {
        self.0.get(i).copied().unwrap_or(0)
    }

    pub(crate) fn cursor(&self) -> Cursor<'_> {
        Cursor { text: self, position: 0 }
    }
}

/// Read position in a [`Text`].
#[derive(Clone, Copy)]
pub(crate) struct Cursor<'a> {
    text: &'a Text,
    position: usize,
}

impl Cursor<'_> {
    #[inline]
    pub fn peek(&self) -> u8 {
        self.text.get(self.position)
    }

    /// Before using, make sure the text has not ended.
    #[inline]
    pub fn bump(&mut self) {
        debug_assert!(self.peek() != 0);
        self.position += 1;
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Consumes an optional `+` or `-`, returning whether it was `-`.
    pub fn eat_sign(&mut self) -> bool {
        match self.peek() {
            b'+' => {
                self.bump();
                false
            }
            b'-' => {
                self.bump();
                true
            }
            _ => false,
        }
    }
}
