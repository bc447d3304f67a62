//! C interface.
//!
//! ```c
//! int parse_float(const char *text, double *value, const char **text_end);
//! int parse_float_len(const char *text, size_t len, double *value, const char **text_end);
//! ```
//!
//! Both return 1 if `text` starts with a number, which is then stored in
//! `*value`, with `*text_end` pointing just past it. Otherwise they return 0,
//! store `0.0` in `*value` and `text` in `*text_end`.
//!
//! Null `value` or `text_end` are not written to.

use core::ffi::{c_char, c_int, CStr};

use crate::{parse, Error, Parsed, Result};

/// Parses the NUL-terminated `text`.
///
/// # Safety
///
/// `text` must be null or point to a NUL-terminated string. `value` and
/// `text_end` must each be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn parse_float(
    text: *const c_char,
    value: *mut f64,
    text_end: *mut *const c_char,
) -> c_int {
    if text.is_null() {
        return report(text, Err(Error), value, text_end);
    }
    let bytes = CStr::from_ptr(text).to_bytes();
    debug!("parse_float: {}", delog::hex_str!(bytes, 8));
    report(text, parse(bytes), value, text_end)
}

/// Parses at most `len` bytes of `text`; a NUL byte still ends the text early.
///
/// # Safety
///
/// `text` must be null or valid for reads of `len` bytes. `value` and
/// `text_end` must each be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn parse_float_len(
    text: *const c_char,
    len: usize,
    value: *mut f64,
    text_end: *mut *const c_char,
) -> c_int {
    if text.is_null() {
        return report(text, Err(Error), value, text_end);
    }
    let bytes = core::slice::from_raw_parts(text.cast::<u8>(), len);
    debug!("parse_float_len: {}", delog::hex_str!(bytes, 8));
    report(text, parse(bytes), value, text_end)
}

unsafe fn report(
    text: *const c_char,
    parsed: Result<Parsed>,
    value: *mut f64,
    text_end: *mut *const c_char,
) -> c_int {
    let (result, len, status) = match parsed {
        Ok(parsed) => (parsed.value, parsed.len, 1),
        Err(Error) => (0.0, 0, 0),
    };

    if !value.is_null() {
        *value = result;
    }
    if !text_end.is_null() && !text.is_null() {
        *text_end = text.add(len);
    }

    status
}

#[cfg(test)]
mod test {
    use super::*;
    use core::ptr;

    fn call(text: &[u8]) -> (c_int, f64, isize) {
        assert_eq!(text.last(), Some(&0));
        let text = text.as_ptr().cast::<c_char>();
        let mut value = 42.0_f64;
        let mut end: *const c_char = ptr::null();
        let status = unsafe { parse_float(text, &mut value, &mut end) };
        (status, value, unsafe { end.offset_from(text) })
    }

    fn call_len(text: &[u8]) -> (c_int, f64, isize) {
        let start = text.as_ptr().cast::<c_char>();
        let mut value = 42.0_f64;
        let mut end: *const c_char = ptr::null();
        let status = unsafe { parse_float_len(start, text.len(), &mut value, &mut end) };
        (status, value, unsafe { end.offset_from(start) })
    }

    #[test]
    fn success() {
        assert_eq!(call(b"1984\0"), (1, 1984.0, 4));
        assert_eq!(call(b"+123.45e-22 abc\0"), (1, 123.45e-22, 11));
        assert_eq!(call(b"500e\0"), (1, 500.0, 3));
        assert_eq!(call(b"-Infinity\0"), (1, f64::NEG_INFINITY, 9));

        let (status, value, end) = call(b"-0.0\0");
        assert_eq!((status, end), (1, 4));
        assert!(value.is_sign_negative());
    }

    #[test]
    fn failure() {
        assert_eq!(call(b"\0"), (0, 0.0, 0));
        assert_eq!(call(b"abc\0"), (0, 0.0, 0));
        assert_eq!(call(b"AAA.99\0"), (0, 0.0, 0));
        assert_eq!(call_len(b""), (0, 0.0, 0));
        assert_eq!(call_len(b"-x"), (0, 0.0, 0));
    }

    #[test]
    fn framing() {
        for &text in &[&b"1.5e3xyz"[..], &b"nan"[..], &b"1..2"[..], &b"-.5e-1"[..], &b"9e"[..], &b"4\x0012"[..]] {
            let mut terminated = text.to_vec();
            terminated.push(0);
            let (status, value, end) = call(&terminated);
            let (status_len, value_len, end_len) = call_len(text);
            assert_eq!(status, 1);
            assert_eq!(status, status_len);
            assert_eq!(value.to_bits(), value_len.to_bits());
            assert_eq!(end, end_len);
        }

        // the length bounds the text
        assert_eq!(call_len(&b"12345"[..2]), (1, 12.0, 2));
    }

    #[test]
    fn null_pointers() {
        let mut value = 42.0_f64;
        let mut end: *const c_char = ptr::null();
        let status = unsafe { parse_float(ptr::null(), &mut value, &mut end) };
        assert_eq!(status, 0);
        assert_eq!(value, 0.0);
        assert!(end.is_null());

        let status = unsafe { parse_float_len(ptr::null(), 5, &mut value, &mut end) };
        assert_eq!(status, 0);

        let text = b"2.5\0".as_ptr().cast::<c_char>();
        let status = unsafe { parse_float(text, ptr::null_mut(), ptr::null_mut()) };
        assert_eq!(status, 1);
    }
}
