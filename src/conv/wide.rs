use libc::{c_char, wchar_t};
use super::{convert_buffer, convert_string, ConvertError};

/**
Converts a Rust string into a platform wide string.  No terminator is added.
*/
pub fn widen(s: &str) -> Vec<wchar_t> {
    convert_string(s.as_bytes())
}

/**
Converts a Rust string into a zero-terminated platform wide string, stored in `output`.

See `convert_buffer` for failure semantics.
*/
pub fn widen_buffer<'a>(output: &'a mut [wchar_t], s: &str) -> Result<&'a mut [wchar_t], ConvertError> {
    convert_buffer(output, s.as_bytes())
}

/**
Converts a platform wide string into a Rust string.

Invalid sequences in `s` are replaced with U+FFFD.
*/
pub fn narrow(s: &[wchar_t]) -> String {
    let units: Vec<u8> = convert_string(s);
    // Every unit came out of the UTF-8 encoder.
    unsafe { String::from_utf8_unchecked(units) }
}

/**
Converts a platform wide string into a zero-terminated C string, stored in `output`.

See `convert_buffer` for failure semantics.
*/
pub fn narrow_buffer<'a>(output: &'a mut [c_char], s: &[wchar_t]) -> Result<&'a mut [c_char], ConvertError> {
    convert_buffer(output, s)
}
