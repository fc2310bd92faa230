/*!
This crate converts strings between UTF-8, UTF-16 and UTF-32, primarily for handing them to and from foreign interfaces.

For more details, see the [additional documentation](doc/index.html).

Conversions never fail because of bad input: every malformed or truncated sequence is replaced with U+FFFD.  The only failure is running out of room in a fixed-size output buffer.

# Quick Reference

Encodings are selected by the width of the unit type, so `c_char`, `wchar_t`, `u16` and friends can be used directly.

| Want | Use |
| ---: | --- |
| Decode or encode one code point | `Codec::decode`, `Codec::encode` on `Utf8`, `Utf16`, `Utf32` |
| Zero-terminated output in a buffer you own | `convert_buffer` |
| Output in a `Vec` | `convert_string`, `convert_into` |
| `&str` to `wchar_t` and back | `widen`, `narrow` |
| A zero-terminated temporary for a foreign call | `StackString`, `WStackString`, `NStackString` |
*/
extern crate libc;

#[doc(hidden)] pub mod doc;
pub mod conv;
pub mod encoding;
pub mod stackstring;
pub mod util;

pub use conv::{convert_buffer, convert_buffer_z, convert_into, convert_string, narrow, narrow_buffer, widen, widen_buffer, ConvertError};
pub use encoding::{Codec, DecodeError, Unit, Utf8, Utf16, Utf32, Wide, REPLACEMENT_CHARACTER};
pub use stackstring::{StackString, WStackString, NStackString, ShortWStackString, ShortNStackString};
