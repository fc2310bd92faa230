/*!
Code unit types and per-width UTF codecs.

Every codec in this module is stateless and operates purely on caller-provided slices.  Nothing here allocates.
*/
use std::fmt;

mod utf8;
mod utf16;
mod utf32;

pub use self::utf8::Utf8;
pub use self::utf16::Utf16;
pub use self::utf32::Utf32;

/**
A raw, possibly invalid, 32-bit code point value.
*/
pub type CodePoint = u32;

/**
Raw sentinel for a malformed sequence.  See `DecodeError::sentinel`.
*/
pub const ILLEGAL: CodePoint = 0xFFFF_FFFF;

/**
Raw sentinel for a sequence cut off by the end of input.  See `DecodeError::sentinel`.
*/
pub const INCOMPLETE: CodePoint = 0xFFFF_FFFE;

/**
The character substituted for every malformed or truncated sequence during transcoding.
*/
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/**
The codec used by the platform's `wchar_t`.
*/
#[cfg(windows)]
pub type Wide = Utf16;

/**
The codec used by the platform's `wchar_t`.
*/
#[cfg(not(windows))]
pub type Wide = Utf32;

/**
Returns `true` if `v` is a Unicode scalar value: at most `0x10FFFF`, and not a surrogate.
*/
#[inline]
pub fn is_valid_codepoint(v: CodePoint) -> bool {
    if v > 0x10FFFF {
        return false;
    }
    !(0xD800 <= v && v <= 0xDFFF)
}

macro_rules! unit_impl {
    ($ty_name:ident, $codec:ident) => {
        impl Unit for $ty_name {
            type Codec = $codec;

            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn is_zero(&self) -> bool {
                *self == 0
            }

            #[inline]
            fn to_u32(self) -> u32 {
                self as u32 & Self::MASK
            }

            #[inline]
            fn from_u32(v: u32) -> Self {
                v as $ty_name
            }
        }
    };
}

/**
A fixed-width code unit.

The encoding form is chosen purely by the width of the unit: 8-bit units are UTF-8, 16-bit units are UTF-16, and 32-bit units are UTF-32.  Signedness is irrelevant, which is what lets `c_char` and `wchar_t` be used directly.
*/
pub trait Unit: Copy + Eq + fmt::Debug {
    /**
    The codec for this unit's width.
    */
    type Codec: Codec;

    /**
    Mask covering exactly the bits of one unit.
    */
    const MASK: u32 = (!0u64 >> (64 - 8 * std::mem::size_of::<Self>())) as u32;

    fn zero() -> Self;
    fn is_zero(&self) -> bool;

    /**
    Zero-extends the unit, ignoring any sign.
    */
    fn to_u32(self) -> u32;

    /**
    Truncates `v` to the width of the unit.
    */
    fn from_u32(v: u32) -> Self;
}

unit_impl! { u8, Utf8 }
unit_impl! { i8, Utf8 }
unit_impl! { u16, Utf16 }
unit_impl! { i16, Utf16 }
unit_impl! { u32, Utf32 }
unit_impl! { i32, Utf32 }

/**
Encode, decode and validate one code point in a particular encoding form.

Implemented by the marker types `Utf8`, `Utf16` and `Utf32`, which are not intended to be instantiated.
*/
pub trait Codec {
    /**
    The largest value `width` can return.  Used to size worst-case buffers.
    */
    const MAX_WIDTH: usize;

    /**
    Decodes one code point from the front of `input`.

    Returns the result along with the number of units consumed.  The count never exceeds `input.len()`; if `input` is empty, the result is `Incomplete` and nothing is consumed.
    */
    fn decode<U: Unit>(input: &[U]) -> (Result<char, DecodeError>, usize);

    /**
    Decodes one code point from the front of `input`, without validation.

    # Safety

    `input` must begin with a complete, well-formed sequence.  Behaviour for anything else is undefined.
    */
    unsafe fn decode_valid<U: Unit>(input: &[U]) -> (char, usize);

    /**
    Writes the minimal sequence for `c` to the front of `output`, returning the number of units written.

    # Panics

    If `output` has fewer than `width(c)` units.
    */
    fn encode<U: Unit>(c: char, output: &mut [U]) -> usize;

    /**
    The number of units `encode` would write for `c`.
    */
    fn width(c: char) -> usize;

    /**
    The number of trailing units announced by `unit`, or `None` if `unit` cannot start a sequence.
    */
    fn trail_length<U: Unit>(unit: U) -> Option<usize>;

    /**
    Returns `true` if `unit` can only appear after a lead unit.
    */
    fn is_trail<U: Unit>(unit: U) -> bool;

    /**
    Returns `true` if `unit` can begin a sequence.
    */
    fn is_lead<U: Unit>(unit: U) -> bool {
        !Self::is_trail(unit)
    }
}

/**
Why a sequence could not be decoded.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DecodeError {
    /// The sequence violates the grammar of the encoding.
    Illegal,
    /// The input ended partway through a sequence.
    Incomplete,
}

impl DecodeError {
    /**
    The raw sentinel value for this error: `ILLEGAL` or `INCOMPLETE`.
    */
    pub fn sentinel(self) -> CodePoint {
        match self {
            DecodeError::Illegal => ILLEGAL,
            DecodeError::Incomplete => INCOMPLETE,
        }
    }

    /**
    Recovers an error from its sentinel value.  Returns `None` for anything else.
    */
    pub fn from_sentinel(v: CodePoint) -> Option<Self> {
        match v {
            ILLEGAL => Some(DecodeError::Illegal),
            INCOMPLETE => Some(DecodeError::Incomplete),
            _ => None,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecodeError::Illegal => write!(fmt, "illegal unit sequence"),
            DecodeError::Incomplete => write!(fmt, "incomplete unit sequence"),
        }
    }
}

impl ::std::error::Error for DecodeError {}

/**
Iterates over the code points of a unit slice, validating as it goes.

Unlike a conversion, this does *not* substitute anything; malformed sequences are yielded as errors, and decoding continues with the next unit after the offending sequence.
*/
pub struct Decode<'a, U> where U: Unit {
    units: &'a [U],
    at: usize,
}

impl<'a, U> Decode<'a, U> where U: Unit {
    pub fn new(units: &'a [U]) -> Self {
        Decode {
            units: units,
            at: 0,
        }
    }

    /**
    The offset, in units, of the next sequence to be decoded.
    */
    pub fn offset(&self) -> usize {
        self.at
    }

    /**
    The units not yet consumed.
    */
    pub fn as_units(&self) -> &'a [U] {
        &self.units[self.at..]
    }
}

impl<'a, U> Iterator for Decode<'a, U> where U: Unit {
    type Item = Result<char, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.as_units();
        if rest.is_empty() {
            return None;
        }

        let (r, used) = U::Codec::decode(rest);
        self.at += used;
        Some(r)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.units.len() - self.at;
        ((rest + U::Codec::MAX_WIDTH - 1) / U::Codec::MAX_WIDTH, Some(rest))
    }
}

/**
Shorthand for `Decode::new`.
*/
pub fn decode_iter<U>(units: &[U]) -> Decode<U> where U: Unit {
    Decode::new(units)
}
