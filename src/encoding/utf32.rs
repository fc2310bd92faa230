use super::{Codec, DecodeError, Unit, is_valid_codepoint};

/**
UTF-32: exactly one 32-bit unit per code point.
*/
pub enum Utf32 {}

impl Codec for Utf32 {
    const MAX_WIDTH: usize = 1;

    fn decode<U: Unit>(input: &[U]) -> (Result<char, DecodeError>, usize) {
        let cp = match input.first() {
            Some(&cp) => cp.to_u32(),
            None => return (Err(DecodeError::Incomplete), 0),
        };

        match char::from_u32(cp) {
            Some(c) => (Ok(c), 1),
            None => (Err(DecodeError::Illegal), 1),
        }
    }

    unsafe fn decode_valid<U: Unit>(input: &[U]) -> (char, usize) {
        (char::from_u32_unchecked(input[0].to_u32()), 1)
    }

    fn encode<U: Unit>(c: char, output: &mut [U]) -> usize {
        output[0] = U::from_u32(c as u32);
        1
    }

    #[inline]
    fn width(_c: char) -> usize {
        1
    }

    fn trail_length<U: Unit>(unit: U) -> Option<usize> {
        if is_valid_codepoint(unit.to_u32()) {
            Some(0)
        } else {
            None
        }
    }

    fn is_trail<U: Unit>(_unit: U) -> bool {
        false
    }
}
