use super::{Codec, DecodeError, Unit};

/**
UTF-16: one or two 16-bit units per code point, using surrogate pairs above the BMP.
*/
pub enum Utf16 {}

#[inline]
fn is_high_surrogate(unit: u32) -> bool {
    0xD800 <= unit && unit <= 0xDBFF
}

#[inline]
fn is_low_surrogate(unit: u32) -> bool {
    0xDC00 <= unit && unit <= 0xDFFF
}

#[inline]
fn combine_surrogates(hi: u32, lo: u32) -> u32 {
    (((hi & 0x3FF) << 10) | (lo & 0x3FF)) + 0x10000
}

impl Codec for Utf16 {
    const MAX_WIDTH: usize = 2;

    fn decode<U: Unit>(input: &[U]) -> (Result<char, DecodeError>, usize) {
        let cu0 = match input.first() {
            Some(&cu0) => cu0.to_u32(),
            None => return (Err(DecodeError::Incomplete), 0),
        };

        if is_low_surrogate(cu0) {
            return (Err(DecodeError::Illegal), 1);
        }

        if !is_high_surrogate(cu0) {
            return match char::from_u32(cu0) {
                Some(c) => (Ok(c), 1),
                None => (Err(DecodeError::Illegal), 1),
            };
        }

        let cu1 = match input.get(1) {
            Some(&cu1) => cu1.to_u32(),
            None => return (Err(DecodeError::Incomplete), 1),
        };

        if !is_low_surrogate(cu1) {
            return (Err(DecodeError::Illegal), 2);
        }

        match char::from_u32(combine_surrogates(cu0, cu1)) {
            Some(c) => (Ok(c), 2),
            None => (Err(DecodeError::Illegal), 2),
        }
    }

    unsafe fn decode_valid<U: Unit>(input: &[U]) -> (char, usize) {
        let cu0 = input[0].to_u32();
        if !is_high_surrogate(cu0) {
            return (char::from_u32_unchecked(cu0), 1);
        }

        let cu1 = input[1].to_u32();
        (char::from_u32_unchecked(combine_surrogates(cu0, cu1)), 2)
    }

    fn encode<U: Unit>(c: char, output: &mut [U]) -> usize {
        let cp = c as u32;
        if cp <= 0xFFFF {
            output[0] = U::from_u32(cp);
            1
        } else {
            let out = &mut output[..2];
            let cp = cp - 0x10000;
            out[0] = U::from_u32(0xD800 | (cp >> 10));
            out[1] = U::from_u32(0xDC00 | (cp & 0x3FF));
            2
        }
    }

    #[inline]
    fn width(c: char) -> usize {
        if (c as u32) >= 0x10000 { 2 } else { 1 }
    }

    fn trail_length<U: Unit>(unit: U) -> Option<usize> {
        let unit = unit.to_u32();
        if is_high_surrogate(unit) {
            Some(1)
        } else if is_low_surrogate(unit) {
            None
        } else {
            Some(0)
        }
    }

    fn is_trail<U: Unit>(unit: U) -> bool {
        is_low_surrogate(unit.to_u32())
    }
}
