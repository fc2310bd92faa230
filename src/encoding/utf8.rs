use super::{Codec, DecodeError, Unit, is_valid_codepoint};

/**
UTF-8: one to four 8-bit units per code point.
*/
pub enum Utf8 {}

#[inline]
fn trail_of(lead: u32) -> Option<usize> {
    match lead {
        0x00 ..= 0x7F => Some(0),
        0x80 ..= 0xC1 => None,
        0xC2 ..= 0xDF => Some(1),
        0xE0 ..= 0xEF => Some(2),
        0xF0 ..= 0xF4 => Some(3),
        _ => None,
    }
}

#[inline]
fn is_continuation(unit: u32) -> bool {
    (unit & 0xC0) == 0x80
}

#[inline]
fn width_of(cp: u32) -> usize {
    match cp {
        0x0000 ..= 0x007F => 1,
        0x0080 ..= 0x07FF => 2,
        0x0800 ..= 0xFFFF => 3,
        _ => 4,
    }
}

impl Codec for Utf8 {
    const MAX_WIDTH: usize = 4;

    fn decode<U: Unit>(input: &[U]) -> (Result<char, DecodeError>, usize) {
        let lead = match input.first() {
            Some(&lead) => lead.to_u32(),
            None => return (Err(DecodeError::Incomplete), 0),
        };

        let trail = match trail_of(lead) {
            Some(0) => return (Ok(lead as u8 as char), 1),
            Some(trail) => trail,
            None => return (Err(DecodeError::Illegal), 1),
        };

        let mut cp = lead & ((1 << (6 - trail)) - 1);
        let mut at = 1;
        while at <= trail {
            let unit = match input.get(at) {
                Some(&unit) => unit.to_u32(),
                None => return (Err(DecodeError::Incomplete), at),
            };
            at += 1;
            if !is_continuation(unit) {
                return (Err(DecodeError::Illegal), at);
            }
            cp = (cp << 6) | (unit & 0x3F);
        }

        if !is_valid_codepoint(cp) || width_of(cp) != trail + 1 {
            return (Err(DecodeError::Illegal), at);
        }

        match char::from_u32(cp) {
            Some(c) => (Ok(c), at),
            None => (Err(DecodeError::Illegal), at),
        }
    }

    unsafe fn decode_valid<U: Unit>(input: &[U]) -> (char, usize) {
        let lead = input[0].to_u32();
        if lead < 0xC0 {
            return (lead as u8 as char, 1);
        }

        let trail = match lead {
            0xC0 ..= 0xDF => 1,
            0xE0 ..= 0xEF => 2,
            _ => 3,
        };

        let mut cp = lead & ((1 << (6 - trail)) - 1);
        for unit in &input[1..trail + 1] {
            cp = (cp << 6) | (unit.to_u32() & 0x3F);
        }

        (char::from_u32_unchecked(cp), trail + 1)
    }

    fn encode<U: Unit>(c: char, output: &mut [U]) -> usize {
        let cp = c as u32;
        match width_of(cp) {
            1 => {
                output[0] = U::from_u32(cp);
                1
            },
            2 => {
                let out = &mut output[..2];
                out[0] = U::from_u32((cp >> 6) | 0xC0);
                out[1] = U::from_u32((cp & 0x3F) | 0x80);
                2
            },
            3 => {
                let out = &mut output[..3];
                out[0] = U::from_u32((cp >> 12) | 0xE0);
                out[1] = U::from_u32(((cp >> 6) & 0x3F) | 0x80);
                out[2] = U::from_u32((cp & 0x3F) | 0x80);
                3
            },
            _ => {
                let out = &mut output[..4];
                out[0] = U::from_u32((cp >> 18) | 0xF0);
                out[1] = U::from_u32(((cp >> 12) & 0x3F) | 0x80);
                out[2] = U::from_u32(((cp >> 6) & 0x3F) | 0x80);
                out[3] = U::from_u32((cp & 0x3F) | 0x80);
                4
            },
        }
    }

    #[inline]
    fn width(c: char) -> usize {
        width_of(c as u32)
    }

    fn trail_length<U: Unit>(unit: U) -> Option<usize> {
        trail_of(unit.to_u32())
    }

    fn is_trail<U: Unit>(unit: U) -> bool {
        is_continuation(unit.to_u32())
    }
}
