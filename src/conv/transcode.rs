use crate::encoding::{Codec, Decode, Unit, REPLACEMENT_CHARACTER};

/// Enough for one code point in any supported encoding.
const BUF_LEN: usize = 4;

/**
Lazily transcodes a slice of `I` units into `O` units.

Undecodable sequences are replaced with `REPLACEMENT_CHARACTER`.
*/
pub struct Transcode<'a, I, O> where I: Unit, O: Unit {
    iter: Decode<'a, I>,
    buf: [O; BUF_LEN],
    buf_at: u8,
    buf_len: u8,
}

impl<'a, I, O> Transcode<'a, I, O> where I: Unit, O: Unit {
    pub fn new(input: &'a [I]) -> Self {
        Transcode {
            iter: Decode::new(input),
            buf: [O::zero(); BUF_LEN],
            buf_at: 0,
            buf_len: 0,
        }
    }

    /**
    The offset, in input units, of the next code point to be decoded.
    */
    pub fn offset(&self) -> usize {
        self.iter.offset()
    }
}

impl<'a, I, O> Iterator for Transcode<'a, I, O> where I: Unit, O: Unit {
    type Item = O;

    fn next(&mut self) -> Option<Self::Item> {
        if self.buf_at < self.buf_len {
            let unit = self.buf[self.buf_at as usize];
            self.buf_at += 1;
            return Some(unit);
        }

        // Buffer is empty; encode next code point.
        let c = match self.iter.next() {
            Some(r) => r.unwrap_or(REPLACEMENT_CHARACTER),
            None => return None,
        };
        self.buf_len = O::Codec::encode(c, &mut self.buf[..]) as u8;
        self.buf_at = 1;
        Some(self.buf[0])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = (self.buf_len - self.buf_at) as usize;
        let (lo, hi) = self.iter.size_hint();
        let hi = hi.and_then(|hi| hi.checked_mul(O::Codec::MAX_WIDTH));
        (lo + pending, hi.and_then(|hi| hi.checked_add(pending)))
    }
}
