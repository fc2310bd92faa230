/*!
Transcoding between unit widths.

Malformed or truncated input is never an error here: every sequence that fails to decode is replaced with `REPLACEMENT_CHARACTER`.  The only way a conversion can fail is by running out of output space.
*/
use std::fmt;
use log::{debug, trace};
use crate::encoding::{Codec, Unit, REPLACEMENT_CHARACTER};
use crate::util::units_until_nul;

pub use self::transcode::Transcode;
pub use self::wide::{narrow, narrow_buffer, widen, widen_buffer};

mod transcode;
mod wide;

/**
Transcodes `input` into `output`, followed by a zero terminator.

The capacity of `output` *includes* the terminator.  On success, returns the written units, *excluding* the terminator (which immediately follows them in `output`).

# Failure

Fails if `output` cannot hold the entire converted string plus its terminator.  An empty `output` fails without being touched.  Otherwise, the contents of `output` after a failure are unspecified: they currently hold whatever was converted before space ran out, terminated, but callers must not rely on this.
*/
pub fn convert_buffer<'a, O, I>(output: &'a mut [O], input: &[I]) -> Result<&'a mut [O], ConvertError>
where
    O: Unit,
    I: Unit,
{
    if output.is_empty() {
        debug!("cannot convert into an empty buffer");
        return Err(ConvertError::OutOfBufferAt(0));
    }

    // Keep a slot for the terminator.
    let capacity = output.len() - 1;
    let mut at_in = 0;
    let mut at_out = 0;

    while at_in < input.len() {
        let (r, used) = I::Codec::decode(&input[at_in..]);
        let c = r.unwrap_or(REPLACEMENT_CHARACTER);
        let width = O::Codec::width(c);

        if capacity - at_out < width {
            output[at_out] = O::zero();
            trace!("output buffer of {} units exhausted at input offset {}", output.len(), at_in);
            return Err(ConvertError::OutOfBufferAt(at_in));
        }

        at_out += O::Codec::encode(c, &mut output[at_out..]);
        at_in += used;
    }

    output[at_out] = O::zero();
    Ok(&mut output[..at_out])
}

/**
As `convert_buffer`, except that `input` ends at its first zero unit, if it has one.
*/
pub fn convert_buffer_z<'a, O, I>(output: &'a mut [O], input: &[I]) -> Result<&'a mut [O], ConvertError>
where
    O: Unit,
    I: Unit,
{
    convert_buffer(output, units_until_nul(input))
}

/**
Transcodes `input` into a newly allocated vector.  No terminator is added.
*/
pub fn convert_string<O, I>(input: &[I]) -> Vec<O>
where
    O: Unit,
    I: Unit,
{
    let mut output = Vec::with_capacity(input.len());
    convert_into(input, &mut output);
    output
}

/**
Transcodes `input`, appending the result to `output`.  No terminator is added.
*/
pub fn convert_into<O, I>(input: &[I], output: &mut Vec<O>)
where
    O: Unit,
    I: Unit,
{
    output.extend(Transcode::<I, O>::new(input));
}

/**
Returns the number of output units `input` converts to, without writing anything.
*/
pub fn converted_len<O, I>(input: &[I]) -> usize
where
    O: Unit,
    I: Unit,
{
    let mut at = 0;
    let mut len = 0;
    while at < input.len() {
        let (r, used) = I::Codec::decode(&input[at..]);
        len += O::Codec::width(r.unwrap_or(REPLACEMENT_CHARACTER));
        at += used;
    }
    len
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConvertError {
    /**
    The output buffer had no room for the code point starting at the given input offset.
    */
    OutOfBufferAt(usize),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConvertError::OutOfBufferAt(at) => write!(fmt, "output buffer too small for code point at offset {}", at),
        }
    }
}

impl ::std::error::Error for ConvertError {}
