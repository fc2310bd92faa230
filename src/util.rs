/*!
Helpers for zero-terminated unit sequences.
*/
use std::slice;
use crate::encoding::Unit;

/**
Returns the number of units before the first zero unit, or `units.len()` if there isn't one.
*/
pub fn strlen<U>(units: &[U]) -> usize where U: Unit {
    units.iter().position(|u| u.is_zero()).unwrap_or(units.len())
}

/**
Returns `units` up to, but not including, the first zero unit.
*/
pub fn units_until_nul<U>(units: &[U]) -> &[U] where U: Unit {
    &units[..strlen(units)]
}

/**
Borrows the contents of a zero-terminated foreign string, *excluding* the terminator.

Returns `None` if `ptr` is null.

# Safety

`ptr` must be null or point to a readable sequence of units ending in a zero unit.  The returned slice must not outlive that sequence, nor may the sequence be mutated while the slice is alive.
*/
pub unsafe fn units_from_ptr<'a, U>(ptr: *const U) -> Option<&'a [U]> where U: Unit {
    if ptr.is_null() {
        return None;
    }

    let mut len = 0;
    let mut cur = ptr;
    while !(*cur).is_zero() {
        len += 1;
        cur = cur.offset(1);
    }

    Some(slice::from_raw_parts(ptr, len))
}
