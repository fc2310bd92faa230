/*!
Small-buffer transcoded strings.

A `StackString` owns a zero-terminated, transcoded copy of some input string.  Short inputs are converted into an inline array; longer ones, and short ones whose conversion does not fit, go to the heap.  This makes it a cheap intermediate when calling a foreign API that wants a zero-terminated string in a different unit width than the one you have.
*/
use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr;
use libc::{c_char, wchar_t};
use log::trace;

use crate::conv::convert_buffer;
use crate::encoding::{Codec, Unit, REPLACEMENT_CHARACTER};
use crate::util::{strlen, units_from_ptr, units_until_nul};

/**
A transcoded `wchar_t` string, converted from a `c_char` string.
*/
pub type WStackString = StackString<wchar_t, c_char, 256>;

/**
A transcoded `c_char` string, converted from a `wchar_t` string.
*/
pub type NStackString = StackString<c_char, wchar_t, 256>;

/**
As `WStackString`, with a smaller inline buffer.
*/
pub type ShortWStackString = StackString<wchar_t, c_char, 16>;

/**
As `NStackString`, with a smaller inline buffer.
*/
pub type ShortNStackString = StackString<c_char, wchar_t, 16>;

enum Storage<O, const N: usize> {
    Empty,
    Stack([O; N]),
    Heap(Box<[O]>),
}

/**
Owns a zero-terminated string of `O` units, transcoded from `I` units.

The string is held inline in an array of `N` units (including the terminator), or on the heap.  The inline array is only tried when the *input* is shorter than `N` units; a longer input goes to the heap even if its conversion would have fit.  For example, 20 bytes of UTF-8 holding five astral code points become 10 UTF-16 units, but with `N = 16` they are stored on the heap.  A `StackString` can also be *null*: this is distinct from holding an empty string, and corresponds to converting from a null pointer.

# Parameters

`O` is the output unit; `I` is the input unit.  Unit widths select the encodings: 8-bit units are UTF-8, 16-bit units UTF-16, and 32-bit units UTF-32.

`N` is the inline capacity, in output units, *including* the terminator.
*/
pub struct StackString<O, I, const N: usize> where O: Unit, I: Unit {
    storage: Storage<O, N>,
    _marker: PhantomData<I>,
}

impl<O, I, const N: usize> StackString<O, I, N> where O: Unit, I: Unit {
    /**
    The inline capacity, in output units, including the terminator.
    */
    pub const BUFFER_SIZE: usize = N;

    /**
    Creates a null `StackString`.
    */
    pub fn new() -> Self {
        StackString {
            storage: Storage::Empty,
            _marker: PhantomData,
        }
    }

    /**
    Creates a `StackString` by converting `input`.
    */
    pub fn from_units(input: &[I]) -> Self {
        let mut s = StackString::new();
        s.convert(input);
        s
    }

    /**
    Creates a `StackString` by converting `input` up to its first zero unit.
    */
    pub fn from_units_z(input: &[I]) -> Self {
        let mut s = StackString::new();
        s.convert_z(input);
        s
    }

    /**
    Creates a `StackString` by converting a zero-terminated foreign string.  A null `ptr` produces a null `StackString`.

    # Safety

    See `util::units_from_ptr`.
    */
    pub unsafe fn from_ptr(ptr: *const I) -> Self {
        let mut s = StackString::new();
        s.convert_ptr(ptr);
        s
    }

    /**
    Replaces the contents of this string with the conversion of `input`, returning the converted units (without the terminator).

    Any previous heap allocation is released first.
    */
    pub fn convert(&mut self, input: &[I]) -> &mut [O] {
        self.clear();

        let min_output = input.len() + 1;
        if min_output <= N {
            let mut buf = [O::zero(); N];
            if convert_buffer(&mut buf[..], input).is_ok() {
                self.storage = Storage::Stack(buf);
                return self.content_mut();
            }
        }

        let max_output = input.len() * O::Codec::MAX_WIDTH + 1;
        trace!("stack string with {} inline units spilled to heap ({} units)", N, max_output);
        let mut buf = vec![O::zero(); max_output].into_boxed_slice();
        let converted = convert_buffer(&mut buf[..], input).is_ok();
        debug_assert!(converted, "worst-case buffer was too small");
        self.storage = Storage::Heap(buf);
        self.content_mut()
    }

    /**
    As `convert`, except that `input` ends at its first zero unit, if it has one.
    */
    pub fn convert_z(&mut self, input: &[I]) -> &mut [O] {
        self.convert(units_until_nul(input))
    }

    /**
    As `convert`, taking a zero-terminated foreign string.  A null `ptr` makes this string null, and returns `None`.

    # Safety

    See `util::units_from_ptr`.
    */
    pub unsafe fn convert_ptr(&mut self, ptr: *const I) -> Option<&mut [O]> {
        match units_from_ptr(ptr) {
            Some(input) => Some(self.convert(input)),
            None => {
                self.clear();
                None
            },
        }
    }

    /**
    Makes this string null, releasing any heap allocation.
    */
    pub fn clear(&mut self) {
        self.storage = Storage::Empty;
    }

    /**
    Moves the contents out, leaving this string null.
    */
    pub fn take(&mut self) -> Self {
        mem::replace(self, StackString::new())
    }

    /**
    Exchanges the contents of two strings, regardless of where each is stored.
    */
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.storage, &mut other.storage);
    }

    /**
    Returns a pointer to the zero-terminated contents, or null.
    */
    pub fn as_ptr(&self) -> *const O {
        match self.storage {
            Storage::Empty => ptr::null(),
            Storage::Stack(ref buf) => buf.as_ptr(),
            Storage::Heap(ref buf) => buf.as_ptr(),
        }
    }

    /**
    Returns a mutable pointer to the zero-terminated contents, or null.
    */
    pub fn as_mut_ptr(&mut self) -> *mut O {
        match self.storage {
            Storage::Empty => ptr::null_mut(),
            Storage::Stack(ref mut buf) => buf.as_mut_ptr(),
            Storage::Heap(ref mut buf) => buf.as_mut_ptr(),
        }
    }

    /**
    Returns the contents, excluding the terminator, or `None` if this string is null.

    # Efficiency

    The length is found by scanning for the terminator.
    */
    pub fn as_units(&self) -> Option<&[O]> {
        self.raw().map(units_until_nul)
    }

    /**
    Returns the contents, *including* the terminator, or `None` if this string is null.
    */
    pub fn as_units_with_term(&self) -> Option<&[O]> {
        self.raw().map(|raw| &raw[..(strlen(raw) + 1).min(raw.len())])
    }

    /**
    Mutable sibling of `as_units`.

    Writing a zero unit into the contents truncates the string; this cannot be undone.
    */
    pub fn as_units_mut(&mut self) -> Option<&mut [O]> {
        match self.raw_mut() {
            Some(raw) => {
                let len = strlen(raw);
                Some(&mut raw[..len])
            },
            None => None,
        }
    }

    /**
    The number of units before the terminator.  Zero for a null string.
    */
    pub fn len(&self) -> usize {
        self.raw().map(strlen).unwrap_or(0)
    }

    /**
    Returns `true` if this string is null or holds no units.
    */
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /**
    Returns `true` if this string is null, as opposed to merely empty.
    */
    pub fn is_null(&self) -> bool {
        match self.storage {
            Storage::Empty => true,
            _ => false,
        }
    }

    pub fn uses_stack_memory(&self) -> bool {
        match self.storage {
            Storage::Stack(_) => true,
            _ => false,
        }
    }

    pub fn uses_heap_memory(&self) -> bool {
        match self.storage {
            Storage::Heap(_) => true,
            _ => false,
        }
    }

    /**
    Iterates over the code points of the contents.
    */
    pub fn chars(&self) -> Chars<O> {
        Chars {
            units: self.as_units().unwrap_or(&[]),
        }
    }

    fn raw(&self) -> Option<&[O]> {
        match self.storage {
            Storage::Empty => None,
            Storage::Stack(ref buf) => Some(&buf[..]),
            Storage::Heap(ref buf) => Some(&buf[..]),
        }
    }

    fn raw_mut(&mut self) -> Option<&mut [O]> {
        match self.storage {
            Storage::Empty => None,
            Storage::Stack(ref mut buf) => Some(&mut buf[..]),
            Storage::Heap(ref mut buf) => Some(&mut buf[..]),
        }
    }

    fn content_mut(&mut self) -> &mut [O] {
        self.as_units_mut().unwrap_or(&mut [])
    }
}

/**
Iterator over the code points of a `StackString`.
*/
pub struct Chars<'a, O> where O: Unit {
    units: &'a [O],
}

impl<'a, O> Iterator for Chars<'a, O> where O: Unit {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.units.is_empty() {
            return None;
        }

        // Contents written through `IndexMut` may not be valid.
        let (r, used) = O::Codec::decode(self.units);
        self.units = &self.units[used..];
        Some(r.unwrap_or(REPLACEMENT_CHARACTER))
    }
}

impl<O, I, const N: usize> Clone for StackString<O, I, N> where O: Unit, I: Unit {
    fn clone(&self) -> Self {
        let storage = match self.storage {
            Storage::Empty => Storage::Empty,
            Storage::Stack(ref buf) => Storage::Stack(*buf),
            Storage::Heap(_) => {
                let units = self.as_units_with_term().unwrap_or(&[]);
                Storage::Heap(units.to_vec().into_boxed_slice())
            },
        };

        StackString {
            storage: storage,
            _marker: PhantomData,
        }
    }
}

impl<O, I, const N: usize> Debug for StackString<O, I, N> where O: Unit, I: Unit {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        if self.is_null() {
            return write!(fmt, "null");
        }
        write!(fmt, "\"")?;
        for c in self.chars() {
            write!(fmt, "{}", c.escape_debug())?;
        }
        write!(fmt, "\"")
    }
}

impl<O, I, const N: usize> Default for StackString<O, I, N> where O: Unit, I: Unit {
    fn default() -> Self {
        StackString::new()
    }
}

impl<O, I, const N: usize> Index<usize> for StackString<O, I, N> where O: Unit, I: Unit {
    type Output = O;

    /**
    Indexes the zero-terminated contents; the terminator itself is addressable.

    # Panics

    If the string is null, or `index` is past the end of the backing storage.
    */
    fn index(&self, index: usize) -> &O {
        match self.raw() {
            Some(raw) => &raw[index],
            None => panic!("indexed a null StackString"),
        }
    }
}

impl<O, I, const N: usize> IndexMut<usize> for StackString<O, I, N> where O: Unit, I: Unit {
    fn index_mut(&mut self, index: usize) -> &mut O {
        match self.raw_mut() {
            Some(raw) => &mut raw[index],
            None => panic!("indexed a null StackString"),
        }
    }
}

impl<O, I, J, const N: usize, const M: usize> PartialEq<StackString<O, J, M>> for StackString<O, I, N>
where
    O: Unit,
    I: Unit,
    J: Unit,
{
    fn eq(&self, other: &StackString<O, J, M>) -> bool {
        self.as_units() == other.as_units()
    }
}

impl<O, I, const N: usize> Eq for StackString<O, I, N> where O: Unit, I: Unit {}

/**
A null string compares equal to the empty slice.
*/
impl<O, I, const N: usize> PartialEq<[O]> for StackString<O, I, N> where O: Unit, I: Unit {
    fn eq(&self, other: &[O]) -> bool {
        self.as_units().unwrap_or(&[]) == other
    }
}

impl<'a, O, I, const N: usize> PartialEq<&'a [O]> for StackString<O, I, N> where O: Unit, I: Unit {
    fn eq(&self, other: &&'a [O]) -> bool {
        self.as_units().unwrap_or(&[]) == *other
    }
}
