extern crate libc;
extern crate utfshim;

macro_rules! here { () => { &format!(concat!(file!(), ":{:?}"), line!()) } }

use std::ptr;
use libc::c_char;
use utfshim::{widen, StackString, ShortNStackString, ShortWStackString, WStackString, NStackString};

const HELLO: &'static [u8] = b"\xD7\xA9\xD7\x9C\xD7\x95\xD7\x9D";
const WHELLO: &'static [u16] = &[0x05E9, 0x05DC, 0x05D5, 0x05DD];

type Wide6 = StackString<u16, u8, 6>;

fn heap_val() -> Wide6 {
    let s = Wide6::from_units(b"heapValue");
    assert!(s.uses_heap_memory());
    s
}

fn stack_val() -> Wide6 {
    let s = Wide6::from_units(b"stack");
    assert!(s.uses_stack_memory());
    s
}

fn w(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

#[test]
fn test_default_is_null() {
    let s = ShortNStackString::new();
    assert!(s.is_null());
    assert!(s.as_ptr().is_null());
    assert_eq!(s.as_units(), None);
    assert_eq!(s.len(), 0);
    assert!(s.is_empty());

    let s: ShortWStackString = Default::default();
    assert!(s.is_null());
    assert!(!s.uses_stack_memory());
    assert!(!s.uses_heap_memory());
}

#[test]
fn test_null_pointer() {
    let s = unsafe { ShortWStackString::from_ptr(ptr::null()) };
    assert!(s.is_null());

    let mut s = StackString::<u8, u16, 16>::from_units(&w("foo"));
    assert_eq!(s, &b"foo"[..]);
    assert!(unsafe { s.convert_ptr(ptr::null()) }.is_none());
    assert!(s.is_null());
    assert!(s.as_ptr().is_null());
}

#[test]
fn test_from_ptr() {
    let input: Vec<u16> = w("foo\0");
    let s = unsafe { StackString::<u8, u16, 16>::from_ptr(input.as_ptr()) };
    assert_eq!(s, &b"foo"[..]);

    let word: Vec<c_char> = "g\u{aa}r\u{e7}on\0".bytes().map(|b| b as c_char).collect();
    let s = unsafe { WStackString::from_ptr(word.as_ptr()) };
    assert_eq!(s.as_units().expect(here!()), &widen("g\u{aa}r\u{e7}on")[..]);
}

#[test]
fn test_empty_string_is_not_null() {
    let s = ShortNStackString::from_units(&[]);
    assert!(!s.is_null());
    assert!(!s.as_ptr().is_null());
    assert!(s.is_empty());
    assert!(s.as_units().expect(here!()).is_empty());

    let mut s = ShortNStackString::new();
    assert!(s.convert(&[]).is_empty());
    assert!(s.is_empty());
    assert!(!s.is_null());
    assert!(s.uses_stack_memory());
}

#[test]
fn test_wide_on_heap() {
    let mut s = StackString::<u16, u8, 3>::new();
    assert_eq!(&s.convert(HELLO)[..], WHELLO);
    assert!(s.uses_heap_memory());
    assert_eq!(s, WHELLO);

    s.convert_z(b"\xD7\xA9\xD7\x9C\xD7\x95\xD7\x9D\0");
    assert!(s.uses_heap_memory());
    assert_eq!(s, WHELLO);
}

#[test]
fn test_wide_on_stack() {
    let mut s = StackString::<u16, u8, 40>::new();
    assert_eq!(&s.convert(HELLO)[..], WHELLO);
    assert!(s.uses_stack_memory());
    assert_eq!(s, WHELLO);
}

#[test]
fn test_narrow_on_heap() {
    let s = StackString::<u8, u16, 3>::from_units(WHELLO);
    assert!(s.uses_heap_memory());
    assert_eq!(s, HELLO);
}

#[test]
fn test_narrow_on_stack() {
    let s = StackString::<u8, u16, 40>::from_units(WHELLO);
    assert!(s.uses_stack_memory());
    assert_eq!(s, HELLO);
}

#[test]
fn test_threshold() {
    // "abcd" needs exactly five units, terminator included.
    let fits = StackString::<u16, u8, 5>::from_units(b"abcd");
    let spills = StackString::<u16, u8, 4>::from_units(b"abcd");
    assert!(fits.uses_stack_memory());
    assert!(spills.uses_heap_memory());
    assert_eq!(fits, spills);
    assert_eq!(fits.as_units(), spills.as_units());
}

#[test]
fn test_threshold_after_expansion() {
    // Four input units pass the length check, but convert to eight bytes.
    let spills = StackString::<u8, u16, 8>::from_units(WHELLO);
    assert!(spills.uses_heap_memory());
    assert_eq!(spills, HELLO);

    let fits = StackString::<u8, u16, 9>::from_units(WHELLO);
    assert!(fits.uses_stack_memory());
    assert_eq!(fits, HELLO);
    assert_eq!(fits, spills);
}

#[test]
fn test_threshold_counts_input_units() {
    // Twenty input bytes convert to ten units, but only the input length is checked.
    let emoji = "\u{1F600}".repeat(5);
    let s = StackString::<u16, u8, 16>::from_units(emoji.as_bytes());
    assert!(s.uses_heap_memory());
    assert_eq!(s.len(), 10);
    assert_eq!(s, &w(&emoji)[..]);

    let s = StackString::<u16, u8, 21>::from_units(emoji.as_bytes());
    assert!(s.uses_stack_memory());
    assert_eq!(s, &w(&emoji)[..]);
}

#[test]
fn test_convert_replaces() {
    let mut s = heap_val();
    s.convert(b"abc");
    assert!(s.uses_stack_memory());
    assert_eq!(s, &w("abc")[..]);

    s.convert(b"heapValue");
    assert!(s.uses_heap_memory());
    assert_eq!(s, &w("heapValue")[..]);

    s.clear();
    assert!(s.is_null());
}

#[test]
fn test_terminated() {
    for s in &[heap_val(), stack_val()] {
        let len = s.len();
        assert_eq!(s[len], 0);
        assert_eq!(s.as_units_with_term().expect(here!()).len(), len + 1);
        assert_eq!(unsafe { *s.as_ptr().offset(len as isize) }, 0);
    }
}

#[test]
fn test_clone() {
    let heap = heap_val();
    let stack = stack_val();
    let null = Wide6::new();

    let mut heap2 = heap.clone();
    assert!(heap2.uses_heap_memory());
    assert_eq!(heap2, heap);
    assert!(heap2.as_ptr() != heap.as_ptr());
    heap2[0] = 'z' as u16;
    assert_eq!(heap, &w("heapValue")[..]);
    assert_eq!(heap2, &w("zeapValue")[..]);

    let mut stack2 = stack.clone();
    assert!(stack2.uses_stack_memory());
    assert_eq!(stack2, stack);
    stack2[0] = 'z' as u16;
    assert_eq!(stack, &w("stack")[..]);

    let null2 = null.clone();
    assert!(null2.is_null());

    let mut s = heap.clone();
    assert_eq!(s, heap);
    s = stack.clone();
    assert_eq!(s, stack);
    s = null.clone();
    assert!(s.is_empty());
}

#[test]
fn test_take() {
    let mut heap = heap_val();
    let p = heap.as_ptr();
    let moved = heap.take();
    assert!(heap.is_null());
    assert!(moved.uses_heap_memory());
    assert_eq!(moved.as_ptr(), p);
    assert_eq!(moved, &w("heapValue")[..]);

    let mut stack = stack_val();
    let moved = stack.take();
    assert!(stack.is_null());
    assert!(moved.uses_stack_memory());
    assert_eq!(moved, &w("stack")[..]);
}

#[test]
fn test_swap_stack_stack() {
    let mut a = stack_val();
    let mut b = stack_val();
    b[0] = 'z' as u16;

    a.swap(&mut b);
    assert!(a.uses_stack_memory());
    assert!(b.uses_stack_memory());
    assert_eq!(a, &w("ztack")[..]);
    assert_eq!(b, &w("stack")[..]);
}

#[test]
fn test_swap_heap_heap() {
    let mut a = heap_val();
    let mut b = heap_val();
    b[0] = 'z' as u16;
    let (pa, pb) = (a.as_ptr(), b.as_ptr());

    a.swap(&mut b);
    assert!(a.uses_heap_memory());
    assert!(b.uses_heap_memory());
    assert_eq!(a, &w("zeapValue")[..]);
    assert_eq!(b, &w("heapValue")[..]);
    assert_eq!(a.as_ptr(), pb);
    assert_eq!(b.as_ptr(), pa);
}

#[test]
fn test_swap_stack_heap() {
    let mut a = stack_val();
    let mut b = heap_val();
    let pb = b.as_ptr();

    a.swap(&mut b);
    assert!(a.uses_heap_memory());
    assert!(b.uses_stack_memory());
    assert_eq!(a, &w("heapValue")[..]);
    assert_eq!(b, &w("stack")[..]);
    assert_eq!(a.as_ptr(), pb);
}

#[test]
fn test_swap_heap_stack() {
    let mut a = heap_val();
    let mut b = stack_val();
    let pa = a.as_ptr();

    a.swap(&mut b);
    assert!(a.uses_stack_memory());
    assert!(b.uses_heap_memory());
    assert_eq!(a, &w("stack")[..]);
    assert_eq!(b, &w("heapValue")[..]);
    assert_eq!(b.as_ptr(), pa);

    // And back again.
    a.swap(&mut b);
    assert_eq!(a, &w("heapValue")[..]);
    assert_eq!(b, &w("stack")[..]);
}

#[test]
fn test_swap_with_null() {
    let mut heap = heap_val();
    let mut stack = stack_val();
    let mut null1 = Wide6::new();
    let mut null2 = Wide6::new();

    heap.swap(&mut null1);
    assert!(heap.is_null());
    assert_eq!(null1, &w("heapValue")[..]);

    null2.swap(&mut stack);
    assert!(stack.is_null());
    assert_eq!(null2, &w("stack")[..]);
}

#[test]
fn test_chars_and_debug() {
    let s = StackString::<u32, u8, 16>::from_units(HELLO);
    let text: String = s.chars().collect();
    assert_eq!(text, "\u{5e9}\u{5dc}\u{5d5}\u{5dd}");

    let s = stack_val();
    assert_eq!(format!("{:?}", s), "\"stack\"");
    assert_eq!(format!("{:?}", Wide6::new()), "null");
}

#[test]
fn test_substitution() {
    let s = StackString::<u16, u8, 4>::from_units(b"\xFF");
    assert!(s.uses_stack_memory());
    assert_eq!(s, &[0xFFFDu16][..]);

    // Incomplete tail of a multi-byte sequence.
    let s = StackString::<u16, u8, 16>::from_units(&HELLO[..HELLO.len() - 1]);
    assert_eq!(s, &[0x05E9u16, 0x05DC, 0x05D5, 0xFFFD][..]);
}

#[test]
fn test_aliases() {
    assert_eq!(WStackString::BUFFER_SIZE, 256);
    assert_eq!(ShortWStackString::BUFFER_SIZE, 16);

    let long: Vec<c_char> = "x".repeat(300).bytes().map(|b| b as c_char).collect();
    let s = WStackString::from_units(&long);
    assert!(s.uses_heap_memory());
    assert_eq!(s.len(), 300);

    let wide = widen("g\u{aa}r\u{e7}on");
    let s = NStackString::from_units(&wide);
    assert!(s.uses_stack_memory());
    let bytes: Vec<u8> = s.as_units().expect(here!()).iter().map(|&b| b as u8).collect();
    assert_eq!(&bytes[..], "g\u{aa}r\u{e7}on".as_bytes());
}
