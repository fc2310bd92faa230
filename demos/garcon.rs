extern crate libc;
extern crate utfshim;

use libc::{c_char, wchar_t};
use utfshim::{convert_buffer, narrow, widen, NStackString, WStackString};

const WORD: &'static str = "gªrçon";
const WORD_MB: &'static [u8] = b"g\xc2\xaar\xc3\xa7on\0";

fn main() {
    let word_mb: Vec<c_char> = WORD_MB.iter().map(|&b| b as c_char).collect();

    let wide = unsafe { WStackString::from_ptr(word_mb.as_ptr()) };
    println!("wide:    {:?} ({} units, on {})", wide, wide.len(),
        if wide.uses_stack_memory() { "stack" } else { "heap" });

    let units = wide.as_units().unwrap_or(&[]);
    let narrowed = NStackString::from_units(units);
    println!("narrow:  {:?} ({} units)", narrowed, narrowed.len());

    let mut buf: [wchar_t; 4] = [0; 4];
    match convert_buffer(&mut buf[..], WORD.as_bytes()) {
        Ok(out) => println!("buffer:  {:?}", out),
        Err(err) => println!("buffer:  {}", err),
    }

    let broken = b"gar\xc3";
    let lossy: Vec<wchar_t> = utfshim::convert_string(&broken[..]);
    println!("lossy:   {:?}", narrow(&lossy));

    assert_eq!(narrow(&widen(WORD)), WORD);
}
