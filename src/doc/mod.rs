/*!
Additional documentation.

# Components

## Encodings

See the `encoding` module.  The encoding is chosen by the width of the unit type.

| Codec   | Units            | Units per code point | Notes |
| ------- | ---------------- | -------------------- | ----- |
| `Utf8`  | `u8`, `i8`       | 1–4 | Rejects overlong forms, surrogates, and values above U+10FFFF. |
| `Utf16` | `u16`, `i16`     | 1–2 | Surrogate pairs for values above U+FFFF. |
| `Utf32` | `u32`, `i32`     | 1   | Rejects surrogates and values above U+10FFFF. |
| `Wide`  | `wchar_t`        | 1–2 | `Utf16` on Windows, `Utf32` everywhere else. |

## Stack strings

See the `stackstring` module.

| Alias               | Output    | Input     | Inline units |
| ------------------- | --------- | --------- | ------------ |
| `WStackString`      | `wchar_t` | `c_char`  | 256 |
| `NStackString`      | `c_char`  | `wchar_t` | 256 |
| `ShortWStackString` | `wchar_t` | `c_char`  | 16 |
| `ShortNStackString` | `c_char`  | `wchar_t` | 16 |

# Error handling

Decoding one code point reports `DecodeError::Illegal` or `DecodeError::Incomplete`.  Everything that *converts* replaces those with U+FFFD, so a conversion result alone cannot tell you whether the input was valid.  If you care, walk the input with `encoding::Decode` first.

Converting into a fixed-size buffer fails with `ConvertError::OutOfBufferAt` if the output does not fit.  When that happens, treat the buffer contents as garbage.

A null input pointer is not an error; it produces a null `StackString` (or `None`).

# Common Misconceptions and Mistakes

* *"`wchar_t` is UTF-16."*  Only on Windows.  Elsewhere it's (nominally) UTF-32.

* *"Valid UTF-16 is whatever the OS gives you."*  Operating systems generally do not check strings.  Lone surrogates show up in the wild, which is why everything here assumes input is potentially invalid.

* *"A buffer one unit longer than the input is enough."*  Converting narrow to wide never grows the unit count, but converting wide to narrow can take up to four bytes per unit.  `StackString` handles this by falling back to the heap.
*/
