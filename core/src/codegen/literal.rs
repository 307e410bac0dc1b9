//! Encoding of literal payloads into the target language.

use core::fmt::Write;

use crate::String;

/// Quote `value` as a C string literal.
///
/// Quotes, backslashes and control characters are escaped; control
/// characters without a short escape become three-digit octal escapes so a
/// following digit cannot extend them. Non-ASCII text passes through as UTF-8.
pub fn c_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\x7f' => {
                // Writing into a String never fails.
                let _ = write!(out, "\\{:03o}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
