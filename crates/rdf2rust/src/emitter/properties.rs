//! `.properties` rendering for resource bundles.
//!
//! A small subset of the Java properties escaping rules, enough for the
//! flat key -> text listings bundles contain: backslashes, separators and
//! control characters are escaped, keys additionally escape spaces.

use std::io::{self, Write};

use crate::generator::Bundle;

fn escape(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '=' | ':' if is_key => {
                out.push('\\');
                out.push(c);
            }
            ' ' if is_key || i == 0 => out.push_str("\\ "),
            '#' | '!' if i == 0 => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Write one bundle as a property listing with a provenance comment header.
/// The header text (generator name/version) is supplied by the caller.
pub fn write_bundle<W: Write>(writer: &mut W, header: &str, bundle: &Bundle) -> io::Result<()> {
    for line in header.lines() {
        writeln!(writer, "# {line}")?;
    }
    for (key, value) in bundle {
        writeln!(writer, "{}={}", escape(key, true), escape(value, false))?;
    }
    writer.flush()
}
