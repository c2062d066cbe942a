//! Single-line rendering of parsed documents.
//!
//! Values are written in YAML flow style so the rendering is itself a YAML
//! document that decodes back to the same value.
//!
//! Invariants:
//! - The output never contains a line break.
//! - Strings are always double-quoted so they cannot re-parse as another scalar type.
//! - Sequence and mapping entries keep document order.

use serde_yaml::Value;
use std::fmt::{self, Write};

use crate::constants::RENDER_ITEM_SEPARATOR;

/// Display adapter that renders a value on one line.
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a>(pub &'a Value);

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self.0)
    }
}

/// Render a value to a string.
pub fn render(value: &Value) -> String {
    let rendered = Rendered(value).to_string();
    tracing::trace!(len = rendered.len(), "Rendered document");
    rendered
}

fn write_value<W: Write>(out: &mut W, value: &Value) -> fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Bool(b) => write!(out, "{b}"),
        // Number's Display already emits .inf / -.inf / .nan for non-finite floats.
        Value::Number(n) => write!(out, "{n}"),
        Value::String(s) => write_quoted(out, s),
        Value::Sequence(items) => {
            out.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.write_str(RENDER_ITEM_SEPARATOR)?;
                }
                write_value(out, item)?;
            }
            out.write_char(']')
        }
        Value::Mapping(entries) => {
            out.write_char('{')?;
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.write_str(RENDER_ITEM_SEPARATOR)?;
                }
                write_value(out, key)?;
                out.write_str(": ")?;
                write_value(out, item)?;
            }
            out.write_char('}')
        }
        // Only local `!tag` tags reach here; serde_yaml drops verbatim `!<...>` tags on decode.
        Value::Tagged(tagged) => {
            write!(out, "{} ", tagged.tag)?;
            write_value(out, &tagged.value)
        }
    }
}

fn write_quoted<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\t' => out.write_str("\\t")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            c if is_printable(c) => out.write_char(c)?,
            c if (c as u32) <= 0xFF => write!(out, "\\x{:02X}", c as u32)?,
            c if (c as u32) <= 0xFFFF => write!(out, "\\u{:04X}", c as u32)?,
            c => write!(out, "\\U{:08X}", c as u32)?,
        }
    }
    out.write_char('"')
}

/// Characters the YAML reader accepts verbatim inside a double-quoted scalar
/// without treating them as line breaks.
fn is_printable(c: char) -> bool {
    matches!(
        c,
        '\u{20}'..='\u{7E}'
            | '\u{A0}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    ) && !matches!(c, '\u{2028}' | '\u{2029}' | '\u{FEFF}')
}
