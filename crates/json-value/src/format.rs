//! Indented, multi-line JSON printer.
//!
//! Output is built as raw bytes: string payloads are copied through without
//! re-encoding, so the printed text is only as well-formed as the multi-byte
//! sequences the printer lets through.
//!
//! Layout rules:
//! - empty arrays and objects print as `[]` and `{}`;
//! - every array element and object entry sits on its own line, indented one
//!   level deeper than its container;
//! - closing brackets return to the container's indentation;
//! - nothing follows the final bracket (no trailing newline).

use std::fmt;
use std::io::{self, Write};

use crate::value::{Array, Object, Value};

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Printer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrettyOptions {
    /// Spaces added per nesting level.
    pub indent: usize,
}

impl Default for PrettyOptions {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl PrettyOptions {
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// Writes `value` to `out` starting at column 0 with default options.
pub fn write_pretty<W: Write + ?Sized>(out: &mut W, value: &Value) -> io::Result<()> {
    write_pretty_with(out, value, 0, &PrettyOptions::default())
}

/// Writes `value` to `out`, treating `offset` as the indentation (in spaces)
/// of the line the value starts on.
pub fn write_pretty_with<W: Write + ?Sized>(
    out: &mut W,
    value: &Value,
    offset: usize,
    options: &PrettyOptions,
) -> io::Result<()> {
    let mut printer = Printer::new(*options);
    printer.value(value, offset);
    out.write_all(&printer.finish())
}

/// Renders `value` at column 0 into a byte buffer.
pub fn to_pretty_bytes(value: &Value) -> Vec<u8> {
    let mut printer = Printer::new(PrettyOptions::default());
    printer.value(value, 0);
    printer.finish()
}

/// Renders `value` at column 0 as text.
///
/// Overlong or surrogate sequences pass the printer's bit-pattern checks but
/// are not valid UTF-8; such bytes are replaced with U+FFFD here. Use
/// [`to_pretty_bytes`] to get the exact output.
pub fn to_pretty_string(value: &Value) -> String {
    match String::from_utf8(to_pretty_bytes(value)) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_pretty_string(self))
    }
}

struct Printer {
    buf: Vec<u8>,
    options: PrettyOptions,
}

impl Printer {
    fn new(options: PrettyOptions) -> Self {
        Self {
            buf: Vec::new(),
            options,
        }
    }

    fn finish(self) -> Vec<u8> {
        self.buf
    }

    fn value(&mut self, value: &Value, offset: usize) {
        match value {
            Value::Null => self.buf.extend_from_slice(b"null"),
            Value::Boolean(true) => self.buf.extend_from_slice(b"true"),
            Value::Boolean(false) => self.buf.extend_from_slice(b"false"),
            Value::Number(n) => self.buf.extend_from_slice(n.to_string().as_bytes()),
            Value::String(s) => self.string(s),
            Value::Array(items) => self.array(items, offset),
            Value::Object(map) => self.object(map, offset),
        }
    }

    fn newline(&mut self, offset: usize) {
        self.buf.push(b'\n');
        self.buf.resize(self.buf.len() + offset, b' ');
    }

    fn array(&mut self, items: &Array, offset: usize) {
        if items.is_empty() {
            self.buf.extend_from_slice(b"[]");
            return;
        }
        let inner = offset + self.options.indent;
        self.buf.push(b'[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.buf.push(b',');
            }
            self.newline(inner);
            self.value(item, inner);
        }
        self.newline(offset);
        self.buf.push(b']');
    }

    fn object(&mut self, map: &Object, offset: usize) {
        if map.is_empty() {
            self.buf.extend_from_slice(b"{}");
            return;
        }
        let inner = offset + self.options.indent;
        self.buf.push(b'{');
        for (i, (key, item)) in map.iter().enumerate() {
            if i > 0 {
                self.buf.push(b',');
            }
            self.newline(inner);
            self.string(key);
            self.buf.extend_from_slice(b": ");
            self.value(item, inner);
        }
        self.newline(offset);
        self.buf.push(b'}');
    }

    /// Quoted, escaped string. Stops copying at the first malformed UTF-8
    /// sequence; the closing quote is always written.
    fn string(&mut self, s: &[u8]) {
        self.buf.push(b'"');
        let mut pos = 0;
        while pos < s.len() {
            let lead = s[pos];
            let Some(width) = sequence_width(lead) else {
                log::debug!("string truncated at byte {pos}: invalid lead byte {lead:#04x}");
                break;
            };
            if width == 1 {
                self.ascii(lead);
                pos += 1;
                continue;
            }
            match s.get(pos + 1..pos + width) {
                Some(tail) if tail.iter().all(|&b| is_continuation(b)) => {
                    self.buf.extend_from_slice(&s[pos..pos + width]);
                    pos += width;
                }
                _ => {
                    log::debug!(
                        "string truncated at byte {pos}: incomplete {width}-byte sequence"
                    );
                    break;
                }
            }
        }
        self.buf.push(b'"');
    }

    fn ascii(&mut self, byte: u8) {
        let escape: &[u8] = match byte {
            b'"' => b"\\\"",
            b'\\' => b"\\\\",
            0x08 => b"\\b",
            0x0C => b"\\f",
            b'\n' => b"\\n",
            b'\r' => b"\\r",
            b'\t' => b"\\t",
            0x00..=0x1F | 0x7F => {
                self.buf.extend_from_slice(b"\\u00");
                self.buf.push(HEX[usize::from(byte >> 4)]);
                self.buf.push(HEX[usize::from(byte & 0x0F)]);
                return;
            }
            _ => {
                self.buf.push(byte);
                return;
            }
        };
        self.buf.extend_from_slice(escape);
    }
}

/// Total length of the UTF-8 sequence introduced by `lead`, judged by its bit
/// pattern alone. `None` for continuation bytes and `0xF8..=0xFF`.
fn sequence_width(lead: u8) -> Option<usize> {
    if lead & 0x80 == 0 {
        Some(1)
    } else if lead & 0xE0 == 0xC0 {
        Some(2)
    } else if lead & 0xF0 == 0xE0 {
        Some(3)
    } else if lead & 0xF8 == 0xF0 {
        Some(4)
    } else {
        None
    }
}

fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}
