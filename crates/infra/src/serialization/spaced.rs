use std::io::{self, Write};

use serde_json::ser::Formatter;

/// Single-line JSON with `", "` item and `": "` key separators.
///
/// Every character outside printable ASCII is written as a `\uXXXX` escape
/// (UTF-16 surrogate pairs above the BMP), so the output is pure ASCII.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

fn needs_escape(ch: char) -> bool {
    !ch.is_ascii() || ch == '\x7f'
}

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if !fragment.chars().any(needs_escape) {
            return writer.write_all(fragment.as_bytes());
        }

        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if !needs_escape(ch) {
                continue;
            }
            writer.write_all(fragment[start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}
