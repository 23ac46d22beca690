// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Append-only, indentation-aware output sink for generated code.
//!
//! Emitters never own the destination: the caller hands in a `Formatter`
//! wrapping any [`std::io::Write`] and keeps sequencing the file around the
//! fragments. `write!`/`writeln!` work directly on a `Formatter` because it
//! exposes an inherent `write_fmt`.
//!
//! ```
//! use hidlc_types::Formatter;
//!
//! let mut out = Formatter::buffer();
//! out.write_str("{\n").unwrap();
//! out.indent();
//! writeln!(out, "x = {};", 1).unwrap();
//! out.unindent();
//! out.write_str("}\n").unwrap();
//! assert_eq!(out.as_str(), "{\n    x = 1;\n}\n");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

const DEFAULT_INDENT: &str = "    ";

/// Indenting writer over a caller-owned sink.
pub struct Formatter<W: Write> {
    out: W,
    indent_unit: String,
    depth: usize,
    at_line_start: bool,
}

impl<W: Write> Formatter<W> {
    /// Wrap `out` with the default four-space indentation unit.
    pub fn new(out: W) -> Self {
        Self::with_indent(out, DEFAULT_INDENT)
    }

    /// Wrap `out` with a custom indentation unit.
    pub fn with_indent(out: W, indent_unit: impl Into<String>) -> Self {
        Self {
            out,
            indent_unit: indent_unit.into(),
            depth: 0,
            at_line_start: true,
        }
    }

    /// Increase nesting by one level.
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Decrease nesting by one level (saturates at zero).
    pub fn unindent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Run `f` one level deeper, restoring the depth afterwards.
    pub fn indented<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.indent();
        let result = f(self);
        self.unindent();
        result
    }

    /// Append `s`, prefixing every non-empty line with the current indentation.
    pub fn write_str(&mut self, s: &str) -> io::Result<()> {
        for piece in s.split_inclusive('\n') {
            if self.at_line_start && piece != "\n" {
                for _ in 0..self.depth {
                    self.out.write_all(self.indent_unit.as_bytes())?;
                }
            }
            self.out.write_all(piece.as_bytes())?;
            self.at_line_start = piece.ends_with('\n');
        }
        Ok(())
    }

    /// Backs the `write!` / `writeln!` macros.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        match args.as_str() {
            Some(s) => self.write_str(s),
            None => self.write_str(&args.to_string()),
        }
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Release the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Formatter<Vec<u8>> {
    /// In-memory sink.
    pub fn buffer() -> Self {
        Self::new(Vec::new())
    }

    /// Everything written so far, decoded lossily as UTF-8.
    pub fn as_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.out)
    }
}

impl<W: Write> fmt::Debug for Formatter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter")
            .field("depth", &self.depth)
            .field("at_line_start", &self.at_line_start)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_indents_only_non_empty_lines() {
        let mut out = Formatter::buffer();
        out.indent();
        out.write_str("a;\n\nb;\n").unwrap();
        assert_eq!(out.as_str(), "    a;\n\n    b;\n");
    }

    #[test]
    fn test_partial_lines_indent_once() {
        let mut out = Formatter::buffer();
        out.indent();
        out.write_str("x = ").unwrap();
        out.write_str("1;\n").unwrap();
        assert_eq!(out.as_str(), "    x = 1;\n");
    }

    #[test]
    fn test_custom_indent_unit_and_nesting() {
        let mut out = Formatter::with_indent(Vec::new(), "\t");
        out.indented(|out| out.indented(|out| out.write_str("deep;\n")))
            .unwrap();
        assert_eq!(out.depth(), 0);
        assert_eq!(String::from_utf8(out.into_inner()).unwrap(), "\t\tdeep;\n");
    }

    #[test]
    fn test_unindent_saturates() {
        let mut out = Formatter::buffer();
        out.unindent();
        assert_eq!(out.depth(), 0);
    }

    #[test]
    fn test_sink_error_propagates() {
        let mut out = Formatter::new(FailingSink);
        let err = out.write_str("x;\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
