//! Provenance-tagged markup line buffer.
//!
//! Every line handed to the host carries the file and line it
//! originates from, so downstream diagnostics point at the schema
//! comment rather than at a synthetic intermediate document. Lines are
//! append-only and never reordered: emission order is output order.

use std::fmt;
use std::ops::{Deref, DerefMut};

use idldoc_schema::SourceInfo;

/// One indentation level.
const INDENT: &str = "   ";

/// One line of generated markup with its source location.
///
/// `line` uses the host's zero-based numbering; the schema model is
/// one-based and the conversion happens on append.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmittedLine {
    /// Line text, indentation included.
    pub text: String,
    /// Originating file.
    pub source: String,
    /// Zero-based originating line.
    pub line: usize,
}

/// Append-only buffer of markup lines with an indentation cursor.
#[derive(Debug, Default)]
pub struct LineBuffer {
    lines: Vec<EmittedLine>,
    indent: usize,
}

impl LineBuffer {
    /// Create an empty buffer at indentation depth zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one physical line.
    ///
    /// `line` is one-based; it is stored zero-based for the host.
    /// Non-blank text is prefixed with the current indentation and
    /// stripped of trailing newline characters; blank text becomes a
    /// bare empty line.
    pub fn append_raw(&mut self, text: &str, source: &str, line: usize) {
        let text = if text.trim().is_empty() {
            String::new()
        } else {
            format!(
                "{}{}",
                INDENT.repeat(self.indent),
                text.trim_end_matches('\n')
            )
        };
        self.lines.push(EmittedLine {
            text,
            source: source.to_owned(),
            line: line.saturating_sub(1),
        });
    }

    /// Append one line located at `info`.
    pub fn append(&mut self, text: &str, info: &SourceInfo) {
        self.append_raw(text, info.fname(), info.line());
    }

    /// Append a multi-line block, one physical line per split line.
    ///
    /// Successive lines are credited to `info.line() + offset`, offset
    /// being the line's zero-based position within the block.
    pub fn append_text(&mut self, text: &str, info: &SourceInfo) {
        for (i, line) in text.lines().enumerate() {
            self.append_raw(line, info.fname(), info.line() + i);
        }
    }

    /// Append a blank separator unless the buffer already ends in one.
    ///
    /// No-op on an empty buffer. The synthetic blank is credited to
    /// one-after the last content line: +2 on the stored number
    /// corrects for zero/one indexing, then advances by one.
    pub fn ensure_blank_line(&mut self) {
        let Some(last) = self.lines.last() else {
            return;
        };
        if last.text.trim().is_empty() {
            return;
        }
        let source = last.source.clone();
        let line = last.line + 2;
        self.append_raw("", &source, line);
    }

    /// Enter a nested indentation scope.
    ///
    /// The returned guard dereferences to the buffer; dropping it
    /// restores the previous depth on every exit path, including early
    /// `?` propagation.
    pub fn indented(&mut self) -> IndentGuard<'_> {
        self.indent += 1;
        IndentGuard { buffer: self }
    }

    /// Current indentation depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.indent
    }

    /// Emitted lines in output order.
    #[must_use]
    pub fn lines(&self) -> &[EmittedLine] {
        &self.lines
    }

    /// Whether nothing has been emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of emitted lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

impl fmt::Display for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line.text)?;
        }
        Ok(())
    }
}

/// Scoped indentation handle; see [`LineBuffer::indented`].
#[derive(Debug)]
pub struct IndentGuard<'a> {
    buffer: &'a mut LineBuffer,
}

impl Deref for IndentGuard<'_> {
    type Target = LineBuffer;

    fn deref(&self) -> &LineBuffer {
        self.buffer
    }
}

impl DerefMut for IndentGuard<'_> {
    fn deref_mut(&mut self) -> &mut LineBuffer {
        self.buffer
    }
}

impl Drop for IndentGuard<'_> {
    fn drop(&mut self) {
        self.buffer.indent -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn info(line: usize) -> SourceInfo {
        SourceInfo::new("test.idl", line)
    }

    #[test]
    fn test_append_converts_to_zero_based() {
        let mut buf = LineBuffer::new();
        buf.append("text", &info(5));
        assert_eq!(buf.lines()[0].line, 4);
        assert_eq!(buf.lines()[0].source, "test.idl");
    }

    #[test]
    fn test_append_raw_strips_trailing_newline() {
        let mut buf = LineBuffer::new();
        buf.append_raw("text\n", "test.idl", 1);
        assert_eq!(buf.lines()[0].text, "text");
    }

    #[test]
    fn test_blank_line_loses_indentation() {
        let mut buf = LineBuffer::new();
        let mut scope = buf.indented();
        scope.append("inside", &info(1));
        scope.append("   ", &info(2));
        drop(scope);
        assert_eq!(buf.lines()[0].text, "   inside");
        assert_eq!(buf.lines()[1].text, "");
    }

    #[test]
    fn test_append_text_numbers_lines_from_info() {
        let mut buf = LineBuffer::new();
        buf.append_text("one\ntwo\nthree", &info(10));
        let numbers: Vec<_> = buf.lines().iter().map(|l| l.line).collect();
        assert_eq!(numbers, [9, 10, 11]);
    }

    #[test]
    fn test_append_text_empty_is_no_lines() {
        let mut buf = LineBuffer::new();
        buf.append_text("", &info(1));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_ensure_blank_line_on_empty_buffer() {
        let mut buf = LineBuffer::new();
        buf.ensure_blank_line();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_ensure_blank_line_is_idempotent() {
        let mut buf = LineBuffer::new();
        buf.append("content", &info(3));
        buf.ensure_blank_line();
        buf.ensure_blank_line();
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.lines()[1].text, "");
    }

    #[test]
    fn test_ensure_blank_line_credits_following_line() {
        let mut buf = LineBuffer::new();
        buf.append("content", &info(3));
        buf.ensure_blank_line();
        // Stored number 2 for the content, 3 for the synthetic blank.
        assert_eq!(buf.lines()[0].line, 2);
        assert_eq!(buf.lines()[1].line, 3);
    }

    #[test]
    fn test_indentation_is_scoped() {
        let mut buf = LineBuffer::new();
        buf.append("top", &info(1));
        {
            let mut scope = buf.indented();
            scope.append("first", &info(2));
            {
                let mut inner = scope.indented();
                inner.append("second", &info(3));
            }
            scope.append("first again", &info(4));
        }
        buf.append("top again", &info(5));

        let texts: Vec<_> = buf.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            [
                "top",
                "   first",
                "      second",
                "   first again",
                "top again",
            ]
        );
    }

    #[test]
    fn test_indentation_balances_on_early_exit() {
        fn emit(buf: &mut LineBuffer, fail: bool) -> Result<(), ()> {
            let mut scope = buf.indented();
            scope.append("line", &info(1));
            if fail {
                return Err(());
            }
            Ok(())
        }

        let mut buf = LineBuffer::new();
        assert_eq!(buf.depth(), 0);
        emit(&mut buf, true).unwrap_err();
        assert_eq!(buf.depth(), 0);
        emit(&mut buf, false).unwrap();
        assert_eq!(buf.depth(), 0);
    }

    #[test]
    fn test_display_renders_text_block() {
        let mut buf = LineBuffer::new();
        buf.append("one", &info(1));
        buf.ensure_blank_line();
        buf.append("two", &info(4));
        assert_eq!(buf.to_string(), "one\n\ntwo\n");
    }
}
