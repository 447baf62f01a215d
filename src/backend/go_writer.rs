//! Go code writer - builds Go source text line by line
//!
//! This module provides the append-only buffer every emission pass writes into. It only knows about lines, blocks and
//! indentation; what goes on each line is decided by the passes in [`crate::backend::emit`].

use std::fmt::Write;

/// A buffer for building Go source code with proper indentation
#[derive(Debug)]
pub struct GoWriter {
    buffer: String,
    indent_level: usize,
    indent_str: String,
}

impl Default for GoWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl GoWriter {
    /// Create a writer indenting with tabs, as gofmt does.
    pub fn new() -> Self {
        Self::with_indent("\t")
    }

    /// Create a writer with a custom indentation unit.
    pub fn with_indent(indent: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            indent_str: indent.into(),
        }
    }

    /// Get the generated code, ending in exactly one newline
    pub fn finish(mut self) -> String {
        self.buffer.truncate(self.buffer.trim_end().len());
        self.buffer.push('\n');
        self.buffer
    }

    /// Get current buffer as string slice
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Number of bytes written so far
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Write a line with current indentation (empty lines carry no indentation)
    pub fn line(&mut self, s: &str) {
        if !s.is_empty() {
            self.write_indent();
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
    }

    /// Write a formatted line with current indentation
    pub fn linef(&mut self, args: std::fmt::Arguments<'_>) {
        self.write_indent();
        let _ = self.buffer.write_fmt(args);
        self.buffer.push('\n');
    }

    /// Write a blank line
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Write indentation only
    pub fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(&self.indent_str);
        }
    }

    /// Increase indent level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indent level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    fn enclosed<F>(&mut self, open: &str, close: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(open);
        self.indent();
        f(self);
        self.dedent();
        self.line(close);
    }

    /// Write a block with braces: `header {`, indented body, `}` + `closer`
    ///
    /// `closer` lets function literals inside composite literals end in `},`.
    pub fn block_with<F>(&mut self, header: &str, closer: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.enclosed(&format!("{header} {{"), &format!("}}{closer}"), f);
    }

    /// Write a block with braces
    pub fn block<F>(&mut self, header: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.block_with(header, "", f);
    }

    /// Write a composite literal: `Type{`, indented elements, `}` + `closer` (`,` or `, nil`)
    pub fn literal<F>(&mut self, ty: &str, closer: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.enclosed(&format!("{ty}{{"), &format!("}}{closer}"), f);
    }

    /// Write a parenthesised declaration group (`const (`, `var (`, `import (`)
    pub fn group<F>(&mut self, keyword: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.enclosed(&format!("{keyword} ("), ")", f);
    }

    /// Write a line comment
    ///
    /// Control characters are written escaped (`\n`), so `text` cannot end the comment early.
    pub fn comment(&mut self, text: &str) {
        if text.is_empty() {
            self.line("//");
            return;
        }
        let mut line = String::with_capacity(text.len() + 3);
        line.push_str("// ");
        for c in text.chars() {
            if c.is_control() {
                line.extend(c.escape_default());
            } else {
                line.push(c);
            }
        }
        self.line(&line);
    }

    /// Write a multi-line comment, one `//` line per input line
    pub fn comment_lines(&mut self, text: &str) {
        for line in text.lines() {
            self.comment(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_indents_with_tabs() {
        let mut w = GoWriter::new();
        w.block("func f()", |w| {
            w.line("return");
        });
        assert_eq!(w.finish(), "func f() {\n\treturn\n}\n");
    }

    #[test]
    fn test_literals_and_closers() {
        let mut w = GoWriter::new();
        w.literal("return &Impl", ", nil", |w| {
            w.block_with("Init: func() int", ",", |w| w.line("return 1"));
        });
        assert_eq!(w.finish(), "return &Impl{\n\tInit: func() int {\n\t\treturn 1\n\t},\n}, nil\n");
    }

    #[test]
    fn test_group_and_comments() {
        let mut w = GoWriter::with_indent("    ");
        w.group("const", |w| {
            w.comment_lines("first\n\nthird");
            w.linef(format_args!("A = {}", 1));
        });
        assert_eq!(w.finish(), "const (\n    // first\n    //\n    // third\n    A = 1\n)\n");
    }

    #[test]
    fn test_blank_lines_carry_no_indentation() {
        let mut w = GoWriter::new();
        w.indent();
        w.line("a");
        w.line("");
        w.line("b");
        assert_eq!(w.as_str(), "\ta\n\n\tb\n");
    }

    #[test]
    fn test_finish_trims_trailing_blank_lines() {
        let mut w = GoWriter::new();
        w.line("package shop");
        w.blank_line();
        w.blank_line();
        assert_eq!(w.finish(), "package shop\n");
    }

    #[test]
    fn test_comment_escapes_line_breaks() {
        let mut w = GoWriter::new();
        w.comment("Source: a.proto\npackage evil\r");
        assert_eq!(w.finish(), "// Source: a.proto\\npackage evil\\r\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut w = GoWriter::new();
        w.dedent();
        w.line("x");
        assert_eq!(w.finish(), "x\n");
    }
}
