//! C/C++ code writer - builds generated source text line by line
//!
//! This module provides the buffer the emitter writes into, plus the optional
//! `#if defined(...)` wrapper applied around generated blocks.

use std::fmt::Write;

/// A buffer for building C/C++ source code with indentation
#[derive(Debug)]
pub struct CodeWriter {
    buffer: String,
    indent_level: usize,
    indent_str: String,
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new("\t")
    }
}

impl CodeWriter {
    pub fn new(indent_str: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            indent_str: indent_str.into(),
        }
    }

    /// Get the generated code
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Write a line with current indentation
    pub fn line(&mut self, s: &str) {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    /// Write formatted text as an indented line
    pub fn linef(&mut self, args: std::fmt::Arguments<'_>) {
        self.write_indent();
        let _ = self.buffer.write_fmt(args);
        self.buffer.push('\n');
    }

    /// Write a line at column zero (preprocessor directives, verbatim user lines)
    pub fn raw_line(&mut self, s: &str) {
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    /// Write a blank line
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Write indentation only
    fn write_indent(&mut self) {
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

    /// Write a brace block with the opening brace on its own line
    pub fn block<F>(&mut self, header: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.block_with_close(header, "}", f);
    }

    /// Write a brace block terminated by `close` (e.g. `};` for declarations)
    pub fn block_with_close<F>(&mut self, header: &str, close: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(header);
        self.line("{");
        self.indent();
        f(self);
        self.dedent();
        self.line(close);
    }
}

/// Optional conditional-compilation wrapper around a generated block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conditional<'a> {
    /// Emit the block unconditionally.
    Always,
    /// Emit the block inside `#if defined(MACRO)` ... `#endif`.
    Defined(&'a str),
}

impl<'a> Conditional<'a> {
    pub fn from_macro(macro_name: Option<&'a str>) -> Self {
        match macro_name {
            Some(name) if !name.is_empty() => Conditional::Defined(name),
            _ => Conditional::Always,
        }
    }

    /// Emit `f` wrapped according to this conditional.
    pub fn wrap<F>(self, w: &mut CodeWriter, f: F)
    where
        F: FnOnce(&mut CodeWriter),
    {
        match self {
            Conditional::Always => f(w),
            Conditional::Defined(name) => {
                w.raw_line(&format!("#if defined({})", name));
                f(w);
                w.raw_line(&format!("#endif // {}", name));
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_block_indents_body() {
        let mut w = CodeWriter::new("    ");
        w.block("int f(void)", |w| w.line("return 0;"));
        assert_eq!(w.finish(), "int f(void)\n{\n    return 0;\n}\n");
    }

    #[test]
    fn test_raw_line_ignores_indent() {
        let mut w = CodeWriter::default();
        w.indent();
        w.raw_line("#endif");
        w.line("x;");
        assert_eq!(w.finish(), "#endif\n\tx;\n");
    }

    #[test]
    fn test_conditional_always_is_transparent() {
        let mut w = CodeWriter::default();
        Conditional::from_macro(None).wrap(&mut w, |w| w.line("a;"));
        assert_eq!(w.finish(), "a;\n");
    }

    #[test]
    fn test_conditional_defined_wraps() {
        let mut w = CodeWriter::default();
        Conditional::from_macro(Some("WITH_STRINGS")).wrap(&mut w, |w| w.line("a;"));
        assert_eq!(w.finish(), "#if defined(WITH_STRINGS)\na;\n#endif // WITH_STRINGS\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut w = CodeWriter::default();
        w.dedent();
        w.line("x");
        assert_eq!(w.finish(), "x\n");
    }
}
