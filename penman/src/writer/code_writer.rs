//! Line buffer with scoped indentation.

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::Indent;
use crate::{Result, WriterConfig};

/// Accumulates lines of generated code.
///
/// Indentation is resolved when a line is emitted: every buffered line
/// already carries its leading whitespace, so rendering only joins lines.
///
/// # Example
///
/// ```
/// use penman::CodeWriter;
///
/// let mut writer = CodeWriter::rust();
/// writer.emit("hello,");
/// {
///     let mut body = writer.indent();
///     body.emit("world.");
/// }
/// assert_eq!(writer.render(), "hello,\n    world.\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeWriter {
    config: WriterConfig,
    lines: Vec<String>,
    /// Literal whitespace prepended to every non-empty emitted line.
    prefix: String,
    depth: usize,
}

impl CodeWriter {
    /// Create a writer after validating `config`.
    pub fn new(config: WriterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::unchecked(config))
    }

    fn unchecked(config: WriterConfig) -> Self {
        Self {
            config,
            lines: Vec::new(),
            prefix: String::new(),
            depth: 0,
        }
    }

    /// Create a new CodeWriter with 4-space indentation (Rust default).
    pub fn rust() -> Self {
        Self::unchecked(WriterConfig::new(Indent::RUST))
    }

    /// Create a new CodeWriter with 2-space indentation (JS/TS default).
    pub fn typescript() -> Self {
        Self::unchecked(WriterConfig::new(Indent::TYPESCRIPT))
    }

    /// Create a new CodeWriter with tab indentation (Go default).
    pub fn go() -> Self {
        Self::unchecked(WriterConfig::new(Indent::GO))
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Emit text with the current indentation.
    ///
    /// Multi-line text is split and every line gets the same indentation.
    /// Empty lines are never indented, so `emit("")` adds a blank line.
    pub fn emit(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self.blank();
        }
        for line in text.lines() {
            if line.is_empty() {
                self.lines.push(String::new());
            } else {
                self.lines.push(format!("{}{}", self.prefix, line));
            }
        }
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Emit text verbatim, one buffered line per input line, without
    /// indentation. For pre-formatted blocks like license headers.
    pub fn emit_raw(&mut self, text: &str) -> &mut Self {
        self.lines.extend(text.lines().map(str::to_string));
        self
    }

    /// Increase indentation by one level until the returned guard is dropped.
    ///
    /// The guard dereferences to the writer, so the body is emitted through
    /// it. Indentation is restored however the scope ends, including early
    /// returns and panics.
    pub fn indent(&mut self) -> Indented<'_> {
        let unit = self.config.indent.unit();
        self.push_indent(&unit)
    }

    /// Increase indentation by `n` fill characters (spaces, or tabs for a
    /// tab-indented writer) until the returned guard is dropped.
    pub fn indent_by(&mut self, n: usize) -> Indented<'_> {
        let extra: String = std::iter::repeat_n(self.config.indent.fill(), n).collect();
        self.push_indent(&extra)
    }

    fn push_indent(&mut self, extra: &str) -> Indented<'_> {
        let restore = self.prefix.len();
        self.prefix.push_str(extra);
        self.depth += 1;
        Indented {
            writer: self,
            restore,
        }
    }

    /// Number of indentation scopes currently open.
    pub fn indent_level(&self) -> usize {
        self.depth
    }

    /// Width in columns of the current indentation.
    pub fn indent_width(&self) -> usize {
        self.prefix.chars().count()
    }

    /// If the last line is blank (or whitespace only), remove it.
    pub fn trim_last_line_if_empty(&mut self) -> &mut Self {
        if self.lines.last().is_some_and(|l| l.trim().is_empty()) {
            self.lines.pop();
        }
        self
    }

    /// Remove all blank lines at the end of the buffer.
    pub fn trim_trailing_empty_lines(&mut self) -> &mut Self {
        while self.lines.last().is_some_and(|l| l.trim().is_empty()) {
            self.lines.pop();
        }
        self
    }

    /// Lines emitted so far, indentation included.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join all lines with a trailing newline.
    ///
    /// An empty writer renders as the empty string.
    pub fn render(&self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::rust()
    }
}

impl fmt::Display for CodeWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// An open indentation scope. Dropping it restores the previous indentation.
#[derive(Debug)]
pub struct Indented<'a> {
    writer: &'a mut CodeWriter,
    restore: usize,
}

impl Deref for Indented<'_> {
    type Target = CodeWriter;

    fn deref(&self) -> &Self::Target {
        self.writer
    }
}

impl DerefMut for Indented<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.writer
    }
}

impl Drop for Indented<'_> {
    fn drop(&mut self) {
        self.writer.prefix.truncate(self.restore);
        self.writer.depth -= 1;
    }
}
