//! Greedy word wrapping for comments and prose.

use super::CodeWriter;
use crate::{Error, Result};

/// How [`CodeWriter::emit_wrapped_text`] wraps its text.
///
/// Every line is laid out as
/// `indentation + prefix + [padding] + initial/subsequent prefix + words`
/// and kept within the width where the words allow it.
#[derive(Debug, Clone, Default)]
pub struct Wrap<'a> {
    prefix: &'a str,
    initial_prefix: &'a str,
    subsequent_prefix: &'a str,
    width: Option<usize>,
    indent_after_first: bool,
    break_long_words: bool,
    break_on_hyphens: bool,
}

impl<'a> Wrap<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marker repeated on every line, e.g. `// ` or `# `.
    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    /// Text after `prefix` on the first line only.
    pub fn initial_prefix(mut self, initial_prefix: &'a str) -> Self {
        self.initial_prefix = initial_prefix;
        self
    }

    /// Text after `prefix` on every line but the first.
    pub fn subsequent_prefix(mut self, subsequent_prefix: &'a str) -> Self {
        self.subsequent_prefix = subsequent_prefix;
        self
    }

    /// Override the writer's default width. Counts indentation and prefixes.
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Pad continuation lines with as many spaces as `prefix` is wide, so
    /// they hang under the first line's text.
    pub fn indent_after_first(mut self) -> Self {
        self.indent_after_first = true;
        self
    }

    /// Split words that don't fit on a line of their own.
    pub fn break_long_words(mut self) -> Self {
        self.break_long_words = true;
        self
    }

    /// Allow breaks right after hyphens inside compound words.
    pub fn break_on_hyphens(mut self) -> Self {
        self.break_on_hyphens = true;
        self
    }
}

/// A piece of a word. `joined` pieces continue the previous word and take no
/// space before them.
#[derive(Debug, PartialEq, Eq)]
struct Chunk<'t> {
    text: &'t str,
    joined: bool,
}

fn chunks<'t>(text: &'t str, break_on_hyphens: bool) -> Vec<Chunk<'t>> {
    let mut out = Vec::new();
    for word in text.split_whitespace() {
        if !break_on_hyphens {
            out.push(Chunk {
                text: word,
                joined: false,
            });
            continue;
        }
        let chars: Vec<(usize, char)> = word.char_indices().collect();
        let mut start = 0;
        for (i, &(pos, c)) in chars.iter().enumerate() {
            let between_letters = i > 0
                && chars[i - 1].1.is_alphanumeric()
                && chars.get(i + 1).is_some_and(|&(_, n)| n.is_alphabetic());
            if c == '-' && between_letters {
                let end = pos + c.len_utf8();
                out.push(Chunk {
                    text: &word[start..end],
                    joined: start > 0,
                });
                start = end;
            }
        }
        out.push(Chunk {
            text: &word[start..],
            joined: start > 0,
        });
    }
    out
}

fn width_of(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the `n`th character, or the end of `s`.
fn char_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// Fills lines greedily. `avail(n)` is the text width available on line `n`.
struct Filler<F> {
    avail: F,
    break_long_words: bool,
    lines: Vec<String>,
    current: String,
}

impl<F: Fn(usize) -> usize> Filler<F> {
    fn current_avail(&self) -> usize {
        (self.avail)(self.lines.len())
    }

    fn flush(&mut self) {
        let line = std::mem::take(&mut self.current);
        self.lines.push(line);
    }

    /// Start a line with `text`, splitting it when it may be broken.
    fn start_line(&mut self, mut text: &str) {
        if self.break_long_words {
            loop {
                let avail = self.current_avail().max(1);
                if width_of(text) <= avail {
                    break;
                }
                let split = char_offset(text, avail);
                self.current.push_str(&text[..split]);
                self.flush();
                text = &text[split..];
            }
        }
        self.current.push_str(text);
    }

    fn push(&mut self, chunk: &Chunk<'_>) {
        if self.current.is_empty() {
            self.start_line(chunk.text);
            return;
        }

        let sep = if chunk.joined { "" } else { " " };
        let used = width_of(&self.current) + width_of(sep);
        let avail = self.current_avail();
        if used + width_of(chunk.text) <= avail {
            self.current.push_str(sep);
            self.current.push_str(chunk.text);
            return;
        }

        let too_long = width_of(chunk.text) > (self.avail)(self.lines.len() + 1);
        if self.break_long_words && too_long && used < avail {
            let split = char_offset(chunk.text, avail - used);
            self.current.push_str(sep);
            self.current.push_str(&chunk.text[..split]);
            self.flush();
            self.start_line(&chunk.text[split..]);
        } else {
            self.flush();
            self.start_line(chunk.text);
        }
    }

    fn finish(mut self) -> Vec<String> {
        if !self.current.is_empty() || self.lines.is_empty() {
            self.flush();
        }
        self.lines
    }
}

impl CodeWriter {
    /// Emit `text` re-flowed to fit the wrap width.
    ///
    /// Words are separated by whitespace and never split unless
    /// [`Wrap::break_long_words`] is set, so a word wider than the available
    /// space gets a line of its own. Empty text emits one blank line.
    ///
    /// ```
    /// use penman::{CodeWriter, Wrap};
    ///
    /// let mut writer = CodeWriter::rust();
    /// writer
    ///     .indent()
    ///     .emit_wrapped_text("this is a test", &Wrap::new().prefix("# ").width(12))
    ///     .unwrap();
    /// assert_eq!(writer.render(), "    # this\n    # is a\n    # test\n");
    /// ```
    #[tracing::instrument(level = "trace", skip_all, fields(len = text.len()))]
    pub fn emit_wrapped_text(&mut self, text: &str, wrap: &Wrap<'_>) -> Result<&mut Self> {
        let width = wrap.width.unwrap_or(self.config().width);
        if width == 0 {
            return Err(Box::new(Error::ZeroWidth));
        }

        let padding = if wrap.indent_after_first {
            " ".repeat(width_of(wrap.prefix))
        } else {
            String::new()
        };
        let first = format!("{}{}", wrap.prefix, wrap.initial_prefix);
        let rest = format!("{}{padding}{}", wrap.prefix, wrap.subsequent_prefix);

        let indent = self.indent_width();
        let first_avail = width.saturating_sub(indent + width_of(&first));
        let rest_avail = width.saturating_sub(indent + width_of(&rest));

        let mut filler = Filler {
            avail: |line: usize| if line == 0 { first_avail } else { rest_avail },
            break_long_words: wrap.break_long_words,
            lines: Vec::new(),
            current: String::new(),
        };
        for chunk in chunks(text, wrap.break_on_hyphens) {
            filler.push(&chunk);
        }

        let lines = filler.finish();
        if lines.len() == 1 && lines[0].is_empty() {
            self.blank();
            return Ok(self);
        }
        for (i, line) in lines.iter().enumerate() {
            let lead = if i == 0 { &first } else { &rest };
            self.emit(&format!("{lead}{line}"));
        }
        Ok(self)
    }
}
