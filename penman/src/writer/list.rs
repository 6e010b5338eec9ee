//! Comma-separated lists.

use super::CodeWriter;
use crate::{Error, Result};

/// How [`CodeWriter::emit_list`] lays out a list.
///
/// Non-compact lists put every item on its own indented line with a trailing
/// separator:
///
/// ```text
/// let val = [
///     a,
///     b,
/// ];
/// ```
///
/// Compact lists keep the brackets on the first and last item lines and align
/// the items under the first one:
///
/// ```text
/// let val = [a,
///            b];
/// ```
#[derive(Debug, Clone)]
pub struct List<'a> {
    open: &'a str,
    close: &'a str,
    before: &'a str,
    after: &'a str,
    sep: &'a str,
    compact: bool,
    skip_last_sep: bool,
}

impl<'a> List<'a> {
    /// A list enclosed in `open` and `close`, e.g. `[` and `]`.
    pub fn new(open: &'a str, close: &'a str) -> Self {
        Self {
            open,
            close,
            before: "",
            after: "",
            sep: ",",
            compact: false,
            skip_last_sep: false,
        }
    }

    /// Text on the opening line before the open bracket.
    pub fn before(mut self, before: &'a str) -> Self {
        self.before = before;
        self
    }

    /// Text on the closing line after the close bracket.
    pub fn after(mut self, after: &'a str) -> Self {
        self.after = after;
        self
    }

    /// Separator following items, `,` by default. Compact lists drop its
    /// trailing whitespace, since their separators end a line.
    pub fn sep(mut self, sep: &'a str) -> Self {
        self.sep = sep;
        self
    }

    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }

    /// Omit the separator after the last item of a non-compact list (JSON
    /// style). Compact lists never have one.
    pub fn skip_last_sep(mut self) -> Self {
        self.skip_last_sep = true;
        self
    }
}

impl CodeWriter {
    /// Emit `items` as a delimited list. Items are inserted verbatim.
    ///
    /// Fails when a compact list is requested from a tab-indented writer,
    /// since compact items are aligned by column.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(items = items.len(), compact = list.compact)
    )]
    pub fn emit_list<S: AsRef<str>>(&mut self, items: &[S], list: &List<'_>) -> Result<&mut Self> {
        if list.compact && self.config().indent.is_tab() {
            return Err(Box::new(Error::CompactWithTabs));
        }

        let head = format!("{}{}", list.before, list.open);
        let tail = format!("{}{}", list.close, list.after);

        match items {
            [] => {
                self.emit(&format!("{head}{tail}"));
            }
            [item] => {
                self.emit(&format!("{head}{}{tail}", item.as_ref()));
            }
            [first, rest @ ..] if list.compact => {
                let sep = list.sep.trim_end();
                self.emit(&format!("{head}{}{sep}", first.as_ref()));
                let mut aligned = self.indent_by(head.chars().count());
                let last = rest.len() - 1;
                for (i, item) in rest.iter().enumerate() {
                    if i == last {
                        aligned.emit(&format!("{}{tail}", item.as_ref()));
                    } else {
                        aligned.emit(&format!("{}{sep}", item.as_ref()));
                    }
                }
            }
            _ => {
                if !head.is_empty() {
                    self.emit(&head);
                }
                {
                    let mut body = self.indent();
                    let last = items.len() - 1;
                    for (i, item) in items.iter().enumerate() {
                        if i == last && list.skip_last_sep {
                            body.emit(item.as_ref());
                        } else {
                            body.emit(&format!("{}{}", item.as_ref(), list.sep));
                        }
                    }
                }
                if !tail.is_empty() {
                    self.emit(&tail);
                }
            }
        }
        Ok(self)
    }
}
