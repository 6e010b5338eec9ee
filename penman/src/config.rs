//! Writer configuration.
//!
//! A [`WriterConfig`] is fixed when a [`CodeWriter`](crate::CodeWriter) is
//! created. It can be built in code or parsed from TOML:
//!
//! ```toml
//! indent = { spaces = 2 }
//! width = 100
//! delimiters = { open = "{", close = "}" }
//! ```

use serde::Deserialize;

use crate::{Error, Indent, Result};

/// Default column width for wrapped text.
pub const DEFAULT_WIDTH: usize = 80;

/// An opening/closing delimiter pair placed around block bodies.
///
/// Either side may be absent, e.g. Python-style blocks have neither.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Delimiters {
    pub open: Option<String>,
    pub close: Option<String>,
}

impl Delimiters {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: Some(open.into()),
            close: Some(close.into()),
        }
    }

    /// No delimiters: only the body indentation marks the block.
    pub fn none() -> Self {
        Self::default()
    }

    /// `{` and `}`.
    pub fn braces() -> Self {
        Self::new("{", "}")
    }

    /// Opening delimiter, treating an empty string as absent.
    pub fn open(&self) -> Option<&str> {
        self.open.as_deref().filter(|s| !s.is_empty())
    }

    /// Closing delimiter, treating an empty string as absent.
    pub fn close(&self) -> Option<&str> {
        self.close.as_deref().filter(|s| !s.is_empty())
    }
}

/// Immutable settings for a writer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Indentation added per level.
    pub indent: Indent,
    /// Default column width for [`emit_wrapped_text`](crate::CodeWriter::emit_wrapped_text).
    pub width: usize,
    /// Delimiters used by blocks that don't specify their own.
    pub delimiters: Delimiters,
}

impl WriterConfig {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            ..Self::default()
        }
    }

    /// Set the default wrap width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the default block delimiters.
    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Parse and validate a configuration from TOML source.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(src).map_err(|e| Error::parse(src, "penman.toml", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the settings a writer can't work with.
    pub fn validate(&self) -> Result<()> {
        if self.indent.width() == 0 {
            return Err(Box::new(Error::ZeroIndent));
        }
        if self.width == 0 {
            return Err(Box::new(Error::ZeroWidth));
        }
        tracing::debug!(indent = ?self.indent, width = self.width, "writer configuration accepted");
        Ok(())
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent: Indent::default(),
            width: DEFAULT_WIDTH,
            delimiters: Delimiters::none(),
        }
    }
}
