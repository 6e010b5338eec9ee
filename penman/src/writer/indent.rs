//! Indentation configuration for code generation.

use serde::Deserialize;

/// Indentation style for generated code.
///
/// Deserializes from `"tab"`, `{ spaces = N }` or `{ tabs = N }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
    /// The specified number of tab characters.
    Tabs(u8),
}

impl Indent {
    /// 4-space indentation (Rust, Python).
    pub const RUST: Self = Self::Spaces(4);

    /// 2-space indentation (TypeScript, JavaScript, YAML).
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// Tab indentation (Go).
    pub const GO: Self = Self::Tab;

    /// The character repeated to build indentation.
    pub fn fill(&self) -> char {
        match self {
            Self::Spaces(_) => ' ',
            Self::Tab | Self::Tabs(_) => '\t',
        }
    }

    /// Number of fill characters in one indent level.
    pub fn width(&self) -> usize {
        match self {
            Self::Spaces(n) | Self::Tabs(n) => usize::from(*n),
            Self::Tab => 1,
        }
    }

    /// The string for one indent level.
    pub fn unit(&self) -> String {
        std::iter::repeat_n(self.fill(), self.width()).collect()
    }

    pub fn is_tab(&self) -> bool {
        matches!(self, Self::Tab | Self::Tabs(_))
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::RUST
    }
}
