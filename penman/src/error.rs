use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for penman operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to parse writer configuration")]
    #[diagnostic(code(penman::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("indent unit must be at least one column wide")]
    #[diagnostic(
        code(penman::invalid_indent),
        help("use `Indent::Spaces(n)` or `Indent::Tabs(n)` with n > 0, or `Indent::Tab`")
    )]
    ZeroIndent,

    #[error("wrap width must be greater than zero")]
    #[diagnostic(code(penman::invalid_width))]
    ZeroWidth,

    #[error("cannot use compact mode with tabs for indents")]
    #[diagnostic(
        code(penman::compact_with_tabs),
        help("compact lists align items by column; switch the writer to space indentation")
    )]
    CompactWithTabs,
}

impl Error {
    /// Create a parse error for `src`, pointing at the span toml reported.
    pub(crate) fn parse(src: &str, filename: &str, source: toml::de::Error) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Self::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}
