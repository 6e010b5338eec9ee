//! Delimited, indented blocks.

use super::{CodeWriter, Indented};
use crate::Delimiters;

/// Lines placed around an indented block body.
///
/// # Example
///
/// ```
/// use penman::{Block, CodeWriter, Delimiters};
///
/// let mut writer = CodeWriter::rust();
/// writer.block(
///     &Block::new("impl Foo").delimiters(Delimiters::braces()),
///     |w| {
///         w.emit("fn bar(&self) {}");
///     },
/// );
///
/// assert_eq!(writer.render(), "impl Foo {\n    fn bar(&self) {}\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Block<'a> {
    before: &'a str,
    after: &'a str,
    delimiters: Option<Delimiters>,
    allman: bool,
    indent: Option<usize>,
}

impl<'a> Block<'a> {
    /// A block whose header line starts with `before`.
    pub fn new(before: &'a str) -> Self {
        Self {
            before,
            ..Self::default()
        }
    }

    /// Text appended to the closing line, e.g. `;` or ` else`.
    pub fn after(mut self, after: &'a str) -> Self {
        self.after = after;
        self
    }

    /// Override the writer's default delimiters.
    pub fn delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = Some(delimiters);
        self
    }

    /// Put the opening delimiter on its own line.
    pub fn allman(mut self) -> Self {
        self.allman = true;
        self
    }

    /// Indent the body by `n` fill characters instead of one indent level.
    pub fn indent_by(mut self, n: usize) -> Self {
        self.indent = Some(n);
        self
    }
}

impl CodeWriter {
    /// Emit `block`'s opening line, run `body` one level deeper, then emit
    /// the closing line. Returns whatever `body` returns.
    pub fn block<R>(&mut self, block: &Block<'_>, body: impl FnOnce(&mut Self) -> R) -> R {
        let delimiters = self.open_block(block);
        let result = body(&mut self.body_scope(block));
        self.close_block(block, &delimiters);
        result
    }

    /// Like [`block`](Self::block) for a fallible body.
    ///
    /// When `body` fails the closing line is not emitted; indentation is
    /// restored and the error is returned unchanged.
    pub fn try_block<T, E>(
        &mut self,
        block: &Block<'_>,
        body: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, E> {
        let delimiters = self.open_block(block);
        let result = body(&mut self.body_scope(block));
        match result {
            Ok(value) => {
                self.close_block(block, &delimiters);
                Ok(value)
            }
            Err(err) => {
                tracing::debug!(depth = self.indent_level(), "block body failed");
                Err(err)
            }
        }
    }

    fn body_scope(&mut self, block: &Block<'_>) -> Indented<'_> {
        match block.indent {
            Some(n) => self.indent_by(n),
            None => self.indent(),
        }
    }

    fn open_block(&mut self, block: &Block<'_>) -> Delimiters {
        let delimiters = block
            .delimiters
            .clone()
            .unwrap_or_else(|| self.config().delimiters.clone());

        match (block.before.is_empty(), delimiters.open()) {
            (false, Some(open)) if !block.allman => {
                self.emit(&format!("{} {open}", block.before));
            }
            (false, Some(open)) => {
                self.emit(block.before).emit(open);
            }
            (false, None) => {
                self.emit(block.before);
            }
            (true, Some(open)) => {
                self.emit(open);
            }
            (true, None) => {}
        }
        delimiters
    }

    fn close_block(&mut self, block: &Block<'_>, delimiters: &Delimiters) {
        match delimiters.close() {
            Some(close) => {
                self.emit(&format!("{close}{}", block.after));
            }
            None if !block.after.is_empty() => {
                self.emit(block.after);
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Indent, WriterConfig};

    #[test]
    fn test_block_without_delimiters() {
        let mut w = CodeWriter::rust();
        w.block(&Block::new("if:"), |w| {
            w.emit("level 1");
        });
        assert_eq!(w.render(), "if:\n    level 1\n");
    }

    #[test]
    fn test_block_with_header_and_close() {
        let mut w = CodeWriter::rust();
        w.block(&Block::new("if {").after("}"), |w| {
            w.emit("level 1");
        });
        assert_eq!(w.render(), "if {\n    level 1\n}\n");
    }

    #[test]
    fn test_block_default_delimiters() {
        let config = WriterConfig::default().with_delimiters(Delimiters::braces());
        let mut w = CodeWriter::new(config).unwrap();
        w.block(&Block::new("if"), |w| {
            w.emit("level 1");
        });
        assert_eq!(w.render(), "if {\n    level 1\n}\n");
    }

    #[test]
    fn test_block_after_follows_close() {
        let mut w = CodeWriter::rust();
        w.block(
            &Block::new("let x =").after(";").delimiters(Delimiters::braces()),
            |w| {
                w.emit("1");
            },
        );
        assert_eq!(w.render(), "let x = {\n    1\n};\n");
    }

    #[test]
    fn test_block_without_before() {
        let mut w = CodeWriter::rust();
        w.block(&Block::default().delimiters(Delimiters::braces()), |w| {
            w.emit("scoped");
        });
        assert_eq!(w.render(), "{\n    scoped\n}\n");
    }

    #[test]
    fn test_allman() {
        let config = WriterConfig::default().with_delimiters(Delimiters::braces());
        let mut w = CodeWriter::new(config).unwrap();
        w.block(&Block::new("if").allman(), |w| {
            w.emit("level 1");
        });
        assert_eq!(w.render(), "if\n{\n    level 1\n}\n");
    }

    #[test]
    fn test_allman_tabs() {
        let config = WriterConfig::new(Indent::Tab).with_delimiters(Delimiters::braces());
        let mut w = CodeWriter::new(config).unwrap();
        w.block(&Block::new("if").allman(), |w| {
            w.emit("level 1");
        });
        assert_eq!(w.render(), "if\n{\n\tlevel 1\n}\n");
    }

    #[test]
    fn test_nested_blocks() {
        let mut w = CodeWriter::typescript();
        let braces = Block::new("class Foo").delimiters(Delimiters::braces());
        w.block(&braces, |w| {
            w.block(&Block::new("bar()").delimiters(Delimiters::braces()), |w| {
                w.emit("return 1;");
            });
        });
        assert_eq!(w.render(), "class Foo {\n  bar() {\n    return 1;\n  }\n}\n");
    }

    #[test]
    fn test_block_indent_override() {
        let mut w = CodeWriter::rust();
        w.block(&Block::new("if").indent_by(2), |w| {
            w.emit("x");
        });
        w.emit("y");
        assert_eq!(w.render(), "if\n  x\ny\n");
    }

    #[test]
    fn test_block_indent_override_with_delimiters() {
        let mut w = CodeWriter::go();
        let block = Block::new("func main()").delimiters(Delimiters::braces()).indent_by(2);
        let result: Result<(), &str> = w.try_block(&block, |w| {
            w.emit("run()");
            Ok(())
        });
        assert_eq!(result, Ok(()));
        assert_eq!(w.render(), "func main() {\n\t\trun()\n}\n");
    }

    #[test]
    fn test_block_returns_body_value() {
        let mut w = CodeWriter::rust();
        let count = w.block(&Block::new("items:"), |w| {
            w.emit("a").emit("b");
            2
        });
        assert_eq!(count, 2);
    }

    #[test]
    fn test_try_block_error_restores_indent() {
        let mut w = CodeWriter::rust();
        let block = Block::new("fn main()").delimiters(Delimiters::braces());
        let result: Result<(), &str> = w.try_block(&block, |w| {
            w.emit("let x = 1;");
            Err("unsupported statement")
        });
        assert_eq!(result, Err("unsupported statement"));
        assert_eq!(w.indent_level(), 0);
        w.emit("// recovered");
        assert_eq!(w.render(), "fn main() {\n    let x = 1;\n// recovered\n");
    }

    #[test]
    fn test_try_block_ok() {
        let mut w = CodeWriter::rust();
        let block = Block::new("fn main()").delimiters(Delimiters::braces());
        let value: Result<u8, String> = w.try_block(&block, |w| {
            w.emit("run();");
            Ok(7)
        });
        assert_eq!(value, Ok(7));
        assert_eq!(w.render(), "fn main() {\n    run();\n}\n");
    }
}
