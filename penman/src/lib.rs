//! Line buffer and indentation engine for generating source code.
//!
//! penman builds source text for any target language. A [`CodeWriter`]
//! collects lines, tracks indentation, and offers helpers for blocks, lists
//! and wrapped comments; the casing functions normalize identifiers before
//! they are emitted. Rendering returns a `String`; writing it anywhere is up
//! to the caller.
//!
//! ```
//! use penman::{Block, CodeWriter, Delimiters, List, to_snake_case};
//!
//! let mut writer = CodeWriter::rust();
//! let name = to_snake_case("MakePoint");
//! let header = format!("fn {name}() -> Point");
//! writer.block(&Block::new(&header).delimiters(Delimiters::braces()), |w| {
//!     w.emit_list(&["x: 0", "y: 0"], &List::new("{ ", " }").before("Point ").compact())
//!         .unwrap();
//! });
//!
//! assert_eq!(
//!     writer.render(),
//!     "fn make_point() -> Point {\n    Point { x: 0,\n            y: 0 }\n}\n"
//! );
//! ```
//!
//! # Module Organization
//!
//! - [`writer`] - The writer and its layout types
//! - [`config`] - Writer configuration, loadable from TOML
//! - [`error`] - Errors for invalid configuration and arguments

pub mod config;
pub mod error;
pub mod writer;

pub use config::{DEFAULT_WIDTH, Delimiters, WriterConfig};
pub use error::{Error, Result};
// String utilities
pub use penman_core::{
    Case, split_words, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case,
};
pub use writer::{Block, CodeWriter, Indent, Indented, List, Wrap};
