//! Code generation building blocks.
//!
//! - [`CodeWriter`] - Line buffer that tracks indentation
//! - [`Indented`] - Guard for a scoped indentation level
//! - [`Block`] - Header and closing lines around an indented body
//! - [`List`] - Layout for delimited lists
//! - [`Wrap`] - Layout for word-wrapped text
//! - [`Indent`] - Indentation configuration

mod block;
mod code_writer;
mod indent;
mod list;
mod wrap;

pub use block::Block;
pub use code_writer::{CodeWriter, Indented};
pub use indent::Indent;
pub use list::List;
pub use wrap::Wrap;
