//! Core utilities for the penman code writer.
//!
//! This crate holds the pieces of penman that need no writer state: the
//! identifier casing conversions used to normalize names before they are
//! emitted.

mod case;

// String utilities
pub use case::{Case, split_words, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};
