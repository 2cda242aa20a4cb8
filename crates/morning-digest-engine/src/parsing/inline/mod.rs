//! # Inline Parsing
//!
//! Resolves `**bold**` spans inside a single line, list item or table cell.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (PlainText, Bold)
//! - **`parser`**: `parse_inline()` entry point
//!
//! Matching is non-greedy and left to right: `**a** and **b**` yields two
//! bold spans, and an unterminated `**` stays plain text.

pub mod parser;
pub mod types;

pub use parser::{parse_inline, plain_text};
pub use types::InlineNode;
