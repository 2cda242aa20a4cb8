//! # Block Parsing
//!
//! Single forward pass over the input lines, no backtracking.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each trimmed line becomes a
//!    `LineClass` (table row, divider, list item, rule, heading, blank, text)
//!    without looking at its neighbours.
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps at most one
//!    open accumulation (table or list) and emits `BlockNode`s when it closes.
//!
//! ## Modules
//!
//! - **`types`**: output node type (`BlockNode`)
//! - **`kinds`**: block-specific types that own their delimiters
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Table and list accumulation are mutually exclusive
//! - Blank lines never close an open table or list
//! - Empty accumulations never produce a node

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{BlockNode, TableCell};
