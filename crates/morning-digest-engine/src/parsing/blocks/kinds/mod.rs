//! # Block Kinds
//!
//! Each block type owns its delimiters; the classifier asks these types
//! instead of hardcoding `|`, `- ` or `#`.

pub mod heading;
pub mod list;
pub mod rule;
pub mod table;

pub use heading::Heading;
pub use list::ListItem;
pub use rule::Rule;
pub use table::TableRow;
