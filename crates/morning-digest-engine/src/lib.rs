pub mod agent;
pub mod error;
pub mod parsing;
pub mod sample;
pub mod schedule;
pub mod watchlist;

// Re-export key types for easier usage
pub use error::DigestError;
pub use parsing::{
    blocks::BlockNode,
    inline::{InlineNode, plain_text},
    render_markdown,
};
pub use watchlist::Watchlist;
