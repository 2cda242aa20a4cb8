//! # Markdown-subset rendering
//!
//! Turns a digest (headings, pipe tables, bullet lists, rules, `**bold**`
//! spans and paragraphs) into a flat sequence of [`BlockNode`]s that a
//! presentation layer can lay out without parsing any text itself.

pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, BlockNode, MarkdownLineClassifier};

/// Renders `md` into block nodes.
///
/// Never fails: anything that is not recognised becomes a paragraph. The
/// builder state lives only for the duration of this call.
pub fn render_markdown(md: &str) -> Vec<BlockNode> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in md.split('\n') {
        let lc = classifier.classify(line);
        builder.push(lc);
    }

    builder.finish()
}
