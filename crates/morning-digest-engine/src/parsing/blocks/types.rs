use serde::Serialize;

use crate::parsing::inline::InlineNode;

/// A single table cell: the trimmed cell text after inline resolution.
pub type TableCell = Vec<InlineNode>;

/// A rendered block. Consecutive table rows and list items are collapsed
/// into one `Table` / `List` node each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockNode {
    /// A pipe table. Rows keep their own cell counts; nothing is padded.
    Table {
        header: Vec<TableCell>,
        rows: Vec<Vec<TableCell>>,
    },
    /// A flat bullet list.
    List { items: Vec<Vec<InlineNode>> },
    /// `#`, `##` or `###` heading.
    Heading {
        /// 1..=3
        level: u8,
        content: Vec<InlineNode>,
    },
    /// `---` or `***` on a line of its own.
    Separator,
    /// Fallback for any non-blank line no other block claims.
    Paragraph { content: Vec<InlineNode> },
}

impl BlockNode {
    /// Stable lowercase label for the variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            BlockNode::Table { .. } => "table",
            BlockNode::List { .. } => "list",
            BlockNode::Heading { .. } => "heading",
            BlockNode::Separator => "separator",
            BlockNode::Paragraph { .. } => "paragraph",
        }
    }

    /// Widest row of a table, header included. Zero for other blocks.
    pub fn column_count(&self) -> usize {
        match self {
            BlockNode::Table { header, rows } => rows
                .iter()
                .map(Vec::len)
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0),
            _ => 0,
        }
    }
}
