use super::{
    classify::LineClass,
    types::{BlockNode, TableCell},
};
use crate::parsing::inline::parse_inline;

/// The open accumulation, if any. Table and list are mutually exclusive.
#[derive(Debug, Default)]
enum Accum {
    #[default]
    None,
    Table {
        header: Vec<TableCell>,
        rows: Vec<Vec<TableCell>>,
    },
    List {
        items: Vec<String>,
    },
}

/// Block construction state machine.
///
/// Feed it one [`LineClass`] per input line with [`push`](Self::push) and
/// collect the nodes with [`finish`](Self::finish).
pub struct BlockBuilder {
    accum: Accum,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            accum: Accum::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass<'_>) {
        match c {
            // Blank lines leave any open table or list untouched.
            LineClass::Blank | LineClass::TableDivider => {}
            LineClass::TableRow(cells) => self.push_table_row(&cells),
            LineClass::ListItem(text) => self.push_list_item(text),
            LineClass::Rule => {
                self.flush();
                self.out.push(BlockNode::Separator);
            }
            LineClass::Heading { level, text } => {
                self.flush();
                self.out.push(BlockNode::Heading {
                    level,
                    content: parse_inline(text),
                });
            }
            LineClass::Text(text) => {
                self.flush();
                self.out.push(BlockNode::Paragraph {
                    content: parse_inline(text),
                });
            }
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush();
        self.out
    }

    fn push_table_row(&mut self, cells: &[&str]) {
        let cells: Vec<TableCell> = cells.iter().map(|c| parse_inline(c.trim())).collect();
        match &mut self.accum {
            Accum::Table { rows, .. } => rows.push(cells),
            _ => {
                self.flush();
                self.accum = Accum::Table {
                    header: cells,
                    rows: vec![],
                };
            }
        }
    }

    fn push_list_item(&mut self, text: &str) {
        match &mut self.accum {
            Accum::List { items } => items.push(text.to_string()),
            _ => {
                self.flush();
                self.accum = Accum::List {
                    items: vec![text.to_string()],
                };
            }
        }
    }

    fn flush(&mut self) {
        match std::mem::take(&mut self.accum) {
            Accum::None => {}
            Accum::Table { header, rows } => {
                if header.is_empty() && rows.is_empty() {
                    return;
                }
                self.out.push(BlockNode::Table { header, rows });
            }
            Accum::List { items } => {
                if items.is_empty() {
                    return;
                }
                self.out.push(BlockNode::List {
                    items: items.iter().map(|item| parse_inline(item)).collect(),
                });
            }
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
