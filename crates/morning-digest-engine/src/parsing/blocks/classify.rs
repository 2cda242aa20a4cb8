use super::kinds::{Heading, ListItem, Rule, TableRow};

/// Classification of a single trimmed line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Text payloads are borrowed from
/// the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// `| a | b |` with at least one cell that is not a divider cell.
    TableRow(Vec<&'a str>),
    /// `|---|:--:|` (or a bare `|`): consumed without touching parser state.
    TableDivider,
    /// `- text` / `* text`, carrying the text after the marker.
    ListItem(&'a str),
    /// `---` / `***`.
    Rule,
    /// `# `, `## ` or `### ` heading.
    Heading { level: u8, text: &'a str },
    /// Empty after trimming.
    Blank,
    /// Anything else; becomes a paragraph.
    Text(&'a str),
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a raw line into a [`LineClass`].
    ///
    /// Precedence follows the builder's rules: table, list item, rule,
    /// heading, blank, text. A line like `- | x |` is a list item because
    /// it does not start with a pipe.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();

        if let Some(cells) = TableRow::cells(trimmed) {
            if TableRow::is_divider(&cells) {
                return LineClass::TableDivider;
            }
            return LineClass::TableRow(cells);
        }

        if let Some(text) = ListItem::item_text(trimmed) {
            return LineClass::ListItem(text);
        }

        if Rule::matches(trimmed) {
            return LineClass::Rule;
        }

        if let Some((level, text)) = Heading::split(trimmed) {
            return LineClass::Heading { level, text };
        }

        if trimmed.is_empty() {
            return LineClass::Blank;
        }

        LineClass::Text(trimmed)
    }
}
