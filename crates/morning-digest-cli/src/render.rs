//! Lays out rendered block nodes as terminal lines.

use morning_digest_engine::{BlockNode, InlineNode, parsing::blocks::TableCell, plain_text};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

const RULE_WIDTH: usize = 40;
const BULLET: &str = "• ";
const COLUMN_GAP: &str = " │ ";

/// Converts blocks into styled lines, one blank line after each block.
pub fn block_lines(blocks: &[BlockNode]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in blocks {
        match block {
            BlockNode::Heading { level, content } => {
                lines.push(Line::from(inline_spans(content, heading_style(*level))));
            }
            BlockNode::Paragraph { content } => {
                lines.push(Line::from(inline_spans(content, Style::default())));
            }
            BlockNode::List { items } => {
                for item in items {
                    let mut spans = vec![Span::styled(BULLET, Style::default().fg(Color::Cyan))];
                    spans.extend(inline_spans(item, Style::default()));
                    lines.push(Line::from(spans));
                }
            }
            BlockNode::Separator => {
                lines.push(Line::styled(
                    "─".repeat(RULE_WIDTH),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            BlockNode::Table { header, rows } => {
                lines.extend(table_lines(header, rows, block.column_count()));
            }
        }
        lines.push(Line::default());
    }

    lines
}

/// Plain strings for non-interactive output.
pub fn plain_lines(blocks: &[BlockNode]) -> Vec<String> {
    block_lines(blocks)
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}

fn heading_style(level: u8) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match level {
        1 => base.fg(Color::Yellow).add_modifier(Modifier::UNDERLINED),
        2 => base.fg(Color::Cyan),
        _ => base,
    }
}

fn inline_spans(nodes: &[InlineNode], base: Style) -> Vec<Span<'static>> {
    nodes
        .iter()
        .map(|node| match node {
            InlineNode::PlainText(text) => Span::styled(text.clone(), base),
            InlineNode::Bold(text) => Span::styled(text.clone(), base.add_modifier(Modifier::BOLD)),
        })
        .collect()
}

/// Rows are laid out by position: a short row simply ends early and extra
/// cells get their own column.
fn table_lines(header: &[TableCell], rows: &[Vec<TableCell>], columns: usize) -> Vec<Line<'static>> {
    let mut widths = vec![0usize; columns];
    for row in std::iter::once(header).chain(rows.iter().map(Vec::as_slice)) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(plain_text(cell).width());
        }
    }

    let header_style = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = Vec::with_capacity(rows.len() + 2);
    if !header.is_empty() {
        lines.push(row_line(header, &widths, header_style));
        let divider = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        lines.push(Line::styled(divider, Style::default().fg(Color::DarkGray)));
    }
    for row in rows {
        lines.push(row_line(row, &widths, Style::default()));
    }
    lines
}

fn row_line(row: &[TableCell], widths: &[usize], base: Style) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(COLUMN_GAP, Style::default().fg(Color::DarkGray)));
        }
        spans.extend(inline_spans(cell, base));
        let used = plain_text(cell).width();
        let width = widths.get(i).copied().unwrap_or(used);
        if width > used && i + 1 < row.len() {
            spans.push(Span::raw(" ".repeat(width - used)));
        }
    }
    Line::from(spans)
}
