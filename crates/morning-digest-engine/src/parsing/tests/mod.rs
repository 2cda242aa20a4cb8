//! Behavioural tests for `render_markdown`.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    blocks::BlockNode,
    inline::{InlineNode, plain_text},
    render_markdown,
};

fn plain(s: &str) -> InlineNode {
    InlineNode::PlainText(s.to_string())
}

fn bold(s: &str) -> InlineNode {
    InlineNode::Bold(s.to_string())
}

fn cells(row: &[Vec<InlineNode>]) -> Vec<String> {
    row.iter().map(|c| plain_text(c)).collect()
}

#[test]
fn empty_input_renders_nothing() {
    assert!(render_markdown("").is_empty());
}

#[test]
fn table_with_divider() {
    let blocks = render_markdown("| A | B |\n|---|---|\n| 1 | 2 |");
    assert_eq!(
        blocks,
        vec![BlockNode::Table {
            header: vec![vec![plain("A")], vec![plain("B")]],
            rows: vec![vec![vec![plain("1")], vec![plain("2")]]],
        }]
    );
}

#[test]
fn consecutive_items_form_one_list() {
    assert_eq!(
        render_markdown("- one\n- two"),
        vec![BlockNode::List {
            items: vec![vec![plain("one")], vec![plain("two")]],
        }]
    );
}

#[test]
fn bold_paragraph() {
    assert_eq!(
        render_markdown("**bold** plain"),
        vec![BlockNode::Paragraph {
            content: vec![bold("bold"), plain(" plain")],
        }]
    );
}

#[rstest]
#[case("# Title", 1)]
#[case("## Title", 2)]
#[case("### Title", 3)]
fn heading_levels(#[case] input: &str, #[case] level: u8) {
    assert_eq!(
        render_markdown(input),
        vec![BlockNode::Heading {
            level,
            content: vec![plain("Title")],
        }]
    );
}

#[test]
fn blank_line_does_not_split_list() {
    assert_eq!(
        render_markdown("- item1\n\n- item2"),
        vec![BlockNode::List {
            items: vec![vec![plain("item1")], vec![plain("item2")]],
        }]
    );
}

#[test]
fn blank_line_does_not_split_table() {
    let blocks = render_markdown("| H |\n\n| r |");
    assert_eq!(blocks.len(), 1);
    let BlockNode::Table { header, rows } = &blocks[0] else {
        panic!("expected table, got {:?}", blocks[0]);
    };
    assert_eq!(cells(header), vec!["H"]);
    assert_eq!(rows.len(), 1);
}

#[rstest]
#[case("---")]
#[case("***")]
#[case("  ---  ")]
fn rules_become_separators(#[case] input: &str) {
    assert_eq!(render_markdown(input), vec![BlockNode::Separator]);
}

#[test]
fn separator_closes_list() {
    assert_eq!(
        render_markdown("- a\n---\n- b"),
        vec![
            BlockNode::List {
                items: vec![vec![plain("a")]],
            },
            BlockNode::Separator,
            BlockNode::List {
                items: vec![vec![plain("b")]],
            },
        ]
    );
}

#[test]
fn paragraph_closes_table() {
    let blocks = render_markdown("| A |\n| 1 |\nafter");
    let kinds: Vec<_> = blocks.iter().map(BlockNode::kind_name).collect();
    assert_eq!(kinds, vec!["table", "paragraph"]);
}

#[test]
fn divider_only_input_renders_nothing() {
    assert!(render_markdown("|---|---|\n|:-:|").is_empty());
}

#[rstest]
#[case("| |")]
#[case("|   |   |")]
fn whitespace_only_row_is_a_divider(#[case] input: &str) {
    assert_eq!(render_markdown(input), Vec::<BlockNode>::new());
}

#[test]
fn empty_cell_row_is_a_table() {
    assert_eq!(
        render_markdown("||"),
        vec![BlockNode::Table {
            header: vec![vec![plain("")]],
            rows: vec![],
        }]
    );
}

#[test]
fn whitespace_only_row_inside_table_is_dropped() {
    assert_eq!(
        render_markdown("| A |\n|   |\n| 1 |"),
        vec![BlockNode::Table {
            header: vec![vec![plain("A")]],
            rows: vec![vec![vec![plain("1")]]],
        }]
    );
}

#[test]
fn divider_line_does_not_split_a_list() {
    assert_eq!(
        render_markdown("- a\n|---|\n- b"),
        vec![BlockNode::List {
            items: vec![vec![plain("a")], vec![plain("b")]],
        }]
    );
}

#[test]
fn leading_divider_is_dropped_and_next_row_is_header() {
    let blocks = render_markdown("|---|---|\n| A | B |\n| 1 | 2 |");
    let BlockNode::Table { header, rows } = &blocks[0] else {
        panic!("expected table, got {:?}", blocks[0]);
    };
    assert_eq!(cells(header), vec!["A", "B"]);
    assert_eq!(rows.iter().map(|r| cells(r)).collect::<Vec<_>>(), vec![vec!["1", "2"]]);
}

#[test]
fn mixed_divider_row_is_a_data_row() {
    let blocks = render_markdown("| A | B |\n| --- | hello |");
    let BlockNode::Table { rows, .. } = &blocks[0] else {
        panic!("expected table, got {:?}", blocks[0]);
    };
    assert_eq!(cells(&rows[0]), vec!["---", "hello"]);
}

#[test]
fn ragged_rows_are_kept_as_is() {
    let blocks = render_markdown("| A | B | C |\n| 1 |\n| 1 | 2 | 3 | 4 |");
    let BlockNode::Table { header, rows } = &blocks[0] else {
        panic!("expected table, got {:?}", blocks[0]);
    };
    assert_eq!(header.len(), 3);
    assert_eq!(rows[0].len(), 1);
    assert_eq!(rows[1].len(), 4);
    assert_eq!(blocks[0].column_count(), 4);
}

#[test]
fn table_cells_resolve_bold() {
    let blocks = render_markdown("| **AAPL** | $1 |");
    let BlockNode::Table { header, .. } = &blocks[0] else {
        panic!("expected table, got {:?}", blocks[0]);
    };
    assert_eq!(header[0], vec![bold("AAPL")]);
}

#[test]
fn list_items_resolve_bold() {
    assert_eq!(
        render_markdown("- **Price:** $278.12"),
        vec![BlockNode::List {
            items: vec![vec![bold("Price:"), plain(" $278.12")]],
        }]
    );
}

#[test]
fn deep_heading_falls_back_to_paragraph() {
    assert_eq!(
        render_markdown("#### Deep"),
        vec![BlockNode::Paragraph {
            content: vec![plain("#### Deep")],
        }]
    );
}

#[test]
fn paragraphs_are_one_per_line() {
    let blocks = render_markdown("first line\nsecond line");
    assert_eq!(blocks.len(), 2);
    assert!(blocks.iter().all(|b| b.kind_name() == "paragraph"));
}

#[test]
fn crlf_input_is_trimmed() {
    assert_eq!(
        render_markdown("# Title\r\n- a\r\n- b\r\n"),
        vec![
            BlockNode::Heading {
                level: 1,
                content: vec![plain("Title")],
            },
            BlockNode::List {
                items: vec![vec![plain("a")], vec![plain("b")]],
            },
        ]
    );
}

#[test]
fn rendering_is_deterministic() {
    let md = crate::sample::SAMPLE_ANALYSIS;
    assert_eq!(render_markdown(md), render_markdown(md));
}
