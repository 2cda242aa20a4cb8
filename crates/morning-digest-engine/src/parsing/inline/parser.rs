use std::sync::OnceLock;

use regex::Regex;

use super::types::InlineNode;

/// Bold (`**...**`) inline kind.
pub struct Strong;

impl Strong {
    fn pattern() -> &'static Regex {
        static BOLD_REGEX: OnceLock<Regex> = OnceLock::new();
        // `.` excludes `\n`, so a span never crosses a line break.
        BOLD_REGEX.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("Invalid bold regex"))
    }
}

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// Every `**content**` pair (content non-empty, shortest match first)
/// becomes [`InlineNode::Bold`]; the text between and around matches becomes
/// [`InlineNode::PlainText`]. Without any match the result is a single
/// `PlainText` equal to the input, even when the input is empty.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut out = vec![];
    let mut last = 0;

    for caps in Strong::pattern().captures_iter(s) {
        let (Some(full), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if full.start() > last {
            out.push(InlineNode::PlainText(s[last..full.start()].to_string()));
        }
        out.push(InlineNode::Bold(inner.as_str().to_string()));
        last = full.end();
    }

    if last < s.len() {
        out.push(InlineNode::PlainText(s[last..].to_string()));
    }
    if out.is_empty() {
        out.push(InlineNode::PlainText(s.to_string()));
    }
    out
}

/// Concatenates the visible text of `nodes`, dropping the bold markers.
pub fn plain_text(nodes: &[InlineNode]) -> String {
    nodes.iter().map(InlineNode::text).collect()
}
