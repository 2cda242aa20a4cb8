use serde::Serialize;

/// A resolved inline span. Text is owned so nodes outlive the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "style", content = "text", rename_all = "snake_case")]
pub enum InlineNode {
    /// Text outside any bold markers.
    PlainText(String),
    /// Content between a `**` pair, markers stripped.
    Bold(String),
}

impl InlineNode {
    /// The visible text of this span.
    pub fn text(&self) -> &str {
        match self {
            InlineNode::PlainText(s) | InlineNode::Bold(s) => s,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, InlineNode::Bold(_))
    }
}
