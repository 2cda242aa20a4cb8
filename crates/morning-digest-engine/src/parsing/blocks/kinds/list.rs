/// Bullet list item (`- ` or `* `).
pub struct ListItem;

impl ListItem {
    pub const MARKERS: [&'static str; 2] = ["- ", "* "];

    /// Text after the two-character marker. The remainder is not re-trimmed,
    /// so `-  x` yields ` x`.
    pub fn item_text(trimmed: &str) -> Option<&str> {
        Self::MARKERS
            .iter()
            .find_map(|marker| trimmed.strip_prefix(marker))
    }
}
