/// Pipe table row (`| a | b |`).
pub struct TableRow;

impl TableRow {
    pub const DELIM: char = '|';

    /// Inner cells of a row, untrimmed, or `None` if the line is not
    /// wrapped in pipes. The segments before the first and after the last
    /// delimiter are dropped.
    pub fn cells(trimmed: &str) -> Option<Vec<&str>> {
        if !(trimmed.starts_with(Self::DELIM) && trimmed.ends_with(Self::DELIM)) {
            return None;
        }
        let segments: Vec<&str> = trimmed.split(Self::DELIM).collect();
        let inner = match segments.len() {
            0..=2 => Vec::new(),
            n => segments[1..n - 1].to_vec(),
        };
        Some(inner)
    }

    /// True when every cell looks like `---`, `:--` or `:-:`. A row with no
    /// cells at all counts as a divider too.
    pub fn is_divider(cells: &[&str]) -> bool {
        cells.iter().all(|c| Self::is_divider_cell(c))
    }

    fn is_divider_cell(cell: &str) -> bool {
        !cell.is_empty()
            && cell
                .chars()
                .all(|ch| ch.is_whitespace() || ch == '-' || ch == ':')
    }
}
