/// ATX heading, levels 1 to 3.
pub struct Heading;

impl Heading {
    /// Most specific prefix first so `### x` is not read as level 1.
    pub const PREFIXES: [(&'static str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];

    /// Returns the level and the text after the prefix.
    pub fn split(trimmed: &str) -> Option<(u8, &str)> {
        Self::PREFIXES
            .iter()
            .find_map(|(prefix, level)| trimmed.strip_prefix(prefix).map(|rest| (*level, rest)))
    }
}
