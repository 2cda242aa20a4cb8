/// Horizontal rule (`---` / `***`).
pub struct Rule;

impl Rule {
    pub const MARKERS: [&'static str; 2] = ["---", "***"];

    /// The whole trimmed line must be one of the markers; `----` is text.
    pub fn matches(trimmed: &str) -> bool {
        Self::MARKERS.contains(&trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashes_and_stars() {
        assert!(Rule::matches("---"));
        assert!(Rule::matches("***"));
    }

    #[test]
    fn longer_runs_are_not_rules() {
        assert!(!Rule::matches("----"));
        assert!(!Rule::matches("- - -"));
    }
}
