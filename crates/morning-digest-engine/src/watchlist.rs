/// Quick-add tickers offered next to the free-form input.
pub const COMMON_TICKERS: [&str; 8] = ["AAPL", "GOOGL", "MSFT", "AMZN", "TSLA", "META", "NVDA", "NFLX"];

/// Trims and upper-cases a ticker. Empty input gives `None`.
pub fn normalize_ticker(input: &str) -> Option<String> {
    let clean = input.trim().to_uppercase();
    if clean.is_empty() { None } else { Some(clean) }
}

/// Ordered, duplicate-free list of ticker symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Watchlist {
    tickers: Vec<String>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a watchlist from stored tickers, normalising and dropping
    /// empties and duplicates.
    pub fn from_tickers<I, S>(tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for t in tickers {
            list.add(t.as_ref());
        }
        list
    }

    /// Adds `input` after normalising. Returns whether the list changed.
    pub fn add(&mut self, input: &str) -> bool {
        match normalize_ticker(input) {
            Some(clean) if !self.contains(&clean) => {
                self.tickers.push(clean);
                true
            }
            _ => false,
        }
    }

    /// Removes an exact ticker. Returns whether it was present.
    pub fn remove(&mut self, ticker: &str) -> bool {
        let before = self.tickers.len();
        self.tickers.retain(|t| t != ticker);
        self.tickers.len() != before
    }

    pub fn contains(&self, ticker: &str) -> bool {
        self.tickers.iter().any(|t| t == ticker)
    }

    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tickers.len()
    }
}
