//! Built-in sample data shown when sample mode is on.

/// Tickers shown in sample mode instead of the saved watchlist.
pub const SAMPLE_STOCKS: [&str; 3] = ["AAPL", "MSFT", "GOOGL"];

/// A representative digest covering every block kind the renderer knows.
pub const SAMPLE_ANALYSIS: &str = r#"# Morning Stock Digest Analysis - Sample

## Portfolio Overview

| Stock | Current Price | Change | Status |
|-------|---------------|--------|--------|
| AAPL | $278.12 | +0.80% | Slight Strength |
| MSFT | $401.14 | +0.45% | Stable |
| GOOGL | $324.32 | +0.39% | Stable |

---

## Individual Stock Analysis

### **Apple Inc. (AAPL)**

**Current Metrics:**
- **Price:** $278.12
- **Day Range:** $275.50-$280.00
- **52-Week Range:** $164.08-$283.00

**Recommendation: HOLD** -- Strong fundamentals with moderate upside potential.

---

### **Microsoft Corp. (MSFT)**

**Current Metrics:**
- **Price:** $401.14
- **Day Range:** $398.00-$404.50

**Recommendation: HOLD** -- Solid position with cloud growth momentum.

---

### **Alphabet Inc. (GOOGL)**

**Current Metrics:**
- **Price:** $324.32
- **Day Range:** $317.26-$327.70

**Recommendation: HOLD** -- Strong ROE of 36.02% supports valuation."#;

/// Picks what to display: the real analysis when there is one, otherwise
/// the sample in sample mode.
pub fn display_analysis(sample_mode: bool, analysis: &str) -> &str {
    if sample_mode && analysis.is_empty() {
        SAMPLE_ANALYSIS
    } else {
        analysis
    }
}

/// Tickers to analyse: the sample set in sample mode, else the watchlist.
pub fn display_tickers(sample_mode: bool, watchlist: &[String]) -> Vec<String> {
    if sample_mode {
        SAMPLE_STOCKS.iter().map(|s| s.to_string()).collect()
    } else {
        watchlist.to_vec()
    }
}
