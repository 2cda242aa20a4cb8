use thiserror::Error;

/// Failures of the digest workflow around the renderer. Rendering itself
/// never fails.
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("Add stocks to your watchlist first.")]
    EmptyWatchlist,

    #[error("{0}")]
    AgentFailed(String),

    #[error("Received empty analysis from agent. Please try again.")]
    EmptyAnalysis,

    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}
