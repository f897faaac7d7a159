//! Quote provider trait and structured error types.
//!
//! The `QuoteProvider` trait abstracts over quote vendors so the pipeline can
//! swap implementations and script doubles for tests.

use crate::domain::RawQuote;
use thiserror::Error;

/// Structured error types for quote and metrics operations.
///
/// Every variant is recoverable: the worst outcome is "no cleaned quote
/// produced", and the caller declines to run analysis. Staleness gets its own
/// variant so tests can tell it apart from transport failures, but callers
/// are expected to treat both as "no fresh data available".
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by provider")]
    RateLimited,

    #[error("provider returned HTTP {status} for {symbol}")]
    ProviderStatus { symbol: String, status: u16 },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("quote for {symbol} is {age_hours}h old, limit is {limit_hours}h")]
    StaleQuote {
        symbol: String,
        age_hours: i64,
        limit_hours: i64,
    },

    #[error("no fundamental metrics available for {symbol}")]
    MissingMetrics { symbol: String },
}

impl QuoteError {
    /// True when the provider answered but its data was older than the
    /// freshness window.
    pub fn is_stale(&self) -> bool {
        matches!(self, QuoteError::StaleQuote { .. })
    }
}

/// Trait for quote providers.
///
/// Implementations perform one point-in-time fetch from a particular vendor.
/// The freshness gate sits inside the provider: a stale quote is never
/// released to callers.
pub trait QuoteProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch the current quote for a symbol. Exactly one network attempt.
    ///
    /// The symbol must be a non-empty exchange ticker; the presentation layer
    /// validates that before calling.
    fn fetch(&self, symbol: &str) -> Result<RawQuote, QuoteError>;
}
