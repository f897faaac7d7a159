//! Quote acquisition: provider trait, Finnhub implementation, freshness gate.

pub mod finnhub;
pub mod freshness;
pub mod provider;

pub use finnhub::FinnhubQuotes;
pub use provider::{QuoteError, QuoteProvider};

use std::time::Duration;

/// One attempt per request, bounded so a stalled provider cannot hang an
/// interactive caller.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

/// Blocking HTTP client shared by the Finnhub endpoints.
pub(crate) fn blocking_client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("failed to build HTTP client")
}
