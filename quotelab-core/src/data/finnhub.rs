//! Finnhub quote provider.
//!
//! Fetches a single real-time quote from Finnhub's `/quote` endpoint. One
//! request per call, no retries; transport failures and non-success statuses
//! surface as recoverable `QuoteError`s. The freshness gate runs here so
//! stale data never reaches the cleaner.

use super::freshness;
use super::provider::{QuoteError, QuoteProvider};
use crate::config::ApiKey;
use crate::domain::RawQuote;
use chrono::{DateTime, Utc};
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";

/// Finnhub `/quote` response.
///
/// Every price field is nullable. Unknown symbols come back as zeros with
/// `t = 0`, which the freshness gate rejects.
#[derive(Debug, Deserialize)]
struct QuoteResponse {
    #[serde(rename = "c")]
    current: Option<f64>,
    #[serde(rename = "d")]
    change: Option<f64>,
    #[serde(rename = "dp")]
    change_percent: Option<f64>,
    #[serde(rename = "h")]
    high: Option<f64>,
    #[serde(rename = "l")]
    low: Option<f64>,
    #[serde(rename = "o")]
    open: Option<f64>,
    #[serde(rename = "pc")]
    prev_close: Option<f64>,
    #[serde(rename = "t")]
    timestamp: Option<i64>,
}

/// Finnhub quote provider.
///
/// Holds the credential injected at construction; nothing here reads
/// process-global state.
pub struct FinnhubQuotes {
    client: reqwest::blocking::Client,
    api_key: ApiKey,
    base_url: String,
}

impl FinnhubQuotes {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            client: super::blocking_client(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the provider at a different host (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn quote_url(&self, symbol: &str) -> String {
        format!(
            "{}/quote?symbol={symbol}&token={}",
            self.base_url,
            self.api_key.expose()
        )
    }

    /// Convert the parsed response into a `RawQuote`, applying the freshness
    /// gate against `now`.
    fn parse_quote(
        symbol: &str,
        resp: QuoteResponse,
        now: DateTime<Utc>,
    ) -> Result<RawQuote, QuoteError> {
        let timestamp = resp.timestamp.unwrap_or(0);
        if !freshness::is_fresh(timestamp, now) {
            return Err(QuoteError::StaleQuote {
                symbol: symbol.to_string(),
                age_hours: freshness::quote_age(timestamp, now).num_hours(),
                limit_hours: freshness::MAX_QUOTE_AGE_HOURS,
            });
        }

        Ok(RawQuote {
            symbol: symbol.to_string(),
            current: resp.current,
            change: resp.change,
            change_percent: resp.change_percent,
            high: resp.high,
            low: resp.low,
            open: resp.open,
            prev_close: resp.prev_close,
            timestamp,
        })
    }
}

impl QuoteProvider for FinnhubQuotes {
    fn name(&self) -> &str {
        "finnhub"
    }

    fn fetch(&self, symbol: &str) -> Result<RawQuote, QuoteError> {
        let url = self.quote_url(symbol);
        log::debug!("fetching quote for {symbol} from {}", self.base_url);

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| QuoteError::NetworkUnreachable(e.to_string()))?;

        let status = resp.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(QuoteError::RateLimited);
        }
        if !status.is_success() {
            return Err(QuoteError::ProviderStatus {
                symbol: symbol.to_string(),
                status: status.as_u16(),
            });
        }

        let quote: QuoteResponse = resp.json().map_err(|e| {
            QuoteError::ResponseFormatChanged(format!("failed to parse quote for {symbol}: {e}"))
        })?;

        Self::parse_quote(symbol, quote, Utc::now())
    }
}
