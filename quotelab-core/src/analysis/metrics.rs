//! Fundamental metrics source for the tier analyzers.
//!
//! The analyzers read company fundamentals (growth rates, valuation ratios)
//! keyed by the provider's metric names. The `MetricsProvider` trait keeps
//! the analyzers testable without a network.

use crate::config::ApiKey;
use crate::data::provider::QuoteError;
use serde::Deserialize;
use std::collections::HashMap;

const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";

/// Named fundamental metrics for a symbol, as returned by the provider.
///
/// Values are kept as raw JSON: the metric map mixes numbers with the odd
/// string, and the analyzers only pull the numeric ones they know about.
#[derive(Debug, Clone, Default)]
pub struct FundamentalMetrics {
    values: HashMap<String, serde_json::Value>,
}

impl FundamentalMetrics {
    pub fn from_values(values: HashMap<String, serde_json::Value>) -> Self {
        Self { values }
    }

    /// Numeric metric by provider key; `None` when absent or non-numeric.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).and_then(|v| v.as_f64())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Trait for fundamental metrics sources.
pub trait MetricsProvider: Send + Sync {
    fn fundamentals(&self, symbol: &str) -> Result<FundamentalMetrics, QuoteError>;
}

/// Finnhub `/stock/metric` response.
#[derive(Debug, Deserialize)]
struct MetricResponse {
    #[serde(default)]
    metric: HashMap<String, serde_json::Value>,
}

/// Finnhub fundamental metrics provider.
///
/// Same policy as the quote endpoint: one attempt, explicit timeout,
/// credential injected at construction.
pub struct FinnhubMetrics {
    client: reqwest::blocking::Client,
    api_key: ApiKey,
    base_url: String,
}

impl FinnhubMetrics {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            client: crate::data::blocking_client(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the provider at a different host (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn metric_url(&self, symbol: &str) -> String {
        format!(
            "{}/stock/metric?symbol={symbol}&metric=all&token={}",
            self.base_url,
            self.api_key.expose()
        )
    }
}

impl MetricsProvider for FinnhubMetrics {
    fn fundamentals(&self, symbol: &str) -> Result<FundamentalMetrics, QuoteError> {
        let url = self.metric_url(symbol);
        log::debug!("fetching fundamentals for {symbol} from {}", self.base_url);

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

        let parsed: MetricResponse = resp.json().map_err(|e| {
            QuoteError::ResponseFormatChanged(format!("failed to parse metrics for {symbol}: {e}"))
        })?;

        if parsed.metric.is_empty() {
            return Err(QuoteError::MissingMetrics {
                symbol: symbol.to_string(),
            });
        }

        Ok(FundamentalMetrics::from_values(parsed.metric))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_reads_numeric_values() {
        let parsed: MetricResponse =
            serde_json::from_str(r#"{"metric":{"roe":15.5,"peBasicExclExtraTTM":12.1}}"#).unwrap();
        let metrics = FundamentalMetrics::from_values(parsed.metric);
        assert_eq!(metrics.get("roe"), Some(15.5));
        assert_eq!(metrics.get("peBasicExclExtraTTM"), Some(12.1));
    }

    #[test]
    fn get_tolerates_absent_and_non_numeric_values() {
        let parsed: MetricResponse =
            serde_json::from_str(r#"{"metric":{"currency":"USD","pb":1.2}}"#).unwrap();
        let metrics = FundamentalMetrics::from_values(parsed.metric);
        assert_eq!(metrics.get("currency"), None);
        assert_eq!(metrics.get("dividendYield"), None);
        assert_eq!(metrics.get("pb"), Some(1.2));
    }

    #[test]
    fn missing_metric_object_parses_as_empty() {
        let parsed: MetricResponse = serde_json::from_str(r#"{"metricType":"all"}"#).unwrap();
        assert!(parsed.metric.is_empty());
    }

    #[test]
    fn metric_url_carries_symbol_and_token() {
        let provider =
            FinnhubMetrics::new(ApiKey::new("secret")).with_base_url("http://localhost:9999");
        assert_eq!(
            provider.metric_url("AAPL"),
            "http://localhost:9999/stock/metric?symbol=AAPL&metric=all&token=secret"
        );
    }
}
