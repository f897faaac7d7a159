//! Tier analysis: a closed set of analyzers over cleaned quotes.
//!
//! The tier is a configuration key supplied by the presentation layer; it
//! maps to a concrete analyzer here instead of a runtime module lookup, so
//! adding a tier means adding a variant and a factory arm.

mod growth;
mod metrics;
mod value;

pub use growth::GrowthAnalyzer;
pub use metrics::{FinnhubMetrics, FundamentalMetrics, MetricsProvider};
pub use value::ValueAnalyzer;

use crate::data::QuoteError;
use crate::domain::CleanedQuote;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Analysis tiers offered to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisTier {
    Value,
    Growth,
}

impl AnalysisTier {
    pub const ALL: [AnalysisTier; 2] = [AnalysisTier::Value, AnalysisTier::Growth];

    /// Configuration key for this tier.
    pub fn key(&self) -> &'static str {
        match self {
            AnalysisTier::Value => "value",
            AnalysisTier::Growth => "growth",
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            AnalysisTier::Value => "Value",
            AnalysisTier::Growth => "Growth",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AnalysisTier::Value => "Undervalued stocks based on fundamentals",
            AnalysisTier::Growth => "High revenue and earnings growth potential",
        }
    }
}

impl fmt::Display for AnalysisTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error for unrecognized tier keys.
#[derive(Debug, thiserror::Error)]
#[error("unknown analysis tier '{0}', expected one of: value, growth")]
pub struct UnknownTier(pub String);

impl FromStr for AnalysisTier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "value" => Ok(AnalysisTier::Value),
            "growth" => Ok(AnalysisTier::Growth),
            other => Err(UnknownTier(other.to_string())),
        }
    }
}

/// One labeled metric in a tier report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetric {
    pub label: String,
    pub value: Option<f64>,
    /// Render as a percentage.
    pub percent: bool,
}

impl ReportMetric {
    pub fn new(label: &str, value: Option<f64>, percent: bool) -> Self {
        Self {
            label: label.to_string(),
            value,
            percent,
        }
    }

    /// Rendered value; absent metrics show as `N/A`.
    pub fn display_value(&self) -> String {
        match self.value {
            Some(v) if self.percent => format!("{v:.2}%"),
            Some(v) => format!("{v:.2}"),
            None => "N/A".to_string(),
        }
    }
}

/// Output of one tier analysis over a cleaned quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierReport {
    pub tier: AnalysisTier,
    pub symbol: String,
    pub metrics: Vec<ReportMetric>,
    /// Threshold-based interpretation notes.
    pub notes: Vec<String>,
}

/// A tier analyzer consumes one cleaned quote plus provider fundamentals.
///
/// Analyzers are stateless; the metrics source is passed per call so tests
/// can script it.
pub trait TierAnalyzer: Send + Sync {
    fn tier(&self) -> AnalysisTier;

    fn analyze(
        &self,
        quote: &CleanedQuote,
        metrics: &dyn MetricsProvider,
    ) -> Result<TierReport, QuoteError>;
}

/// Create the analyzer for a tier.
pub fn create_analyzer(tier: AnalysisTier) -> Box<dyn TierAnalyzer> {
    match tier {
        AnalysisTier::Value => Box::new(ValueAnalyzer),
        AnalysisTier::Growth => Box::new(GrowthAnalyzer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_keys_round_trip_through_from_str() {
        for tier in AnalysisTier::ALL {
            assert_eq!(tier.key().parse::<AnalysisTier>().unwrap(), tier);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("Growth".parse::<AnalysisTier>().unwrap(), AnalysisTier::Growth);
    }

    #[test]
    fn unknown_tier_is_rejected() {
        let err = "momentum".parse::<AnalysisTier>().unwrap_err();
        assert_eq!(err.0, "momentum");
    }

    #[test]
    fn factory_covers_every_tier() {
        for tier in AnalysisTier::ALL {
            assert_eq!(create_analyzer(tier).tier(), tier);
        }
    }

    #[test]
    fn report_metric_display() {
        assert_eq!(ReportMetric::new("ROE", Some(15.5), true).display_value(), "15.50%");
        assert_eq!(ReportMetric::new("P/E", Some(12.0), false).display_value(), "12.00");
        assert_eq!(ReportMetric::new("P/B", None, false).display_value(), "N/A");
    }
}
