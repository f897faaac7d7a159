//! Value tier: valuation ratios over provider fundamentals.

use super::metrics::MetricsProvider;
use super::{AnalysisTier, ReportMetric, TierAnalyzer, TierReport};
use crate::data::QuoteError;
use crate::domain::CleanedQuote;

pub struct ValueAnalyzer;

impl TierAnalyzer for ValueAnalyzer {
    fn tier(&self) -> AnalysisTier {
        AnalysisTier::Value
    }

    fn analyze(
        &self,
        quote: &CleanedQuote,
        metrics: &dyn MetricsProvider,
    ) -> Result<TierReport, QuoteError> {
        let fundamentals = metrics.fundamentals(&quote.symbol)?;

        let pe = fundamentals.get("peBasicExclExtraTTM");
        let pb = fundamentals.get("pb");
        let div_yield = fundamentals.get("dividendYield");
        let roe = fundamentals.get("roe");
        let debt_equity = fundamentals.get("debtEquity");

        let report_metrics = vec![
            ReportMetric::new("P/E Ratio", pe, false),
            ReportMetric::new("P/B Ratio", pb, false),
            ReportMetric::new("Dividend Yield", div_yield, true),
            ReportMetric::new("ROE", roe, true),
            ReportMetric::new("Debt/Equity", debt_equity, false),
            ReportMetric::new("Prev Close", quote.prev_close, false),
        ];

        let mut notes = Vec::new();
        if pe.is_some_and(|v| v < 15.0) {
            notes.push("Low P/E suggests undervaluation".to_string());
        }
        if pb.is_some_and(|v| v < 1.5) {
            notes.push("Low P/B suggests asset-rich undervaluation".to_string());
        }
        if div_yield.is_some_and(|v| v > 0.03) {
            notes.push("High dividend yield, income friendly".to_string());
        }
        if debt_equity.is_some_and(|v| v > 2.0) {
            notes.push("High debt, monitor financial health".to_string());
        }

        Ok(TierReport {
            tier: self.tier(),
            symbol: quote.symbol.clone(),
            metrics: report_metrics,
            notes,
        })
    }
}
