//! Growth tier: revenue and earnings momentum over provider fundamentals.

use super::metrics::MetricsProvider;
use super::{AnalysisTier, ReportMetric, TierAnalyzer, TierReport};
use crate::data::QuoteError;
use crate::domain::CleanedQuote;

pub struct GrowthAnalyzer;

impl TierAnalyzer for GrowthAnalyzer {
    fn tier(&self) -> AnalysisTier {
        AnalysisTier::Growth
    }

    fn analyze(
        &self,
        quote: &CleanedQuote,
        metrics: &dyn MetricsProvider,
    ) -> Result<TierReport, QuoteError> {
        let fundamentals = metrics.fundamentals(&quote.symbol)?;

        let revenue_growth = fundamentals.get("revenueGrowthYear");
        let eps_growth = fundamentals.get("epsGrowth5Y");
        let roe = fundamentals.get("roe");
        let ebitda_growth = fundamentals.get("ebitdaGrowthYoy");
        let net_income_growth = fundamentals.get("netIncomeGrowthYoy");

        let report_metrics = vec![
            ReportMetric::new("Revenue Growth (YoY)", revenue_growth, true),
            ReportMetric::new("EPS Growth (5Y)", eps_growth, true),
            ReportMetric::new("EBITDA Growth (YoY)", ebitda_growth, true),
            ReportMetric::new("Net Income Growth (YoY)", net_income_growth, true),
            ReportMetric::new("ROE", roe, true),
            ReportMetric::new("Prev Close", quote.prev_close, false),
        ];

        let mut notes = Vec::new();
        if revenue_growth.is_some_and(|v| v > 10.0) {
            notes.push("Strong revenue growth, key for growth stocks".to_string());
        }
        if eps_growth.is_some_and(|v| v > 15.0) {
            notes.push("High EPS growth, earnings momentum".to_string());
        }
        if roe.is_some_and(|v| v > 15.0) {
            notes.push("High ROE, efficient use of equity".to_string());
        }
        if ebitda_growth.is_some_and(|v| v < 0.0) {
            notes.push("Declining EBITDA, monitor profitability".to_string());
        }

        Ok(TierReport {
            tier: self.tier(),
            symbol: quote.symbol.clone(),
            metrics: report_metrics,
            notes,
        })
    }
}
