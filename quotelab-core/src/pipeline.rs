//! The fetch → clean → analyze composition.

use crate::analysis::{create_analyzer, AnalysisTier, MetricsProvider, TierReport};
use crate::clean::{clean_quote, CleanOutcome};
use crate::data::{QuoteError, QuoteProvider};

/// Fetch a quote and clean it.
///
/// The cleaner never sees a failed or stale fetch; any error means "no
/// cleaned quote" and the caller must not run analysis.
pub fn fetch_and_clean(
    provider: &dyn QuoteProvider,
    symbol: &str,
) -> Result<CleanOutcome, QuoteError> {
    let raw = provider.fetch(symbol)?;
    Ok(clean_quote(&raw))
}

/// Full pipeline for one ticker: fetch, clean, then run the tier analyzer
/// over the cleaned record.
pub fn analyze_ticker(
    provider: &dyn QuoteProvider,
    metrics: &dyn MetricsProvider,
    tier: AnalysisTier,
    symbol: &str,
) -> Result<(CleanOutcome, TierReport), QuoteError> {
    let outcome = fetch_and_clean(provider, symbol)?;
    let analyzer = create_analyzer(tier);
    let report = analyzer.analyze(&outcome.quote, metrics)?;
    Ok((outcome, report))
}
