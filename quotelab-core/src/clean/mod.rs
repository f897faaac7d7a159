//! Quote cleaning: missing-value imputation and IQR outlier clipping.
//!
//! Each numeric field is an independent column. The batch form is the real
//! algorithm; today's callers clean one record at a time, and with a single
//! observation both steps degenerate deliberately:
//!
//! - the imputation median is computed over the field's own column, so a
//!   field missing from every record stays missing (there is nothing to take
//!   a median of) — the missing-value signal still fires;
//! - Q1 = Q3 for a lone value, so the fences collapse onto it and clipping
//!   is a no-op.
//!
//! Both behaviors are kept on purpose: the cleaner takes multi-point history
//! per field once callers batch quotes, and the median and fences become
//! meaningful at that size.
//!
//! TODO: feed a historical quote column per symbol into `clean_batch` once a
//! history source exists, so a lone missing field has a real fallback.

pub mod stats;

use crate::domain::{CleanedQuote, QuoteField, RawQuote};
use serde::{Deserialize, Serialize};
use stats::IqrFences;

/// Which repairs were applied to one record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleanReport {
    /// Fields whose missing-value branch fired. The value may still be
    /// missing afterwards when the imputation was degenerate.
    pub imputed: Vec<QuoteField>,
    /// Fields whose value was moved onto an IQR fence.
    pub clipped: Vec<QuoteField>,
}

impl CleanReport {
    /// True when the record needed no repairs.
    pub fn is_clean_pass(&self) -> bool {
        self.imputed.is_empty() && self.clipped.is_empty()
    }
}

/// A cleaned record together with its repair report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanOutcome {
    pub quote: CleanedQuote,
    pub report: CleanReport,
}

/// Clean a single quote record.
pub fn clean_quote(raw: &RawQuote) -> CleanOutcome {
    clean_batch(std::slice::from_ref(raw))
        .pop()
        .expect("batch of one yields one outcome")
}

/// Clean a batch of quote records.
///
/// Per field: build the column across the batch, impute missing entries with
/// the column median, then clip every entry into the column's IQR fences
/// (linear-interpolated quartiles, `Q1/Q3 ± 1.5·IQR`). NaN entries are
/// treated as unreadable rather than missing: they are excluded from the
/// statistics and passed through unchanged. There is no failure path.
pub fn clean_batch(raws: &[RawQuote]) -> Vec<CleanOutcome> {
    let mut outcomes: Vec<CleanOutcome> = raws
        .iter()
        .map(|raw| CleanOutcome {
            quote: CleanedQuote::from(raw),
            report: CleanReport::default(),
        })
        .collect();

    for field in QuoteField::ALL {
        let observed: Vec<f64> = raws
            .iter()
            .filter_map(|r| r.field(field))
            .filter(|v| !v.is_nan())
            .collect();

        // Step 1: impute missing entries with the column median.
        let fallback = stats::median(&observed);
        let mut column: Vec<Option<f64>> = Vec::with_capacity(raws.len());
        for (raw, outcome) in raws.iter().zip(outcomes.iter_mut()) {
            match raw.field(field) {
                Some(v) => column.push(Some(v)),
                None => {
                    log::warn!(
                        "missing value in {field} for {}, filling with column median",
                        raw.symbol
                    );
                    outcome.report.imputed.push(field);
                    column.push(fallback);
                }
            }
        }

        // Step 2: clip the post-imputation column into its IQR fences.
        let filled: Vec<f64> = column
            .iter()
            .flatten()
            .copied()
            .filter(|v| !v.is_nan())
            .collect();
        let fences = IqrFences::from_values(&filled);
        for (outcome, value) in outcomes.iter_mut().zip(column) {
            let value = match (value, &fences) {
                (Some(v), Some(f)) if !v.is_nan() && !f.contains(v) => {
                    outcome.report.clipped.push(field);
                    Some(f.clip(v))
                }
                (other, _) => other,
            };
            outcome.quote.set_field(field, value);
        }
    }

    for outcome in &outcomes {
        log::info!(
            "quote for {} cleaned: {} missing value(s) handled, {} outlier(s) capped",
            outcome.quote.symbol,
            outcome.report.imputed.len(),
            outcome.report.clipped.len()
        );
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote_with_current(symbol: &str, current: Option<f64>) -> RawQuote {
        RawQuote {
            symbol: symbol.into(),
            current,
            change: Some(0.5),
            change_percent: Some(0.3),
            high: Some(151.0),
            low: Some(148.0),
            open: Some(149.0),
            prev_close: Some(148.7),
            timestamp: 1_717_400_000,
        }
    }

    #[test]
    fn complete_single_record_is_untouched() {
        let raw = quote_with_current("AAPL", Some(150.25));
        let outcome = clean_quote(&raw);
        assert_eq!(outcome.quote, CleanedQuote::from(&raw));
        assert!(outcome.report.is_clean_pass());
    }

    #[test]
    fn lone_missing_field_stays_missing_but_signals() {
        let mut raw = quote_with_current("AAPL", Some(150.25));
        raw.change_percent = None;

        let outcome = clean_quote(&raw);
        assert_eq!(outcome.report.imputed, vec![QuoteField::ChangePercent]);
        assert_eq!(outcome.quote.change_percent, None);
        assert!(outcome.report.clipped.is_empty());
    }

    #[test]
    fn batch_imputation_uses_column_median() {
        let raws = vec![
            quote_with_current("SPY", Some(10.0)),
            quote_with_current("SPY", Some(12.0)),
            quote_with_current("SPY", None),
        ];

        let outcomes = clean_batch(&raws);
        assert_eq!(outcomes[2].quote.current, Some(11.0));
        assert_eq!(outcomes[2].report.imputed, vec![QuoteField::Current]);
        assert!(outcomes[0].report.is_clean_pass());
    }

    #[test]
    fn batch_clipping_caps_outlier_to_upper_fence() {
        let raws: Vec<RawQuote> = [10.0, 12.0, 11.0, 13.0, 100.0]
            .iter()
            .map(|&v| quote_with_current("SPY", Some(v)))
            .collect();

        let outcomes = clean_batch(&raws);
        // Q1 = 11, Q3 = 13, IQR = 2 -> fences [8, 16]
        assert_eq!(outcomes[4].quote.current, Some(16.0));
        assert_eq!(outcomes[4].report.clipped, vec![QuoteField::Current]);
        for outcome in &outcomes[..4] {
            assert!(outcome.report.clipped.is_empty());
        }
    }

    #[test]
    fn in_range_batch_values_are_unchanged() {
        let raws: Vec<RawQuote> = [10.0, 12.0, 11.0, 13.0]
            .iter()
            .map(|&v| quote_with_current("SPY", Some(v)))
            .collect();

        let outcomes = clean_batch(&raws);
        for (raw, outcome) in raws.iter().zip(&outcomes) {
            assert_eq!(outcome.quote.current, raw.current);
        }
    }

    #[test]
    fn nan_is_passed_through_and_excluded_from_statistics() {
        let raws = vec![
            quote_with_current("SPY", Some(10.0)),
            quote_with_current("SPY", Some(f64::NAN)),
            quote_with_current("SPY", Some(12.0)),
            quote_with_current("SPY", None),
        ];

        let outcomes = clean_batch(&raws);
        assert!(outcomes[1].quote.current.unwrap().is_nan());
        assert!(outcomes[1].report.is_clean_pass());
        // median of [10, 12], NaN excluded
        assert_eq!(outcomes[3].quote.current, Some(11.0));
    }

    #[test]
    fn clean_pass_report_is_silent() {
        let outcome = clean_quote(&quote_with_current("AAPL", Some(1.0)));
        assert!(outcome.report.is_clean_pass());
        assert!(outcome.report.imputed.is_empty());
        assert!(outcome.report.clipped.is_empty());
    }
}
