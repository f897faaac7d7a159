//! Quote records — raw from the provider, cleaned by the pipeline.

use super::field::QuoteField;
use serde::{Deserialize, Serialize};

/// Point-in-time quote for a single symbol, as released by a provider.
///
/// Every price field is optional: a provider may omit any of them. The
/// timestamp is epoch seconds UTC and has already passed the freshness gate —
/// a record older than 24 hours is never constructed (the fetch reports
/// staleness instead). Records are built fresh per fetch and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawQuote {
    pub symbol: String,
    pub current: Option<f64>,
    pub change: Option<f64>,
    pub change_percent: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub open: Option<f64>,
    pub prev_close: Option<f64>,
    pub timestamp: i64,
}

impl RawQuote {
    pub fn field(&self, field: QuoteField) -> Option<f64> {
        match field {
            QuoteField::Current => self.current,
            QuoteField::Change => self.change,
            QuoteField::ChangePercent => self.change_percent,
            QuoteField::High => self.high,
            QuoteField::Low => self.low,
            QuoteField::Open => self.open,
            QuoteField::PrevClose => self.prev_close,
        }
    }

    /// Fields currently missing a value.
    pub fn missing_fields(&self) -> Vec<QuoteField> {
        QuoteField::ALL
            .iter()
            .copied()
            .filter(|f| self.field(*f).is_none())
            .collect()
    }
}

/// Quote record after cleaning: same shape as `RawQuote`, with missing values
/// imputed and outliers clipped where the column statistics allow.
///
/// Derived one-to-one from a `RawQuote`, handed to exactly one analysis call,
/// then discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedQuote {
    pub symbol: String,
    pub current: Option<f64>,
    pub change: Option<f64>,
    pub change_percent: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub open: Option<f64>,
    pub prev_close: Option<f64>,
    pub timestamp: i64,
}

impl CleanedQuote {
    pub fn field(&self, field: QuoteField) -> Option<f64> {
        match field {
            QuoteField::Current => self.current,
            QuoteField::Change => self.change,
            QuoteField::ChangePercent => self.change_percent,
            QuoteField::High => self.high,
            QuoteField::Low => self.low,
            QuoteField::Open => self.open,
            QuoteField::PrevClose => self.prev_close,
        }
    }

    pub(crate) fn set_field(&mut self, field: QuoteField, value: Option<f64>) {
        match field {
            QuoteField::Current => self.current = value,
            QuoteField::Change => self.change = value,
            QuoteField::ChangePercent => self.change_percent = value,
            QuoteField::High => self.high = value,
            QuoteField::Low => self.low = value,
            QuoteField::Open => self.open = value,
            QuoteField::PrevClose => self.prev_close = value,
        }
    }

    /// Re-wrap as a raw record, e.g. to feed a cleaned quote back through the
    /// cleaner.
    pub fn to_raw(&self) -> RawQuote {
        RawQuote {
            symbol: self.symbol.clone(),
            current: self.current,
            change: self.change,
            change_percent: self.change_percent,
            high: self.high,
            low: self.low,
            open: self.open,
            prev_close: self.prev_close,
            timestamp: self.timestamp,
        }
    }
}

impl From<&RawQuote> for CleanedQuote {
    fn from(raw: &RawQuote) -> Self {
        Self {
            symbol: raw.symbol.clone(),
            current: raw.current,
            change: raw.change,
            change_percent: raw.change_percent,
            high: raw.high,
            low: raw.low,
            open: raw.open,
            prev_close: raw.prev_close,
            timestamp: raw.timestamp,
        }
    }
}
