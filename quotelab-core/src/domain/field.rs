//! The closed set of numeric quote fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven numeric fields of a quote record.
///
/// The cleaner treats each field as an independent column; nothing in the
/// pipeline correlates one field with another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteField {
    Current,
    Change,
    ChangePercent,
    High,
    Low,
    Open,
    PrevClose,
}

impl QuoteField {
    /// All fields, in record order.
    pub const ALL: [QuoteField; 7] = [
        QuoteField::Current,
        QuoteField::Change,
        QuoteField::ChangePercent,
        QuoteField::High,
        QuoteField::Low,
        QuoteField::Open,
        QuoteField::PrevClose,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteField::Current => "current",
            QuoteField::Change => "change",
            QuoteField::ChangePercent => "change_percent",
            QuoteField::High => "high",
            QuoteField::Low => "low",
            QuoteField::Open => "open",
            QuoteField::PrevClose => "prev_close",
        }
    }
}

impl fmt::Display for QuoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_field_once() {
        let names: Vec<&str> = QuoteField::ALL.iter().map(|f| f.as_str()).collect();
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names.len(), 7);
        assert_eq!(names, deduped);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&QuoteField::ChangePercent).unwrap();
        assert_eq!(json, "\"change_percent\"");
    }
}
