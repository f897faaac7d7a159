//! Domain types: quote records and the numeric field set.

mod field;
mod quote;

pub use field::QuoteField;
pub use quote::{CleanedQuote, RawQuote};
