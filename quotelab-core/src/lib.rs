//! QuoteLab Core — quote acquisition, validation, cleaning, and tier analysis.
//!
//! The pipeline is two components composed in sequence:
//! - Quote source: one HTTP fetch per ticker, gated on a 24-hour freshness window
//! - Quote cleaner: per-field median imputation and IQR outlier clipping
//!
//! Downstream of the pipeline sit the tier analyzers (value/growth), which
//! consume the cleaned record together with provider fundamentals. The CLI
//! crate is the presentation layer over all of it.

pub mod analysis;
pub mod clean;
pub mod config;
pub mod data;
pub mod domain;
pub mod pipeline;
