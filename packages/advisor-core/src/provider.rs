//! External data interfaces: prices, headlines, and sentiment classification.
//!
//! The analytics code consumes these as trait objects and never knows about
//! concrete upstreams. Implementations are expected to bound their own
//! network timeouts; a failed or timed-out call surfaces as an `Err`, which
//! callers absorb per symbol rather than aborting a whole batch.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{closes, PricePoint, SentimentRecord};
use crate::Result;

/// Lookback window for historical price requests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum LookbackPeriod {
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[default]
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
}

impl LookbackPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMonth => "1mo",
            Self::ThreeMonths => "3mo",
            Self::SixMonths => "6mo",
            Self::OneYear => "1y",
        }
    }
}

impl std::fmt::Display for LookbackPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of historical and latest closing prices.
///
/// Unknown symbols are not errors: they yield an empty series or `None`.
/// Errors are reserved for upstream failures (network, timeout, malformed
/// payload).
pub trait PriceProvider {
    /// Ordered (strictly increasing in time) closing-price series for a
    /// symbol over the lookback period. Empty when the symbol has no data.
    fn price_series(&self, symbol: &str, period: LookbackPeriod) -> Result<Vec<PricePoint>>;

    /// Most recent closing price, or `None` when unavailable.
    fn latest_price(&self, symbol: &str) -> Result<Option<f64>>;
}

/// Source of recent news headlines per symbol.
///
/// Returns an empty list (not an error) when no articles are found;
/// implementations log upstream HTTP failures and map them to errors only
/// when nothing at all could be retrieved.
pub trait NewsProvider {
    fn headlines(&self, symbol: &str, max_count: usize) -> Result<Vec<String>>;
}

/// Black-box sentiment model: text in, label plus confidence out.
pub trait SentimentClassifier {
    /// Classify a piece of text. Input is already truncated to
    /// [`max_input_chars`](Self::max_input_chars) by the caller.
    fn classify(&self, text: &str) -> SentimentRecord;

    /// Longest input the underlying model supports, in characters.
    fn max_input_chars(&self) -> usize {
        512
    }
}

/// In-memory [`PriceProvider`] over preloaded series.
///
/// Backs the CLI (which loads a JSON price file) and tests. The latest price
/// for a symbol is the last element of its series; the lookback period is
/// ignored since the data is whatever was loaded.
#[derive(Debug, Clone, Default)]
pub struct StaticPriceProvider {
    series: HashMap<String, Vec<PricePoint>>,
}

impl StaticPriceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a symbol → series map, normalizing symbols to uppercase.
    pub fn from_series(series: HashMap<String, Vec<PricePoint>>) -> Self {
        let series = series
            .into_iter()
            .map(|(symbol, points)| (symbol.to_uppercase(), points))
            .collect();
        Self { series }
    }

    /// Insert or replace the series for one symbol.
    pub fn insert(&mut self, symbol: &str, points: Vec<PricePoint>) {
        self.series.insert(symbol.to_uppercase(), points);
    }

    /// Convenience: insert a series of closes with synthetic daily timestamps.
    pub fn insert_closes(&mut self, symbol: &str, closes: &[f64]) {
        let start = chrono::Utc::now() - chrono::Duration::days(closes.len() as i64);
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint::new(start + chrono::Duration::days(i as i64), close))
            .collect();
        self.insert(symbol, points);
    }

    /// Closing prices for a symbol, empty when unknown.
    pub fn closes_for(&self, symbol: &str) -> Vec<f64> {
        self.series
            .get(&symbol.to_uppercase())
            .map(|points| closes(points))
            .unwrap_or_default()
    }
}

impl PriceProvider for StaticPriceProvider {
    fn price_series(&self, symbol: &str, _period: LookbackPeriod) -> Result<Vec<PricePoint>> {
        Ok(self
            .series
            .get(&symbol.to_uppercase())
            .cloned()
            .unwrap_or_default())
    }

    fn latest_price(&self, symbol: &str) -> Result<Option<f64>> {
        Ok(self
            .series
            .get(&symbol.to_uppercase())
            .and_then(|points| points.last())
            .map(|point| point.close))
    }
}
