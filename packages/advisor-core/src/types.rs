//! Core data types for the portfolio analytics engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A holding in the portfolio: shares owned of one symbol and what was paid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Holding {
    /// Stock ticker symbol (uppercase)
    pub symbol: String,
    /// Number of shares owned
    pub shares: u32,
    /// Purchase price per share
    pub buy_price: f64,
}

impl Holding {
    /// Create a new holding with the given symbol, shares, and buy price.
    pub fn new(symbol: &str, shares: u32, buy_price: f64) -> Self {
        Self {
            symbol: symbol.to_uppercase(),
            shares,
            buy_price,
        }
    }

    /// Total cost basis of this holding.
    pub fn total_cost(&self) -> f64 {
        self.shares as f64 * self.buy_price
    }

    /// Market value of this holding at the given price.
    pub fn market_value(&self, price: f64) -> f64 {
        self.shares as f64 * price
    }
}

/// A single observation in a price series: one closing price at one instant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    /// When the close was recorded
    pub timestamp: DateTime<Utc>,
    /// Closing price
    pub close: f64,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self { timestamp, close }
    }
}

/// Extract the closing prices from a price series.
pub fn closes(series: &[PricePoint]) -> Vec<f64> {
    series.iter().map(|p| p.close).collect()
}

/// Per-symbol valuation report: current value against cost basis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionReport {
    /// Stock ticker symbol
    pub symbol: String,
    /// Number of shares owned
    pub shares: u32,
    /// Purchase price per share
    pub buy_price: f64,
    /// Latest price, if the provider had one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_price: Option<f64>,
    /// Current market value (shares * latest price)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_value: Option<f64>,
    /// Unrealized gain/loss in dollars
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gain_loss: Option<f64>,
    /// Unrealized gain/loss percentage of cost basis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gain_loss_percent: Option<f64>,
}

/// Sentiment classification label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Parse a label from classifier output such as "POSITIVE".
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_uppercase().as_str() {
            "POSITIVE" => Some(Self::Positive),
            "NEGATIVE" => Some(Self::Negative),
            "NEUTRAL" => Some(Self::Neutral),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified headline: a label and the model's confidence in it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SentimentRecord {
    pub label: SentimentLabel,
    /// Model confidence in [0, 1]
    pub confidence: f64,
}

impl SentimentRecord {
    pub fn new(label: SentimentLabel, confidence: f64) -> Self {
        Self { label, confidence }
    }

    /// Confidence signed by label: positive, negated, or zero for neutral.
    pub fn signed_score(&self) -> f64 {
        match self.label {
            SentimentLabel::Positive => self.confidence,
            SentimentLabel::Negative => -self.confidence,
            SentimentLabel::Neutral => 0.0,
        }
    }
}

/// Aggregated sentiment over all headlines for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SentimentSummary {
    /// Headlines classified positive
    pub positive: usize,
    /// Headlines classified negative
    pub negative: usize,
    /// Headlines classified neutral
    pub neutral: usize,
    /// Mean signed confidence over all headlines; 0.0 when there are none
    pub average_signed_score: f64,
    /// Total headlines classified
    pub total_articles: usize,
}

/// Trading signal produced by the recommendation rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Buy,
    Hold,
    Sell,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Hold => "HOLD",
            Self::Sell => "SELL",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// API response wrapper for CLI JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response.
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holding_new() {
        let holding = Holding::new("aapl", 10, 150.0);
        assert_eq!(holding.symbol, "AAPL");
        assert_eq!(holding.shares, 10);
        assert_eq!(holding.buy_price, 150.0);
        assert_eq!(holding.total_cost(), 1500.0);
    }

    #[test]
    fn test_holding_market_value() {
        let holding = Holding::new("AAPL", 10, 150.0);
        assert_eq!(holding.market_value(175.0), 1750.0);
    }

    #[test]
    fn test_sentiment_label_parse() {
        assert_eq!(
            SentimentLabel::parse("positive"),
            Some(SentimentLabel::Positive)
        );
        assert_eq!(
            SentimentLabel::parse("NEGATIVE"),
            Some(SentimentLabel::Negative)
        );
        assert_eq!(SentimentLabel::parse("mixed"), None);
    }

    #[test]
    fn test_signed_score() {
        assert_eq!(
            SentimentRecord::new(SentimentLabel::Positive, 0.9).signed_score(),
            0.9
        );
        assert_eq!(
            SentimentRecord::new(SentimentLabel::Negative, 0.8).signed_score(),
            -0.8
        );
        assert_eq!(
            SentimentRecord::new(SentimentLabel::Neutral, 0.7).signed_score(),
            0.0
        );
    }

    #[test]
    fn test_api_response() {
        let response: ApiResponse<String> = ApiResponse::ok("test".to_string());
        assert!(response.ok);
        assert_eq!(response.data, Some("test".to_string()));

        let err_response: ApiResponse<String> = ApiResponse::err("error");
        assert!(!err_response.ok);
        assert_eq!(err_response.error, Some("error".to_string()));
    }

    #[test]
    fn test_label_serde_uppercase() {
        let json = serde_json::to_string(&SentimentLabel::Positive).unwrap();
        assert_eq!(json, "\"POSITIVE\"");
        let back: SentimentLabel = serde_json::from_str("\"NEGATIVE\"").unwrap();
        assert_eq!(back, SentimentLabel::Negative);
    }
}
