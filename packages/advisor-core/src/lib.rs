//! Advisor Core - portfolio analytics engine.
//!
//! This crate turns raw per-symbol price history into valuation, risk, and
//! signal data:
//!
//! - **Portfolio ledger**: caller-owned holdings with market value,
//!   diversification weights, and per-symbol risk metrics
//! - **Technical indicators**: moving average, RSI, rolling volatility
//! - **Return statistics**: periodic returns, Sharpe ratios
//! - **Sentiment**: per-symbol aggregation of classified headlines, feeding
//!   a rule-based BUY/HOLD/SELL recommendation
//!
//! Price history, news, and the sentiment model are consumed through the
//! traits in [`provider`]; computations over them are best-effort, degrading
//! a symbol's contribution instead of failing a whole aggregate.
//!
//! # Example
//!
//! ```rust
//! use advisor_core::ledger::Ledger;
//! use advisor_core::provider::StaticPriceProvider;
//!
//! let mut ledger = Ledger::new();
//! ledger.add_stock("AAPL", 10, 150.0).unwrap();
//! ledger.add_stock("GOOGL", 5, 2500.0).unwrap();
//!
//! let mut prices = StaticPriceProvider::new();
//! prices.insert_closes("AAPL", &[155.0, 160.0]);
//! prices.insert_closes("GOOGL", &[2550.0, 2600.0]);
//!
//! // 10 * 160 + 5 * 2600
//! assert_eq!(ledger.portfolio_value(&prices), 14_600.0);
//! ```

pub mod indicators;
pub mod ledger;
pub mod provider;
pub mod recommend;
pub mod returns;
pub mod sentiment;
pub mod types;

// Re-export commonly used types
pub use types::{
    ApiResponse, Holding, PositionReport, PricePoint, Recommendation, SentimentLabel,
    SentimentRecord, SentimentSummary,
};

// Re-export main functionality
pub use indicators::{latest, moving_average, rsi, volatility};
pub use ledger::Ledger;
pub use provider::{
    LookbackPeriod, NewsProvider, PriceProvider, SentimentClassifier, StaticPriceProvider,
};
pub use recommend::{recommend, OVERBOUGHT_RSI, OVERSOLD_RSI};
pub use returns::{
    annualized_sharpe_ratio, annualized_volatility, periodic_returns, sharpe_ratio,
    DEFAULT_RISK_FREE_RATE, TRADING_DAYS_PER_YEAR,
};
pub use sentiment::{aggregate_sentiment, news_sentiment_for_symbols};

/// Error types for advisor-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid holding: {0}")]
    InvalidHolding(String),

    #[error("Data unavailable for {0}")]
    DataUnavailable(String),
}

/// Result type for advisor-core operations.
pub type Result<T> = std::result::Result<T, Error>;
