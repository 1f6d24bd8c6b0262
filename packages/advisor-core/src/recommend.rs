//! Rule-based BUY/HOLD/SELL recommendation.

use crate::types::{Recommendation, SentimentLabel};

/// RSI below this is considered oversold.
pub const OVERSOLD_RSI: f64 = 30.0;

/// RSI above this is considered overbought.
pub const OVERBOUGHT_RSI: f64 = 70.0;

/// Combine a sentiment label with an RSI reading into a trading signal.
///
/// BUY when sentiment is positive and the symbol is oversold; SELL when
/// sentiment is negative and it is overbought; HOLD otherwise. Total
/// function: an undefined (`NaN`) RSI satisfies neither comparison and falls
/// through to HOLD.
pub fn recommend(label: SentimentLabel, rsi_value: f64) -> Recommendation {
    match label {
        SentimentLabel::Positive if rsi_value < OVERSOLD_RSI => Recommendation::Buy,
        SentimentLabel::Negative if rsi_value > OVERBOUGHT_RSI => Recommendation::Sell,
        _ => Recommendation::Hold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_buy_on_positive_oversold() {
        assert_eq!(
            recommend(SentimentLabel::Positive, 25.0),
            Recommendation::Buy
        );
    }

    #[test]
    fn test_recommend_sell_on_negative_overbought() {
        assert_eq!(
            recommend(SentimentLabel::Negative, 80.0),
            Recommendation::Sell
        );
    }

    #[test]
    fn test_recommend_hold_otherwise() {
        assert_eq!(
            recommend(SentimentLabel::Neutral, 25.0),
            Recommendation::Hold
        );
        assert_eq!(
            recommend(SentimentLabel::Positive, 50.0),
            Recommendation::Hold
        );
        assert_eq!(
            recommend(SentimentLabel::Negative, 50.0),
            Recommendation::Hold
        );
        // Thresholds are strict inequalities.
        assert_eq!(
            recommend(SentimentLabel::Positive, 30.0),
            Recommendation::Hold
        );
        assert_eq!(
            recommend(SentimentLabel::Negative, 70.0),
            Recommendation::Hold
        );
    }

    #[test]
    fn test_recommend_nan_rsi_holds() {
        assert_eq!(
            recommend(SentimentLabel::Positive, f64::NAN),
            Recommendation::Hold
        );
        assert_eq!(
            recommend(SentimentLabel::Negative, f64::NAN),
            Recommendation::Hold
        );
    }
}
