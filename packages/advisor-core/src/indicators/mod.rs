//! Technical indicators over closing-price series.
//!
//! All indicators are pure functions of an ordered numeric sequence. Outputs
//! are aligned with the input; positions without a full trailing window of
//! history are `NaN` rather than an error or a partial average.

mod ma;
mod rsi;
mod volatility;

pub use ma::moving_average;
pub use rsi::rsi;
pub use volatility::volatility;

/// Last defined (non-`NaN`) value of an indicator series, if any.
///
/// Convenience for callers that only want the current reading, e.g. feeding
/// the latest RSI into the recommendation rule.
pub fn latest(values: &[f64]) -> Option<f64> {
    values.iter().rev().copied().find(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_skips_nan() {
        let values = vec![f64::NAN, 1.0, 2.0, f64::NAN];
        assert_eq!(latest(&values), Some(2.0));
    }

    #[test]
    fn test_latest_all_nan() {
        let values = vec![f64::NAN, f64::NAN];
        assert_eq!(latest(&values), None);
        assert_eq!(latest(&[]), None);
    }
}
