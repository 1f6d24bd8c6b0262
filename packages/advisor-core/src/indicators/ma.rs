//! Trailing moving average.

/// Calculate the trailing moving average of a price series.
///
/// Each output is the arithmetic mean of the `window` observations ending at
/// that index. The first `window - 1` outputs are `NaN`: no partial-window
/// averaging. A series shorter than `window` (or a zero window) produces an
/// all-`NaN` output of the same length.
///
/// # Example
///
/// ```rust
/// use advisor_core::indicators::moving_average;
///
/// let prices = vec![10.0, 11.0, 12.0, 11.0, 10.0];
/// let ma = moving_average(&prices, 3);
///
/// assert!(ma[0].is_nan());
/// assert!(ma[1].is_nan());
/// // (10 + 11 + 12) / 3 = 11.0
/// assert!((ma[2] - 11.0).abs() < 1e-9);
/// ```
pub fn moving_average(prices: &[f64], window: usize) -> Vec<f64> {
    let n = prices.len();
    let mut result = vec![f64::NAN; n];

    if window == 0 || window > n {
        return result;
    }

    // Rolling sum; each step drops the oldest observation and adds the newest.
    let mut sum: f64 = prices[..window].iter().sum();
    result[window - 1] = sum / window as f64;

    for i in window..n {
        sum = sum - prices[i - window] + prices[i];
        result[i] = sum / window as f64;
    }

    result
}
