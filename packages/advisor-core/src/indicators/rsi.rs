//! Relative Strength Index (RSI) indicator.

/// RSI value from a window's average gain and average loss.
///
/// When there are no losses but some gain, RSI is exactly 100 rather than a
/// divide-by-zero. When the window saw no movement at all, RSI is undefined.
#[inline]
fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss <= 0.0 {
        if avg_gain > 0.0 {
            100.0
        } else {
            f64::NAN
        }
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    }
}

/// Calculate the Relative Strength Index over a trailing window.
///
/// Per-step price deltas are split into gains (positive deltas) and losses
/// (magnitudes of negative deltas); each is averaged over the trailing
/// `window` with a plain rolling mean, and
/// `RSI = 100 - 100 / (1 + avg_gain / avg_loss)`.
///
/// The output is aligned with `prices` and the first `window - 1` entries
/// are `NaN`. The first delta does not exist and counts as zero gain and
/// zero loss, so a series of exactly `window` observations already has one
/// defined value at index `window - 1`. A series shorter than `window` is
/// entirely `NaN`.
///
/// # Example
///
/// ```rust
/// use advisor_core::indicators::rsi;
///
/// let prices: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
/// let values = rsi(&prices, 14);
///
/// assert!(values[12].is_nan());
/// // Monotonically rising prices have no losses.
/// assert_eq!(values[13], 100.0);
/// assert_eq!(values[19], 100.0);
/// ```
pub fn rsi(prices: &[f64], window: usize) -> Vec<f64> {
    let n = prices.len();
    let mut result = vec![f64::NAN; n];

    if window == 0 || n < window {
        return result;
    }

    // Index 0 stays zero in both: no predecessor means no movement.
    let mut gains = vec![0.0; n];
    let mut losses = vec![0.0; n];

    for i in 1..n {
        let delta = prices[i] - prices[i - 1];
        if delta > 0.0 {
            gains[i] = delta;
        } else {
            losses[i] = -delta;
        }
    }

    for i in (window - 1)..n {
        let start = i + 1 - window;
        let avg_gain: f64 = gains[start..=i].iter().sum::<f64>() / window as f64;
        let avg_loss: f64 = losses[start..=i].iter().sum::<f64>() / window as f64;
        result[i] = rsi_value(avg_gain, avg_loss);
    }

    result
}
