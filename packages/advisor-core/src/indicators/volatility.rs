//! Rolling volatility indicator.

/// Calculate rolling volatility over a trailing window.
///
/// For each index, the sample standard deviation of the periodic returns in
/// the trailing `window`, scaled by `sqrt(window)`. Note the scaling is by
/// window length, not by a trading-year constant; see
/// [`crate::returns::annualized_volatility`] for the `sqrt(252)` form.
///
/// Outputs are `NaN` until a full window of returns exists (the first return
/// is only available at index 1, so the first defined output is at index
/// `window`). A sample standard deviation needs at least two returns, so
/// `window < 2` yields an all-`NaN` output.
pub fn volatility(prices: &[f64], window: usize) -> Vec<f64> {
    let n = prices.len();
    let mut result = vec![f64::NAN; n];

    if window < 2 || n < window + 1 {
        return result;
    }

    let mut returns = vec![f64::NAN; n];
    for i in 1..n {
        if prices[i - 1] != 0.0 {
            returns[i] = (prices[i] - prices[i - 1]) / prices[i - 1];
        }
    }

    let scale = (window as f64).sqrt();
    for i in window..n {
        let w = &returns[i + 1 - window..=i];
        if w.iter().any(|v| v.is_nan()) {
            continue;
        }
        let mean = w.iter().sum::<f64>() / window as f64;
        let variance =
            w.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (window as f64 - 1.0);
        result[i] = variance.sqrt() * scale;
    }

    result
}
