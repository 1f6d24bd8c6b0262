//! Return statistics: periodic returns, Sharpe ratios, annualized volatility.
//!
//! Two Sharpe conventions are exposed deliberately. [`sharpe_ratio`] is the
//! per-period form: risk-free-adjusted excess returns, not annualized.
//! [`annualized_sharpe_ratio`] is the portfolio-path form: raw mean over
//! std scaled by `sqrt(periods_per_year)`, with no risk-free term. They
//! produce different numbers by design; callers pick the convention they
//! report.

/// Default annual risk-free rate used by [`sharpe_ratio`].
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.01;

/// Trading periods per year for daily series.
pub const TRADING_DAYS_PER_YEAR: usize = 252;

/// Standard deviations below this are zero variance for Sharpe purposes.
///
/// A constant return series accumulates floating-point error in its mean, so
/// its computed std is a tiny positive number rather than exactly 0; dividing
/// by it would report an astronomic ratio where the contract requires 0.
const STD_TOLERANCE: f64 = 1e-12;

/// Period-over-period percentage change of a price series.
///
/// One element shorter than the input (the first period has no predecessor);
/// empty for inputs with fewer than two observations. A zero previous close
/// yields 0.0 for that period rather than an infinity.
pub fn periodic_returns(prices: &[f64]) -> Vec<f64> {
    if prices.len() < 2 {
        return Vec::new();
    }

    prices
        .windows(2)
        .map(|w| {
            if w[0] != 0.0 {
                (w[1] - w[0]) / w[0]
            } else {
                0.0
            }
        })
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (ddof = 0).
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Per-period Sharpe ratio from a return series.
///
/// Excess return per period is `r - risk_free_rate / periods_per_year`;
/// the ratio is `mean(excess) / std(excess)`, NOT annualized. Returns 0.0
/// when the excess-return standard deviation is zero or the series is empty,
/// never an infinity or `NaN`.
pub fn sharpe_ratio(returns: &[f64], risk_free_rate: f64, periods_per_year: usize) -> f64 {
    if returns.is_empty() {
        return 0.0;
    }

    let per_period_rf = risk_free_rate / periods_per_year as f64;
    let excess: Vec<f64> = returns.iter().map(|r| r - per_period_rf).collect();

    let std = std_dev(&excess);
    if std < STD_TOLERANCE {
        return 0.0;
    }

    mean(&excess) / std
}

/// Annualized Sharpe ratio from a return series.
///
/// `mean(returns) / std(returns) * sqrt(periods_per_year)`, with no
/// risk-free adjustment. Same zero-variance guard as [`sharpe_ratio`].
pub fn annualized_sharpe_ratio(returns: &[f64], periods_per_year: usize) -> f64 {
    if returns.is_empty() {
        return 0.0;
    }

    let std = std_dev(returns);
    if std < STD_TOLERANCE {
        return 0.0;
    }

    mean(returns) / std * (periods_per_year as f64).sqrt()
}

/// Annualized volatility of a return series:
/// `std(returns) * sqrt(periods_per_year)`. 0.0 for an empty series.
pub fn annualized_volatility(returns: &[f64], periods_per_year: usize) -> f64 {
    if returns.is_empty() {
        return 0.0;
    }
    std_dev(returns) * (periods_per_year as f64).sqrt()
}
