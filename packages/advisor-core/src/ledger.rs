//! Portfolio ledger: holdings plus market-data-backed analytics.
//!
//! A [`Ledger`] is an explicitly constructed, caller-owned object — one per
//! session, passed by reference to whatever exposes the analytics. It owns
//! the holdings exclusively and is not designed for concurrent mutation;
//! callers that share one across threads must serialize access themselves.
//!
//! Every provider-backed computation is best-effort: a failed fetch or an
//! empty series degrades that one symbol's contribution (zeroed or omitted,
//! and logged) instead of failing the whole aggregate.

use std::collections::BTreeMap;

use crate::provider::{LookbackPeriod, PriceProvider};
use crate::returns::{
    annualized_sharpe_ratio, annualized_volatility, periodic_returns, TRADING_DAYS_PER_YEAR,
};
use crate::types::{closes, Holding, PositionReport};
use crate::{Error, Result};

/// Total portfolio values within this tolerance of zero are treated as zero
/// when computing weights.
const VALUE_TOLERANCE: f64 = 1e-9;

/// The set of holdings and the analytics derived from them.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    holdings: BTreeMap<String, Holding>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a holding, fully replacing any existing holding for the symbol.
    ///
    /// Fails with [`Error::InvalidHolding`] when shares are zero, the buy
    /// price is negative or non-finite, or the symbol is empty. Symbols are
    /// normalized to uppercase.
    pub fn add_stock(&mut self, symbol: &str, shares: u32, buy_price: f64) -> Result<Holding> {
        if symbol.trim().is_empty() {
            return Err(Error::InvalidHolding("symbol must not be empty".to_string()));
        }
        if shares == 0 {
            return Err(Error::InvalidHolding(format!(
                "shares for {} must be positive",
                symbol.to_uppercase()
            )));
        }
        if !buy_price.is_finite() || buy_price < 0.0 {
            return Err(Error::InvalidHolding(format!(
                "buy price for {} must be a non-negative number, got {}",
                symbol.to_uppercase(),
                buy_price
            )));
        }

        let holding = Holding::new(symbol, shares, buy_price);
        self.holdings.insert(holding.symbol.clone(), holding.clone());
        Ok(holding)
    }

    /// Remove a holding. Returns the removed holding, or `None` if the
    /// symbol was not held — removing an absent symbol is a no-op, not an
    /// error.
    pub fn remove_stock(&mut self, symbol: &str) -> Option<Holding> {
        self.holdings.remove(&symbol.to_uppercase())
    }

    /// Look up a holding by symbol.
    pub fn get(&self, symbol: &str) -> Option<&Holding> {
        self.holdings.get(&symbol.to_uppercase())
    }

    /// All holdings, keyed by symbol.
    pub fn holdings(&self) -> &BTreeMap<String, Holding> {
        &self.holdings
    }

    /// Held symbols.
    pub fn symbols(&self) -> Vec<String> {
        self.holdings.keys().cloned().collect()
    }

    /// Number of holdings.
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// Whether the ledger holds nothing.
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Total cost basis of all holdings.
    pub fn total_cost(&self) -> f64 {
        self.holdings.values().map(|h| h.total_cost()).sum()
    }

    /// Current market value of the portfolio.
    ///
    /// Sum of shares × latest price over all holdings. A symbol whose price
    /// is unavailable (or whose fetch failed) contributes 0 and is logged;
    /// an empty portfolio is worth 0.0.
    pub fn portfolio_value(&self, prices: &dyn PriceProvider) -> f64 {
        self.holdings
            .values()
            .map(|holding| match prices.latest_price(&holding.symbol) {
                Ok(Some(price)) => holding.market_value(price),
                Ok(None) => {
                    tracing::warn!(symbol = %holding.symbol, "no latest price, valuing at 0");
                    0.0
                }
                Err(err) => {
                    tracing::warn!(symbol = %holding.symbol, %err, "price fetch failed, valuing at 0");
                    0.0
                }
            })
            .sum()
    }

    /// Diversification weights: fraction of total market value per symbol.
    ///
    /// Empty when the total value is within floating tolerance of zero, so
    /// there is never a division by zero. Symbols without a price appear
    /// with weight 0.
    pub fn diversification(&self, prices: &dyn PriceProvider) -> BTreeMap<String, f64> {
        let total = self.portfolio_value(prices);
        let mut weights = BTreeMap::new();

        if total.abs() < VALUE_TOLERANCE {
            return weights;
        }

        for holding in self.holdings.values() {
            let price = prices
                .latest_price(&holding.symbol)
                .ok()
                .flatten()
                .unwrap_or(0.0);
            weights.insert(holding.symbol.clone(), holding.market_value(price) / total);
        }

        weights
    }

    /// Annualized Sharpe ratio per held symbol.
    ///
    /// `mean(returns) / std(returns) * sqrt(252)` over each symbol's
    /// historical returns; zero-variance series report 0. Symbols whose
    /// history could not be fetched, or yields no returns, are omitted.
    pub fn sharpe_ratio_by_symbol(
        &self,
        prices: &dyn PriceProvider,
        period: LookbackPeriod,
    ) -> BTreeMap<String, f64> {
        self.returns_by_symbol(prices, period)
            .into_iter()
            .map(|(symbol, returns)| {
                let ratio = annualized_sharpe_ratio(&returns, TRADING_DAYS_PER_YEAR);
                (symbol, ratio)
            })
            .collect()
    }

    /// Annualized volatility per held symbol (`std(returns) * sqrt(252)`).
    ///
    /// Same omission policy as [`sharpe_ratio_by_symbol`](Self::sharpe_ratio_by_symbol).
    pub fn volatility_by_symbol(
        &self,
        prices: &dyn PriceProvider,
        period: LookbackPeriod,
    ) -> BTreeMap<String, f64> {
        self.returns_by_symbol(prices, period)
            .into_iter()
            .map(|(symbol, returns)| {
                let vol = annualized_volatility(&returns, TRADING_DAYS_PER_YEAR);
                (symbol, vol)
            })
            .collect()
    }

    /// Per-symbol valuation reports: market value and unrealized gain/loss
    /// against cost basis. Price-less symbols still appear, with the
    /// valuation fields unset.
    pub fn position_reports(&self, prices: &dyn PriceProvider) -> Vec<PositionReport> {
        self.holdings
            .values()
            .map(|holding| {
                let latest = prices.latest_price(&holding.symbol).ok().flatten();
                match latest {
                    Some(price) => {
                        let market_value = holding.market_value(price);
                        let cost = holding.total_cost();
                        let gain_loss = market_value - cost;
                        let gain_loss_percent = if cost > 0.0 {
                            (gain_loss / cost) * 100.0
                        } else {
                            0.0
                        };
                        PositionReport {
                            symbol: holding.symbol.clone(),
                            shares: holding.shares,
                            buy_price: holding.buy_price,
                            latest_price: Some(price),
                            market_value: Some(market_value),
                            gain_loss: Some(gain_loss),
                            gain_loss_percent: Some(gain_loss_percent),
                        }
                    }
                    None => PositionReport {
                        symbol: holding.symbol.clone(),
                        shares: holding.shares,
                        buy_price: holding.buy_price,
                        latest_price: None,
                        market_value: None,
                        gain_loss: None,
                        gain_loss_percent: None,
                    },
                }
            })
            .collect()
    }

    /// Historical returns per symbol, dropping symbols that degrade.
    fn returns_by_symbol(
        &self,
        prices: &dyn PriceProvider,
        period: LookbackPeriod,
    ) -> BTreeMap<String, Vec<f64>> {
        let mut out = BTreeMap::new();

        for symbol in self.holdings.keys() {
            let series = match prices.price_series(symbol, period) {
                Ok(series) => series,
                Err(err) => {
                    tracing::warn!(%symbol, %err, "history fetch failed, omitting symbol");
                    continue;
                }
            };
            if series.is_empty() {
                tracing::warn!(%symbol, "no price history, omitting symbol");
                continue;
            }

            let returns = periodic_returns(&closes(&series));
            if returns.is_empty() {
                tracing::warn!(%symbol, "history too short for returns, omitting symbol");
                continue;
            }

            out.insert(symbol.clone(), returns);
        }

        out
    }
}
