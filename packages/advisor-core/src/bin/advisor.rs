//! Advisor CLI - JSON interface over the portfolio analytics engine.
//!
//! Every subcommand prints an `ApiResponse` JSON document, so an agent shell
//! or UI can drive the engine without linking against the library. Holdings
//! and prices are supplied as JSON files per invocation; nothing is
//! persisted between runs.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use advisor_core::{
    indicators, recommend::recommend, sentiment::aggregate_sentiment, ApiResponse, Holding,
    Ledger, LookbackPeriod, PricePoint, Result, SentimentClassifier, SentimentLabel,
    SentimentRecord, StaticPriceProvider,
};

#[derive(Parser)]
#[command(name = "advisor")]
#[command(about = "Portfolio analytics CLI - valuation, risk, and signals")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Current portfolio market value
    Value {
        /// Holdings JSON file (array of {symbol, shares, buy_price})
        #[arg(long)]
        holdings: PathBuf,
        /// Prices JSON file (map of symbol to [{timestamp, close}])
        #[arg(long)]
        prices: PathBuf,
    },
    /// Diversification weights per symbol
    Weights {
        #[arg(long)]
        holdings: PathBuf,
        #[arg(long)]
        prices: PathBuf,
    },
    /// Annualized Sharpe ratio per symbol
    Sharpe {
        #[arg(long)]
        holdings: PathBuf,
        #[arg(long)]
        prices: PathBuf,
    },
    /// Annualized volatility per symbol
    Volatility {
        #[arg(long)]
        holdings: PathBuf,
        #[arg(long)]
        prices: PathBuf,
    },
    /// Combined view: value, weights, and per-position gain/loss
    Summary {
        #[arg(long)]
        holdings: PathBuf,
        #[arg(long)]
        prices: PathBuf,
    },
    /// Latest technical indicator readings for one symbol
    Technical {
        #[arg(long)]
        prices: PathBuf,
        /// Stock symbol
        #[arg(short, long)]
        symbol: String,
        /// Window for moving average and RSI
        #[arg(short, long, default_value = "14")]
        window: usize,
        /// Window for rolling volatility
        #[arg(long, default_value = "30")]
        volatility_window: usize,
    },
    /// BUY/HOLD/SELL from a sentiment label and an RSI reading
    Recommend {
        /// Sentiment label: POSITIVE, NEGATIVE, or NEUTRAL
        #[arg(short, long)]
        label: String,
        /// RSI value; omit when undefined
        #[arg(short, long)]
        rsi: Option<f64>,
    },
    /// Aggregate sentiment over headlines (one classification per line)
    Sentiment {
        /// Headlines JSON file (map of symbol to ["headline", ...])
        #[arg(long)]
        headlines: PathBuf,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Value { holdings, prices } => handle_value(&holdings, &prices),
        Commands::Weights { holdings, prices } => handle_weights(&holdings, &prices),
        Commands::Sharpe { holdings, prices } => handle_sharpe(&holdings, &prices),
        Commands::Volatility { holdings, prices } => handle_volatility(&holdings, &prices),
        Commands::Summary { holdings, prices } => handle_summary(&holdings, &prices),
        Commands::Technical {
            prices,
            symbol,
            window,
            volatility_window,
        } => handle_technical(&prices, &symbol, window, volatility_window),
        Commands::Recommend { label, rsi } => handle_recommend(&label, rsi),
        Commands::Sentiment { headlines } => handle_sentiment(&headlines),
    };

    println!("{}", output);
}

fn load_ledger(path: &Path) -> Result<Ledger> {
    let content = std::fs::read_to_string(path)?;
    let holdings: Vec<Holding> = serde_json::from_str(&content)?;

    let mut ledger = Ledger::new();
    for holding in holdings {
        ledger.add_stock(&holding.symbol, holding.shares, holding.buy_price)?;
    }
    Ok(ledger)
}

fn load_prices(path: &Path) -> Result<StaticPriceProvider> {
    let content = std::fs::read_to_string(path)?;
    let series: HashMap<String, Vec<PricePoint>> = serde_json::from_str(&content)?;
    Ok(StaticPriceProvider::from_series(series))
}

fn ok_json<T: serde::Serialize>(data: T) -> String {
    serde_json::to_string_pretty(&ApiResponse::ok(data)).unwrap()
}

fn err_json(error: impl std::fmt::Display) -> String {
    serde_json::to_string_pretty(&ApiResponse::<()>::err(error.to_string())).unwrap()
}

fn with_inputs(
    holdings: &Path,
    prices: &Path,
    f: impl FnOnce(&Ledger, &StaticPriceProvider) -> String,
) -> String {
    let ledger = match load_ledger(holdings) {
        Ok(ledger) => ledger,
        Err(e) => return err_json(e),
    };
    let provider = match load_prices(prices) {
        Ok(provider) => provider,
        Err(e) => return err_json(e),
    };
    f(&ledger, &provider)
}

fn handle_value(holdings: &Path, prices: &Path) -> String {
    with_inputs(holdings, prices, |ledger, provider| {
        ok_json(json!({
            "portfolio_value": ledger.portfolio_value(provider),
        }))
    })
}

fn handle_weights(holdings: &Path, prices: &Path) -> String {
    with_inputs(holdings, prices, |ledger, provider| {
        ok_json(json!({
            "weights": ledger.diversification(provider),
        }))
    })
}

fn handle_sharpe(holdings: &Path, prices: &Path) -> String {
    with_inputs(holdings, prices, |ledger, provider| {
        ok_json(json!({
            "sharpe_ratios": ledger.sharpe_ratio_by_symbol(provider, LookbackPeriod::default()),
        }))
    })
}

fn handle_volatility(holdings: &Path, prices: &Path) -> String {
    with_inputs(holdings, prices, |ledger, provider| {
        ok_json(json!({
            "volatility": ledger.volatility_by_symbol(provider, LookbackPeriod::default()),
        }))
    })
}

fn handle_summary(holdings: &Path, prices: &Path) -> String {
    with_inputs(holdings, prices, |ledger, provider| {
        ok_json(json!({
            "portfolio_value": ledger.portfolio_value(provider),
            "total_cost": ledger.total_cost(),
            "weights": ledger.diversification(provider),
            "positions": ledger.position_reports(provider),
        }))
    })
}

fn handle_technical(prices: &Path, symbol: &str, window: usize, volatility_window: usize) -> String {
    let provider = match load_prices(prices) {
        Ok(provider) => provider,
        Err(e) => return err_json(e),
    };

    let closes = provider.closes_for(symbol);
    if closes.is_empty() {
        return err_json(format!("no data found for {}", symbol.to_uppercase()));
    }

    // Latest defined reading of each indicator; null when the series is too
    // short for the window.
    let ma = indicators::latest(&indicators::moving_average(&closes, window));
    let rsi = indicators::latest(&indicators::rsi(&closes, window));
    let vol = indicators::latest(&indicators::volatility(&closes, volatility_window));

    ok_json(json!({
        "symbol": symbol.to_uppercase(),
        "window": window,
        "volatility_window": volatility_window,
        "moving_average": ma,
        "rsi": rsi,
        "volatility": vol,
        "observations": closes.len(),
    }))
}

fn handle_recommend(label: &str, rsi: Option<f64>) -> String {
    let label = match SentimentLabel::parse(label) {
        Some(label) => label,
        None => {
            return err_json(format!(
                "unknown sentiment label: {} (expected POSITIVE, NEGATIVE, or NEUTRAL)",
                label
            ))
        }
    };

    let rsi_value = rsi.unwrap_or(f64::NAN);
    let signal = recommend(label, rsi_value);

    ok_json(json!({
        "label": label,
        "rsi": rsi,
        "recommendation": signal,
    }))
}

/// Stand-in classifier so the sentiment pipeline works end to end without a
/// model: a tiny finance keyword lexicon. Real deployments plug an actual
/// model into `SentimentClassifier`.
struct LexiconClassifier;

const POSITIVE_WORDS: &[&str] = &[
    "beat", "beats", "surge", "surges", "soars", "record", "gain", "gains", "rally", "upgrade",
    "strong", "great", "growth", "profit",
];
const NEGATIVE_WORDS: &[&str] = &[
    "miss", "misses", "tank", "tanks", "plunge", "plunges", "fall", "falls", "drop", "drops",
    "downgrade", "weak", "loss", "lawsuit", "recall",
];

impl SentimentClassifier for LexiconClassifier {
    fn classify(&self, text: &str) -> SentimentRecord {
        let lower = text.to_lowercase();
        let hits = |words: &[&str]| {
            words
                .iter()
                .filter(|w| lower.split(|c: char| !c.is_alphanumeric()).any(|t| t == **w))
                .count()
        };

        let pos = hits(POSITIVE_WORDS);
        let neg = hits(NEGATIVE_WORDS);

        if pos > neg {
            SentimentRecord::new(SentimentLabel::Positive, 0.5 + 0.1 * pos.min(5) as f64)
        } else if neg > pos {
            SentimentRecord::new(SentimentLabel::Negative, 0.5 + 0.1 * neg.min(5) as f64)
        } else {
            SentimentRecord::new(SentimentLabel::Neutral, 0.5)
        }
    }
}

fn handle_sentiment(headlines: &Path) -> String {
    let content = match std::fs::read_to_string(headlines) {
        Ok(content) => content,
        Err(e) => return err_json(e),
    };
    let by_symbol: std::collections::BTreeMap<String, Vec<String>> =
        match serde_json::from_str(&content) {
            Ok(map) => map,
            Err(e) => return err_json(e),
        };

    ok_json(json!({
        "sentiment": aggregate_sentiment(&by_symbol, &LexiconClassifier),
    }))
}
