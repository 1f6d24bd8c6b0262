//! Headline sentiment aggregation.

use std::collections::BTreeMap;

use crate::provider::{NewsProvider, SentimentClassifier};
use crate::types::{SentimentLabel, SentimentSummary};

/// Truncate to at most `max` characters, never splitting a char.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Classify every headline and reduce to a per-symbol [`SentimentSummary`].
///
/// Headlines are truncated to the classifier's supported input length before
/// classification. The signed score per headline is `+confidence` for
/// positive, `-confidence` for negative, and 0 for neutral; the average is
/// over all headlines and is 0.0 when there are none. Symbols present in the
/// request with zero headlines still appear in the output, all-zero.
///
/// The summaries are recomputed from scratch on every call; nothing is
/// cached.
pub fn aggregate_sentiment(
    headlines_by_symbol: &BTreeMap<String, Vec<String>>,
    classifier: &dyn SentimentClassifier,
) -> BTreeMap<String, SentimentSummary> {
    let max_chars = classifier.max_input_chars();
    let mut summaries = BTreeMap::new();

    for (symbol, headlines) in headlines_by_symbol {
        let mut summary = SentimentSummary::default();
        let mut total_score = 0.0;

        for headline in headlines {
            let record = classifier.classify(truncate_chars(headline, max_chars));
            total_score += record.signed_score();
            match record.label {
                SentimentLabel::Positive => summary.positive += 1,
                SentimentLabel::Negative => summary.negative += 1,
                SentimentLabel::Neutral => summary.neutral += 1,
            }
        }

        summary.total_articles = headlines.len();
        summary.average_signed_score = if headlines.is_empty() {
            0.0
        } else {
            total_score / headlines.len() as f64
        };

        tracing::debug!(
            symbol = %symbol,
            articles = summary.total_articles,
            score = summary.average_signed_score,
            "aggregated headline sentiment"
        );
        summaries.insert(symbol.clone(), summary);
    }

    summaries
}

/// Fetch recent headlines for each symbol and aggregate their sentiment.
///
/// Best-effort per symbol: a failed news fetch is logged and treated as zero
/// headlines, so the symbol still appears in the output with an all-zero
/// summary and the batch never aborts.
pub fn news_sentiment_for_symbols(
    symbols: &[String],
    max_headlines: usize,
    news: &dyn NewsProvider,
    classifier: &dyn SentimentClassifier,
) -> BTreeMap<String, SentimentSummary> {
    let mut headlines_by_symbol = BTreeMap::new();

    for symbol in symbols {
        let headlines = match news.headlines(symbol, max_headlines) {
            Ok(headlines) => headlines,
            Err(err) => {
                tracing::warn!(%symbol, %err, "news fetch failed, treating as no headlines");
                Vec::new()
            }
        };
        headlines_by_symbol.insert(symbol.clone(), headlines);
    }

    aggregate_sentiment(&headlines_by_symbol, classifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SentimentRecord;
    use approx::assert_relative_eq;

    /// Keyword stub standing in for the external model.
    struct StubClassifier;

    impl SentimentClassifier for StubClassifier {
        fn classify(&self, text: &str) -> SentimentRecord {
            if text.contains("great") {
                SentimentRecord::new(SentimentLabel::Positive, 0.9)
            } else if text.contains("tanks") {
                SentimentRecord::new(SentimentLabel::Negative, 0.8)
            } else {
                SentimentRecord::new(SentimentLabel::Neutral, 0.6)
            }
        }
    }

    fn request(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(symbol, headlines)| {
                (
                    symbol.to_string(),
                    headlines.iter().map(|h| h.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_aggregate_mixed_headlines() {
        let headlines = request(&[("AAPL", &["great quarter", "stock tanks"])]);
        let summaries = aggregate_sentiment(&headlines, &StubClassifier);

        let aapl = &summaries["AAPL"];
        assert_eq!(aapl.positive, 1);
        assert_eq!(aapl.negative, 1);
        assert_eq!(aapl.neutral, 0);
        assert_eq!(aapl.total_articles, 2);
        // (0.9 - 0.8) / 2 = 0.05
        assert_relative_eq!(aapl.average_signed_score, 0.05, epsilon = 1e-9);
    }

    #[test]
    fn test_aggregate_zero_headlines_symbol_still_present() {
        let headlines = request(&[("AAPL", &["great quarter"]), ("GOOGL", &[])]);
        let summaries = aggregate_sentiment(&headlines, &StubClassifier);

        let googl = &summaries["GOOGL"];
        assert_eq!(googl.total_articles, 0);
        assert_eq!(googl.positive, 0);
        assert_eq!(googl.negative, 0);
        assert_eq!(googl.neutral, 0);
        assert_eq!(googl.average_signed_score, 0.0);
    }

    #[test]
    fn test_aggregate_neutral_does_not_move_score() {
        let headlines = request(&[("AAPL", &["quarterly report published", "great quarter"])]);
        let summaries = aggregate_sentiment(&headlines, &StubClassifier);

        let aapl = &summaries["AAPL"];
        assert_eq!(aapl.neutral, 1);
        assert_eq!(aapl.positive, 1);
        // Neutral contributes 0 to the signed sum: 0.9 / 2.
        assert_relative_eq!(aapl.average_signed_score, 0.45, epsilon = 1e-9);
    }

    #[test]
    fn test_headline_truncated_before_classification() {
        struct LengthAsserter;
        impl SentimentClassifier for LengthAsserter {
            fn classify(&self, text: &str) -> SentimentRecord {
                assert!(text.chars().count() <= 512);
                SentimentRecord::new(SentimentLabel::Neutral, 0.5)
            }
        }

        let long = "é".repeat(2000);
        let headlines = request(&[("AAPL", &[long.as_str()])]);
        aggregate_sentiment(&headlines, &LengthAsserter);
    }

    #[test]
    fn test_truncate_chars_multibyte_boundary() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn test_news_sentiment_degrades_failed_fetch() {
        use crate::provider::NewsProvider;
        use crate::{Error, Result};

        struct FlakyNews;
        impl NewsProvider for FlakyNews {
            fn headlines(&self, symbol: &str, _max_count: usize) -> Result<Vec<String>> {
                match symbol {
                    "AAPL" => Ok(vec!["great quarter".to_string()]),
                    _ => Err(Error::DataUnavailable(symbol.to_string())),
                }
            }
        }

        let symbols = vec!["AAPL".to_string(), "GOOGL".to_string()];
        let summaries = news_sentiment_for_symbols(&symbols, 5, &FlakyNews, &StubClassifier);

        // The failing symbol is present with an all-zero summary, not dropped.
        assert_eq!(summaries["AAPL"].positive, 1);
        assert_eq!(summaries["GOOGL"].total_articles, 0);
        assert_eq!(summaries["GOOGL"].average_signed_score, 0.0);
    }
}
