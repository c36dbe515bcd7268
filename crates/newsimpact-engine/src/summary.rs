//! Aggregate sentiment over a batch of articles.

use serde::Serialize;

use crate::sentiment::{SentimentLabel, SentimentResult};

/// Scores strictly beyond ±this count as positive or negative in a summary.
pub const SUMMARY_BAND: f64 = 0.15;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentSummary {
    pub count: usize,
    pub average_score: f64,
    pub label: SentimentLabel,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentSummary {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            count: 0,
            average_score: 0.0,
            label: SentimentLabel::Neutral,
            positive: 0,
            negative: 0,
            neutral: 0,
        }
    }
}

fn band(score: f64) -> SentimentLabel {
    if score > SUMMARY_BAND {
        SentimentLabel::Positive
    } else if score < -SUMMARY_BAND {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Mean score and per-band counts. An empty batch is neutral with zero counts.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn summarize<'a>(results: impl IntoIterator<Item = &'a SentimentResult>) -> SentimentSummary {
    let mut summary = SentimentSummary::empty();
    let mut total = 0.0;

    for result in results {
        summary.count += 1;
        total += result.score;
        match band(result.score) {
            SentimentLabel::Positive => summary.positive += 1,
            SentimentLabel::Negative => summary.negative += 1,
            SentimentLabel::Neutral => summary.neutral += 1,
        }
    }

    if summary.count > 0 {
        summary.average_score = total / summary.count as f64;
        summary.label = band(summary.average_score);
    }
    summary
}
