//! Rule-based compound polarity via VADER.

use serde::{Deserialize, Serialize};
use vader_sentiment::SentimentIntensityAnalyzer;

/// VADER output: compound polarity plus the positive/negative/neutral
/// proportions of the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VaderScores {
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

pub(crate) struct VaderEstimator {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderEstimator {
    pub(crate) fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    pub(crate) fn scores(&self, text: &str) -> VaderScores {
        let raw = self.analyzer.polarity_scores(text);
        let get = |key: &str| {
            raw.get(key)
                .copied()
                .filter(|v: &f64| v.is_finite())
                .unwrap_or(0.0)
        };
        VaderScores {
            compound: get("compound").clamp(-1.0, 1.0),
            positive: get("pos").clamp(0.0, 1.0),
            negative: get("neg").clamp(0.0, 1.0),
            neutral: get("neu").clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearly_positive_text_is_positive() {
        let v = VaderEstimator::new().scores("This is a great and wonderful result");
        assert!(v.compound > 0.0, "got {}", v.compound);
        assert!(v.positive > 0.0);
    }

    #[test]
    fn clearly_negative_text_is_negative() {
        let v = VaderEstimator::new().scores("A terrible and horrible disaster");
        assert!(v.compound < 0.0, "got {}", v.compound);
        assert!(v.negative > 0.0);
    }

    #[test]
    fn proportions_are_bounded() {
        let v = VaderEstimator::new().scores("good bad ugly fine okay");
        for p in [v.positive, v.negative, v.neutral] {
            assert!((0.0..=1.0).contains(&p));
        }
        assert!((-1.0..=1.0).contains(&v.compound));
    }
}
