//! Two-estimator sentiment analysis.
//!
//! VADER's compound score and the lexical polarity are blended 70/30. The
//! label uses a ±0.05 dead band so near-zero noise stays `NEUTRAL`, and
//! confidence rewards objective wording on top of polarity strength.

mod lexical;
mod vader;

use serde::{Deserialize, Serialize};

use crate::classify::{EntitySet, NewsType};
use crate::normalize::normalize;

pub use lexical::{lexical_scores, LexicalScores};
pub use vader::VaderScores;

use vader::VaderEstimator;

pub const VADER_WEIGHT: f64 = 0.7;
pub const LEXICAL_WEIGHT: f64 = 0.3;
/// Scores at or beyond ±this value are labelled positive/negative.
pub const LABEL_THRESHOLD: f64 = 0.05;
/// Confidence added for fully objective text.
pub const OBJECTIVITY_WEIGHT: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= LABEL_THRESHOLD {
            SentimentLabel::Positive
        } else if score <= -LABEL_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "POSITIVE"),
            SentimentLabel::Negative => write!(f, "NEGATIVE"),
            SentimentLabel::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub vader: VaderScores,
    pub lexical: LexicalScores,
}

/// Sentiment of a bare piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSentiment {
    /// Blended polarity in `[-1.0, 1.0]`.
    pub score: f64,
    pub label: SentimentLabel,
    /// In `[0.0, 1.0]`.
    pub confidence: f64,
    pub component_scores: ComponentScores,
}

impl TextSentiment {
    /// Baseline for text with nothing to analyze.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            score: 0.0,
            label: SentimentLabel::Neutral,
            confidence: 0.0,
            component_scores: ComponentScores::default(),
        }
    }
}

/// Sentiment of one article in the context of one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub score: f64,
    pub label: SentimentLabel,
    pub confidence: f64,
    /// Amplification earned by entity and keyword mentions; `1.0` when none.
    pub impact_multiplier: f64,
    pub entities_found: EntitySet,
    pub news_type: NewsType,
    pub component_scores: ComponentScores,
}

impl SentimentResult {
    #[must_use]
    pub fn new(text: TextSentiment, entities: EntitySet, news_type: NewsType) -> Self {
        Self {
            score: text.score,
            label: text.label,
            confidence: text.confidence,
            impact_multiplier: entities.impact_multiplier(),
            entities_found: entities,
            news_type,
            component_scores: text.component_scores,
        }
    }
}

pub struct SentimentAnalyzer {
    vader: VaderEstimator,
}

impl SentimentAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            vader: VaderEstimator::new(),
        }
    }

    /// Analyze raw text. Pure: identical input always yields identical output.
    #[must_use]
    pub fn analyze(&self, text: &str) -> TextSentiment {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return TextSentiment::neutral();
        }

        let vader = self.vader.scores(&normalized);
        let lexical = lexical_scores(&normalized);

        let score = (VADER_WEIGHT * vader.compound + LEXICAL_WEIGHT * lexical.polarity)
            .clamp(-1.0, 1.0);
        let confidence =
            (score.abs() + (1.0 - lexical.subjectivity) * OBJECTIVITY_WEIGHT).clamp(0.0, 1.0);

        TextSentiment {
            score,
            label: SentimentLabel::from_score(score),
            confidence,
            component_scores: ComponentScores { vader, lexical },
        }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
