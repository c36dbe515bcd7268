//! Word-level polarity and subjectivity estimator.
//!
//! Every lexicon word carries a polarity in `[-1.0, 1.0]` and a subjectivity in
//! `[0.0, 1.0]`. A directly preceding intensifier scales both; a negator in
//! front of the word (or in front of its intensifier) flips and halves the
//! polarity. The text's polarity and subjectivity are the means over all
//! matched words, `0.0` when nothing matches.

use serde::{Deserialize, Serialize};

/// Output of the lexical estimator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LexicalScores {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// `(word, polarity, subjectivity)`. Keys are lowercase single words.
pub(crate) const LEXICON: &[(&str, f64, f64)] = &[
    // General positive
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("positive", 0.23, 0.55),
    ("strong", 0.43, 0.73),
    ("stronger", 0.45, 0.7),
    ("robust", 0.5, 0.5),
    ("success", 0.6, 0.6),
    ("successful", 0.75, 0.95),
    ("optimistic", 0.5, 0.8),
    ("impressive", 0.8, 0.9),
    ("innovative", 0.5, 0.6),
    ("breakthrough", 0.6, 0.5),
    ("win", 0.6, 0.5),
    ("wins", 0.6, 0.5),
    // Market and earnings positive
    ("record", 0.5, 0.4),
    ("beat", 0.5, 0.3),
    ("beats", 0.5, 0.3),
    ("exceeds", 0.5, 0.3),
    ("exceeded", 0.5, 0.3),
    ("outperform", 0.6, 0.4),
    ("outperforms", 0.6, 0.4),
    ("surge", 0.6, 0.5),
    ("surges", 0.6, 0.5),
    ("surged", 0.6, 0.5),
    ("soar", 0.7, 0.5),
    ("soars", 0.7, 0.5),
    ("rally", 0.5, 0.5),
    ("rallies", 0.5, 0.5),
    ("gain", 0.4, 0.3),
    ("gains", 0.4, 0.3),
    ("growth", 0.4, 0.3),
    ("growing", 0.3, 0.3),
    ("profitable", 0.6, 0.4),
    ("upgrade", 0.5, 0.3),
    ("upgraded", 0.5, 0.3),
    ("bullish", 0.6, 0.7),
    ("boost", 0.4, 0.4),
    ("boosts", 0.4, 0.4),
    ("approval", 0.4, 0.3),
    ("approved", 0.4, 0.3),
    ("higher", 0.25, 0.5),
    // General negative
    ("bad", -0.7, 0.67),
    ("poor", -0.4, 0.6),
    ("weak", -0.4, 0.5),
    ("weaker", -0.45, 0.5),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("failure", -0.6, 0.6),
    ("failed", -0.5, 0.5),
    ("disappointing", -0.6, 0.7),
    ("concern", -0.3, 0.5),
    ("concerns", -0.3, 0.5),
    ("risk", -0.3, 0.5),
    ("uncertainty", -0.3, 0.6),
    ("warning", -0.4, 0.4),
    ("scandal", -0.7, 0.7),
    ("fraud", -0.8, 0.7),
    // Market and earnings negative
    ("miss", -0.4, 0.3),
    ("misses", -0.5, 0.3),
    ("missed", -0.5, 0.3),
    ("decline", -0.4, 0.3),
    ("declines", -0.4, 0.3),
    ("falls", -0.4, 0.3),
    ("drop", -0.4, 0.3),
    ("drops", -0.4, 0.3),
    ("plunge", -0.7, 0.5),
    ("plunges", -0.7, 0.5),
    ("crash", -0.8, 0.6),
    ("slump", -0.6, 0.5),
    ("loss", -0.5, 0.4),
    ("losses", -0.5, 0.4),
    ("downgrade", -0.5, 0.3),
    ("downgraded", -0.5, 0.3),
    ("bearish", -0.6, 0.7),
    ("lower", -0.2, 0.4),
    ("cuts", -0.3, 0.3),
    ("layoffs", -0.5, 0.3),
    ("bankruptcy", -0.9, 0.6),
    ("shortage", -0.4, 0.3),
    ("delay", -0.3, 0.3),
    ("delays", -0.3, 0.3),
    ("volatile", -0.2, 0.6),
    // Legal and regulatory negative
    ("lawsuit", -0.5, 0.4),
    ("sued", -0.5, 0.4),
    ("investigation", -0.3, 0.3),
    ("probe", -0.3, 0.3),
    ("fined", -0.5, 0.3),
    ("penalty", -0.5, 0.3),
    ("violation", -0.5, 0.4),
    ("recall", -0.6, 0.4),
    ("recalls", -0.6, 0.4),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("really", 1.2),
    ("significantly", 1.3),
    ("sharply", 1.4),
    ("most", 1.2),
    ("somewhat", 0.7),
    ("slightly", 0.5),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "without", "hardly", "barely", "nor", "cannot",
];

const NEGATION_FACTOR: f64 = -0.5;

/// Score already-normalized text.
#[must_use]
pub fn lexical_scores(normalized: &str) -> LexicalScores {
    let tokens: Vec<String> = normalized
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();

    let mut polarities = Vec::new();
    let mut subjectivities = Vec::new();

    for (idx, token) in tokens.iter().enumerate() {
        let Some(&(_, base_polarity, base_subjectivity)) =
            LEXICON.iter().find(|(word, _, _)| word == token)
        else {
            continue;
        };

        let mut polarity = base_polarity;
        let mut subjectivity = base_subjectivity;
        let mut head = idx;

        if head > 0 {
            if let Some(scale) = intensity(&tokens[head - 1]) {
                polarity *= scale;
                subjectivity *= scale;
                head -= 1;
            }
        }
        if is_negated(&tokens[..head]) {
            polarity *= NEGATION_FACTOR;
        }

        polarities.push(polarity.clamp(-1.0, 1.0));
        subjectivities.push(subjectivity.clamp(0.0, 1.0));
    }

    LexicalScores {
        polarity: mean(&polarities).clamp(-1.0, 1.0),
        subjectivity: mean(&subjectivities).clamp(0.0, 1.0),
    }
}

fn intensity(token: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|&(_, scale)| scale)
}

/// True when the last token of `prefix` negates what follows it.
///
/// Contractions arrive split by normalization (`don't` → `don t`), so a bare
/// `t` after a word ending in `n` counts as a negator.
fn is_negated(prefix: &[String]) -> bool {
    match prefix {
        [.., before, last] if last == "t" => before.ends_with('n'),
        [.., last] => NEGATIONS.contains(&last.as_str()),
        [] => false,
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn no_matches_is_zero() {
        let s = lexical_scores("the quick brown fox");
        assert!(close(s.polarity, 0.0));
        assert!(close(s.subjectivity, 0.0));
    }

    #[test]
    fn single_word_takes_lexicon_values() {
        let s = lexical_scores("earnings beat");
        assert!(close(s.polarity, 0.5));
        assert!(close(s.subjectivity, 0.3));
    }

    #[test]
    fn matches_are_averaged() {
        // lawsuit -0.5, investigation -0.3
        let s = lexical_scores("company faces lawsuit and regulatory investigation");
        assert!(close(s.polarity, -0.4), "got {}", s.polarity);
        assert!(close(s.subjectivity, 0.35), "got {}", s.subjectivity);
    }

    #[test]
    fn case_insensitive() {
        assert!(close(
            lexical_scores("RECORD").polarity,
            lexical_scores("record").polarity
        ));
    }

    #[test]
    fn intensifier_scales_polarity_and_subjectivity() {
        let plain = lexical_scores("strong quarter");
        let boosted = lexical_scores("very strong quarter");
        assert!(boosted.polarity > plain.polarity);
        assert!(boosted.subjectivity > plain.subjectivity);
    }

    #[test]
    fn negation_flips_and_halves() {
        let s = lexical_scores("results were not good");
        assert!(close(s.polarity, -0.35), "got {}", s.polarity);
    }

    #[test]
    fn negation_reaches_past_intensifier() {
        let s = lexical_scores("not very good");
        assert!(s.polarity < 0.0, "got {}", s.polarity);
    }

    #[test]
    fn split_contraction_negates() {
        let s = lexical_scores("guidance isn t good");
        assert!(s.polarity < 0.0, "got {}", s.polarity);
        let plain_t = lexical_scores("at t good");
        assert!(plain_t.polarity > 0.0, "got {}", plain_t.polarity);
    }

    #[test]
    fn scores_stay_in_range() {
        let s = lexical_scores("extremely excellent extremely best extremely impressive");
        assert!(s.polarity <= 1.0);
        assert!(s.subjectivity <= 1.0);
        let n = lexical_scores("extremely worst extremely bankruptcy fraud crash");
        assert!(n.polarity >= -1.0);
    }

    #[test]
    fn lexicon_values_are_in_range() {
        for &(word, polarity, subjectivity) in LEXICON {
            assert!((-1.0..=1.0).contains(&polarity), "{word} polarity");
            assert!((0.0..=1.0).contains(&subjectivity), "{word} subjectivity");
            assert_eq!(word, word.to_lowercase(), "{word} must be lowercase");
        }
    }
}
