//! Feed records: news items and price quotes.
//!
//! Missing text fields default to empty strings at deserialization time so
//! consumers never have to handle absent headlines or summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// A single article about a symbol, as supplied by the news feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Feed-assigned identifier, used only for de-duplication by callers.
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub summary: String,
    /// Publication time as unix seconds. `None` when absent or unparseable.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub datetime: Option<i64>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("article has no publication timestamp")]
    Missing,

    #[error("timestamp {0} is outside the representable range")]
    OutOfRange(i64),
}

impl NewsItem {
    #[must_use]
    pub fn new(headline: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            summary: summary.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn with_datetime(mut self, unix_seconds: i64) -> Self {
        self.datetime = Some(unix_seconds);
        self
    }

    /// Headline and summary joined by a single space, trimmed.
    #[must_use]
    pub fn full_text(&self) -> String {
        format!("{} {}", self.headline, self.summary)
            .trim()
            .to_string()
    }

    /// Publication time of the article.
    ///
    /// A zero timestamp counts as missing, matching feeds that emit `0` for
    /// "unknown".
    ///
    /// # Errors
    ///
    /// Returns [`TimestampError::Missing`] when there is no usable timestamp and
    /// [`TimestampError::OutOfRange`] when chrono cannot represent it.
    pub fn published_at(&self) -> Result<DateTime<Utc>, TimestampError> {
        let secs = self
            .datetime
            .filter(|&s| s != 0)
            .ok_or(TimestampError::Missing)?;
        DateTime::from_timestamp(secs, 0).ok_or(TimestampError::OutOfRange(secs))
    }
}

/// Current and previous price for a symbol, as supplied by the price feed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub current: f64,
    pub previous: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Int(i64),
    Float(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl RawScalar {
    #[allow(clippy::cast_possible_truncation)]
    fn into_seconds(self) -> Option<i64> {
        let secs = match self {
            RawScalar::Int(i) => i,
            RawScalar::Float(f) if f.is_finite() => f as i64,
            RawScalar::Text(s) => {
                let s = s.trim();
                match s.parse::<i64>() {
                    Ok(i) => i,
                    Err(_) => match s.parse::<f64>() {
                        Ok(f) if f.is_finite() => f as i64,
                        _ => return None,
                    },
                }
            }
            RawScalar::Float(_) | RawScalar::Other(_) => return None,
        };
        (secs != 0).then_some(secs)
    }

    fn into_id(self) -> String {
        match self {
            RawScalar::Int(i) => i.to_string(),
            RawScalar::Float(f) => f.to_string(),
            RawScalar::Text(s) => s,
            RawScalar::Other(_) => String::new(),
        }
    }
}

/// Accepts integer, float or numeric-string timestamps; anything else is `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawScalar>::deserialize(deserializer)?;
    Ok(raw.and_then(RawScalar::into_seconds))
}

/// Feeds disagree on whether ids are numbers or strings.
fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawScalar>::deserialize(deserializer)?;
    Ok(raw.map(RawScalar::into_id).unwrap_or_default())
}
