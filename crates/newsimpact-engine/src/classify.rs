//! News-type classification and entity extraction.
//!
//! Matching is a case-insensitive substring search over normalized text, so
//! punctuation differences between the article and the metadata lists
//! (`AT&T` vs `AT T`) do not prevent a match.

use newsimpact_core::StockMetadata;
use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// Closed set of article categories, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewsType {
    Earnings,
    Regulatory,
    Product,
    Partnership,
    Competition,
    SupplyChain,
    Market,
    General,
}

impl NewsType {
    /// Keyword scan order. `General` is last and has no keywords.
    pub const ALL: [NewsType; 8] = [
        NewsType::Earnings,
        NewsType::Regulatory,
        NewsType::Product,
        NewsType::Partnership,
        NewsType::Competition,
        NewsType::SupplyChain,
        NewsType::Market,
        NewsType::General,
    ];

    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            NewsType::Earnings => &[
                "earnings",
                "quarterly",
                "revenue",
                "profit",
                "financial",
                "results",
                "beat",
                "miss",
            ],
            NewsType::Regulatory => &[
                "regulatory",
                "investigation",
                "lawsuit",
                "legal",
                "compliance",
                "violation",
                "fine",
            ],
            NewsType::Product => &[
                "product",
                "launch",
                "innovation",
                "technology",
                "new",
                "announcement",
                "release",
            ],
            NewsType::Partnership => &[
                "partnership",
                "acquisition",
                "merger",
                "deal",
                "collaboration",
                "alliance",
            ],
            NewsType::Competition => &[
                "competitor",
                "competition",
                "market share",
                "rival",
                "challenge",
            ],
            NewsType::SupplyChain => &[
                "supplier",
                "supply chain",
                "shortage",
                "inventory",
                "production",
            ],
            NewsType::Market => &["market", "industry", "sector", "trend", "demand", "supply"],
            NewsType::General => &[],
        }
    }

    /// Prior on how strongly this category moves a price.
    #[must_use]
    pub const fn base_weight(self) -> f64 {
        match self {
            NewsType::Earnings => 0.9,
            NewsType::Regulatory => 0.8,
            NewsType::Product | NewsType::Competition => 0.7,
            NewsType::Partnership | NewsType::SupplyChain => 0.6,
            NewsType::Market => 0.5,
            NewsType::General => 0.3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            NewsType::Earnings => "earnings",
            NewsType::Regulatory => "regulatory",
            NewsType::Product => "product",
            NewsType::Partnership => "partnership",
            NewsType::Competition => "competition",
            NewsType::SupplyChain => "supply_chain",
            NewsType::Market => "market",
            NewsType::General => "general",
        }
    }
}

impl std::fmt::Display for NewsType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata entities and topic keywords found in an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySet {
    pub competitors: Vec<String>,
    pub suppliers: Vec<String>,
    pub raw_materials: Vec<String>,
    pub keywords: Vec<String>,
}

impl EntitySet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
            && self.suppliers.is_empty()
            && self.raw_materials.is_empty()
            && self.keywords.is_empty()
    }

    /// Sentiment amplification for the classes of entity present.
    ///
    /// Each non-empty class contributes its factor once, regardless of how
    /// many of its members matched.
    #[must_use]
    pub fn impact_multiplier(&self) -> f64 {
        let mut multiplier = 1.0;
        if !self.competitors.is_empty() {
            multiplier *= 1.3;
        }
        if !self.suppliers.is_empty() {
            multiplier *= 1.2;
        }
        if !self.raw_materials.is_empty() {
            multiplier *= 1.4;
        }
        if !self.keywords.is_empty() {
            multiplier *= 1.1;
        }
        multiplier
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub news_type: NewsType,
    pub entities: EntitySet,
}

/// Categorize an article and collect the entities it mentions.
///
/// Competitor mentions force `Competition`, then supplier or raw-material
/// mentions force `SupplyChain`; otherwise the first category in
/// [`NewsType::ALL`] with a keyword hit wins, falling back to `General`.
#[must_use]
pub fn classify_and_extract(
    headline: &str,
    summary: &str,
    metadata: &StockMetadata,
) -> Classification {
    let text = normalize(&format!("{headline} {summary}")).to_lowercase();
    let entities = extract_entities(&text, metadata);
    let news_type = classify(&text, &entities);
    Classification {
        news_type,
        entities,
    }
}

fn classify(text: &str, entities: &EntitySet) -> NewsType {
    if !entities.competitors.is_empty() {
        return NewsType::Competition;
    }
    if !entities.suppliers.is_empty() || !entities.raw_materials.is_empty() {
        return NewsType::SupplyChain;
    }
    NewsType::ALL
        .into_iter()
        .find(|news_type| news_type.keywords().iter().any(|kw| text.contains(kw)))
        .unwrap_or(NewsType::General)
}

fn extract_entities(text: &str, metadata: &StockMetadata) -> EntitySet {
    let mut keywords: Vec<String> = Vec::new();
    for news_type in NewsType::ALL {
        for &kw in news_type.keywords() {
            if text.contains(kw) && !keywords.iter().any(|k| k == kw) {
                keywords.push(kw.to_string());
            }
        }
    }

    EntitySet {
        competitors: find_mentions(text, &metadata.competitors),
        suppliers: find_mentions(text, &metadata.suppliers),
        raw_materials: find_mentions(text, &metadata.raw_materials),
        keywords,
    }
}

/// Names from `names` that occur in `text` (already normalized and
/// lower-cased), in list order and without duplicates.
fn find_mentions(text: &str, names: &[String]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for name in names {
        let needle = normalize(name).to_lowercase();
        if needle.is_empty() || !text.contains(&needle) {
            continue;
        }
        if !found.iter().any(|f| f.eq_ignore_ascii_case(name)) {
            found.push(name.clone());
        }
    }
    found
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
