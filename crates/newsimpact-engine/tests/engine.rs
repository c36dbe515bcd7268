use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use newsimpact_core::{NewsItem, StockRecord};
use newsimpact_engine::{
    Calibration, ImpactLevel, NewsImpactEngine, NewsType, SentimentLabel, StaticMetadataProvider,
};

fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn published(age: Duration) -> i64 {
    (as_of() - age).timestamp()
}

#[test]
fn empty_article_is_neutral_baseline() {
    let engine = NewsImpactEngine::new();
    let s = engine.analyze_news("AAPL", &NewsItem::new("", ""));
    assert_eq!(s.label, SentimentLabel::Neutral);
    assert!(s.score.abs() < f64::EPSILON);
    assert!(s.confidence.abs() < f64::EPSILON);
    assert_eq!(s.news_type, NewsType::General);
}

#[test]
fn record_earnings_beat_is_positive_earnings() {
    let engine = NewsImpactEngine::new();
    let item = NewsItem::new(
        "AAPL reports record-breaking quarterly earnings, beats expectations",
        "",
    );
    let article = engine.assess_at("AAPL", &item, as_of());
    assert_eq!(article.sentiment.label, SentimentLabel::Positive);
    assert_eq!(article.sentiment.news_type, NewsType::Earnings);
    assert!((article.impact.factors.base_weight - 0.9).abs() < f64::EPSILON);
    assert_eq!(article.impact.news_type, NewsType::Earnings);
}

#[test]
fn lawsuit_is_regulatory_and_never_positive() {
    let engine = NewsImpactEngine::new();
    let item = NewsItem::new("Company faces lawsuit and regulatory investigation", "");
    let s = engine.analyze_news("MSFT", &item);
    assert_eq!(s.news_type, NewsType::Regulatory);
    assert_ne!(s.label, SentimentLabel::Positive);
}

#[test]
fn unknown_symbol_gets_complete_result_with_defaults() {
    let engine = NewsImpactEngine::new();
    let r = engine.score_at("zzzz", &NewsItem::new("New product launch", ""), as_of());
    assert_eq!(r.symbol, "ZZZZ");
    assert!((r.metadata.market_cap - 1e12).abs() < f64::EPSILON);
    assert!((r.metadata.beta - 1.0).abs() < f64::EPSILON);
    assert_eq!(r.metadata.sector, "Technology");
    assert!((0.0..=100.0).contains(&r.impact_score));
}

#[test]
fn week_old_article_scores_lower_than_fresh() {
    let engine = NewsImpactEngine::new();
    let headline = "TSLA posts excellent record profit, strong growth beats estimates";
    let fresh = NewsItem::new(headline, "").with_datetime(published(Duration::zero()));
    let stale = NewsItem::new(headline, "").with_datetime(published(Duration::days(8)));

    let fresh = engine.score_at("TSLA", &fresh, as_of());
    let stale = engine.score_at("TSLA", &stale, as_of());
    assert!((fresh.factors.time_factor - 1.0).abs() < f64::EPSILON);
    assert!((stale.factors.time_factor - 0.4).abs() < f64::EPSILON);
    assert!(stale.impact_score < fresh.impact_score);
}

#[test]
fn missing_timestamp_is_full_weight() {
    let engine = NewsImpactEngine::new();
    let r = engine.score_at("AAPL", &NewsItem::new("Earnings call", ""), as_of());
    assert!((r.factors.time_factor - 1.0).abs() < f64::EPSILON);
}

#[test]
fn outputs_stay_in_bounds() {
    let engine = NewsImpactEngine::with_provider(
        StaticMetadataProvider::builtin(),
        &Calibration::EXTENDED,
    );
    let headlines = [
        "",
        "!!!",
        "Terrible awful disaster: massive fraud lawsuit, bankruptcy and losses",
        "Outstanding excellent record profit surge, best quarter ever",
        "Ford and GM rally as lithium and cobalt prices soar after merger",
        "Samsung, TSMC, Foxconn and silicon supply shortage hits Apple",
    ];
    for symbol in ["AAPL", "TSLA", "NVDA", "UNKNOWN"] {
        for headline in headlines {
            let a = engine.assess_at(symbol, &NewsItem::new(headline, headline), as_of());
            let s = &a.sentiment;
            assert!((-1.0..=1.0).contains(&s.score), "{headline}: {}", s.score);
            assert!((0.0..=1.0).contains(&s.confidence));
            assert!(s.impact_multiplier >= 1.0);
            let r = &a.impact;
            assert!((0.0..=100.0).contains(&r.impact_score), "{headline}: {}", r.impact_score);
            assert!(r.price_prediction.percentage >= 0.0);
            assert!(r.price_prediction.percentage <= 15.0);
            assert!(r.price_prediction.confidence <= 0.9);
        }
    }
}

#[test]
fn scoring_is_deterministic() {
    let engine = NewsImpactEngine::new();
    let item = NewsItem::new("NVDA unveils new chip", "Analysts expect strong demand")
        .with_datetime(published(Duration::hours(10)));
    let first = engine.assess_at("NVDA", &item, as_of());
    let second = engine.assess_at("NVDA", &item, as_of());
    assert_eq!(first, second);

    let other = NewsImpactEngine::new().assess_at("NVDA", &item, as_of());
    assert_eq!(first, other);
}

#[test]
fn impact_never_increases_with_age() {
    let engine = NewsImpactEngine::new();
    let headline = "Apple quarterly revenue beats expectations";
    let mut previous = f64::INFINITY;
    for hours in [0, 3, 7, 20, 30, 50, 80, 100, 200, 400] {
        let item = NewsItem::new(headline, "").with_datetime(published(Duration::hours(hours)));
        let score = engine.score_at("AAPL", &item, as_of()).impact_score;
        assert!(score <= previous, "{hours}h: {score} > {previous}");
        previous = score;
    }
}

#[test]
fn competitor_mention_drives_competition() {
    let engine = NewsImpactEngine::new();
    let item = NewsItem::new("Ford cuts EV prices", "");
    let s = engine.analyze_news("TSLA", &item);
    assert_eq!(s.news_type, NewsType::Competition);
    assert_eq!(s.entities_found.competitors, vec!["Ford".to_string()]);
    assert!(s.impact_multiplier >= 1.3);
}

#[test]
fn raw_material_mention_drives_supply_chain() {
    let engine = NewsImpactEngine::new();
    let s = engine.analyze_news("TSLA", &NewsItem::new("Lithium prices climb", ""));
    assert_eq!(s.news_type, NewsType::SupplyChain);
    assert_eq!(s.entities_found.raw_materials, vec!["Lithium".to_string()]);
}

#[test]
fn overlay_metadata_is_used() {
    let provider = StaticMetadataProvider::builtin().with_records([StockRecord {
        symbol: "AMD".to_string(),
        beta: Some(1.9),
        competitors: vec!["Intel".to_string()],
        ..StockRecord::default()
    }]);
    let engine = NewsImpactEngine::with_provider(provider, &Calibration::STANDARD);
    let s = engine.analyze_news("amd", &NewsItem::new("Intel slips", ""));
    assert_eq!(s.news_type, NewsType::Competition);
    assert!((engine.metadata("AMD").beta - 1.9).abs() < f64::EPSILON);
}

#[test]
fn extended_calibration_records_extra_factors() {
    let engine = NewsImpactEngine::with_provider(
        StaticMetadataProvider::builtin(),
        &Calibration::EXTENDED,
    );
    let r = engine.score_at("AAPL", &NewsItem::new("Apple earnings", ""), as_of());
    assert_eq!(r.calibration, "extended");
    assert!(r.factors.liquidity_factor.is_some());
    assert!(r.factors.sector_factor.is_some());
    assert!(r.factors.entity_impact.is_some());

    let standard =
        NewsImpactEngine::new().score_at("AAPL", &NewsItem::new("Apple earnings", ""), as_of());
    assert_eq!(standard.calibration, "standard");
    assert!(standard.factors.liquidity_factor.is_none());
}

#[test]
fn neutral_general_news_scores_low() {
    let engine = NewsImpactEngine::new();
    let r = engine.score_at("AAPL", &NewsItem::new("", ""), as_of());
    // General news, neutral sentiment: base weight alone keeps this low.
    assert!(r.impact_level <= ImpactLevel::Low);
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = Arc::new(NewsImpactEngine::new());
    let item = NewsItem::new("Microsoft announces partnership deal", "");
    let expected = engine.score_at("MSFT", &item, as_of());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let item = item.clone();
            std::thread::spawn(move || engine.score_at("MSFT", &item, as_of()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert!(Arc::ptr_eq(&engine.metadata("MSFT"), &engine.metadata("msft")));
}
