use std::sync::Arc;

use chrono::TimeZone;

use super::*;

fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

#[test]
fn parses_analyze_command() {
    let cli = Cli::try_parse_from(["newsimpact", "analyze", "--text", "great quarter"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Analyze { text } if text == "great quarter"));
}

#[test]
fn parses_score_with_optional_fields() {
    let cli = Cli::try_parse_from([
        "newsimpact",
        "score",
        "--symbol",
        "TSLA",
        "--headline",
        "Recall announced",
        "--datetime",
        "1717243200",
        "--as-of",
        "2024-06-01T12:00:00Z",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Score {
            symbol,
            summary,
            datetime,
            as_of: parsed,
            ..
        } => {
            assert_eq!(symbol, "TSLA");
            assert_eq!(summary, "");
            assert_eq!(datetime, Some(1_717_243_200));
            assert_eq!(parsed, Some(as_of()));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn score_requires_symbol() {
    assert!(Cli::try_parse_from(["newsimpact", "score", "--headline", "x"]).is_err());
}

#[test]
fn parses_price_alert_command() {
    let cli = Cli::try_parse_from([
        "newsimpact",
        "price-alert",
        "--symbol",
        "AAPL",
        "--previous",
        "200",
        "--current",
        "190.5",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::PriceAlert { previous, current, .. }
            if (previous - 200.0).abs() < f64::EPSILON && (current - 190.5).abs() < f64::EPSILON
    ));
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["newsimpact"]).is_err());
}

#[test]
fn feed_symbols_are_normalized_and_merged() {
    let feed = batch::parse_feed(
        r#"{
            "aapl": [{"id": 1, "headline": "Apple earnings"}],
            "AAPL ": [{"id": "2", "headline": "Apple product"}],
            "TSLA": []
        }"#,
    )
    .unwrap();
    assert_eq!(feed.len(), 2);
    assert_eq!(feed["AAPL"].len(), 2);
    assert_eq!(feed["AAPL"][0].id, "1");
}

#[test]
fn malformed_feed_is_an_error() {
    assert!(batch::parse_feed(r#"["not", "a", "map"]"#).is_err());
}

#[tokio::test]
async fn batch_dedups_caps_and_summarizes() {
    let feed = batch::parse_feed(
        r#"{
            "TSLA": [
                {"id": "a", "headline": "Terrible recall disaster and lawsuit"},
                {"id": "a", "headline": "Terrible recall disaster and lawsuit"},
                {"id": "b", "headline": "Ford cuts prices"},
                {"id": "c", "headline": "Tesla unveils new product"}
            ],
            "AAPL": [
                {"id": "b", "headline": "Shared wire story"},
                {"id": "d", "headline": "Apple quarterly earnings"}
            ]
        }"#,
    )
    .unwrap();

    let engine = Arc::new(NewsImpactEngine::new());
    let reports = batch::run_batch(engine, feed, 2, as_of()).await.unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].symbol, "AAPL");
    assert_eq!(reports[1].symbol, "TSLA");

    // AAPL is processed first and claims "b".
    let aapl = &reports[0];
    assert_eq!(aapl.news_count, 2);
    assert_eq!(aapl.analyzed_count, 2);

    let tsla = &reports[1];
    assert_eq!(tsla.news_count, 4);
    assert_eq!(tsla.analyzed_count, 2);
    let ids: Vec<&str> = tsla.articles.iter().map(|a| a.news.id.as_str()).collect();
    assert_eq!(ids, ["a", "c"]);
    assert_eq!(tsla.summary.count, 2);
    assert!(tsla.alerts.iter().all(|alert| alert.symbol == "TSLA"));
}
