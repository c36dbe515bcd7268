//! Batch selection of not-yet-seen articles from a feed.

use std::collections::HashSet;

use newsimpact_core::NewsItem;

/// First `limit` items whose ids are not in `seen`, recording their ids.
///
/// Items with an empty id cannot be de-duplicated and are always selected.
pub fn select_fresh(
    items: impl IntoIterator<Item = NewsItem>,
    seen: &mut HashSet<String>,
    limit: usize,
) -> Vec<NewsItem> {
    let mut fresh = Vec::new();
    for item in items {
        if fresh.len() >= limit {
            break;
        }
        if !item.id.is_empty() && !seen.insert(item.id.clone()) {
            tracing::debug!(news_id = %item.id, "skipping already-seen article");
            continue;
        }
        fresh.push(item);
    }
    fresh
}
