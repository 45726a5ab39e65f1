//! Trending ranking: movies ordered by review volume, then recency.
//!
//! Ranking is pure and synchronous. Enrichment is a separate, explicitly
//! sequential pass over the ranked list — one outbound metadata lookup at a
//! time, each started only after the previous one settles. That bounds the
//! burst of outbound calls; it is not a parallelism requirement.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::aggregate::AggregateStat;
use crate::metadata::{MetadataClient, MovieSummary};
use crate::title::split_title_and_year;
use crate::types::ReviewCollection;

/// Home-page cap on ranked entries.
pub const TRENDING_LIMIT: usize = 5;

/// One ranked movie: its aggregation key, the display title of the first
/// contributing record, its stats, the timestamp of its most recent
/// contributing review, and whatever enrichment produced.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendingEntry {
    pub key: String,
    pub title: String,
    pub stats: AggregateStat,
    pub latest: DateTime<Utc>,
    pub metadata: Option<MovieSummary>,
}

/// Rank movies by contributing-review count descending, breaking ties by the
/// latest contributing review's date descending. Ties beyond that keep
/// encounter order (stable sort). At most `limit` entries; keys with zero
/// contributing reviews never appear.
///
/// The contribution rule is the aggregator's: non-empty title, rating in 1–5.
pub fn rank(collection: &ReviewCollection, limit: usize) -> Vec<TrendingEntry> {
    let mut entries: Vec<TrendingEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in collection.records() {
        if !record.contributes() {
            continue;
        }
        let key = record.movie_key();
        match index.get(&key) {
            Some(&i) => {
                let entry = &mut entries[i];
                entry.stats.sum += u32::from(record.rating);
                entry.stats.count += 1;
                if record.date > entry.latest {
                    entry.latest = record.date;
                }
            }
            None => {
                index.insert(key.clone(), entries.len());
                entries.push(TrendingEntry {
                    key,
                    title: record.title.clone(),
                    stats: AggregateStat {
                        sum: u32::from(record.rating),
                        count: 1,
                        average: 0.0,
                    },
                    latest: record.date,
                    metadata: None,
                });
            }
        }
    }

    for entry in &mut entries {
        entry.stats.average = f64::from(entry.stats.sum) / f64::from(entry.stats.count);
    }

    entries.sort_by(|a, b| {
        b.stats
            .count
            .cmp(&a.stats.count)
            .then_with(|| b.latest.cmp(&a.latest))
    });
    entries.truncate(limit);
    entries
}

/// Best-effort enrichment of ranked entries from the metadata collaborator.
///
/// Strictly sequential: the lookup for entry *i+1* starts only after entry
/// *i*'s lookup settles. A miss or failure leaves that entry's `metadata` as
/// `None` and never removes it from the ranking or blocks later entries.
pub async fn enrich(entries: &mut [TrendingEntry], client: &dyn MetadataClient) {
    for entry in entries.iter_mut() {
        let (title, year) = split_title_and_year(&entry.title);
        entry.metadata = client.find(&title, year.as_deref()).await;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ReviewId, ReviewRecord};
    use async_trait::async_trait;
    use chrono::TimeZone;
    use parking_lot::Mutex;

    fn record(title: &str, rating: u8, ts: i64) -> ReviewRecord {
        ReviewRecord {
            id: ReviewId::generate(),
            title: title.to_string(),
            name: String::new(),
            rating,
            comments: String::new(),
            date: Utc.timestamp_opt(ts, 0).unwrap(),
        }
    }

    // ---- ranking ----

    #[test]
    fn count_dominates_recency() {
        // A: 5 reviews, stale. B: 2 reviews, fresh.
        let mut records = Vec::new();
        for i in 0..5 {
            records.push(record("A", 3, i));
        }
        records.push(record("B", 3, 100));
        records.push(record("B", 3, 101));

        let ranked = rank(&ReviewCollection::from_records(records), TRENDING_LIMIT);
        assert_eq!(ranked[0].key, "a");
        assert_eq!(ranked[1].key, "b");
    }

    #[test]
    fn recency_breaks_count_ties() {
        // Both have 3 reviews; B's latest is newer.
        let mut records = Vec::new();
        for i in 0..3 {
            records.push(record("A", 3, i));
        }
        for i in 10..13 {
            records.push(record("B", 3, i));
        }

        let ranked = rank(&ReviewCollection::from_records(records), TRENDING_LIMIT);
        assert_eq!(ranked[0].key, "b");
        assert_eq!(ranked[1].key, "a");
    }

    #[test]
    fn full_ties_keep_encounter_order() {
        let records = vec![record("First", 3, 5), record("Second", 3, 5)];
        let ranked = rank(&ReviewCollection::from_records(records), TRENDING_LIMIT);
        assert_eq!(ranked[0].key, "first");
        assert_eq!(ranked[1].key, "second");
    }

    #[test]
    fn never_more_than_limit_entries() {
        let records: Vec<_> = (0..8)
            .map(|i| record(&format!("Movie {i}"), 3, i))
            .collect();
        let ranked = rank(&ReviewCollection::from_records(records), TRENDING_LIMIT);
        assert_eq!(ranked.len(), TRENDING_LIMIT);
    }

    #[test]
    fn non_contributing_records_never_rank() {
        let records = vec![record("Unrated", 0, 50), record("", 4, 60)];
        let ranked = rank(&ReviewCollection::from_records(records), TRENDING_LIMIT);
        assert!(ranked.is_empty());
        let ranked = rank(&ReviewCollection::new(), TRENDING_LIMIT);
        assert!(ranked.is_empty());
    }

    #[test]
    fn entry_carries_stats_and_latest() {
        let records = vec![record("Heat", 2, 10), record("heat", 4, 30)];
        let ranked = rank(&ReviewCollection::from_records(records), TRENDING_LIMIT);
        assert_eq!(ranked.len(), 1);
        let entry = &ranked[0];
        assert_eq!(entry.title, "Heat"); // first contributing record's casing
        assert_eq!(entry.stats.count, 2);
        assert_eq!(entry.stats.sum, 6);
        assert!((entry.stats.average - 3.0).abs() < f64::EPSILON);
        assert_eq!(entry.latest, Utc.timestamp_opt(30, 0).unwrap());
    }

    // ---- enrichment ----

    /// Scripted client that records call order and asserts no overlap.
    struct ScriptedClient {
        /// title → summary; misses for anything else.
        known: HashMap<String, MovieSummary>,
        calls: Mutex<Vec<String>>,
        in_flight: Mutex<bool>,
    }

    impl ScriptedClient {
        fn new(known: HashMap<String, MovieSummary>) -> Self {
            Self {
                known,
                calls: Mutex::new(Vec::new()),
                in_flight: Mutex::new(false),
            }
        }
    }

    #[async_trait]
    impl MetadataClient for ScriptedClient {
        async fn search(&self, _query: &str) -> Option<Vec<MovieSummary>> {
            None
        }

        async fn find(&self, title: &str, _year: Option<&str>) -> Option<MovieSummary> {
            {
                let mut in_flight = self.in_flight.lock();
                assert!(!*in_flight, "overlapping enrichment lookups");
                *in_flight = true;
            }
            self.calls.lock().push(title.to_string());
            tokio::task::yield_now().await;
            *self.in_flight.lock() = false;
            self.known.get(title).cloned()
        }
    }

    fn summary(title: &str, year: &str) -> MovieSummary {
        MovieSummary {
            title: title.to_string(),
            year: year.to_string(),
            poster: None,
        }
    }

    #[tokio::test]
    async fn enrichment_is_sequential_in_rank_order() {
        let records = vec![
            record("Heat (1995)", 4, 30),
            record("Heat (1995)", 5, 31),
            record("Alien (1979)", 5, 10),
        ];
        let mut ranked = rank(&ReviewCollection::from_records(records), TRENDING_LIMIT);

        let client = ScriptedClient::new(HashMap::from([
            ("Heat".to_string(), summary("Heat", "1995")),
            ("Alien".to_string(), summary("Alien", "1979")),
        ]));
        enrich(&mut ranked, &client).await;

        assert_eq!(*client.calls.lock(), vec!["Heat", "Alien"]);
        assert_eq!(ranked[0].metadata.as_ref().unwrap().title, "Heat");
        assert_eq!(ranked[1].metadata.as_ref().unwrap().title, "Alien");
    }

    #[tokio::test]
    async fn enrichment_miss_degrades_only_its_entry() {
        let records = vec![
            record("Known (1995)", 4, 30),
            record("Obscure Indie", 5, 10),
            record("Known (1995)", 5, 31),
        ];
        let mut ranked = rank(&ReviewCollection::from_records(records), TRENDING_LIMIT);

        let client = ScriptedClient::new(HashMap::from([(
            "Known".to_string(),
            summary("Known", "1995"),
        )]));
        enrich(&mut ranked, &client).await;

        assert_eq!(ranked.len(), 2);
        assert!(ranked[0].metadata.is_some());
        assert!(ranked[1].metadata.is_none());
        // Miss did not stop the walk — both lookups happened.
        assert_eq!(client.calls.lock().len(), 2);
    }
}
