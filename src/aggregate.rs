//! Per-movie rating statistics derived from the full collection.
//!
//! Aggregates are recomputed from scratch on every query — they are never
//! persisted and never incrementally maintained, so there is no staleness to
//! manage after edits or deletes.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::ReviewCollection;

/// Derived sum/count/average of ratings for one movie key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateStat {
    pub sum: u32,
    pub count: u32,
    pub average: f64,
}

/// Build the map from lower-cased title to rating statistics.
///
/// Records with an empty title or a rating outside 1–5 are skipped silently.
/// Keys with zero contributing records never appear: absence of a key means
/// "no reviews yet". Titles are matched by exact case-insensitive equality on
/// the full string, year suffix included — two records naming the same film
/// with different year strings stay separate keys.
pub fn rating_stats(collection: &ReviewCollection) -> HashMap<String, AggregateStat> {
    let mut map: HashMap<String, AggregateStat> = HashMap::new();
    for record in collection.records() {
        if !record.contributes() {
            continue;
        }
        let stat = map.entry(record.movie_key()).or_insert(AggregateStat {
            sum: 0,
            count: 0,
            average: 0.0,
        });
        stat.sum += u32::from(record.rating);
        stat.count += 1;
    }
    for stat in map.values_mut() {
        stat.average = f64::from(stat.sum) / f64::from(stat.count);
    }
    map
}

// ============================================================================
// Tests
// ============================================================================
