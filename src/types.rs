use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ReviewId
// ============================================================================

/// Stable surrogate key for a review, generated at creation time.
///
/// Mutation resolves a review by its `ReviewId`, never by position in
/// whatever ordering a caller happens to have materialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(String);

impl ReviewId {
    /// Generate a fresh random id (UUID v4).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReviewId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ============================================================================
// ReviewRecord
// ============================================================================

/// One submitted opinion about a movie.
///
/// `title` optionally carries a parenthesized 4-digit year suffix
/// (`"Heat (1995)"`). The aggregation key is the lower-cased title verbatim,
/// year suffix included. `date` is stamped at creation and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Payloads written before surrogate keys existed have no `id`; they are
    /// assigned one on load and keep it from the next save onward.
    #[serde(default = "ReviewId::generate")]
    pub id: ReviewId,
    pub title: String,
    /// Reviewer display name; empty means "Anonymous".
    #[serde(default)]
    pub name: String,
    /// 1–5. A `0` rating is treated as absent by aggregation.
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub comments: String,
    pub date: DateTime<Utc>,
}

impl ReviewRecord {
    /// The case-insensitive key this record aggregates under.
    pub fn movie_key(&self) -> String {
        self.title.to_lowercase()
    }

    /// Whether this record contributes to aggregate statistics: it needs a
    /// non-empty title and a rating inside 1–5. Anything else is skipped
    /// silently, not treated as an error.
    pub fn contributes(&self) -> bool {
        !self.title.is_empty() && (1..=5).contains(&self.rating)
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Anonymous"
        } else {
            &self.name
        }
    }
}

// ============================================================================
// ReviewInput
// ============================================================================

/// Submission payload — everything the caller provides. Id and timestamp are
/// stamped by the store on successful validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewInput {
    pub title: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub comments: String,
}

// ============================================================================
// ReviewCollection
// ============================================================================

/// Ordered sequence of reviews. Insertion order on creation; display paths
/// derive their own date-descending view without disturbing stored order.
///
/// Serializes as a bare JSON array of review objects — the wire format of the
/// durable client store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewCollection {
    records: Vec<ReviewRecord>,
}

impl ReviewCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ReviewRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ReviewRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record, preserving insertion order.
    pub fn push(&mut self, record: ReviewRecord) {
        self.records.push(record);
    }

    pub fn contains(&self, id: &ReviewId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &ReviewId) -> Option<&ReviewRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn get_mut(&mut self, id: &ReviewId) -> Option<&mut ReviewRecord> {
        self.records.iter_mut().find(|r| &r.id == id)
    }

    /// Remove the record with the given id, returning it if present.
    pub fn remove(&mut self, id: &ReviewId) -> Option<ReviewRecord> {
        let pos = self.records.iter().position(|r| &r.id == id)?;
        Some(self.records.remove(pos))
    }

    /// Display ordering: newest first. Stable, so same-timestamp records keep
    /// their stored relative order.
    pub fn by_date_desc(&self) -> Vec<&ReviewRecord> {
        let mut view: Vec<&ReviewRecord> = self.records.iter().collect();
        view.sort_by(|a, b| b.date.cmp(&a.date));
        view
    }

    /// The `n` most recent reviews, newest first.
    pub fn latest(&self, n: usize) -> Vec<&ReviewRecord> {
        let mut view = self.by_date_desc();
        view.truncate(n);
        view
    }
}

// ============================================================================
// Tests
// ============================================================================
