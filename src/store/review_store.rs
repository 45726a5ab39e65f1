//! ReviewStore<B> — load/save of the whole review collection and the admin
//! flag through a `KvBackend`.
//!
//! Every read loads the full collection; every mutation writes the full
//! collection back before any later read observes it. There is no merge and
//! no partial write: concurrent savers are last-writer-wins.

use chrono::Utc;
use tracing::warn;

use crate::error::{Result, ValidationError};
use crate::store::backend::KvBackend;
use crate::types::{ReviewCollection, ReviewId, ReviewInput, ReviewRecord};

/// Storage key for the serialized review collection (JSON array).
pub const REVIEWS_KEY: &str = "reviews";

/// Storage key for the serialized admin capability flag (`"true"`/`"false"`).
pub const ADMIN_KEY: &str = "isAdmin";

pub struct ReviewStore<B: KvBackend> {
    backend: B,
}

impl<B: KvBackend> ReviewStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // -----------------------------------------------------------------------
    // Collection load/save
    // -----------------------------------------------------------------------

    /// Load the full collection. Absent data, malformed data, and backend
    /// read failures all normalize to an empty collection — an empty review
    /// set is a valid start state, never a fatal error.
    pub fn load(&self) -> ReviewCollection {
        let text = match self.backend.get(REVIEWS_KEY) {
            Ok(Some(text)) => text,
            Ok(None) => return ReviewCollection::new(),
            Err(e) => {
                warn!(key = REVIEWS_KEY, error = %e, "backend read failed, treating as empty");
                return ReviewCollection::new();
            }
        };
        match serde_json::from_str(&text) {
            Ok(collection) => collection,
            Err(e) => {
                warn!(key = REVIEWS_KEY, error = %e, "stored reviews did not parse, treating as empty");
                ReviewCollection::new()
            }
        }
    }

    /// Serialize and persist the full collection, overwriting the prior
    /// value.
    pub fn save(&self, collection: &ReviewCollection) -> Result<()> {
        let text = serde_json::to_string(collection).map_err(crate::error::StorageError::from)?;
        self.backend.set(REVIEWS_KEY, &text)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Admin flag
    // -----------------------------------------------------------------------

    /// Load the admin capability flag. Anything other than a stored `"true"`
    /// reads as disabled.
    pub fn load_admin(&self) -> bool {
        match self.backend.get(ADMIN_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                warn!(key = ADMIN_KEY, error = %e, "backend read failed, treating admin as disabled");
                false
            }
        }
    }

    pub fn save_admin(&self, enabled: bool) -> Result<()> {
        self.backend
            .set(ADMIN_KEY, if enabled { "true" } else { "false" })?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Submission
    // -----------------------------------------------------------------------

    /// Validate and persist a new review.
    ///
    /// Rejects (and persists nothing) when the trimmed title is empty or the
    /// rating is outside 1–5. On success the record is stamped with a fresh
    /// id and the current time, appended, and the whole collection saved.
    pub fn submit(&self, input: ReviewInput) -> Result<ReviewRecord> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(ValidationError::new("title", "must not be empty").into());
        }
        if !(1..=5).contains(&input.rating) {
            return Err(ValidationError::new(
                "rating",
                format!("must be between 1 and 5, got {}", input.rating),
            )
            .into());
        }

        let record = ReviewRecord {
            id: ReviewId::generate(),
            title: title.to_string(),
            name: input.name.trim().to_string(),
            rating: input.rating,
            comments: input.comments.trim().to_string(),
            date: Utc::now(),
        };

        let mut collection = self.load();
        collection.push(record.clone());
        self.save(&collection)?;
        Ok(record)
    }
}

// ============================================================================
// Tests
// ============================================================================
