//! MutationController — admin-gated edit/delete of a single review.
//!
//! Every operation reloads the collection from the store, resolves the target
//! by its stable `ReviewId`, and persists the full collection before
//! returning. Resolving by id means a record deleted out from under a stale
//! view fails with `NotFound` instead of silently mutating whichever record
//! shifted into its old position.

use crate::error::{AuthError, MutationError, Result, ValidationError};
use crate::store::{KvBackend, ReviewStore};
use crate::types::{ReviewId, ReviewRecord};

pub struct MutationController<'a, B: KvBackend> {
    store: &'a ReviewStore<B>,
}

impl<'a, B: KvBackend> MutationController<'a, B> {
    pub fn new(store: &'a ReviewStore<B>) -> Self {
        Self { store }
    }

    fn require_admin(&self) -> Result<()> {
        if self.store.load_admin() {
            Ok(())
        } else {
            Err(AuthError::NotAdmin.into())
        }
    }

    /// Remove the identified review and persist. Callers must re-render from
    /// the freshly persisted collection, not a pre-delete view.
    pub fn delete(&self, id: &ReviewId) -> Result<()> {
        self.require_admin()?;
        let mut collection = self.store.load();
        collection
            .remove(id)
            .ok_or_else(|| MutationError::NotFound { id: id.clone() })?;
        self.store.save(&collection)?;
        Ok(())
    }

    /// Replace rating and comments on the identified review in place.
    /// Title, name, date, and id never change. Returns the updated record.
    pub fn edit(&self, id: &ReviewId, new_rating: u8, new_comments: &str) -> Result<ReviewRecord> {
        self.require_admin()?;
        if !(1..=5).contains(&new_rating) {
            return Err(ValidationError::new(
                "rating",
                format!("must be between 1 and 5, got {new_rating}"),
            )
            .into());
        }
        let mut collection = self.store.load();
        let record = collection
            .get_mut(id)
            .ok_or_else(|| MutationError::NotFound { id: id.clone() })?;
        record.rating = new_rating;
        record.comments = new_comments.trim().to_string();
        let updated = record.clone();
        self.store.save(&collection)?;
        Ok(updated)
    }
}

// ============================================================================
// Tests
// ============================================================================
