//! AdminGate — the shared-secret capability toggle.
//!
//! A search submission is intercepted before the normal search runs: the two
//! fixed phrases flip the persisted flag and swallow the search, everything
//! else falls through untouched. The flag gates only the rendering of
//! mutation controls and the mutation controller's willingness to act — it is
//! not an authentication mechanism, and anyone with access to the durable
//! store can set it directly.

use crate::error::Result;
use crate::store::{KvBackend, ReviewStore};

/// Phrase that turns admin mode on.
pub const ADMIN_PHRASE: &str = "iamadmin";

/// Phrase that turns admin mode off.
pub const ADMIN_EXIT_PHRASE: &str = "exitadmin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Normal,
    Admin,
}

/// What the caller should do with a search submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Flag persisted on; do not perform the search.
    AdminEnabled,
    /// Flag persisted off; do not perform the search.
    AdminDisabled,
    /// Ordinary input — run the search with this trimmed query.
    Search(String),
}

/// Current gate state as persisted in the store.
pub fn gate_state<B: KvBackend>(store: &ReviewStore<B>) -> GateState {
    if store.load_admin() {
        GateState::Admin
    } else {
        GateState::Normal
    }
}

/// Intercept a search submission. Matching is on the trimmed, lower-cased
/// input; both transitions persist immediately. No other input value ever
/// changes state.
pub fn handle_search_input<B: KvBackend>(
    store: &ReviewStore<B>,
    raw: &str,
) -> Result<SearchOutcome> {
    let normalized = raw.trim().to_lowercase();
    if normalized == ADMIN_PHRASE {
        store.save_admin(true)?;
        return Ok(SearchOutcome::AdminEnabled);
    }
    if normalized == ADMIN_EXIT_PHRASE {
        store.save_admin(false)?;
        return Ok(SearchOutcome::AdminDisabled);
    }
    Ok(SearchOutcome::Search(raw.trim().to_string()))
}

// ============================================================================
// Tests
// ============================================================================
