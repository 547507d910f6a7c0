//! Session persistence for the quote draft.
//!
//! The draft and its handoff snapshot live in a per-visitor key-value slot
//! (the cookie session in the running application). The pending snapshot is
//! a single-slot, at-most-once channel: it is written right before the
//! redirect to authentication and removed from the slot the moment it is
//! read back, whether or not its content is usable.

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::domain::quote::{PendingQuoteSnapshot, QuoteDraft};

pub const DRAFT_KEY: &str = "quote_draft";
pub const PENDING_QUOTE_KEY: &str = "pending_quote";
pub const SUBMIT_TOKEN_KEY: &str = "quote_submit_token";

/// Single-slot string store scoped to one visitor session.
pub trait SessionSlot {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: String);
    fn delete(&self, key: &str);
}

/// Loads the working draft, falling back to an empty one when the slot is
/// empty or holds content that no longer deserializes.
pub fn load_draft(slot: &impl SessionSlot) -> QuoteDraft {
    slot.read(DRAFT_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Stores the working draft back into the session.
pub fn store_draft(slot: &impl SessionSlot, draft: &QuoteDraft) {
    match serde_json::to_string(draft) {
        Ok(raw) => slot.write(DRAFT_KEY, raw),
        Err(e) => log::error!("Failed to serialize quote draft: {e}"),
    }
}

/// Serializes the draft plus its derived total right before the redirect to
/// authentication.
pub fn stash_pending(
    slot: &impl SessionSlot,
    draft: &QuoteDraft,
    estimate: f64,
    saved_at: NaiveDateTime,
) {
    let snapshot = PendingQuoteSnapshot {
        draft: draft.clone(),
        estimate,
        saved_at,
    };
    match serde_json::to_string(&snapshot) {
        Ok(raw) => slot.write(PENDING_QUOTE_KEY, raw),
        Err(e) => log::error!("Failed to serialize pending quote snapshot: {e}"),
    }
}

/// Consumes the pending snapshot, read-then-delete. Returns `None` both when
/// no snapshot was stored and when the stored value fails to deserialize;
/// corrupt content is discarded silently so the screen still initializes.
pub fn take_pending(slot: &impl SessionSlot) -> Option<PendingQuoteSnapshot> {
    let raw = slot.read(PENDING_QUOTE_KEY)?;
    slot.delete(PENDING_QUOTE_KEY);

    match serde_json::from_str(&raw) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            log::warn!("Discarding unreadable pending quote snapshot: {e}");
            None
        }
    }
}

/// Issues the one-shot token embedded in the submit form. A conversion
/// attempt is only honored while its token is still the current one.
pub fn issue_submit_token(slot: &impl SessionSlot) -> String {
    let token = Uuid::new_v4().to_string();
    slot.write(SUBMIT_TOKEN_KEY, token.clone());
    token
}

/// Consumes the submit token, read-then-delete. A stale or replayed
/// submission presents a token that no longer matches and is ignored.
pub fn consume_submit_token(slot: &impl SessionSlot, presented: &str) -> bool {
    let Some(current) = slot.read(SUBMIT_TOKEN_KEY) else {
        return false;
    };
    slot.delete(SUBMIT_TOKEN_KEY);
    current == presented
}
