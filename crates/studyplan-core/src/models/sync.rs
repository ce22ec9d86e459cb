//! Per-day synchronization status for optimistic updates.

use serde::{Deserialize, Serialize};

/// Where a day stands relative to the last state the store confirmed.
///
/// ```text
///   Synced ──begin──▶ PendingConfirm ──store ok──▶ Synced
///                          │
///                          └──store failed──▶ RollbackPending ──restore──▶ Synced
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DaySyncState {
    /// Local state matches what the store holds
    #[default]
    Synced,

    /// An optimistic change is waiting on the store
    PendingConfirm,

    /// The store rejected the change and the day is being restored
    RollbackPending,
}

impl DaySyncState {
    /// Stable string form used in logs and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            DaySyncState::Synced => "synced",
            DaySyncState::PendingConfirm => "pending_confirm",
            DaySyncState::RollbackPending => "rollback_pending",
        }
    }

    /// Whether a toggle for the day is in flight.
    pub fn is_busy(&self) -> bool {
        !matches!(self, DaySyncState::Synced)
    }
}
