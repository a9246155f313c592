use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

/// A contact target for finished runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendant {
    pub id: String,
    pub name: String,
    pub contact_address: String,
    pub priority: i32,
    pub is_active: bool,
}

/// What the caller needs to build an outbound contact link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactHandoff {
    pub attendant_id: String,
    pub contact_address: String,
}

/// Process-wide round-robin pointer over the active roster.
///
/// The pointer is advanced with a relaxed atomic increment: the counter is
/// never torn, but concurrent completions may still be handed the same
/// attendant. Best-effort fairness, no exclusivity guarantee — acceptable
/// because the downstream contact is human-mediated. Callers that need
/// strict fairness must serialize around the roster instead.
#[derive(Debug, Default)]
pub struct RotationState {
    pointer: AtomicUsize,
}

impl RotationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the next active attendant in ascending priority order
    /// (authored order breaks ties), or `None` when the roster has no active
    /// entries — the caller must provide the fallback contact path.
    pub fn next(&self, attendants: &[Attendant]) -> Option<ContactHandoff> {
        let active: Vec<&Attendant> = attendants
            .iter()
            .filter(|attendant| attendant.is_active)
            .sorted_by_key(|attendant| attendant.priority)
            .collect();
        if active.is_empty() {
            return None;
        }
        let index = self.pointer.fetch_add(1, Ordering::Relaxed) % active.len();
        let attendant = active[index];
        Some(ContactHandoff {
            attendant_id: attendant.id.clone(),
            contact_address: attendant.contact_address.clone(),
        })
    }
}
