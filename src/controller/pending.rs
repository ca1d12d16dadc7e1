//! In-flight markers for per-record operations

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::types::ProjectId;

/// Operations that can be in flight for a single record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Save,
    Delete,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Save => write!(f, "save"),
            OperationKind::Delete => write!(f, "delete"),
        }
    }
}

#[derive(Debug, Default)]
struct Entries {
    next_token: u64,
    active: HashMap<(ProjectId, OperationKind), u64>,
}

/// Tracks which `(record, operation)` pairs have an outstanding remote call.
///
/// At most one entry exists per pair. Different kinds for the same record are
/// independent of each other.
#[derive(Debug, Clone, Default)]
pub struct PendingOperationTracker {
    entries: Arc<Mutex<Entries>>,
}

impl PendingOperationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self, id: ProjectId, kind: OperationKind) -> bool {
        self.entries.lock().active.contains_key(&(id, kind))
    }

    /// Mark a pair as pending.
    ///
    /// Returns `None` when the pair is already pending. The returned guard
    /// clears the marker when dropped.
    pub fn begin(&self, id: ProjectId, kind: OperationKind) -> Option<PendingGuard> {
        let mut entries = self.entries.lock();
        if entries.active.contains_key(&(id, kind)) {
            return None;
        }

        entries.next_token += 1;
        let token = entries.next_token;
        entries.active.insert((id, kind), token);

        Some(PendingGuard {
            tracker: self.clone(),
            id,
            kind,
            token,
        })
    }

    /// Clear a pair regardless of which guard owns it
    pub fn end(&self, id: ProjectId, kind: OperationKind) {
        self.entries.lock().active.remove(&(id, kind));
    }

    fn release(&self, id: ProjectId, kind: OperationKind, token: u64) {
        let mut entries = self.entries.lock();
        if entries.active.get(&(id, kind)) == Some(&token) {
            entries.active.remove(&(id, kind));
        }
    }
}

/// Scoped pending marker, released on every exit path
#[must_use = "the operation stops being pending as soon as the guard is dropped"]
pub struct PendingGuard {
    tracker: PendingOperationTracker,
    id: ProjectId,
    kind: OperationKind,
    token: u64,
}

impl fmt::Debug for PendingGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingGuard")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .finish()
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.tracker.release(self.id, self.kind, self.token);
    }
}
