//! Controller for the secondary `saved` collection

use parking_lot::Mutex;

use crate::remote::{Collection, CollectionClient};
use crate::types::{ProjectId, SavedProject};

use super::OperationOutcome;
use super::messages;
use super::notification::NotificationChannel;
use super::pending::{OperationKind, PendingOperationTracker};
use super::state::ListState;

/// Commands accepted by [`SavedListController::dispatch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavedCommand {
    Initialize,
    Delete(ProjectId),
}

/// Fetches the saved list and deletes from it. There is no search, so the
/// displayed list is always the full list.
pub struct SavedListController<C> {
    client: C,
    state: Mutex<ListState<SavedProject>>,
    pending: PendingOperationTracker,
    notifications: NotificationChannel,
}

impl<C: CollectionClient> SavedListController<C> {
    pub fn new(client: C) -> Self {
        Self::with_notifications(client, NotificationChannel::new())
    }

    pub fn with_notifications(client: C, notifications: NotificationChannel) -> Self {
        Self {
            client,
            state: Mutex::new(ListState::new()),
            pending: PendingOperationTracker::new(),
            notifications,
        }
    }

    pub async fn dispatch(&self, command: SavedCommand) -> OperationOutcome {
        match command {
            SavedCommand::Initialize => self.initialize().await,
            SavedCommand::Delete(id) => self.delete(id).await,
        }
    }

    pub async fn initialize(&self) -> OperationOutcome {
        self.state.lock().begin_loading();

        match self.client.list::<SavedProject>(Collection::Saved).await {
            Ok(saved) => {
                let count = saved.len();
                self.state.lock().loaded(saved);
                tracing::debug!("loaded {count} saved projects");
                OperationOutcome::Succeeded(format!("Loaded {count} saved projects"))
            }
            Err(e) => {
                tracing::warn!("failed to load saved projects: {e}");
                self.state.lock().load_failed(messages::SAVED_LOAD_FAILED);
                OperationOutcome::Failed(messages::SAVED_LOAD_FAILED.to_string())
            }
        }
    }

    pub async fn delete(&self, id: ProjectId) -> OperationOutcome {
        let Some(_pending) = self.pending.begin(id, OperationKind::Delete) else {
            tracing::debug!("delete of saved project {id} already in flight");
            return OperationOutcome::AlreadyPending(OperationKind::Delete);
        };

        match self.client.remove(Collection::Saved, id).await {
            Ok(()) => {
                self.state.lock().remove(id);
                tracing::info!("deleted saved project {id}");
                self.notifications.success(messages::PROJECT_DELETED);
                OperationOutcome::Succeeded(messages::PROJECT_DELETED.to_string())
            }
            Err(e) => {
                tracing::warn!("failed to delete saved project {id}: {e}");
                self.notifications.error(messages::SAVED_DELETE_FAILED);
                OperationOutcome::Failed(messages::SAVED_DELETE_FAILED.to_string())
            }
        }
    }

    pub fn snapshot(&self) -> ListState<SavedProject> {
        self.state.lock().clone()
    }

    pub fn items(&self) -> Vec<SavedProject> {
        self.state.lock().items().to_vec()
    }

    pub fn is_pending(&self, id: ProjectId, kind: OperationKind) -> bool {
        self.pending.is_pending(id, kind)
    }

    pub fn notifications(&self) -> &NotificationChannel {
        &self.notifications
    }
}
