//! Controller for the primary `projects` collection

use parking_lot::Mutex;
use serde::de::IgnoredAny;

use crate::remote::{Collection, CollectionClient};
use crate::types::{Project, ProjectId};

use super::messages;
use super::notification::NotificationChannel;
use super::pending::{OperationKind, PendingOperationTracker};
use super::state::ListState;
use super::OperationOutcome;

/// Commands accepted by [`ProjectListController::dispatch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectCommand {
    Initialize,
    Search(String),
    Save(ProjectId),
    Delete(ProjectId),
}

/// Fetches the project list, keeps the searchable view, and runs per-project
/// save/delete operations.
///
/// All methods take `&self`: operations on different projects may overlap.
/// The state lock is never held across a remote call, so each completion
/// lands as a single step.
pub struct ProjectListController<C> {
    client: C,
    state: Mutex<ListState<Project>>,
    pending: PendingOperationTracker,
    notifications: NotificationChannel,
}

impl<C: CollectionClient> ProjectListController<C> {
    pub fn new(client: C) -> Self {
        Self::with_notifications(client, NotificationChannel::new())
    }

    pub fn with_notifications(client: C, notifications: NotificationChannel) -> Self {
        Self {
            client,
            state: Mutex::new(ListState::searchable()),
            pending: PendingOperationTracker::new(),
            notifications,
        }
    }

    pub async fn dispatch(&self, command: ProjectCommand) -> OperationOutcome {
        match command {
            ProjectCommand::Initialize => self.initialize().await,
            ProjectCommand::Search(query) => {
                self.search(&query);
                OperationOutcome::Succeeded(format!(
                    "{} matching projects",
                    self.state.lock().filtered().len()
                ))
            }
            ProjectCommand::Save(id) => self.save_by_id(id).await,
            ProjectCommand::Delete(id) => self.delete(id).await,
        }
    }

    /// Fetch the collection. A failure is terminal for this controller.
    pub async fn initialize(&self) -> OperationOutcome {
        self.state.lock().begin_loading();

        match self.client.list::<Project>(Collection::Projects).await {
            Ok(projects) => {
                let count = projects.len();
                self.state.lock().loaded(projects);
                tracing::debug!("loaded {count} projects");
                OperationOutcome::Succeeded(format!("Loaded {count} projects"))
            }
            Err(e) => {
                tracing::warn!("failed to load projects: {e}");
                self.state.lock().load_failed(messages::PROJECTS_LOAD_FAILED);
                OperationOutcome::Failed(messages::PROJECTS_LOAD_FAILED.to_string())
            }
        }
    }

    pub fn search(&self, query: &str) {
        self.state.lock().apply_query(query);
    }

    /// Copy a project into the saved collection. The project list is untouched.
    pub async fn save(&self, project: &Project) -> OperationOutcome {
        let Some(_pending) = self.pending.begin(project.id, OperationKind::Save) else {
            tracing::debug!("save of project {} already in flight", project.id);
            return OperationOutcome::AlreadyPending(OperationKind::Save);
        };

        // The server reshapes saved records; the response body is not interpreted.
        match self
            .client
            .create::<Project, IgnoredAny>(Collection::Saved, project)
            .await
        {
            Ok(_) => {
                tracing::info!("saved project {}", project.id);
                self.notifications.success(messages::PROJECT_SAVED);
                OperationOutcome::Succeeded(messages::PROJECT_SAVED.to_string())
            }
            Err(e) => {
                tracing::warn!("failed to save project {}: {e}", project.id);
                self.notifications.error(messages::SAVE_FAILED);
                OperationOutcome::Failed(messages::SAVE_FAILED.to_string())
            }
        }
    }

    /// Save a project from the loaded list by id
    pub async fn save_by_id(&self, id: ProjectId) -> OperationOutcome {
        match self.find(id) {
            Some(project) => self.save(&project).await,
            None => OperationOutcome::NotFound(id),
        }
    }

    /// Delete a project remotely, then drop it from every view of the list
    pub async fn delete(&self, id: ProjectId) -> OperationOutcome {
        let Some(_pending) = self.pending.begin(id, OperationKind::Delete) else {
            tracing::debug!("delete of project {id} already in flight");
            return OperationOutcome::AlreadyPending(OperationKind::Delete);
        };

        match self.client.remove(Collection::Projects, id).await {
            Ok(()) => {
                self.state.lock().remove(id);
                tracing::info!("deleted project {id}");
                self.notifications.success(messages::PROJECT_DELETED);
                OperationOutcome::Succeeded(messages::PROJECT_DELETED.to_string())
            }
            Err(e) => {
                tracing::warn!("failed to delete project {id}: {e}");
                self.notifications.error(messages::DELETE_FAILED);
                OperationOutcome::Failed(messages::DELETE_FAILED.to_string())
            }
        }
    }

    pub fn snapshot(&self) -> ListState<Project> {
        self.state.lock().clone()
    }

    pub fn find(&self, id: ProjectId) -> Option<Project> {
        self.state.lock().find(id).cloned()
    }

    pub fn is_pending(&self, id: ProjectId, kind: OperationKind) -> bool {
        self.pending.is_pending(id, kind)
    }

    pub fn notifications(&self) -> &NotificationChannel {
        &self.notifications
    }
}
