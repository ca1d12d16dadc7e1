//! Controllers for the catalog views.
//!
//! Each controller owns its list state, its pending-operation markers and its
//! notification slot. Presentation layers drive them with commands and read
//! state back through snapshots.

pub mod filter;
pub mod form;
pub mod notification;
pub mod pending;
pub mod portfolio;
pub mod projects;
pub mod saved;
pub mod state;

#[cfg(test)]
pub(crate) mod fake;

use crate::error::CatalogError;
use crate::types::ProjectId;

pub use filter::{Searchable, filter_items};
pub use form::ProjectForm;
pub use notification::{Notification, NotificationChannel, NotificationLevel};
pub use pending::{OperationKind, PendingGuard, PendingOperationTracker};
pub use portfolio::PortfolioView;
pub use projects::{ProjectCommand, ProjectListController};
pub use saved::{SavedCommand, SavedListController};
pub use state::{ListState, LoadPhase};

/// User-facing texts
pub mod messages {
    pub const PROJECTS_LOAD_FAILED: &str =
        "Failed to fetch projects. Please check the API endpoint and server status.";
    pub const SAVED_LOAD_FAILED: &str = "Failed to fetch saved projects.";
    pub const PORTFOLIO_LOAD_FAILED: &str = "Failed to fetch projects.";

    pub const PROJECT_SAVED: &str = "Project saved successfully!";
    pub const SAVE_FAILED: &str = "Failed to save project";
    pub const PROJECT_DELETED: &str = "Project deleted successfully!";
    pub const DELETE_FAILED: &str = "Failed to delete project";
    pub const SAVED_DELETE_FAILED: &str = "Failed to delete the project.";
    pub const PROJECT_ADDED: &str = "Project added successfully!";
    pub const ADD_FAILED: &str = "Failed to add project";
}

/// Result of one controller command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    Succeeded(String),
    Failed(String),
    /// The same record and operation is already in flight; nothing was sent
    AlreadyPending(OperationKind),
    NotFound(ProjectId),
}

impl OperationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, OperationOutcome::Succeeded(_))
    }

    pub fn message(&self) -> String {
        match self {
            OperationOutcome::Succeeded(message) | OperationOutcome::Failed(message) => {
                message.clone()
            }
            OperationOutcome::AlreadyPending(kind) => {
                CatalogError::OperationInProgress(kind.to_string()).to_string()
            }
            OperationOutcome::NotFound(id) => CatalogError::ProjectNotFound(*id).to_string(),
        }
    }
}
