//! Create-project form

use parking_lot::Mutex;
use serde_json::Value;

use crate::error::{CatalogError, Result};
use crate::remote::{Collection, CollectionClient};
use crate::types::{NewProject, Project, ProjectField};

use super::messages;
use super::notification::NotificationChannel;

#[derive(Debug, Default)]
struct FormState {
    fields: NewProject,
    submitting: bool,
}

/// Clears the submitting flag on every exit path
struct Submitting<'a>(&'a Mutex<FormState>);

impl Drop for Submitting<'_> {
    fn drop(&mut self) {
        self.0.lock().submitting = false;
    }
}

/// Collects the five project fields and submits them as a new project
pub struct ProjectForm<C> {
    client: C,
    state: Mutex<FormState>,
    notifications: NotificationChannel,
}

impl<C: CollectionClient> ProjectForm<C> {
    pub fn new(client: C) -> Self {
        Self::with_notifications(client, NotificationChannel::new())
    }

    pub fn with_notifications(client: C, notifications: NotificationChannel) -> Self {
        Self {
            client,
            state: Mutex::new(FormState::default()),
            notifications,
        }
    }

    pub fn set_field(&self, field: ProjectField, value: impl Into<String>) {
        self.state.lock().fields.set(field, value);
    }

    pub fn fields(&self) -> NewProject {
        self.state.lock().fields.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.lock().submitting
    }

    pub fn reset(&self) {
        self.state.lock().fields = NewProject::default();
    }

    /// Validate and create the project.
    ///
    /// Any 2xx answer counts as created. The server's copy is returned when
    /// the body decodes as a project. On success every field is cleared; on
    /// failure the fields are kept so the user can retry.
    pub async fn submit(&self) -> Result<Option<Project>> {
        let payload = {
            let mut state = self.state.lock();
            if state.submitting {
                return Err(CatalogError::OperationInProgress("project submission".to_string()));
            }

            let missing = state.fields.missing_fields();
            if !missing.is_empty() {
                let message = format!("missing required fields: {}", missing.join(", "));
                self.notifications.error(message.clone());
                return Err(CatalogError::Validation(message));
            }

            state.submitting = true;
            state.fields.clone()
        };
        let _submitting = Submitting(&self.state);

        match self
            .client
            .create::<NewProject, Value>(Collection::Projects, &payload)
            .await
        {
            Ok(body) => {
                self.reset();
                let created = serde_json::from_value::<Project>(body).ok();
                match &created {
                    Some(project) => {
                        tracing::info!("created project {} ({})", project.id, project.title)
                    }
                    None => tracing::info!("created project {}", payload.title),
                }
                self.notifications.success(messages::PROJECT_ADDED);
                Ok(created)
            }
            Err(e) => {
                tracing::warn!("failed to create project: {e}");
                self.notifications.error(failure_message(&e));
                Err(e)
            }
        }
    }

    pub fn notifications(&self) -> &NotificationChannel {
        &self.notifications
    }
}

/// Server-provided reason when there is one, the generic text otherwise
fn failure_message(error: &CatalogError) -> String {
    match error {
        CatalogError::Transport { message, .. } => message.clone(),
        _ => messages::ADD_FAILED.to_string(),
    }
}
