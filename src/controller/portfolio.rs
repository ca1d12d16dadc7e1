//! Read-only portfolio of the project collection

use parking_lot::Mutex;

use crate::remote::{Collection, CollectionClient};
use crate::types::Project;

use super::OperationOutcome;
use super::messages;
use super::state::ListState;

pub struct PortfolioView<C> {
    client: C,
    state: Mutex<ListState<Project>>,
}

impl<C: CollectionClient> PortfolioView<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: Mutex::new(ListState::new()),
        }
    }

    pub async fn initialize(&self) -> OperationOutcome {
        self.state.lock().begin_loading();

        match self.client.list::<Project>(Collection::Projects).await {
            Ok(projects) => {
                let count = projects.len();
                self.state.lock().loaded(projects);
                OperationOutcome::Succeeded(format!("Loaded {count} projects"))
            }
            Err(e) => {
                tracing::warn!("failed to load portfolio: {e}");
                self.state.lock().load_failed(messages::PORTFOLIO_LOAD_FAILED);
                OperationOutcome::Failed(messages::PORTFOLIO_LOAD_FAILED.to_string())
            }
        }
    }

    pub fn snapshot(&self) -> ListState<Project> {
        self.state.lock().clone()
    }
}
