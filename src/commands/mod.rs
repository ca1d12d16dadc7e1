mod config;
mod create;
mod portfolio;
mod projects;
mod saved;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use create::{CreateOptions, cmd_create};
pub use portfolio::cmd_portfolio;
pub use projects::{cmd_delete, cmd_ls, cmd_save};
pub use saved::{cmd_saved_delete, cmd_saved_ls};

use serde::Serialize;
use serde_json::json;

use crate::cli::OutputOptions;
use crate::config::Config;
use crate::controller::{NotificationChannel, OperationOutcome};
use crate::display::format_outcome_line;
use crate::error::{CatalogError, Result};
use crate::remote::http::HttpCollectionClient;
use crate::types::ProjectId;

/// Print a value as pretty JSON
pub fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Command result that prints as JSON or as text depending on output options
pub struct CommandOutput {
    json: serde_json::Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: serde_json::Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn print(self, output: OutputOptions) -> Result<()> {
        match self.text {
            Some(text) if !output.json => {
                println!("{text}");
                Ok(())
            }
            _ => print_json(&self.json),
        }
    }
}

/// Build a client and notification channel from the loaded configuration
pub(crate) fn connect() -> Result<(HttpCollectionClient, NotificationChannel)> {
    let config = Config::load()?;
    let client = HttpCollectionClient::from_config(&config)?;
    tracing::debug!("using catalog at {}", client.base_url());
    let notifications = NotificationChannel::with_dismiss_after(config.dismiss_after());
    Ok((client, notifications))
}

/// Turn a failed initial load into a command error
pub(crate) fn require_loaded(outcome: OperationOutcome) -> Result<()> {
    match outcome {
        OperationOutcome::Succeeded(_) => Ok(()),
        other => Err(CatalogError::InitialLoad(other.message())),
    }
}

/// Print one line (or one JSON entry) per operation and fail if any of them did
pub(crate) fn report_outcomes(
    results: &[(ProjectId, OperationOutcome)],
    json_output: bool,
) -> Result<()> {
    if json_output {
        let entries: Vec<_> = results
            .iter()
            .map(|(id, outcome)| {
                json!({
                    "id": id,
                    "success": outcome.is_success(),
                    "message": outcome.message(),
                })
            })
            .collect();
        print_json(&entries)?;
    } else {
        for (id, outcome) in results {
            println!("{}", format_outcome_line(*id, outcome));
        }
    }

    let failed = results.iter().filter(|(_, o)| !o.is_success()).count();
    if failed > 0 {
        return Err(CatalogError::OperationsFailed {
            failed,
            total: results.len(),
        });
    }
    Ok(())
}

/// Keep the order the user gave, dropping repeats
pub(crate) fn unique_ids(ids: &[ProjectId]) -> Vec<ProjectId> {
    let mut seen = std::collections::HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}
