use futures::future::join_all;
use owo_colors::OwoColorize;

use super::{connect, print_json, report_outcomes, require_loaded, unique_ids};
use crate::cli::OutputOptions;
use crate::controller::SavedListController;
use crate::display::format_saved_table;
use crate::error::Result;
use crate::types::ProjectId;

pub async fn cmd_saved_ls(output: OutputOptions) -> Result<()> {
    let (client, notifications) = connect()?;
    let controller = SavedListController::with_notifications(client, notifications);
    require_loaded(controller.initialize().await)?;

    let saved = controller.items();
    if output.json {
        return print_json(&saved);
    }

    if saved.is_empty() {
        println!("No saved projects found.");
        return Ok(());
    }

    println!("{}", format_saved_table(&saved));
    println!("{}", format!("{} saved project(s)", saved.len()).dimmed());
    Ok(())
}

pub async fn cmd_saved_delete(ids: &[ProjectId], output: OutputOptions) -> Result<()> {
    let (client, notifications) = connect()?;
    let controller = SavedListController::with_notifications(client, notifications);
    require_loaded(controller.initialize().await)?;

    let ids = unique_ids(ids);
    let outcomes = join_all(ids.iter().map(|&id| controller.delete(id))).await;
    report_outcomes(&ids.into_iter().zip(outcomes).collect::<Vec<_>>(), output.json)
}
