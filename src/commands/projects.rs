use futures::future::join_all;
use owo_colors::OwoColorize;

use super::{connect, print_json, report_outcomes, require_loaded, unique_ids};
use crate::cli::OutputOptions;
use crate::controller::ProjectListController;
use crate::display::format_project_table;
use crate::error::Result;
use crate::types::ProjectId;

/// List projects, narrowed by an optional search term
pub async fn cmd_ls(search: Option<&str>, output: OutputOptions) -> Result<()> {
    let (client, notifications) = connect()?;
    let controller = ProjectListController::with_notifications(client, notifications);
    require_loaded(controller.initialize().await)?;

    if let Some(query) = search {
        controller.search(query);
    }
    let state = controller.snapshot();

    if output.json {
        return print_json(&state.filtered());
    }

    if state.filtered().is_empty() {
        if state.query().is_empty() {
            println!("No projects found.");
        } else {
            println!("No projects match '{}'.", state.query());
        }
        return Ok(());
    }

    println!("{}", format_project_table(state.filtered()));
    let total = state.items().len();
    let shown = state.filtered().len();
    if shown == total {
        println!("{}", format!("{total} project(s)").dimmed());
    } else {
        println!("{}", format!("{shown} of {total} project(s)").dimmed());
    }
    Ok(())
}

/// Save each listed project; the saves run concurrently
pub async fn cmd_save(ids: &[ProjectId], output: OutputOptions) -> Result<()> {
    let (client, notifications) = connect()?;
    let controller = ProjectListController::with_notifications(client, notifications);
    require_loaded(controller.initialize().await)?;

    let ids = unique_ids(ids);
    let outcomes = join_all(ids.iter().map(|&id| controller.save_by_id(id))).await;
    report_outcomes(&ids.into_iter().zip(outcomes).collect::<Vec<_>>(), output.json)
}

/// Delete each listed project; the deletes run concurrently
pub async fn cmd_delete(ids: &[ProjectId], output: OutputOptions) -> Result<()> {
    let (client, notifications) = connect()?;
    let controller = ProjectListController::with_notifications(client, notifications);
    require_loaded(controller.initialize().await)?;

    let ids = unique_ids(ids);
    let outcomes = join_all(ids.iter().map(|&id| controller.delete(id))).await;
    let results: Vec<_> = ids.into_iter().zip(outcomes).collect();
    tracing::debug!(
        "{} projects remain after delete",
        controller.snapshot().items().len()
    );
    report_outcomes(&results, output.json)
}
