use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::controller::{Notification, NotificationLevel, OperationOutcome};
use crate::types::{Project, ProjectId, SavedProject};

/// A row in the project list table
#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "ID")]
    id: ProjectId,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// A row in the saved project table
#[derive(Tabled)]
struct SavedRow {
    #[tabled(rename = "ID")]
    id: ProjectId,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Technologies")]
    technologies: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Link")]
    link: String,
}

const DESCRIPTION_WIDTH: usize = 48;

/// Shorten text to `max` characters, marking the cut with an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    let text = text.trim().replace('\n', " ");
    if text.chars().count() <= max {
        return text;
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

pub fn format_project_table(projects: &[Project]) -> String {
    let rows: Vec<ProjectRow> = projects
        .iter()
        .map(|p| ProjectRow {
            id: p.id,
            title: p.title.clone(),
            category: p.category.clone(),
            author: p.author.clone(),
            description: truncate(&p.description, DESCRIPTION_WIDTH),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

pub fn format_saved_table(saved: &[SavedProject]) -> String {
    let rows: Vec<SavedRow> = saved
        .iter()
        .map(|p| SavedRow {
            id: p.id,
            title: p.title.clone(),
            technologies: p.technologies.clone(),
            category: p.category.clone(),
            link: if p.link.is_empty() {
                "-".to_string()
            } else {
                p.link.clone()
            },
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// One line per finished operation, colored by result
pub fn format_outcome_line(id: ProjectId, outcome: &OperationOutcome) -> String {
    let id = format!("{id:>6}");
    match outcome {
        OperationOutcome::Succeeded(message) => format!("{} {}", id.dimmed(), message.green()),
        OperationOutcome::Failed(message) => format!("{} {}", id.dimmed(), message.red()),
        OperationOutcome::AlreadyPending(_) | OperationOutcome::NotFound(_) => {
            format!("{} {}", id.dimmed(), outcome.message().yellow())
        }
    }
}

pub fn format_notification(notification: &Notification) -> String {
    match notification.level {
        NotificationLevel::Success => notification.message.green().to_string(),
        NotificationLevel::Error => notification.message.red().to_string(),
    }
}

pub fn format_error(message: &str) -> String {
    format!("{} {}", "error:".red().bold(), message)
}
