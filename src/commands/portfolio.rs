use owo_colors::OwoColorize;

use super::{connect, print_json, require_loaded};
use crate::cli::OutputOptions;
use crate::controller::PortfolioView;
use crate::error::Result;

/// Print every project as a card: title, author, category, description
pub async fn cmd_portfolio(output: OutputOptions) -> Result<()> {
    let (client, _) = connect()?;
    let view = PortfolioView::new(client);
    require_loaded(view.initialize().await)?;

    let state = view.snapshot();
    if output.json {
        return print_json(&state.items());
    }

    if state.items().is_empty() {
        println!("No projects found.");
        return Ok(());
    }

    for project in state.items() {
        println!("{}", project.title.bold());
        println!(
            "  {} {}  {} {}",
            "by".dimmed(),
            project.author.cyan(),
            "in".dimmed(),
            project.category.yellow()
        );
        if !project.description.is_empty() {
            println!("  {}", project.description);
        }
        if !project.image_url.is_empty() {
            println!("  {}", project.image_url.dimmed());
        }
        println!();
    }
    Ok(())
}
