use serde_json::json;

use super::{connect, print_json};
use crate::cli::OutputOptions;
use crate::controller::ProjectForm;
use crate::display::format_notification;
use crate::error::Result;
use crate::types::ProjectField;

/// Field values for a new project
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    pub title: String,
    pub description: String,
    pub category: String,
    pub author: String,
    pub image_url: String,
}

impl CreateOptions {
    fn fields(&self) -> [(ProjectField, &str); 5] {
        [
            (ProjectField::Title, self.title.as_str()),
            (ProjectField::Description, self.description.as_str()),
            (ProjectField::Category, self.category.as_str()),
            (ProjectField::Author, self.author.as_str()),
            (ProjectField::ImageUrl, self.image_url.as_str()),
        ]
    }
}

/// Create a project and print its ID when the server returns one
pub async fn cmd_create(options: CreateOptions, output: OutputOptions) -> Result<()> {
    let (client, notifications) = connect()?;
    let form = ProjectForm::with_notifications(client, notifications);
    for (field, value) in options.fields() {
        form.set_field(field, value);
    }

    let created = form.submit().await?;

    if output.json {
        print_json(&json!({
            "project": created,
            "message": form.notifications().message(),
        }))?;
    } else {
        if let Some(notification) = form.notifications().current() {
            println!("{}", format_notification(&notification));
        }
        if let Some(project) = created {
            println!("{}", project.id);
        }
    }
    Ok(())
}
