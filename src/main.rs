use clap::Parser;
use std::process::ExitCode;

use catalog::cli::{Cli, Commands, ConfigAction, SavedAction};
use catalog::commands::{
    CreateOptions, cmd_config_get, cmd_config_set, cmd_config_show, cmd_create, cmd_delete,
    cmd_ls, cmd_portfolio, cmd_saved_delete, cmd_saved_ls, cmd_save,
};
use catalog::display::format_error;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let output = cli.output();

    let result = match cli.command {
        Commands::List { search } => cmd_ls(search.as_deref(), output).await,
        Commands::Save { ids } => cmd_save(&ids, output).await,
        Commands::Delete { ids } => cmd_delete(&ids, output).await,

        Commands::Saved { action } => match action {
            SavedAction::List => cmd_saved_ls(output).await,
            SavedAction::Delete { ids } => cmd_saved_delete(&ids, output).await,
        },

        Commands::Create {
            title,
            description,
            category,
            author,
            image_url,
        } => {
            cmd_create(
                CreateOptions {
                    title,
                    description,
                    category,
                    author,
                    image_url,
                },
                output,
            )
            .await
        }

        Commands::Portfolio => cmd_portfolio(output).await,

        // Configuration commands
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd_config_show(output),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value, output),
            ConfigAction::Get { key } => cmd_config_get(&key, output),
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}
