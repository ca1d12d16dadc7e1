//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config set`: Set a configuration value
//! - `config get`: Print a single value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::cli::OutputOptions;
use crate::config::{BASE_URL_ENV, Config, VALID_KEYS};
use crate::error::{CatalogError, Result};

/// Reject unknown keys, pointing underscore spellings at their dotted form
fn validate_config_key(key: &str) -> Result<&str> {
    if VALID_KEYS.contains(&key) {
        return Ok(key);
    }

    if let Some(pos) = key.find('_') {
        let dot_version = format!("{}.{}", &key[..pos], &key[pos + 1..]);
        if VALID_KEYS.contains(&dot_version.as_str()) {
            return Err(CatalogError::Config(format!(
                "invalid config key '{key}'. Use dot notation: '{dot_version}'"
            )));
        }
    }

    Err(CatalogError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        VALID_KEYS.join(", ")
    )))
}

/// Where the effective base URL comes from
fn base_url_source() -> &'static str {
    match std::env::var(BASE_URL_ENV) {
        Ok(value) if !value.is_empty() => "environment",
        _ => "config",
    }
}

/// Show current configuration
pub fn cmd_config_show(output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let effective = config.base_url()?;
    let source = base_url_source();

    let json_output = json!({
        "api": {
            "base_url": config.api.base_url,
            "effective_base_url": effective.as_str(),
            "source": source,
        },
        "notification": {
            "dismiss_after_ms": config.notification.dismiss_after_ms,
        },
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));

    text_output.push_str(&format!("{}:\n", "api".cyan()));
    text_output.push_str(&format!("  base_url: {}\n", config.api.base_url));
    if source == "environment" {
        text_output.push_str(&format!(
            "  {}\n",
            format!("overridden by {BASE_URL_ENV}: {effective}").yellow()
        ));
    }

    text_output.push('\n');
    text_output.push_str(&format!("{}:\n", "notification".cyan()));
    text_output.push_str(&format!(
        "  dismiss_after_ms: {}\n",
        config.notification.dismiss_after_ms
    ));

    text_output.push('\n');
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", Config::config_path().display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output: OutputOptions) -> Result<()> {
    validate_config_key(key)?;

    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    let stored = config.get(key)?;

    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": stored,
        "success": true,
    }))
    .with_text(format!("Set {} to {}", key.cyan(), stored))
    .print(output)
}

/// Get a specific configuration value
pub fn cmd_config_get(key: &str, output: OutputOptions) -> Result<()> {
    validate_config_key(key)?;

    let config = Config::load()?;
    let value = config.get(key)?;

    CommandOutput::new(json!({
        "key": key,
        "value": value,
    }))
    .with_text(value)
    .print(output)
}
