//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up palsav CLI defaults.

use crate::config::Config;
use anyhow::Result;

/// Handle the configure command
pub fn handle(request_url: Option<String>, token: Option<String>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config)?;
        return Ok(());
    }

    if request_url.is_none() && token.is_none() {
        show_usage();
        return Ok(());
    }

    if let Some(url) = request_url {
        config.request_url = Some(url);
    }
    if let Some(token) = token {
        config.token = Some(token);
    }
    config.save()?;

    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) -> Result<()> {
    match &config.request_url {
        Some(url) => println!("Push URL: {}", url),
        None => println!("No push URL configured"),
    }
    match &config.token {
        Some(_) => println!("Push token: <set>"),
        None => println!("No push token configured"),
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }

    Ok(())
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: palsav configure --request-url http://host/api/sync --token TOKEN");
    println!("   or: palsav configure --show");
    println!();
    println!("Note: configured values are the defaults for `palsav convert`'s");
    println!("      --request and --token flags.");
}
