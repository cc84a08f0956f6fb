use std::path::Path;

use anyhow::{Context, Result};
use gh_shorthand::{alfred, config::Config, Resolution};

fn load_and_resolve(config_path: Option<&Path>, input: &str) -> Result<Resolution> {
    tracing::debug!(input = ?input, "resolving");
    let config = Config::load_from(&super::config_path(config_path)?)?;
    let resolution = config.resolve(input);
    tracing::debug!(?resolution, "resolved");
    Ok(resolution)
}

pub fn cmd_resolve(config_path: Option<&Path>, input: &str) -> Result<()> {
    let resolution = load_and_resolve(config_path, input)?;
    let json = serde_json::to_string(&resolution).context("Failed to serialize resolution")?;
    println!("{json}");
    Ok(())
}

pub fn cmd_items(config_path: Option<&Path>, input: &str) -> Result<()> {
    let resolution = load_and_resolve(config_path, input)?;
    let items = alfred::items_for(&resolution)?;
    let json = serde_json::to_string(&items).context("Failed to serialize items")?;
    println!("{json}");
    Ok(())
}
