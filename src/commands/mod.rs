pub mod config;
pub mod resolve;

use std::path::{Path, PathBuf};

use anyhow::Result;
use gh_shorthand::config::Config;

/// The config file in effect: the `--config` override or the default path.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    explicit.map_or_else(Config::path, |p| Ok(p.to_path_buf()))
}
