use std::path::Path;

use anyhow::Result;
use clap::Subcommand;
use gh_shorthand::config::Config;

use super::config_path;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write an empty configuration to disk
    Init,
    /// Set a shorthand (e.g. repos.zw "zerowidth/dotfiles"); an empty value removes it
    Set { key: String, value: String },
    /// Get a shorthand's expansion (e.g. users.gh)
    Get { key: String },
}

pub fn cmd_config(explicit: Option<&Path>, action: ConfigAction) -> Result<()> {
    let path = config_path(explicit)?;
    match action {
        ConfigAction::Show => {
            let config = Config::load_from(&path)?;
            let pretty = toml::to_string_pretty(&config)?;
            print!("{pretty}");
        }
        ConfigAction::Path => {
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            Config::init_at(&path)?;
            println!("Wrote default config to {}", path.display());
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_from(&path)?;
            config.set_value(&key, &value)?;
            config.save_to(&path)?;
            println!("Set {key} = {value}");
        }
        ConfigAction::Get { key } => {
            let config = Config::load_from(&path)?;
            println!("{}", config.get_value(&key)?);
        }
    }
    Ok(())
}
