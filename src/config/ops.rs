use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use super::Config;
use crate::shorthand::{resolve, Repo, Resolution, ShorthandTable};

impl Config {
    /// Default location: `~/.config/gh-shorthand/config.toml`.
    ///
    /// # Errors
    ///
    /// Fails if the home directory cannot be determined.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;
        Ok(home.join(".config").join("gh-shorthand").join("config.toml"))
    }

    /// Load from the default location.
    ///
    /// # Errors
    ///
    /// See [`Config::load_from`].
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`. A missing file yields the empty default config.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        for (key, value) in config.malformed_repos() {
            tracing::warn!("repos.{key} = {value:?} is not owner/name and will never match");
        }
        Ok(config)
    }

    /// Save to the default location.
    ///
    /// # Errors
    ///
    /// See [`Config::save_to`].
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Write to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Fails if the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Write an empty config to `path`, refusing to replace an existing file.
    ///
    /// # Errors
    ///
    /// Fails if `path` already exists or cannot be written.
    pub fn init_at(path: &Path) -> Result<Self> {
        if path.exists() {
            bail!("Config already exists at {}", path.display());
        }
        let config = Self::default();
        config.save_to(path)?;
        Ok(config)
    }

    /// Resolve `input` against this config's tables.
    #[must_use]
    pub fn resolve(&self, input: &str) -> Resolution {
        resolve(&self.repos, &self.users, input)
    }

    /// Repo entries whose value is not a non-empty `owner/name`.
    pub fn malformed_repos(&self) -> impl Iterator<Item = (&str, &str)> {
        self.repos
            .iter()
            .filter(|(_, value)| Repo::parse(value).is_none())
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Get a config value by dotted key, e.g. `repos.zw`
    ///
    /// # Errors
    ///
    /// Fails on an unknown table or a shorthand that is not defined.
    pub fn get_value(&self, key: &str) -> Result<String> {
        let (table, shorthand) = self.table(key)?;
        table
            .get(shorthand)
            .cloned()
            .with_context(|| format!("No shorthand defined for {key}"))
    }

    /// Set a config value by dotted key. An empty value removes the entry.
    ///
    /// # Errors
    ///
    /// Fails on an unknown table, a shorthand containing whitespace, or a repo
    /// value that is not `owner/name`.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let (table_name, shorthand) = split_key(key)?;
        if shorthand.is_empty() || shorthand.contains(char::is_whitespace) {
            bail!("Invalid shorthand {shorthand:?}: must be non-empty with no whitespace");
        }
        let table = if table_name == "repos" {
            if !value.is_empty() && Repo::parse(value).is_none() {
                bail!("Invalid repo {value:?}: expected owner/name");
            }
            &mut self.repos
        } else {
            &mut self.users
        };
        if value.is_empty() {
            table.remove(shorthand);
        } else {
            table.insert(shorthand.to_string(), value.to_string());
        }
        Ok(())
    }

    fn table<'a>(&self, key: &'a str) -> Result<(&ShorthandTable, &'a str)> {
        let (table_name, shorthand) = split_key(key)?;
        let table = if table_name == "repos" { &self.repos } else { &self.users };
        Ok((table, shorthand))
    }
}

fn split_key(key: &str) -> Result<(&str, &str)> {
    match key.split_once('.') {
        Some((table @ ("repos" | "users"), shorthand)) => Ok((table, shorthand)),
        _ => bail!("Unknown config key: {key} (expected repos.<shorthand> or users.<shorthand>)"),
    }
}
