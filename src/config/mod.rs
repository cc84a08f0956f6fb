//! Shorthand tables and their on-disk TOML file.

mod ops;


use serde::{Deserialize, Serialize};

use crate::shorthand::ShorthandTable;

/// Shorthand tables loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Repo shorthand, e.g. `zw = "zerowidth/dotfiles"`.
    pub repos: ShorthandTable,
    /// User shorthand, e.g. `gh = "github"`.
    pub users: ShorthandTable,
}
