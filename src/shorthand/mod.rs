//! The shorthand resolver and the record it produces.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

mod resolver;

pub use resolver::resolve;

#[cfg(test)]
mod tests;


/// Shorthand token mapped to its expansion, e.g. `zw` => `zerowidth/dotfiles`.
pub type ShorthandTable = BTreeMap<String, String>;

/// A fully qualified GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repo {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub name: String,
}

impl Repo {
    /// Split an `owner/name` string on its first `/`. Returns `None` when there
    /// is no separator or either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (owner, name) = s
            .split_once('/')
            .filter(|(owner, name)| !owner.is_empty() && !name.is_empty())?;
        Some(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl std::fmt::Display for Repo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// What the leading part of the input resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Matched {
    /// Neither a shorthand nor a literal `owner/name` was found.
    #[default]
    Nothing,
    /// A key from the repo table expanded to a repository.
    RepoShorthand {
        /// The shorthand key that matched.
        key: String,
        /// The repository it expands to.
        repo: Repo,
    },
    /// A literal `owner/name` typed out in full.
    LiteralRepo(Repo),
    /// A key from the user table expanded to a user or organization.
    UserShorthand {
        /// The shorthand key that matched.
        key: String,
        /// The user it expands to.
        user: String,
    },
}

/// The trailing reference extracted from whatever followed the repo or user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Issue or pull request number, digits only.
    Issue(String),
    /// A path beginning with `/`, e.g. `/pulls`.
    Path(String),
}

/// The result of resolving one input string against the shorthand tables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    matched: Matched,
    fragment: Option<Fragment>,
    query: String,
}

impl Resolution {
    /// What the leading part of the input matched.
    #[must_use]
    pub const fn matched(&self) -> &Matched {
        &self.matched
    }

    /// The extracted issue or path, if any.
    #[must_use]
    pub const fn fragment(&self) -> Option<&Fragment> {
        self.fragment.as_ref()
    }

    /// The repository, from either a repo shorthand or a literal `owner/name`.
    #[must_use]
    pub const fn repo(&self) -> Option<&Repo> {
        match &self.matched {
            Matched::RepoShorthand { repo, .. } | Matched::LiteralRepo(repo) => Some(repo),
            Matched::Nothing | Matched::UserShorthand { .. } => None,
        }
    }

    /// Repository owner, empty unless a full repository was resolved.
    #[must_use]
    pub fn owner(&self) -> &str {
        self.repo().map_or("", |r| r.owner.as_str())
    }

    /// Repository name, empty unless a full repository was resolved.
    #[must_use]
    pub fn name(&self) -> &str {
        self.repo().map_or("", |r| r.name.as_str())
    }

    /// The user a user shorthand expanded to, or empty.
    #[must_use]
    pub fn user(&self) -> &str {
        match &self.matched {
            Matched::UserShorthand { user, .. } => user,
            _ => "",
        }
    }

    /// The repo shorthand key that matched, or empty.
    #[must_use]
    pub fn repo_match(&self) -> &str {
        match &self.matched {
            Matched::RepoShorthand { key, .. } => key,
            _ => "",
        }
    }

    /// The user shorthand key that matched, or empty.
    #[must_use]
    pub fn user_match(&self) -> &str {
        match &self.matched {
            Matched::UserShorthand { key, .. } => key,
            _ => "",
        }
    }

    /// Issue number, or empty.
    #[must_use]
    pub fn issue(&self) -> &str {
        match &self.fragment {
            Some(Fragment::Issue(issue)) => issue,
            _ => "",
        }
    }

    /// Path fragment beginning with `/`, or empty.
    #[must_use]
    pub fn path(&self) -> &str {
        match &self.fragment {
            Some(Fragment::Path(path)) => path,
            _ => "",
        }
    }

    /// Input left over after every extraction step.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Display suffix naming the matched shorthand, e.g. `" (zw#5)"` or
    /// `" (gh)"`. Empty when no shorthand was used.
    #[must_use]
    pub fn annotation(&self) -> String {
        match &self.matched {
            Matched::RepoShorthand { key, .. } => match &self.fragment {
                Some(Fragment::Issue(issue)) => format!(" ({key}#{issue})"),
                _ => format!(" ({key})"),
            },
            Matched::UserShorthand { key, .. } => format!(" ({key})"),
            Matched::Nothing | Matched::LiteralRepo(_) => String::new(),
        }
    }

    /// Like [`annotation`](Self::annotation) but never mentions the issue.
    #[must_use]
    pub fn repo_annotation(&self) -> String {
        match &self.matched {
            Matched::RepoShorthand { key, .. } | Matched::UserShorthand { key, .. } => {
                format!(" ({key})")
            }
            Matched::Nothing | Matched::LiteralRepo(_) => String::new(),
        }
    }
}

/// Flat wire shape, one string per field, empty when absent.
#[derive(Serialize)]
struct Flat<'a> {
    owner: &'a str,
    name: &'a str,
    user: &'a str,
    repo_match: &'a str,
    user_match: &'a str,
    issue: &'a str,
    path: &'a str,
    query: &'a str,
    annotation: String,
}

impl Serialize for Resolution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Flat {
            owner: self.owner(),
            name: self.name(),
            user: self.user(),
            repo_match: self.repo_match(),
            user_match: self.user_match(),
            issue: self.issue(),
            path: self.path(),
            query: self.query(),
            annotation: self.annotation(),
        }
        .serialize(serializer)
    }
}
