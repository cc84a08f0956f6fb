//! GitHub web URLs for resolved references.

use anyhow::{Context, Result};
use url::Url;

use crate::shorthand::Repo;

const GITHUB: &str = "https://github.com/";

fn github(relative: &str) -> Result<Url> {
    Url::parse(GITHUB)?
        .join(relative)
        .with_context(|| format!("Invalid GitHub path: {relative}"))
}

/// `https://github.com/owner/name`
///
/// # Errors
///
/// Fails if the owner or name cannot form a valid URL path.
pub fn repo_url(repo: &Repo) -> Result<Url> {
    github(&format!("{}/{}", repo.owner, repo.name))
}

/// `https://github.com/owner/name/issues/42`
///
/// # Errors
///
/// Fails if the owner or name cannot form a valid URL path.
pub fn issue_url(repo: &Repo, issue: &str) -> Result<Url> {
    github(&format!("{}/{}/issues/{issue}", repo.owner, repo.name))
}

/// Repository URL with a path fragment such as `/pulls` appended. Any query
/// string or anchor in the fragment is kept.
///
/// # Errors
///
/// Fails if the combined path is not a valid URL.
pub fn path_url(repo: &Repo, path: &str) -> Result<Url> {
    github(&format!("{}/{}{path}", repo.owner, repo.name))
}

/// `https://github.com/user`
///
/// # Errors
///
/// Fails if the user cannot form a valid URL path.
pub fn user_url(user: &str) -> Result<Url> {
    github(user)
}

/// Issue search within a repository, with `query` percent-encoded.
///
/// # Errors
///
/// Fails if the owner or name cannot form a valid URL path.
pub fn issue_search_url(repo: &Repo, query: &str) -> Result<Url> {
    let mut url = github(&format!("{}/{}/issues", repo.owner, repo.name))?;
    url.query_pairs_mut().append_pair("q", query);
    Ok(url)
}
