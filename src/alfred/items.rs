use anyhow::Result;

use super::{Item, Items};
use crate::github;
use crate::shorthand::{Fragment, Matched, Repo, Resolution};

/// Build the result rows for a resolved input.
///
/// # Errors
///
/// Fails only if a matched owner, name, or path cannot be turned into a
/// GitHub URL.
pub fn items_for(res: &Resolution) -> Result<Items> {
    let items = match res.matched() {
        Matched::RepoShorthand { repo, .. } | Matched::LiteralRepo(repo) => repo_items(res, repo)?,
        Matched::UserShorthand { user, .. } => user_items(res, user)?,
        Matched::Nothing => vec![unmatched_item(res)],
    };
    Ok(Items { items, rerun: None })
}

fn repo_items(res: &Resolution, repo: &Repo) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    match res.fragment() {
        Some(Fragment::Issue(issue)) => {
            let title = format!("Open {repo}#{issue}{}", res.annotation());
            items.push(Item::open(title, &github::issue_url(repo, issue)?));
        }
        Some(Fragment::Path(path)) => {
            let title = format!("Open {repo}{path}{}", res.repo_annotation());
            items.push(Item::open(title, &github::path_url(repo, path)?));
        }
        None => {
            let title = format!("Open {repo}{}", res.annotation());
            items.push(Item::open(title, &github::repo_url(repo)?));
        }
    }

    let query = res.query();
    if !query.is_empty() {
        let title = format!("Search issues in {repo}{} for {query}", res.repo_annotation());
        items.push(Item::open(title, &github::issue_search_url(repo, query)?));
    }
    Ok(items)
}

fn user_items(res: &Resolution, user: &str) -> Result<Vec<Item>> {
    let title = format!("Open {user}{}", res.annotation());
    let mut items = vec![Item::open(title, &github::user_url(user)?)];

    let query = res.query();
    if !query.is_empty() && !query.contains(char::is_whitespace) {
        let repo = Repo {
            owner: user.to_string(),
            name: query.to_string(),
        };
        let title = format!("Open {repo}{}", res.annotation());
        items.push(Item::open(title, &github::repo_url(&repo)?));
    }
    if let Some(fragment) = res.fragment() {
        items.push(needs_repo_hint(fragment));
    }
    Ok(items)
}

/// An issue or path typed without a repository cannot be opened.
fn needs_repo_hint(fragment: &Fragment) -> Item {
    let title = match fragment {
        Fragment::Issue(issue) => format!("Issue #{issue} needs a repository"),
        Fragment::Path(path) => format!("Path {path} needs a repository"),
    };
    Item::hint(
        title,
        Some("Prefix it with a repo shorthand or owner/name".to_string()),
    )
}

fn unmatched_item(res: &Resolution) -> Item {
    if let Some(fragment @ Fragment::Issue(_)) = res.fragment() {
        return needs_repo_hint(fragment);
    }
    if res.query().is_empty() && res.path().is_empty() {
        return Item::hint(
            "Open a GitHub repository, issue, or path".to_string(),
            Some("Type a shorthand, owner/name, #issue, or /path".to_string()),
        );
    }
    let typed = if res.path().is_empty() {
        res.query()
    } else {
        res.path()
    };
    Item::hint(format!("No repository matched {typed}"), None)
}
