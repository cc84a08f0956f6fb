use std::sync::LazyLock;

use regex::Regex;

use super::{Fragment, Matched, Repo, Resolution, ShorthandTable};

static OWNER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9][-A-Za-z0-9]*)/([A-Za-z0-9_.\-]+)").expect("valid owner/name regex")
});
static ISSUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?([1-9][0-9]*)$").expect("valid issue regex"));
static PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(/[^\t\n\f\r ]*)$").expect("valid path regex"));

/// Resolve `input` against the repo and user shorthand tables.
///
/// Passes run in order, each consuming a prefix of the input:
/// 1. the longest repo shorthand that prefixes the input,
/// 2. otherwise a literal `owner/name`,
/// 3. otherwise the longest user shorthand,
/// 4. then the rest must be exactly an issue number (`42` or `#42`),
/// 5. or exactly a path (`/pulls`).
///
/// Anything unconsumed is left in [`Resolution::query`]. Never fails.
#[must_use]
pub fn resolve(repos: &ShorthandTable, users: &ShorthandTable, input: &str) -> Resolution {
    let (matched, rest) = match_repo(repos, input)
        .or_else(|| match_literal(input))
        .or_else(|| match_user(users, input))
        .unwrap_or((Matched::Nothing, input));

    let (fragment, query) = match extract_fragment(rest) {
        Some(fragment) => (Some(fragment), String::new()),
        None => (None, rest.to_string()),
    };

    Resolution {
        matched,
        fragment,
        query,
    }
}

/// Keys that prefix `input`, longest first; equal lengths in lexicographic order.
fn prefix_candidates<'t>(
    table: &'t ShorthandTable,
    input: &str,
) -> impl Iterator<Item = (&'t String, &'t String)> {
    let mut hits: Vec<_> = table
        .iter()
        .filter(|(key, _)| input.starts_with(key.as_str()))
        .collect();
    hits.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    hits.into_iter()
}

fn consume<'a>(input: &'a str, len: usize) -> &'a str {
    input[len..].trim_start_matches(' ')
}

fn match_repo<'a>(repos: &ShorthandTable, input: &'a str) -> Option<(Matched, &'a str)> {
    prefix_candidates(repos, input).find_map(|(key, value)| {
        // values that are not owner/name are skipped, not fatal
        let repo = Repo::parse(value)?;
        Some((
            Matched::RepoShorthand {
                key: key.clone(),
                repo,
            },
            consume(input, key.len()),
        ))
    })
}

fn match_literal(input: &str) -> Option<(Matched, &str)> {
    let caps = OWNER_NAME.captures(input)?;
    let owner = caps.get(1)?;
    let name = caps.get(2)?;
    let name_len = name_before_word_boundary(input, name.start(), name.as_str())?;
    let repo = Repo {
        owner: owner.as_str().to_string(),
        name: name.as_str()[..name_len].to_string(),
    };
    Some((Matched::LiteralRepo(repo), consume(input, name.start() + name_len)))
}

/// The name must end on an ASCII word boundary, so trailing `.` and `-` are
/// given back to the query (`foo/bar-` is `foo/bar` followed by `-`).
/// Returns the longest such prefix length, if any.
fn name_before_word_boundary(input: &str, start: usize, name: &str) -> Option<usize> {
    let is_word = |b: Option<&u8>| b.is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_');
    let bytes = input.as_bytes();
    (1..=name.len())
        .rev()
        .find(|&len| is_word(bytes.get(start + len - 1)) != is_word(bytes.get(start + len)))
}

fn match_user<'a>(users: &ShorthandTable, input: &'a str) -> Option<(Matched, &'a str)> {
    let (key, user) = prefix_candidates(users, input).next()?;
    Some((
        Matched::UserShorthand {
            key: key.clone(),
            user: user.clone(),
        },
        consume(input, key.len()),
    ))
}

fn extract_fragment(query: &str) -> Option<Fragment> {
    if let Some(caps) = ISSUE.captures(query) {
        return Some(Fragment::Issue(caps[1].to_string()));
    }
    PATH.captures(query)
        .map(|caps| Fragment::Path(caps[1].to_string()))
}
