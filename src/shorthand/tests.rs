use super::*;

fn table(entries: &[(&str, &str)]) -> ShorthandTable {
    entries
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn repos() -> ShorthandTable {
    table(&[("zw", "zerowidth/foo"), ("df", "zerowidth/dotfiles")])
}

fn users() -> ShorthandTable {
    table(&[("gh", "github"), ("zw", "zerowidth")])
}

#[test]
fn test_empty_tables_keep_input_as_query() {
    let empty = ShorthandTable::new();
    for input in ["", "foo", "foo bar", "  leading", "foo/ bar"] {
        let r = resolve(&empty, &empty, input);
        assert_eq!(r.query(), input);
        assert_eq!(r.matched(), &Matched::Nothing);
        assert_eq!(r.fragment(), None);
        assert_eq!(r.annotation(), "");
    }
}

#[test]
fn test_longest_repo_shorthand_wins() {
    let repos = table(&[("a/b", "o1/n1"), ("a/bc", "o2/n2")]);
    let r = resolve(&repos, &ShorthandTable::new(), "a/bc rest");
    assert_eq!(r.owner(), "o2");
    assert_eq!(r.name(), "n2");
    assert_eq!(r.repo_match(), "a/bc");
    assert_eq!(r.query(), "rest");
}

#[test]
fn test_repo_shorthand_with_issue() {
    let r = resolve(&repos(), &users(), "zw 5");
    assert_eq!(
        r.matched(),
        &Matched::RepoShorthand {
            key: "zw".into(),
            repo: Repo {
                owner: "zerowidth".into(),
                name: "foo".into()
            }
        }
    );
    assert_eq!(r.issue(), "5");
    assert_eq!(r.query(), "");
    assert_eq!(r.annotation(), " (zw#5)");
    assert_eq!(r.repo_annotation(), " (zw)");
}

#[test]
fn test_repo_shorthand_directly_followed_by_issue() {
    let r = resolve(&repos(), &users(), "zw#12");
    assert_eq!(r.repo_match(), "zw");
    assert_eq!(r.issue(), "12");
}

#[test]
fn test_repo_shorthand_with_path() {
    let r = resolve(&repos(), &users(), "zw/pulls");
    assert_eq!(r.repo_match(), "zw");
    assert_eq!(r.path(), "/pulls");
    assert_eq!(r.issue(), "");
    assert_eq!(r.annotation(), " (zw)");
}

#[test]
fn test_repo_shorthand_with_query() {
    let r = resolve(&repos(), &users(), "df  some search");
    assert_eq!(r.repo_match(), "df");
    assert_eq!(r.query(), "some search");
}

#[test]
fn test_repo_table_takes_precedence_over_user_table() {
    let r = resolve(&repos(), &users(), "zw");
    assert_eq!(r.repo_match(), "zw");
    assert_eq!(r.user_match(), "");
    assert_eq!(r.user(), "");
}

#[test]
fn test_literal_repo_with_issue() {
    let empty = ShorthandTable::new();
    let r = resolve(&empty, &empty, "owner/name #42");
    assert_eq!(r.owner(), "owner");
    assert_eq!(r.name(), "name");
    assert_eq!(r.repo_match(), "");
    assert_eq!(r.issue(), "42");
    assert_eq!(r.query(), "");
    assert_eq!(r.annotation(), "");
}

#[test]
fn test_literal_repo_with_path() {
    let empty = ShorthandTable::new();
    let r = resolve(&empty, &empty, "owner/name /pulls");
    assert_eq!(r.path(), "/pulls");
    assert_eq!(r.issue(), "");
    assert_eq!(r.query(), "");
}

#[test]
fn test_literal_repo_name_characters() {
    let empty = ShorthandTable::new();
    let r = resolve(&empty, &empty, "rust-lang/rust.vim_2 foo");
    assert_eq!(r.owner(), "rust-lang");
    assert_eq!(r.name(), "rust.vim_2");
    assert_eq!(r.query(), "foo");

    let r = resolve(&empty, &empty, "zerowidth/dotfiles#3");
    assert_eq!(r.name(), "dotfiles");
    assert_eq!(r.issue(), "3");
}

#[test]
fn test_literal_repo_rejects_leading_hyphen_owner() {
    let empty = ShorthandTable::new();
    let r = resolve(&empty, &empty, "-foo/bar");
    assert_eq!(r.repo(), None);
    assert_eq!(r.query(), "-foo/bar");
}

#[test]
fn test_literal_repo_beats_user_shorthand() {
    let users = table(&[("foo", "someone")]);
    let r = resolve(&ShorthandTable::new(), &users, "foo/bar");
    assert_eq!(r.matched(), &Matched::LiteralRepo(Repo::parse("foo/bar").unwrap()));
    assert_eq!(r.user(), "");
}

#[test]
fn test_malformed_repo_value_falls_through_to_literal() {
    let repos = table(&[("zw", "no-separator")]);
    let r = resolve(&repos, &ShorthandTable::new(), "zw/foo");
    assert_eq!(r.repo_match(), "");
    assert_eq!(r.owner(), "zw");
    assert_eq!(r.name(), "foo");
}

#[test]
fn test_malformed_repo_value_falls_through_to_shorter_key() {
    let repos = table(&[("zwf", "broken"), ("zw", "zerowidth/foo")]);
    let r = resolve(&repos, &ShorthandTable::new(), "zwf 1");
    assert_eq!(r.repo_match(), "zw");
    assert_eq!(r.query(), "f 1");
}

#[test]
fn test_repo_value_splits_on_first_slash() {
    let repos = table(&[("x", "owner/name/extra")]);
    let r = resolve(&repos, &ShorthandTable::new(), "x");
    assert_eq!(r.owner(), "owner");
    assert_eq!(r.name(), "name/extra");
}

#[test]
fn test_user_shorthand() {
    let r = resolve(&ShorthandTable::new(), &table(&[("gh", "octocat")]), "gh");
    assert_eq!(r.user(), "octocat");
    assert_eq!(r.user_match(), "gh");
    assert_eq!(r.owner(), "");
    assert_eq!(r.name(), "");
    assert_eq!(r.annotation(), " (gh)");
}

#[test]
fn test_user_shorthand_with_query_and_issue() {
    let r = resolve(&ShorthandTable::new(), &users(), "gh dotfiles");
    assert_eq!(r.user(), "github");
    assert_eq!(r.query(), "dotfiles");

    let r = resolve(&ShorthandTable::new(), &users(), "gh 42");
    assert_eq!(r.issue(), "42");
    assert_eq!(r.annotation(), " (gh)");
}

#[test]
fn test_issue_without_repo() {
    let empty = ShorthandTable::new();
    let r = resolve(&empty, &empty, "#7");
    assert_eq!(r.issue(), "7");
    assert_eq!(r.owner(), "");
    assert_eq!(r.query(), "");
}

#[test]
fn test_issue_must_be_entire_remainder() {
    let empty = ShorthandTable::new();
    for input in ["o/n 42 extra", "o/n #0", "o/n #04", "o/n ##4"] {
        let r = resolve(&empty, &empty, input);
        assert_eq!(r.issue(), "", "input {input:?}");
        assert_eq!(r.query(), &input[4..], "input {input:?}");
    }
}

#[test]
fn test_path_must_be_single_token() {
    let empty = ShorthandTable::new();
    let r = resolve(&empty, &empty, "o/n /pulls extra");
    assert_eq!(r.path(), "");
    assert_eq!(r.query(), "/pulls extra");

    let r = resolve(&empty, &empty, "/");
    assert_eq!(r.path(), "/");
}

#[test]
fn test_only_spaces_are_trimmed() {
    let r = resolve(&repos(), &users(), "zw\t5");
    assert_eq!(r.repo_match(), "zw");
    assert_eq!(r.issue(), "");
    assert_eq!(r.query(), "\t5");
}

#[test]
fn test_keys_are_case_sensitive() {
    let r = resolve(&repos(), &users(), "ZW 5");
    assert_eq!(r.matched(), &Matched::Nothing);
    assert_eq!(r.query(), "ZW 5");
}

#[test]
fn test_annotation_is_idempotent() {
    let r = resolve(&repos(), &users(), "zw 5");
    assert_eq!(r.annotation(), r.annotation());
    let r = resolve(&repos(), &users(), "gh");
    assert_eq!(r.annotation(), r.annotation());
}

#[test]
fn test_serialize_flat_fields() {
    let r = resolve(&repos(), &users(), "zw 5");
    let json = serde_json::to_string_pretty(&r).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "owner": "zerowidth",
      "name": "foo",
      "user": "",
      "repo_match": "zw",
      "user_match": "",
      "issue": "5",
      "path": "",
      "query": "",
      "annotation": " (zw#5)"
    }
    "#);
}

#[test]
fn test_repo_value_with_empty_half_is_skipped() {
    for value in ["zerowidth/", "/dotfiles", "/"] {
        let repos = table(&[("zw", value)]);
        let r = resolve(&repos, &ShorthandTable::new(), "zw 5");
        assert_eq!(r.repo_match(), "", "value {value:?}");
        assert_eq!(r.repo(), None, "value {value:?}");
        assert_eq!(r.query(), "zw 5", "value {value:?}");
    }
    assert_eq!(Repo::parse("zerowidth/"), None);
    assert_eq!(Repo::parse("/dotfiles"), None);
}

#[test]
fn test_repo_value_with_empty_half_falls_through_to_user() {
    let repos = table(&[("zw", "zerowidth/")]);
    let r = resolve(&repos, &users(), "zw");
    assert_eq!(r.user_match(), "zw");
    assert_eq!(r.user(), "zerowidth");
}

#[test]
fn test_literal_name_ends_on_word_boundary() {
    let empty = ShorthandTable::new();
    let r = resolve(&empty, &empty, "foo/bar-");
    assert_eq!(r.name(), "bar");
    assert_eq!(r.query(), "-");

    let r = resolve(&empty, &empty, "foo/bar.");
    assert_eq!(r.name(), "bar");
    assert_eq!(r.query(), ".");

    let r = resolve(&empty, &empty, "foo/bar.. 12");
    assert_eq!(r.name(), "bar");
    assert_eq!(r.query(), ".. 12");

    let r = resolve(&empty, &empty, "foo/bar.vim-x");
    assert_eq!(r.name(), "bar.vim-x");
    assert_eq!(r.query(), "");

    let r = resolve(&empty, &empty, "foo/baré");
    assert_eq!(r.name(), "bar");
    assert_eq!(r.query(), "é");
}

#[test]
fn test_literal_name_of_only_punctuation_does_not_match() {
    let empty = ShorthandTable::new();
    let r = resolve(&empty, &empty, "foo/-");
    assert_eq!(r.repo(), None);
    assert_eq!(r.query(), "foo/-");
}

#[test]
fn test_field_invariants_hold_for_every_resolution_kind() {
    let repos = table(&[
        ("zw", "zerowidth/foo"),
        ("no", "no-separator"),
        ("ow", "zerowidth/"),
        ("nm", "/dotfiles"),
        ("sl", "/"),
    ]);
    let inputs = [
        "", "zw", "zw 5", "zw /pulls", "zw foo bar", "no", "no 5", "ow", "ow 5", "nm",
        "nm /pulls", "sl", "gh", "gh 5", "gh /settings", "gh linguist", "owner/name",
        "owner/name #42", "foo/bar-", "#7", "/pulls", "plain text",
    ];
    for input in inputs {
        let r = resolve(&repos, &users(), input);
        assert_eq!(r.owner().is_empty(), r.name().is_empty(), "input {input:?}");
        if !r.repo_match().is_empty() {
            assert!(!r.owner().is_empty() && !r.name().is_empty(), "input {input:?}");
        }
        if !r.user_match().is_empty() {
            assert!(!r.user().is_empty() && r.name().is_empty(), "input {input:?}");
            assert_eq!(r.repo_match(), "", "input {input:?}");
        }
        assert!(r.issue().is_empty() || r.path().is_empty(), "input {input:?}");
        assert!(r.path().is_empty() || r.path().starts_with('/'), "input {input:?}");
        assert!(r.issue().bytes().all(|b| b.is_ascii_digit()), "input {input:?}");
    }
}
