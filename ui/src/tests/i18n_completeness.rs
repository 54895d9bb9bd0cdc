use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical FTL file per locale (matches the loader domain).
const FTL_FILENAME: &str = "facelab-ui.ftl";

const I18N_DIR: &str = "i18n";

/// Message ids defined in a Fluent file. Terms, attributes, comments and
/// continuation lines are skipped.
fn message_ids(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Every literal first argument of `t!(...)` under `root`.
fn referenced_keys(root: &Path) -> BTreeMap<String, PathBuf> {
    let mut found = BTreeMap::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for (pos, needle) in content.match_indices("t!(\"") {
            let rest = &content[pos + needle.len()..];
            let Some(end) = rest.find('"') else {
                continue;
            };
            let key = &rest[..end];
            if !key.is_empty() && key.chars().all(valid_key_char) {
                found.entry(key.to_string()).or_insert_with(|| path.clone());
            }
        }
    }

    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|entries| {
            entries
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn message_id_parser_skips_terms_and_continuations() {
    let ids = message_ids("# comment\n-brand = X\nplain = one\nmulti =\n    line = two\n");
    assert_eq!(ids.into_iter().collect::<Vec<_>>(), ["multi", "plain"]);
}

#[test]
fn every_referenced_key_exists_in_every_locale() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_file = i18n_root.join("en-US").join(FTL_FILENAME);
    let fallback = fs::read_to_string(&fallback_file).expect("fallback FTL file readable");
    let fallback_keys = message_ids(&fallback);
    assert!(!fallback_keys.is_empty(), "no message ids in {fallback_file:?}");

    let referenced = referenced_keys(&crate_root.join("src"));
    assert!(referenced.contains_key("brand-name"));

    let missing: Vec<String> = referenced
        .iter()
        .filter(|(key, _)| !fallback_keys.contains(*key))
        .map(|(key, file)| format!("{key} (used in {})", file.display()))
        .collect();
    assert!(
        missing.is_empty(),
        "keys missing from en-US ({}):\n{}",
        missing.len(),
        missing.join("\n")
    );

    let locales = locale_dirs(&i18n_root);
    assert!(locales.iter().any(|l| l == "zh-CN"), "zh-CN locale missing");

    let mut report = String::new();
    for locale in locales {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("locale {locale} has no {FTL_FILENAME}"));
        let keys = message_ids(&content);
        let gaps: Vec<_> = fallback_keys.difference(&keys).cloned().collect();
        if !gaps.is_empty() {
            report.push_str(&format!("  {locale}: {}\n", gaps.join(", ")));
        }
    }
    assert!(report.is_empty(), "locales missing fallback keys:\n{report}");

    let unused: Vec<_> = fallback_keys
        .iter()
        .filter(|k| !referenced.contains_key(*k))
        .cloned()
        .collect();
    if !unused.is_empty() {
        eprintln!("[i18n] {} fallback keys not referenced via t!: {}", unused.len(), unused.join(", "));
    }
}
