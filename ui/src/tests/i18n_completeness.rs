//! Every key the sources pass to `t!` must exist in every bundle.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::Lang;

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

fn bundle_keys(lang: Lang) -> BTreeSet<String> {
    let path = crate_root()
        .join("i18n")
        .join(lang.locale())
        .join("steingau-ui.ftl");
    let src = fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {path:?}: {e}"));
    src.lines()
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(is_key_char))
        .map(str::to_string)
        .collect()
}

/// Literal keys passed to the `t!` macro in one source file.
fn keys_in(content: &str, out: &mut BTreeSet<String>) {
    for (pos, _) in content.match_indices("t!(") {
        // `format!(`, `assert!(`, ... are not ours.
        let preceded_by_ident = content[..pos]
            .chars()
            .last()
            .is_some_and(|c| c.is_alphanumeric() || c == '_');
        if preceded_by_ident {
            continue;
        }
        let args = &content[pos + 3..];
        let call = &args[..args.find(')').unwrap_or(args.len())];
        let Some((_, rest)) = call.split_once(',') else {
            continue;
        };
        let Some(literal) = rest.trim_start().strip_prefix('"') else {
            continue;
        };
        if let Some((key, _)) = literal.split_once('"') {
            if !key.is_empty() && key.chars().all(is_key_char) {
                out.insert(key.to_string());
            }
        }
    }
}

fn source_keys(dir: &Path, out: &mut BTreeSet<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            source_keys(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                keys_in(&content, out);
            }
        }
    }
}

#[test]
fn scanner_skips_other_macros() {
    let mut keys = BTreeSet::new();
    keys_in(
        r#"format!("{}", x); assert!(ok, "nope"); t!(lang, "faq-title"); t!(Lang::En, "hero-cta")"#,
        &mut keys,
    );
    assert_eq!(
        keys.into_iter().collect::<Vec<_>>(),
        ["faq-title", "hero-cta"]
    );
}

#[test]
fn referenced_keys_exist_in_every_bundle() {
    let mut referenced = BTreeSet::new();
    source_keys(&crate_root().join("src"), &mut referenced);
    assert!(
        referenced.contains("hero-title"),
        "no t!(lang, \"...\") calls found; has the macro shape changed?"
    );

    for lang in Lang::ALL {
        let defined = bundle_keys(lang);
        let missing: Vec<_> = referenced.difference(&defined).collect();
        assert!(
            missing.is_empty(),
            "{} is missing {} referenced key(s): {missing:?}",
            lang.locale(),
            missing.len()
        );
    }
}

#[test]
fn unused_keys_are_reported() {
    let mut referenced = BTreeSet::new();
    source_keys(&crate_root().join("src"), &mut referenced);
    let unused: Vec<_> = bundle_keys(Lang::En)
        .into_iter()
        .filter(|k| !referenced.contains(k))
        .collect();
    // Informational only.
    if !unused.is_empty() {
        eprintln!("[i18n] {} en-US key(s) unused in sources: {}", unused.len(), unused.join(", "));
    }
}
