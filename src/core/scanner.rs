//! Literal usage scanning for translation keys.
//!
//! The scan is textual: a key counts as used when it appears wrapped in
//! double quotes, single quotes, or backticks anywhere in the corpus. Keys
//! assembled dynamically at runtime never match, which is why whole key
//! groups can be exempted through keep prefixes.

use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

use colored::Colorize;
use rayon::prelude::*;

use crate::core::corpus::read_corpus_text;

/// A candidate key with its three quoted literal forms precomputed.
struct QuotedKey {
    key: String,
    forms: [String; 3],
}

impl QuotedKey {
    fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            forms: [
                format!("\"{}\"", key),
                format!("'{}'", key),
                format!("`{}`", key),
            ],
        }
    }

    fn occurs_in(&self, content: &str) -> bool {
        self.forms.iter().any(|form| content.contains(form.as_str()))
    }
}

fn keep_exempted(all_keys: &HashSet<String>, keep_prefixes: &[String]) -> HashSet<String> {
    all_keys
        .iter()
        .filter(|key| {
            keep_prefixes
                .iter()
                .any(|prefix| key.starts_with(prefix.as_str()))
        })
        .cloned()
        .collect()
}

fn candidates(all_keys: &HashSet<String>, kept: &HashSet<String>) -> Vec<QuotedKey> {
    all_keys
        .iter()
        .filter(|key| !kept.contains(*key))
        .map(|key| QuotedKey::new(key))
        .collect()
}

fn subtract(
    all_keys: &HashSet<String>,
    kept: &HashSet<String>,
    found: &HashSet<String>,
) -> BTreeSet<String> {
    all_keys
        .iter()
        .filter(|key| !kept.contains(*key) && !found.contains(*key))
        .cloned()
        .collect()
}

/// Find the keys from `all_keys` that are neither keep-exempted nor found
/// as a quoted literal in any of `contents`. Returned sorted.
pub fn find_unused_in_contents(
    all_keys: &HashSet<String>,
    keep_prefixes: &[String],
    contents: &[String],
) -> BTreeSet<String> {
    let kept = keep_exempted(all_keys, keep_prefixes);
    let candidates = candidates(all_keys, &kept);

    let mut found: HashSet<String> = HashSet::new();
    for content in contents {
        for candidate in &candidates {
            if !found.contains(&candidate.key) && candidate.occurs_in(content) {
                found.insert(candidate.key.clone());
            }
        }
    }

    subtract(all_keys, &kept, &found)
}

/// Like [`find_unused_in_contents`], but reading `corpus_files` from disk.
///
/// Matching is monotonic (once used, always used), so per-file results can
/// be unioned in any order; the files are matched in parallel. A file that
/// cannot be read is treated as empty, with a warning in verbose mode.
pub fn find_unused_in_files(
    all_keys: &HashSet<String>,
    keep_prefixes: &[String],
    corpus_files: &[PathBuf],
    verbose: bool,
) -> BTreeSet<String> {
    let kept = keep_exempted(all_keys, keep_prefixes);
    let candidates = candidates(all_keys, &kept);

    let found: HashSet<String> = corpus_files
        .par_iter()
        .flat_map_iter(|path| {
            let content = match read_corpus_text(path) {
                Ok(content) => content,
                Err(err) => {
                    if verbose {
                        eprintln!(
                            "{} Cannot read {}: {}",
                            "warning:".bold().yellow(),
                            path.display(),
                            err
                        );
                    }
                    String::new()
                }
            };
            candidates
                .iter()
                .filter(|candidate| candidate.occurs_in(&content))
                .map(|candidate| candidate.key.clone())
                .collect::<Vec<_>>()
        })
        .collect();

    subtract(all_keys, &kept, &found)
}
