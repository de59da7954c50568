//! Source corpus traversal.

use std::{
    ffi::OsStr,
    fs, io,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Result of collecting the corpus file list.
pub struct CorpusScan {
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Walk `roots` and collect every file with one of `extensions`.
///
/// Directories named in `ignore_dirs` are pruned from the walk itself, so
/// their contents are never visited. `ignore_patterns` are matched against
/// the full path of each candidate file. Unreadable paths are counted and,
/// in verbose mode, reported on stderr.
pub fn collect_corpus_files(
    roots: &[PathBuf],
    extensions: &[String],
    ignore_dirs: &[String],
    ignore_patterns: &[Pattern],
    verbose: bool,
) -> CorpusScan {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    for root in roots {
        let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
            !(entry.file_type().is_dir() && is_ignored_dir(entry.file_name(), ignore_dirs))
        });

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !has_corpus_extension(path, extensions) {
                continue;
            }

            let path_str = path.to_string_lossy();
            if ignore_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            files.push(path.to_path_buf());
        }
    }

    files.sort();
    CorpusScan {
        files,
        skipped_count,
    }
}

fn is_ignored_dir(name: &OsStr, ignore_dirs: &[String]) -> bool {
    name.to_str()
        .is_some_and(|n| ignore_dirs.iter().any(|d| d == n))
}

fn has_corpus_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e == ext))
}

/// Read a corpus file as text, replacing undecodable byte sequences.
///
/// The scan is a heuristic search, so completing the pass matters more than
/// byte-perfect fidelity.
pub fn read_corpus_text(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
