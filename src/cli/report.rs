//! Report formatting and printing.
//!
//! Separate from core logic so the scan and prune passes stay usable as
//! library functions.

use std::collections::BTreeSet;
use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the scan result to stdout.
pub fn print_scan_report(unused: &BTreeSet<String>, corpus_files: usize, locale_files: usize) {
    print_scan_report_to(unused, corpus_files, locale_files, &mut io::stdout().lock());
}

/// Print the scan result to a custom writer.
///
/// The key lines stay uncolored so the list can be piped straight into a
/// keys file for a later prune run.
pub fn print_scan_report_to<W: Write>(
    unused: &BTreeSet<String>,
    corpus_files: usize,
    locale_files: usize,
    writer: &mut W,
) {
    if unused.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} corpus {}, {} locale {} - no unused keys",
                corpus_files,
                if corpus_files == 1 { "file" } else { "files" },
                locale_files,
                if locale_files == 1 { "file" } else { "files" }
            )
            .green()
        );
        return;
    }

    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!("Unused keys found: {}", unused.len()).red()
    );
    for key in unused {
        let _ = writeln!(writer, "{}", key);
    }
}

/// Size change of one locale file after pruning.
pub struct PruneOutcome {
    pub name: String,
    pub before: usize,
    pub after: usize,
}

/// Print the per-file prune report to stdout.
pub fn print_prune_report(outcomes: &[PruneOutcome], apply: bool) {
    print_prune_report_to(outcomes, apply, &mut io::stdout().lock());
}

/// Print the per-file prune report to a custom writer.
pub fn print_prune_report_to<W: Write>(outcomes: &[PruneOutcome], apply: bool, writer: &mut W) {
    let name_width = outcomes.iter().map(|o| o.name.width()).max().unwrap_or(0);

    for outcome in outcomes {
        let pad = " ".repeat(name_width.saturating_sub(outcome.name.width()));
        let _ = writeln!(
            writer,
            "{} {}{}  {} -> {} bytes",
            SUCCESS_MARK.green(),
            outcome.name,
            pad,
            outcome.before,
            outcome.after,
        );
    }

    if !apply {
        let _ = writeln!(
            writer,
            "{} dry-run only, use {} to rewrite the files",
            "note:".bold().cyan(),
            "--apply".cyan()
        );
    }
}

/// Print the notice for a prune run with an empty key list.
pub fn print_nothing_to_prune() {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        "No keys to remove (keysToRemove is empty)".green()
    );
}

/// Warn about paths skipped during the corpus walk.
pub fn print_skipped_warning(count: usize, verbose: bool) {
    if count > 0 && !verbose {
        eprintln!(
            "{} {} path(s) skipped due to access errors (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}
