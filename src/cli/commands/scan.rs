use std::collections::HashSet;

use anyhow::Result;

use super::super::args::ScanCommand;
use super::super::exit_status::ExitStatus;
use super::super::report;
use super::context::ProjectContext;
use crate::core::{
    corpus::collect_corpus_files, locales::load_locale_files, scanner::find_unused_in_files,
    tree::flatten_keys,
};

pub fn scan(cmd: ScanCommand) -> Result<ExitStatus> {
    let ctx = ProjectContext::new(&cmd.common)?;

    let corpus_roots = ctx.corpus_roots();
    let ignore_patterns = ctx.ignore_patterns();

    // The corpus walk and the locale load touch disjoint files.
    let (corpus, locales) = rayon::join(
        || {
            collect_corpus_files(
                &corpus_roots,
                &ctx.config.corpus_extensions,
                &ctx.config.ignore_dirs,
                &ignore_patterns,
                ctx.verbose,
            )
        },
        || load_locale_files(&ctx.locale_dir(), &ctx.config.locale_files, ctx.verbose),
    );
    let locales = locales?;

    report::print_skipped_warning(corpus.skipped_count, ctx.verbose);

    // Union across locales: a key present in any locale file exists.
    let mut all_keys: HashSet<String> = HashSet::new();
    for locale in &locales {
        all_keys.extend(flatten_keys(&locale.tree));
    }

    let unused = find_unused_in_files(
        &all_keys,
        &ctx.config.keep_prefixes,
        &corpus.files,
        ctx.verbose,
    );

    report::print_scan_report(&unused, corpus.files.len(), locales.len());

    Ok(if unused.is_empty() {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    })
}
