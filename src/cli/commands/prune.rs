use std::collections::HashSet;
use std::fs;

use anyhow::{Context, Result};

use super::super::args::PruneCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{self, PruneOutcome};
use super::context::ProjectContext;
use crate::core::{locales::load_locale_files, tree::prune_keys};

pub fn prune(cmd: PruneCommand) -> Result<ExitStatus> {
    let ctx = ProjectContext::new(&cmd.common)?;

    let keys: HashSet<String> = match &cmd.keys_file {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read keys file: {}", path.display()))?;
            parse_keys_file(&content)
        }
        None => ctx.config.keys_to_remove.iter().cloned().collect(),
    };

    if keys.is_empty() {
        report::print_nothing_to_prune();
        return Ok(ExitStatus::Success);
    }

    let locales = load_locale_files(&ctx.locale_dir(), &ctx.config.locale_files, ctx.verbose)?;

    let mut outcomes = Vec::with_capacity(locales.len());
    for mut locale in locales {
        let before = locale.serialize()?.len();
        locale.tree = prune_keys(&locale.tree, &keys);
        let after = locale.serialize()?.len();

        if cmd.apply {
            locale.save()?;
        }

        outcomes.push(PruneOutcome {
            name: locale.name,
            before,
            after,
        });
    }

    report::print_prune_report(&outcomes, cmd.apply);
    Ok(ExitStatus::Success)
}

/// One dotted path per line; blank lines and `#` comments are skipped.
fn parse_keys_file(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
