//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Find locale keys never referenced in the source corpus
//! - `prune`: Remove a curated key list from the locale files
//! - `init`: Initialize a locsweep configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Return the subcommand, printing help when none was given.
    pub fn command_or_help(self) -> Option<Command> {
        match self.command {
            Some(command) => Some(command),
            None => {
                Self::command().print_help().ok();
                None
            }
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory (where .locsweeprc.json is searched)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Locale directory path (overrides config file)
    #[arg(long)]
    pub locale_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PruneCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite the locale files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Read the keys to remove from a file, one dotted path per line
    /// (overrides the config keysToRemove list)
    #[arg(long)]
    pub keys_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find translation keys defined in locale files but never referenced in source
    Scan(ScanCommand),
    /// Remove the configured key list from the locale files
    Prune(PruneCommand),
    /// Initialize a new .locsweeprc.json configuration file
    Init,
}
