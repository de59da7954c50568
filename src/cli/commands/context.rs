use std::path::{Path, PathBuf};

use anyhow::Result;
use glob::Pattern;

use crate::cli::args::CommonArgs;
use crate::config::{Config, load_config};

/// Resolved configuration for one run.
///
/// Configuration priority, highest to lowest: CLI arguments, the
/// `.locsweeprc.json` file, built-in defaults.
pub struct ProjectContext {
    pub config: Config,
    pub root_dir: PathBuf,
    pub verbose: bool,
}

impl ProjectContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let root_dir = common.root.clone();

        let result = load_config(&root_dir)?;
        if common.verbose && !result.from_file {
            eprintln!("Note: No .locsweeprc.json found, using default configuration");
        }

        let mut config = result.config;
        if let Some(ref locale_dir) = common.locale_dir {
            config.locale_dir = locale_dir.to_string_lossy().to_string();
        }

        Ok(Self {
            config,
            root_dir,
            verbose: common.verbose,
        })
    }

    /// Resolve a config-relative path against the project root.
    fn resolve(&self, path: &str) -> PathBuf {
        let p = Path::new(path);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
            self.root_dir.join(rel)
        }
    }

    pub fn locale_dir(&self) -> PathBuf {
        self.resolve(&self.config.locale_dir)
    }

    pub fn corpus_roots(&self) -> Vec<PathBuf> {
        self.config
            .corpus_roots
            .iter()
            .map(|root| self.resolve(root))
            .collect()
    }

    /// Compiled ignore patterns; invalid ones were already rejected by
    /// `Config::validate`.
    pub fn ignore_patterns(&self) -> Vec<Pattern> {
        self.config
            .ignores
            .iter()
            .filter_map(|pattern| Pattern::new(pattern).ok())
            .collect()
    }
}
