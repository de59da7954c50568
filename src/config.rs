use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".locsweeprc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the locale JSON files.
    #[serde(default = "default_locale_dir")]
    pub locale_dir: String,
    /// Locale filenames to process; empty means every `*.json` in `localeDir`.
    #[serde(default)]
    pub locale_files: Vec<String>,
    /// Key prefixes exempt from unused detection (groups referenced
    /// dynamically, which a literal scan cannot see).
    #[serde(default)]
    pub keep_prefixes: Vec<String>,
    /// Root directories of the source corpus.
    #[serde(default = "default_corpus_roots")]
    pub corpus_roots: Vec<String>,
    /// File extensions included in the corpus, without the leading dot.
    #[serde(default = "default_corpus_extensions")]
    pub corpus_extensions: Vec<String>,
    /// Directory names the corpus walk never descends into.
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,
    /// Glob patterns for corpus paths to skip.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Dotted key paths removed by the prune command.
    #[serde(default)]
    pub keys_to_remove: Vec<String>,
}

fn default_locale_dir() -> String {
    "./locales".to_string()
}

fn default_corpus_roots() -> Vec<String> {
    vec!["./src".to_string()]
}

fn default_corpus_extensions() -> Vec<String> {
    ["ts", "tsx", "js", "jsx", "go", "html"]
        .map(String::from)
        .to_vec()
}

fn default_ignore_dirs() -> Vec<String> {
    ["node_modules", "target"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale_dir: default_locale_dir(),
            locale_files: Vec::new(),
            keep_prefixes: Vec::new(),
            corpus_roots: default_corpus_roots(),
            corpus_extensions: default_corpus_extensions(),
            ignore_dirs: default_ignore_dirs(),
            ignores: Vec::new(),
            keys_to_remove: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or an
    /// extension is written with a leading dot.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for ext in &self.corpus_extensions {
            if ext.starts_with('.') {
                bail!(
                    "Extension \"{}\" in 'corpusExtensions' must not include the dot (use \"{}\")",
                    ext,
                    ext.trim_start_matches('.')
                );
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
