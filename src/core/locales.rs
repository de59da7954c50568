//! Reading and rewriting locale JSON files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// One locale document, loaded fresh at the start of a run.
#[derive(Debug)]
pub struct LocaleFile {
    pub path: PathBuf,
    /// File name as shown in reports, e.g. `en_US.json`.
    pub name: String,
    pub tree: Value,
}

impl LocaleFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read locale file: {}", path.display()))?;

        let tree: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse locale file: {}", path.display()))?;

        if !tree.is_object() {
            bail!("Root of locale file must be an object: {}", path.display());
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            path: path.to_path_buf(),
            name,
            tree,
        })
    }

    /// Serialized form as written to disk.
    ///
    /// Uses 2-space indentation, leaves non-ASCII characters unescaped, and
    /// ends with a trailing newline.
    pub fn serialize(&self) -> Result<String> {
        let content = serde_json::to_string_pretty(&self.tree)
            .with_context(|| format!("Failed to serialize locale file: {}", self.path.display()))?;
        Ok(format!("{}\n", content))
    }

    /// Rewrite the file in place.
    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, self.serialize()?)
            .with_context(|| format!("Failed to write locale file: {}", self.path.display()))
    }
}

/// Load the configured locale files.
///
/// With an explicit `names` list, files missing on disk are skipped (a note
/// is printed in verbose mode). With an empty list every `*.json` in `dir`
/// is loaded, in filename order. Malformed JSON fails the run.
pub fn load_locale_files(dir: &Path, names: &[String], verbose: bool) -> Result<Vec<LocaleFile>> {
    if !names.is_empty() {
        let mut files = Vec::new();
        for name in names {
            let path = dir.join(name);
            if !path.exists() {
                if verbose {
                    eprintln!("Note: locale file {} not found, skipping", path.display());
                }
                continue;
            }
            files.push(LocaleFile::load(&path)?);
        }
        return Ok(files);
    }

    if !dir.exists() {
        bail!(
            "Locale directory '{}' does not exist.\n\
             Hint: Check your .locsweeprc.json 'localeDir' setting.",
            dir.display()
        );
    }

    if !dir.is_dir() {
        bail!("'{}' is not a directory.", dir.display());
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read locale directory: {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();
    paths.sort();

    paths.iter().map(|p| LocaleFile::load(p)).collect()
}
