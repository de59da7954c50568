//! Locsweep - unused translation key maintenance for JSON locale files
//!
//! Locsweep is a CLI tool and library for keeping locale files in sync with
//! the code that references them. It finds translation keys that are defined
//! in locale JSON files but never referenced in source, and removes a curated
//! list of such keys while collapsing the containers the removal empties.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit codes)
//! - `config`: Configuration file loading and parsing
//! - `core`: Tree flattening and pruning, corpus traversal, usage scanning

pub mod cli;
pub mod config;
pub mod core;
