//! Core passes over locale data and the source corpus.
//!
//! - `tree`: flatten a locale tree into dotted key paths, prune paths back out
//! - `locales`: read and rewrite the locale JSON files
//! - `corpus`: collect the source files the scan searches through
//! - `scanner`: decide which keys are never referenced

pub mod corpus;
pub mod locales;
pub mod scanner;
pub mod tree;
