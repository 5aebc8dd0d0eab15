//! Stringsweep - Android string resource maintenance
//!
//! Stringsweep is a CLI tool and library for keeping Android `strings.xml`
//! files tidy. It reports duplicate declarations, missing translations and
//! strings that no Java/Kotlin source references, and can delete the unused
//! ones from every locale file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, actions, reports)
//! - `config`: Configuration file loading and parsing
//! - `core`: Resource loading, source scanning and line-based editing
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Detection rules (duplicate, missing, unused)

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
